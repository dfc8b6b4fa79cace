//! Contact-information panel: one controlled input per contact field.
//!
//! Every input's displayed value is read straight from the template record;
//! the panel holds no state of its own. Plain fields (address, room, city,
//! country) write through the plain update channel, format-checked fields
//! (phone, mobile, email) through the validating one. A non-empty entry in
//! the field-error map marks its input invalid and is rendered verbatim
//! below it.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::model::errors::FieldErrors;
use common::model::field::{Field, FieldValue};
use common::model::template::ResetaTemplate;

#[derive(Properties, PartialEq, Clone)]
pub struct ContactInfoProps {
    pub template: ResetaTemplate,
    pub field_errors: FieldErrors,
    /// Update channel for fields without live validation.
    pub on_update_field: Callback<(Field, FieldValue)>,
    /// Validating update channel for phone, mobile and email.
    pub on_update_field_with_validation: Callback<(Field, String)>,
}

pub struct ContactInfoEditor;

impl Component for ContactInfoEditor {
    type Message = ();
    type Properties = ContactInfoProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ContactInfoEditor
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="panel contact-info-panel">
                { text_field(props, Field::ClinicAddress, "Clinic address", "12 Rizal Ave, Bldg A") }
                { text_field(props, Field::ClinicRoom, "Room / floor", "Rm 204, 2F") }
                { text_field(props, Field::ClinicCity, "City", "Quezon City") }
                { text_field(props, Field::ClinicCountry, "Country", "Philippines") }
                { text_field(props, Field::Phone, "Phone", "(02) 8123 4567") }
                { text_field(props, Field::Mobile, "Mobile", "0917 123 4567") }
                { text_field(props, Field::Email, "Email", "clinic@example.com") }
            </div>
        }
    }
}

/// Renders one controlled input bound to `field`, routed to the validating
/// channel when the field has live validation.
fn text_field(props: &ContactInfoProps, field: Field, label: &str, placeholder: &str) -> Html {
    let value = props.template.text_value(field).to_string();
    let error = props.field_errors.message(field).map(str::to_string);
    let invalid = error.is_some();

    let oninput = if field.has_live_validation() {
        let on_update = props.on_update_field_with_validation.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_update.emit((field, input.value()));
        })
    } else {
        let on_update = props.on_update_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_update.emit((field, FieldValue::Text(input.value())));
        })
    };

    html! {
        <div class="field-row">
            <label class="field-label" for={field.as_str()}>
                { label }
                {
                    if field.is_required() {
                        html! { <span class="required-mark" aria-hidden="true">{"*"}</span> }
                    } else {
                        html! {}
                    }
                }
            </label>
            <input
                id={field.as_str()}
                class={classes!("field-input", invalid.then_some("invalid"))}
                type={input_type(field)}
                value={value}
                placeholder={placeholder.to_string()}
                required={field.is_required()}
                aria-invalid={if invalid { "true" } else { "false" }}
                {oninput}
            />
            {
                match error {
                    Some(message) => html! { <span class="field-error">{ message }</span> },
                    None => html! {},
                }
            }
        </div>
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Phone | Field::Mobile => "tel",
        _ => "text",
    }
}
