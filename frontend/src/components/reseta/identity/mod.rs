//! Doctor & licensing panel: clinic/doctor identity and license numbers.
//!
//! All fields here go through the plain update channel; none carry live
//! validation. Credentials, PTR and S2 numbers are optional and clear back
//! to unset when their input is emptied.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::model::field::{Field, FieldValue};
use common::model::template::ResetaTemplate;

const FIELDS: [(Field, &str, &str); 8] = [
    (Field::ClinicName, "Clinic name", "Sta. Rosa Medical Clinic"),
    (Field::DoctorName, "Doctor name", "Juan Dela Cruz"),
    (Field::ProfessionalTitle, "Professional title", "MD"),
    (Field::DoctorCredentials, "Credentials", "FPCP"),
    (Field::Specialty, "Specialty", "Internal Medicine"),
    (Field::LicenseNo, "License No.", "0123456"),
    (Field::PtrNo, "PTR No.", "7654321"),
    (Field::S2LicenseNo, "S2 License No.", "S2-12345"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct IdentityProps {
    pub template: ResetaTemplate,
    pub on_update_field: Callback<(Field, FieldValue)>,
}

pub struct IdentityEditor;

impl Component for IdentityEditor {
    type Message = ();
    type Properties = IdentityProps;

    fn create(_ctx: &Context<Self>) -> Self {
        IdentityEditor
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="panel identity-panel">
                {
                    FIELDS
                        .iter()
                        .map(|(field, label, placeholder)| text_field(props, *field, label, placeholder))
                        .collect::<Html>()
                }
            </div>
        }
    }
}

fn text_field(props: &IdentityProps, field: Field, label: &str, placeholder: &str) -> Html {
    let on_update = props.on_update_field.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_update.emit((field, FieldValue::Text(input.value())));
    });

    html! {
        <div class="field-row" key={field.as_str()}>
            <label class="field-label" for={field.as_str()}>{ label }</label>
            <input
                id={field.as_str()}
                class="field-input"
                type="text"
                value={props.template.text_value(field).to_string()}
                placeholder={placeholder.to_string()}
                {oninput}
            />
        </div>
    }
}
