//! Design panel: the three letterhead colors and the Rx-symbol toggle.
//!
//! Each color is edited through a native color picker and a paired free-text
//! field. Both bind to the same record field and write through the same
//! update channel, so the two inputs can never diverge. Color strings are
//! accepted as typed; rendering consumers tolerate malformed values.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::model::field::{Field, FieldValue};
use common::model::template::ResetaTemplate;

#[derive(Properties, PartialEq, Clone)]
pub struct DesignProps {
    pub template: ResetaTemplate,
    pub on_update_field: Callback<(Field, FieldValue)>,
}

pub struct DesignEditor;

impl Component for DesignEditor {
    type Message = ();
    type Properties = DesignProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DesignEditor
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_toggle = {
            let on_update = props.on_update_field.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_update.emit((Field::ShowRxSymbol, FieldValue::Flag(input.checked())));
            })
        };

        html! {
            <div class="panel design-panel">
                { color_field(props, Field::HeaderColor, "Header color") }
                { color_field(props, Field::AccentColor, "Accent color") }
                { color_field(props, Field::PaperColor, "Paper color") }
                <div class="check-row">
                    <input
                        id={Field::ShowRxSymbol.as_str()}
                        type="checkbox"
                        checked={props.template.show_rx_symbol}
                        onchange={on_toggle}
                    />
                    <label class="field-label" for={Field::ShowRxSymbol.as_str()}>
                        { "Show ℞ symbol" }
                    </label>
                </div>
            </div>
        }
    }
}

/// One color field: picker and text input bound to the same record value.
fn color_field(props: &DesignProps, field: Field, label: &str) -> Html {
    let value = props.template.text_value(field).to_string();
    let emit = {
        let on_update = props.on_update_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_update.emit((field, FieldValue::Text(input.value())));
        })
    };

    html! {
        <div class="field-row color-row">
            <label class="field-label" for={field.as_str()}>{ label }</label>
            <input
                type="color"
                class="color-swatch-input"
                value={value.clone()}
                oninput={emit.clone()}
                aria-label={format!("{} picker", label)}
            />
            <input
                id={field.as_str()}
                class="field-input color-text-input"
                type="text"
                value={value}
                oninput={emit}
            />
        </div>
    }
}
