//! Clinic-hours panel: one input per weekday, Monday through Sunday.
//!
//! Clearing an input removes the day's entry, which also drops its line
//! from the preview.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::model::template::ResetaTemplate;
use common::model::weekday::Weekday;

#[derive(Properties, PartialEq, Clone)]
pub struct ClinicHoursProps {
    pub template: ResetaTemplate,
    pub on_update_hours: Callback<(Weekday, String)>,
}

pub struct ClinicHoursEditor;

impl Component for ClinicHoursEditor {
    type Message = ();
    type Properties = ClinicHoursProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ClinicHoursEditor
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="panel hours-panel">
                {
                    Weekday::ALL
                        .iter()
                        .map(|day| hours_field(props, *day))
                        .collect::<Html>()
                }
            </div>
        }
    }
}

fn hours_field(props: &ClinicHoursProps, day: Weekday) -> Html {
    let value = props
        .template
        .clinic_hours
        .get(&day)
        .cloned()
        .unwrap_or_default();
    let on_update = props.on_update_hours.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_update.emit((day, input.value()));
    });

    html! {
        <div class="field-row hours-row" key={day.label()}>
            <label class="field-label" for={day.label()}>{ day.label() }</label>
            <input
                id={day.label()}
                class="field-input"
                type="text"
                value={value}
                placeholder="9:00 AM - 5:00 PM"
                {oninput}
            />
        </div>
    }
}
