use crate::components::reseta::editor::ResetaEditorComponent;
use crate::validation;
use common::model::template::ResetaTemplate;
use yew::{html, Callback, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        // Persistence belongs to the host application; the standalone shell
        // just logs the record handed over on save.
        let on_save = Callback::from(|template: ResetaTemplate| {
            gloo_console::log!("template ready for persistence:", template.id);
        });

        html! {
            <div>
                <ResetaEditorComponent
                    validator={validation::default_validator()}
                    {on_save}
                />
            </div>
        }
    }
}
