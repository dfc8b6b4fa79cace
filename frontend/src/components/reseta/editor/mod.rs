//! Reseta letterhead editor: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ResetaEditorProps`, `ResetaEditorComponent`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - Own the template record and field-error map for the editing session and
//!   expose the field-update channel to the editor panels; the panels and the
//!   preview only ever read the record and emit update requests back here.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod styles;
mod update;
mod view;

pub use messages::Msg;
pub use props::ResetaEditorProps;
pub use state::ResetaEditorComponent;

impl Component for ResetaEditorComponent {
    type Message = Msg;
    type Properties = ResetaEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        ResetaEditorComponent::new(ctx.props().template.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // The external owner handed over a different record: restart the
        // editing session from it.
        if ctx.props().template != old_props.template {
            *self = ResetaEditorComponent::new(ctx.props().template.clone());
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
