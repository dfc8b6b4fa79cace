//! View rendering for the letterhead editor component.
//!
//! The left side carries a toolbar and a tab bar switching among the editor
//! panels (Contact Info / Design / Doctor & License / Clinic Hours); the
//! right side always shows the live preview, re-rendered from the record on
//! every keystroke. A hidden file input backs the signature toolbar action.

use web_sys::{Event, HtmlInputElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::reseta::contact_info::ContactInfoEditor;
use crate::components::reseta::design::DesignEditor;
use crate::components::reseta::hours::ClinicHoursEditor;
use crate::components::reseta::identity::IdentityEditor;
use crate::components::reseta::preview::ResetaPreview;

use super::messages::Msg;
use super::state::ResetaEditorComponent;
use super::styles;

const TABS: [(&str, &str); 4] = [
    ("contact", "Contact Info"),
    ("design", "Design"),
    ("doctor", "Doctor & License"),
    ("hours", "Clinic Hours"),
];

/// Main view function for the letterhead editor component.
/// Renders the toolbar, the panel tab bar, the active panel and the preview.
pub fn view(component: &ResetaEditorComponent, ctx: &Context<ResetaEditorComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="reseta-editor-root">
            <style>{ styles::STYLE_SHEET }</style>
            { build_toolbar(component, link) }
            <div class="editor-layout">
                <div class="editor-panels">
                    { build_tab_bar(component, link) }
                    { build_active_panel(component, link) }
                </div>
                <ResetaPreview
                    template={component.template.clone()}
                    signature={component.signature.clone()}
                />
            </div>
            <input
                ref={component.file_input_ref.clone()}
                type="file"
                accept="image/*"
                style="display: none;"
                onchange={link.batch_callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let file = input.files().and_then(|files| files.get(0));
                    input.set_value("");
                    file.map(Msg::SignatureSelected)
                })}
            />
        </div>
    }
}

/// Builds the toolbar with the signature and save actions. Shows a red dot
/// if there are unsaved changes.
fn build_toolbar(component: &ResetaEditorComponent, link: &Scope<ResetaEditorComponent>) -> Html {
    html! {
        <div class="icon-toolbar">
            { icon_button("draw", "Signature", link.callback(|_| Msg::OpenSignatureDialog), false) }
            {
                if component.signature.is_some() {
                    icon_button("delete", "Remove signature", link.callback(|_| Msg::ClearSignature), true)
                } else {
                    html! {}
                }
            }
            { icon_button("save", "Save", link.callback(|_| Msg::Save), false) }
            {
                if component.is_dirty() {
                    html! { <span class="dirty-dot" title="Unsaved changes" /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Builds the tab bar for switching among the editor panels.
fn build_tab_bar(component: &ResetaEditorComponent, link: &Scope<ResetaEditorComponent>) -> Html {
    html! {
        <div class="tab-bar">
            {
                TABS.iter()
                    .map(|(id, label)| {
                        let tab = id.to_string();
                        html! {
                            <button
                                key={*id}
                                class={classes!("tab-btn", if component.active_tab == *id { "active" } else { "" })}
                                onclick={link.callback(move |_| Msg::SetTab(tab.clone()))}
                            >
                                { *label }
                            </button>
                        }
                    })
                    .collect::<Html>()
            }
        </div>
    }
}

/// Renders the panel selected in the tab bar, wiring the field-update
/// channel back to the editor.
fn build_active_panel(component: &ResetaEditorComponent, link: &Scope<ResetaEditorComponent>) -> Html {
    let on_update_field = link.callback(|(field, value)| Msg::UpdateField(field, value));
    match component.active_tab.as_str() {
        "design" => html! {
            <DesignEditor template={component.template.clone()} {on_update_field} />
        },
        "doctor" => html! {
            <IdentityEditor template={component.template.clone()} {on_update_field} />
        },
        "hours" => html! {
            <ClinicHoursEditor
                template={component.template.clone()}
                on_update_hours={link.callback(|(day, hours)| Msg::UpdateHours(day, hours))}
            />
        },
        _ => html! {
            <ContactInfoEditor
                template={component.template.clone()}
                field_errors={component.field_errors.clone()}
                {on_update_field}
                on_update_field_with_validation={
                    link.callback(|(field, raw)| Msg::UpdateFieldWithValidation(field, raw))
                }
            />
        },
    }
}

/// Renders a toolbar button with a Material icon and a label.
fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>, wide: bool) -> Html {
    let class = if wide { "icon-btn wide" } else { "icon-btn" };
    html! {
        <button class={class} onclick={on_click.clone()}>
            <i class="material-icons">{icon_name}</i>
            <span class="icon-label">{label}</span>
        </button>
    }
}
