//! Update function for the letterhead editor component.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `ResetaEditorComponent` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Field edits go through `ResetaTemplate::apply` (plain channel) or
//!   through the injected validator plus `apply` (validating channel); the
//!   validator's verdict lands in the field-error map unchanged.
//! - Clinic-hours edits remove a day's entry when its input is emptied.
//! - Signature selection: file -> bytes -> base64 data URL, asynchronously,
//!   then handed back as a message.
//! - Saving emits the record through the `on_save` prop and refreshes the
//!   md5 snapshot used for dirty tracking.

use base64::{engine::general_purpose, Engine as _};
use gloo_file::{futures::read_as_bytes, Blob};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::model::field::FieldValue;

use super::helpers::{set_window_dirty_flag, show_toast, template_md5};
use super::messages::Msg;
use super::state::ResetaEditorComponent;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (async callbacks).
/// - Returns `true` to re-render the view, `false` when only side effects
///   occurred.
pub fn update(
    component: &mut ResetaEditorComponent,
    ctx: &Context<ResetaEditorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetTab(tab) => {
            component.active_tab = tab;
            true
        }
        Msg::UpdateField(field, value) => {
            let changed = component.template.apply(field, value);
            if changed {
                set_window_dirty_flag(component);
            }
            changed
        }
        Msg::UpdateFieldWithValidation(field, raw) => {
            let error = ctx
                .props()
                .validator
                .as_ref()
                .and_then(|validate| validate.emit((field, raw.clone())));
            component.field_errors.set(field, error);
            component.template.apply(field, FieldValue::Text(raw));
            set_window_dirty_flag(component);
            true
        }
        Msg::UpdateHours(day, hours) => {
            let changed = component.template.set_hours(day, hours);
            if changed {
                set_window_dirty_flag(component);
            }
            changed
        }
        Msg::OpenSignatureDialog => {
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::SignatureSelected(file) => {
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let blob = Blob::from(file);
                match read_as_bytes(&blob).await {
                    Ok(bytes) => {
                        let base64 = general_purpose::STANDARD.encode(&bytes);
                        link.send_message(Msg::SetSignature(format!(
                            "data:image/*;base64,{}",
                            base64
                        )));
                    }
                    Err(err) => {
                        gloo_console::error!("failed to read signature image:", err.to_string());
                        show_toast("Could not read the signature image.");
                    }
                }
            });
            false
        }
        Msg::SetSignature(data_url) => {
            component.signature = Some(AttrValue::from(data_url));
            true
        }
        Msg::ClearSignature => {
            component.signature = None;
            true
        }
        Msg::Save => {
            if let Some(on_save) = &ctx.props().on_save {
                on_save.emit(component.template.clone());
            }
            component.original_md5 = Some(template_md5(&component.template));
            set_window_dirty_flag(component);
            show_toast("Template saved.");
            true
        }
    }
}
