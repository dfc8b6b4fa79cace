//! Utility functions for the letterhead editor component.
//!
//! Responsibilities include:
//!
//! - **Model Instantiation**: Creating fresh `ResetaTemplate` records for new
//!   editing sessions.
//! - **User Feedback**: Displaying temporary "toast" notifications for
//!   actions like saving or a failed signature read.
//! - **Dirty Tracking**: Hashing the serialized record to detect unsaved
//!   changes and mirroring that state into the window-level `app_dirty` flag
//!   read by the page's beforeunload handler.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use common::model::template::ResetaTemplate;

use super::state::ResetaEditorComponent;

/// Creates a fresh record with a unique ID and default design values, so a
/// new session always has a valid template to bind its inputs to.
pub fn create_empty_template() -> ResetaTemplate {
    ResetaTemplate {
        id: uuid::Uuid::new_v4().to_string(),
        ..ResetaTemplate::default()
    }
}

/// MD5 hex digest of the serialized record. Stored at load/save time and
/// compared against the current record for dirty checking.
pub fn template_md5(template: &ResetaTemplate) -> String {
    let json = serde_json::to_string(template).unwrap_or_default();
    format!("{:x}", md5::compute(json))
}

/// Mirrors the dirty state into the global `app_dirty` flag so the page can
/// warn before navigating away from unsaved changes.
pub fn set_window_dirty_flag(component: &ResetaEditorComponent) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(component.is_dirty()),
        );
    }
}

/// Displays a temporary notification message at the bottom of the screen.
/// The toast removes itself after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_inner_html(message);
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::field::{Field, FieldValue};

    #[test]
    fn template_md5_is_stable_for_equal_records() {
        let template = ResetaTemplate::default();
        assert_eq!(template_md5(&template), template_md5(&template.clone()));
    }

    #[test]
    fn template_md5_changes_when_a_field_changes() {
        let mut template = ResetaTemplate::default();
        let before = template_md5(&template);
        template.apply(Field::ClinicName, FieldValue::Text("Clinic".to_string()));
        assert_ne!(before, template_md5(&template));
    }
}
