//! Component state for the letterhead editor.
//!
//! This module defines the state struct that holds the editing session's
//! runtime data (the template record, the field-error map, the signature
//! image, the active panel tab, and dirty-tracking metadata), along with
//! small helpers used by the view and update logic.

use yew::prelude::*;

use common::model::errors::FieldErrors;
use common::model::template::ResetaTemplate;

use super::helpers;

/// Main state container for the `ResetaEditorComponent`.
///
/// The record and error map live here for the whole session; the editor
/// panels and the preview receive them read-only through props and send
/// every mutation back as a message.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct ResetaEditorComponent {
    /// The template record being edited. Single source of truth for every
    /// input value and for the preview.
    pub template: ResetaTemplate,

    /// Per-field validation messages, written only from the validating
    /// update path.
    pub field_errors: FieldErrors,

    /// Signature image as a data URL, once the user has picked one.
    pub signature: Option<AttrValue>,

    /// Active editor panel: `"contact"`, `"design"`, `"doctor"` or `"hours"`.
    pub active_tab: String,

    /// Reference to the hidden file input used for signature selection.
    pub file_input_ref: NodeRef,

    /// MD5 checksum of the serialized record at the last save (or at session
    /// start). Used for dirty tracking.
    pub original_md5: Option<String>,
}

impl ResetaEditorComponent {
    /// Starts a session from `template`, or from a fresh record when `None`.
    /// The dirty-tracking snapshot is taken immediately so an untouched
    /// session never reports unsaved changes.
    pub fn new(template: Option<ResetaTemplate>) -> Self {
        let template = template.unwrap_or_else(helpers::create_empty_template);
        let original_md5 = Some(helpers::template_md5(&template));
        Self {
            template,
            field_errors: FieldErrors::new(),
            signature: None,
            active_tab: "contact".to_string(),
            file_input_ref: Default::default(),
            original_md5,
        }
    }

    /// Whether the record differs from the last saved snapshot.
    pub fn is_dirty(&self) -> bool {
        self.original_md5
            .as_ref()
            .map_or(true, |orig| orig != &helpers::template_md5(&self.template))
    }
}
