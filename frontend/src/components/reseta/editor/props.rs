//! Defines the properties for the `ResetaEditorComponent`.
//!
//! This module contains the `ResetaEditorProps` struct, which specifies the
//! data a parent can pass into the letterhead editor: an initial template
//! record, the external validation capability, and the save hand-over.

use common::model::field::Field;
use common::model::template::ResetaTemplate;
use yew::prelude::*;

/// Properties for the `ResetaEditorComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ResetaEditorProps {
    /// Template record to edit.
    ///
    /// - If `Some(template)`, the editing session starts from that record
    ///   (e.g. a template the host loaded from storage).
    /// - If `None` (the default), the session starts from a fresh record
    ///   with a new id and default design values.
    ///
    /// Passing a different record later restarts the session from it.
    #[prop_or_default]
    pub template: Option<ResetaTemplate>,

    /// External validation capability: maps `(field, raw value)` to an error
    /// message, or `None` when the value is acceptable. The editor applies
    /// it to fields edited through the validating update channel and stores
    /// the result in the field-error map; it never adds rules of its own.
    /// When absent, validated fields behave like plain fields.
    #[prop_or_default]
    pub validator: Option<Callback<(Field, String), Option<String>>>,

    /// Receives a snapshot of the record when the user saves. Persisting it
    /// is the owner's job; the editor only refreshes its dirty-tracking
    /// snapshot and confirms with a toast.
    #[prop_or_default]
    pub on_save: Option<Callback<ResetaTemplate>>,
}
