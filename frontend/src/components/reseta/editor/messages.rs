use common::model::field::{Field, FieldValue};
use common::model::weekday::Weekday;

#[derive(Clone)]
pub enum Msg {
    SetTab(String),
    UpdateField(Field, FieldValue),
    UpdateFieldWithValidation(Field, String),
    UpdateHours(Weekday, String),
    OpenSignatureDialog,
    SignatureSelected(web_sys::File),
    SetSignature(String),
    ClearSignature,
    Save,
}
