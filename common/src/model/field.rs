use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one editable field of a
/// [`ResetaTemplate`](crate::model::template::ResetaTemplate).
///
/// The serialized form (and [`Field::as_str`]) is the camelCase name the host
/// application uses as the key of its field-error map and update payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ClinicName,
    DoctorName,
    ProfessionalTitle,
    DoctorCredentials,
    Specialty,
    ClinicAddress,
    ClinicRoom,
    ClinicCity,
    ClinicCountry,
    Phone,
    Mobile,
    Email,
    HeaderColor,
    AccentColor,
    PaperColor,
    ShowRxSymbol,
    LicenseNo,
    PtrNo,
    S2LicenseNo,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::ClinicName => "clinicName",
            Field::DoctorName => "doctorName",
            Field::ProfessionalTitle => "professionalTitle",
            Field::DoctorCredentials => "doctorCredentials",
            Field::Specialty => "specialty",
            Field::ClinicAddress => "clinicAddress",
            Field::ClinicRoom => "clinicRoom",
            Field::ClinicCity => "clinicCity",
            Field::ClinicCountry => "clinicCountry",
            Field::Phone => "phone",
            Field::Mobile => "mobile",
            Field::Email => "email",
            Field::HeaderColor => "headerColor",
            Field::AccentColor => "accentColor",
            Field::PaperColor => "paperColor",
            Field::ShowRxSymbol => "showRxSymbol",
            Field::LicenseNo => "licenseNo",
            Field::PtrNo => "ptrNo",
            Field::S2LicenseNo => "s2LicenseNo",
        }
    }

    /// Whether the field is marked as required in the editor UI.
    ///
    /// This is a UX/accessibility marker only; non-emptiness is enforced by
    /// the externally supplied validator, never by the record itself.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Field::ClinicAddress | Field::ClinicCountry | Field::Phone | Field::Email
        )
    }

    /// Whether edits to the field go through the validating update callback.
    pub fn has_live_validation(self) -> bool {
        matches!(self, Field::Phone | Field::Mobile | Field::Email)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw value emitted by an editor input: text fields carry the string as
/// typed, the Rx-symbol toggle carries the checkbox state.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_camel_case() {
        assert_eq!(Field::ClinicName.as_str(), "clinicName");
        assert_eq!(Field::S2LicenseNo.as_str(), "s2LicenseNo");
        assert_eq!(Field::ShowRxSymbol.to_string(), "showRxSymbol");
    }

    #[test]
    fn serde_names_match_as_str() {
        for field in [
            Field::ClinicName,
            Field::DoctorCredentials,
            Field::ClinicRoom,
            Field::Mobile,
            Field::PtrNo,
            Field::S2LicenseNo,
        ] {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn required_marks_cover_only_the_four_required_fields() {
        let required: Vec<Field> = [
            Field::ClinicAddress,
            Field::ClinicCountry,
            Field::Phone,
            Field::Email,
        ]
        .into();
        for field in required.iter() {
            assert!(field.is_required());
        }
        assert!(!Field::Mobile.is_required());
        assert!(!Field::ClinicRoom.is_required());
        assert!(!Field::ClinicCity.is_required());
    }

    #[test]
    fn live_validation_covers_phone_mobile_email() {
        assert!(Field::Phone.has_live_validation());
        assert!(Field::Mobile.has_live_validation());
        assert!(Field::Email.has_live_validation());
        assert!(!Field::ClinicAddress.has_live_validation());
        assert!(!Field::HeaderColor.has_live_validation());
    }
}
