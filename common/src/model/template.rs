use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::field::{Field, FieldValue};
use crate::model::weekday::Weekday;

pub const FALLBACK_CLINIC_NAME: &str = "Clinic Name";
pub const FALLBACK_DOCTOR_NAME: &str = "Doctor Name";
pub const FALLBACK_TITLE: &str = "MD";
pub const FALLBACK_SPECIALTY: &str = "Specialty";
pub const FALLBACK_ADDRESS: &str = "Address";
pub const FALLBACK_NOT_AVAILABLE: &str = "N/A";

/// One prescription letterhead's configurable content and styling.
///
/// A single instance is owned by the form controller for the whole editing
/// session; the editor panels and the preview only ever read it and all
/// mutation goes through [`ResetaTemplate::apply`] / [`ResetaTemplate::set_hours`].
/// Optional fields hold `None` rather than an empty string when unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetaTemplate {
    pub id: String,

    // Identity / branding
    pub clinic_name: String,
    pub doctor_name: String,
    pub professional_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_credentials: Option<String>,
    pub specialty: String,

    // Contact
    pub clinic_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinic_room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinic_city: Option<String>,
    pub clinic_country: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub email: String,

    // Design
    pub header_color: String,
    pub accent_color: String,
    pub paper_color: String,
    pub show_rx_symbol: bool,

    // Licensing
    pub license_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ptr_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s2_license_no: Option<String>,

    /// Hours per day; entries with an empty value count as not set and are
    /// suppressed from the preview.
    #[serde(default)]
    pub clinic_hours: BTreeMap<Weekday, String>,
}

impl Default for ResetaTemplate {
    fn default() -> Self {
        Self {
            id: String::new(),
            clinic_name: String::new(),
            doctor_name: String::new(),
            professional_title: String::new(),
            doctor_credentials: None,
            specialty: String::new(),
            clinic_address: String::new(),
            clinic_room: None,
            clinic_city: None,
            clinic_country: String::new(),
            phone: String::new(),
            mobile: None,
            email: String::new(),
            header_color: "#1a5276".to_string(),
            accent_color: "#1a5276".to_string(),
            paper_color: "#ffffff".to_string(),
            show_rx_symbol: true,
            license_no: String::new(),
            ptr_no: None,
            s2_license_no: None,
            clinic_hours: BTreeMap::new(),
        }
    }
}

impl ResetaTemplate {
    /// Applies one edit from the update channel. Returns `true` when the
    /// record changed. Last write wins per field; a value of the wrong kind
    /// for the field leaves the record untouched.
    pub fn apply(&mut self, field: Field, value: FieldValue) -> bool {
        match (field, value) {
            (Field::ShowRxSymbol, FieldValue::Flag(checked)) => {
                if self.show_rx_symbol == checked {
                    return false;
                }
                self.show_rx_symbol = checked;
                true
            }
            (Field::ShowRxSymbol, FieldValue::Text(_)) => false,
            (field, FieldValue::Text(raw)) => self.apply_text(field, raw),
            (_, FieldValue::Flag(_)) => false,
        }
    }

    fn apply_text(&mut self, field: Field, raw: String) -> bool {
        let slot = match field {
            Field::ClinicName => &mut self.clinic_name,
            Field::DoctorName => &mut self.doctor_name,
            Field::ProfessionalTitle => &mut self.professional_title,
            Field::Specialty => &mut self.specialty,
            Field::ClinicAddress => &mut self.clinic_address,
            Field::ClinicCountry => &mut self.clinic_country,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::HeaderColor => &mut self.header_color,
            Field::AccentColor => &mut self.accent_color,
            Field::PaperColor => &mut self.paper_color,
            Field::LicenseNo => &mut self.license_no,
            Field::DoctorCredentials
            | Field::ClinicRoom
            | Field::ClinicCity
            | Field::Mobile
            | Field::PtrNo
            | Field::S2LicenseNo => return self.apply_optional(field, raw),
            Field::ShowRxSymbol => return false,
        };
        if *slot == raw {
            false
        } else {
            *slot = raw;
            true
        }
    }

    // An emptied input clears the field back to `None`.
    fn apply_optional(&mut self, field: Field, raw: String) -> bool {
        let slot = match field {
            Field::DoctorCredentials => &mut self.doctor_credentials,
            Field::ClinicRoom => &mut self.clinic_room,
            Field::ClinicCity => &mut self.clinic_city,
            Field::Mobile => &mut self.mobile,
            Field::PtrNo => &mut self.ptr_no,
            Field::S2LicenseNo => &mut self.s2_license_no,
            _ => return false,
        };
        let next = Some(raw).filter(|s| !s.is_empty());
        if *slot == next {
            false
        } else {
            *slot = next;
            true
        }
    }

    /// Sets the hours for one day; an empty value removes the entry.
    pub fn set_hours(&mut self, day: Weekday, hours: String) -> bool {
        if hours.is_empty() {
            self.clinic_hours.remove(&day).is_some()
        } else if self.clinic_hours.get(&day) == Some(&hours) {
            false
        } else {
            self.clinic_hours.insert(day, hours);
            true
        }
    }

    /// The string a controlled input displays for `field`. Optional fields
    /// display as empty while unset.
    pub fn text_value(&self, field: Field) -> &str {
        match field {
            Field::ClinicName => &self.clinic_name,
            Field::DoctorName => &self.doctor_name,
            Field::ProfessionalTitle => &self.professional_title,
            Field::DoctorCredentials => self.doctor_credentials.as_deref().unwrap_or(""),
            Field::Specialty => &self.specialty,
            Field::ClinicAddress => &self.clinic_address,
            Field::ClinicRoom => self.clinic_room.as_deref().unwrap_or(""),
            Field::ClinicCity => self.clinic_city.as_deref().unwrap_or(""),
            Field::ClinicCountry => &self.clinic_country,
            Field::Phone => &self.phone,
            Field::Mobile => self.mobile.as_deref().unwrap_or(""),
            Field::Email => &self.email,
            Field::HeaderColor => &self.header_color,
            Field::AccentColor => &self.accent_color,
            Field::PaperColor => &self.paper_color,
            Field::ShowRxSymbol => "",
            Field::LicenseNo => &self.license_no,
            Field::PtrNo => self.ptr_no.as_deref().unwrap_or(""),
            Field::S2LicenseNo => self.s2_license_no.as_deref().unwrap_or(""),
        }
    }

    // Preview display values. An empty field substitutes its fixed literal
    // placeholder, never a computed one.

    pub fn clinic_name_display(&self) -> &str {
        display_or(&self.clinic_name, FALLBACK_CLINIC_NAME)
    }

    pub fn doctor_name_display(&self) -> &str {
        display_or(&self.doctor_name, FALLBACK_DOCTOR_NAME)
    }

    pub fn professional_title_display(&self) -> &str {
        display_or(&self.professional_title, FALLBACK_TITLE)
    }

    pub fn specialty_display(&self) -> &str {
        display_or(&self.specialty, FALLBACK_SPECIALTY)
    }

    pub fn clinic_address_display(&self) -> &str {
        display_or(&self.clinic_address, FALLBACK_ADDRESS)
    }

    pub fn phone_display(&self) -> &str {
        display_or(&self.phone, FALLBACK_NOT_AVAILABLE)
    }

    pub fn email_display(&self) -> &str {
        display_or(&self.email, FALLBACK_NOT_AVAILABLE)
    }

    pub fn license_no_display(&self) -> &str {
        display_or(&self.license_no, FALLBACK_NOT_AVAILABLE)
    }

    /// Header identity line: name, title, then credentials only if present.
    pub fn doctor_line(&self) -> String {
        let base = self.doctor_identity();
        match self.doctor_credentials.as_deref().filter(|c| !c.is_empty()) {
            Some(credentials) => format!("{}, {}", base, credentials),
            None => base,
        }
    }

    /// Footer identity line: name and title, without credentials.
    pub fn doctor_identity(&self) -> String {
        format!(
            "{}, {}",
            self.doctor_name_display(),
            self.professional_title_display()
        )
    }

    /// Days with a non-empty hours value, in Monday..Sunday order.
    pub fn hours_lines(&self) -> Vec<(Weekday, &str)> {
        Weekday::ALL
            .iter()
            .filter_map(|day| {
                self.clinic_hours
                    .get(day)
                    .map(String::as_str)
                    .filter(|hours| !hours.is_empty())
                    .map(|hours| (*day, hours))
            })
            .collect()
    }

    /// Whether the preview renders the clinic-hours block at all.
    pub fn has_clinic_hours(&self) -> bool {
        !self.hours_lines().is_empty()
    }
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_routes_text_to_the_named_field() {
        let mut template = ResetaTemplate::default();
        assert!(template.apply(
            Field::ClinicAddress,
            FieldValue::Text("12 Rizal Ave".to_string())
        ));
        assert_eq!(template.clinic_address, "12 Rizal Ave");
        assert_eq!(template.text_value(Field::ClinicAddress), "12 Rizal Ave");
    }

    #[test]
    fn apply_keeps_the_raw_value_unmodified() {
        let mut template = ResetaTemplate::default();
        template.apply(Field::Phone, FieldValue::Text("  (02) 8123 ".to_string()));
        assert_eq!(template.phone, "  (02) 8123 ");
    }

    #[test]
    fn last_write_wins_per_field() {
        let mut template = ResetaTemplate::default();
        template.apply(Field::ClinicName, FieldValue::Text("First".to_string()));
        template.apply(Field::ClinicName, FieldValue::Text("Second".to_string()));
        assert_eq!(template.clinic_name, "Second");
    }

    #[test]
    fn apply_reports_whether_the_record_changed() {
        let mut template = ResetaTemplate::default();
        assert!(template.apply(Field::Email, FieldValue::Text("a@b.co".to_string())));
        assert!(!template.apply(Field::Email, FieldValue::Text("a@b.co".to_string())));
    }

    #[test]
    fn emptied_optional_field_stores_none() {
        let mut template = ResetaTemplate::default();
        template.apply(Field::Mobile, FieldValue::Text("0917".to_string()));
        assert_eq!(template.mobile.as_deref(), Some("0917"));
        template.apply(Field::Mobile, FieldValue::Text(String::new()));
        assert_eq!(template.mobile, None);
        assert_eq!(template.text_value(Field::Mobile), "");
    }

    #[test]
    fn kind_mismatch_leaves_the_record_unchanged() {
        let mut template = ResetaTemplate::default();
        assert!(!template.apply(Field::Phone, FieldValue::Flag(true)));
        assert_eq!(template.phone, "");
        assert!(!template.apply(Field::ShowRxSymbol, FieldValue::Text("yes".to_string())));
        assert!(template.show_rx_symbol);
    }

    #[test]
    fn rx_toggle_applies_the_checkbox_state() {
        let mut template = ResetaTemplate::default();
        assert!(template.apply(Field::ShowRxSymbol, FieldValue::Flag(false)));
        assert!(!template.show_rx_symbol);
        assert!(!template.apply(Field::ShowRxSymbol, FieldValue::Flag(false)));
    }

    #[test]
    fn header_fallbacks_substitute_fixed_literals() {
        let template = ResetaTemplate::default();
        assert_eq!(template.clinic_name_display(), "Clinic Name");
        assert_eq!(template.doctor_name_display(), "Doctor Name");
        assert_eq!(template.specialty_display(), "Specialty");
        assert_eq!(template.clinic_address_display(), "Address");
        assert_eq!(template.phone_display(), "N/A");
        assert_eq!(template.email_display(), "N/A");
        assert_eq!(template.license_no_display(), "N/A");
    }

    #[test]
    fn doctor_line_appends_credentials_only_when_present() {
        let mut template = ResetaTemplate::default();
        assert_eq!(template.doctor_line(), "Doctor Name, MD");
        template.doctor_credentials = Some("FPCP".to_string());
        assert_eq!(template.doctor_line(), "Doctor Name, MD, FPCP");
        assert_eq!(template.doctor_identity(), "Doctor Name, MD");
    }

    #[test]
    fn hours_lines_skip_empty_values() {
        let mut template = ResetaTemplate::default();
        template
            .clinic_hours
            .insert(Weekday::Monday, "9am-5pm".to_string());
        template.clinic_hours.insert(Weekday::Tuesday, String::new());
        let lines = template.hours_lines();
        assert_eq!(lines, vec![(Weekday::Monday, "9am-5pm")]);
        assert!(template.has_clinic_hours());
    }

    #[test]
    fn hours_block_is_absent_when_every_day_is_empty() {
        let mut template = ResetaTemplate::default();
        assert!(!template.has_clinic_hours());
        template.clinic_hours.insert(Weekday::Friday, String::new());
        assert!(!template.has_clinic_hours());
    }

    #[test]
    fn hours_lines_follow_calendar_order() {
        let mut template = ResetaTemplate::default();
        template.set_hours(Weekday::Sunday, "10am-12nn".to_string());
        template.set_hours(Weekday::Monday, "9am-5pm".to_string());
        template.set_hours(Weekday::Wednesday, "1pm-5pm".to_string());
        let days: Vec<Weekday> = template.hours_lines().iter().map(|(d, _)| *d).collect();
        assert_eq!(
            days,
            vec![Weekday::Monday, Weekday::Wednesday, Weekday::Sunday]
        );
    }

    #[test]
    fn set_hours_with_empty_value_removes_the_entry() {
        let mut template = ResetaTemplate::default();
        template.set_hours(Weekday::Monday, "9am-5pm".to_string());
        assert!(template.set_hours(Weekday::Monday, String::new()));
        assert!(template.clinic_hours.is_empty());
        assert!(!template.set_hours(Weekday::Monday, String::new()));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut template = ResetaTemplate::default();
        template.clinic_name = "Sta. Rosa Clinic".to_string();
        template.set_hours(Weekday::Monday, "9am-5pm".to_string());
        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(json["clinicName"], "Sta. Rosa Clinic");
        assert_eq!(json["showRxSymbol"], true);
        assert_eq!(json["clinicHours"]["monday"], "9am-5pm");
        // Unset optional fields stay out of the payload.
        assert!(json.get("mobile").is_none());
    }

    #[test]
    fn deserializes_a_host_payload() {
        let json = r##"{
            "id": "t-1",
            "clinicName": "Clinic",
            "doctorName": "Juan Dela Cruz",
            "professionalTitle": "MD",
            "specialty": "Internal Medicine",
            "clinicAddress": "12 Rizal Ave",
            "clinicCountry": "Philippines",
            "phone": "(02) 8123 4567",
            "email": "clinic@example.com",
            "headerColor": "#1a5276",
            "accentColor": "#1a5276",
            "paperColor": "#ffffff",
            "showRxSymbol": false,
            "licenseNo": "0123456",
            "clinicHours": {"monday": "9am-5pm"}
        }"##;
        let template: ResetaTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.doctor_name, "Juan Dela Cruz");
        assert_eq!(template.mobile, None);
        assert!(!template.show_rx_symbol);
        assert_eq!(
            template.clinic_hours.get(&Weekday::Monday).map(String::as_str),
            Some("9am-5pm")
        );
    }
}
