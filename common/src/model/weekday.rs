use serde::{Deserialize, Serialize};

/// Day of the week for clinic hours.
///
/// `Ord` follows calendar order starting Monday, which is also the canonical
/// display order of the preview's clinic-hours block.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Capitalized display label, e.g. `"Monday"`.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_calendar_order() {
        let mut sorted = Weekday::ALL;
        sorted.sort();
        assert_eq!(sorted, Weekday::ALL);
        assert_eq!(Weekday::ALL[0], Weekday::Monday);
        assert_eq!(Weekday::ALL[6], Weekday::Sunday);
    }

    #[test]
    fn serializes_as_lowercase_day_name() {
        assert_eq!(serde_json::to_string(&Weekday::Monday).unwrap(), "\"monday\"");
        let day: Weekday = serde_json::from_str("\"saturday\"").unwrap();
        assert_eq!(day, Weekday::Saturday);
    }
}
