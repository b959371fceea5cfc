//! Domain types shared across the portal client.

use chrono::{DateTime, Datelike, Local, Weekday};
use serde::{Deserialize, Serialize};

/// The locally-typed identity triple. All three fields must be non-empty
/// before the dashboard is reachable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub major: String,
}

impl UserIdentity {
    /// True when name, class, and major are all non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.class.is_empty() && !self.major.is_empty()
    }
}

/// A faculty grouping with its selectable majors, as shown in the
/// major-selection control.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Faculty {
    pub name: String,
    pub majors: Vec<String>,
}

/// One row of a class schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub subject: String,
    pub time: String,
    pub room: String,
    pub instructor: String,
    /// Indonesian weekday name as returned by the API ("Senin".."Minggu").
    pub weekday: String,
}

/// One SAP (course outline) document reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyllabusEntry {
    pub id: String,
    pub title: String,
}

/// One staff/lecturer directory row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffEntry {
    pub name: String,
    pub homepage: String,
    pub email: String,
}

/// Per-field validation messages for the entry form. Empty string means the
/// field is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationInfo {
    pub name: String,
    pub class: String,
    pub major: String,
    pub status: String,
}

impl ValidationInfo {
    pub fn is_clear(&self) -> bool {
        self.name.is_empty() && self.class.is_empty() && self.major.is_empty()
    }
}

/// Indonesian weekday name, matching what the schedule API puts in its
/// weekday field.
pub fn weekday_name_id(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

/// Indonesian month abbreviation for the dashboard header date.
fn month_abbrev_id(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "Mei",
        6 => "Jun",
        7 => "Jul",
        8 => "Agu",
        9 => "Sep",
        10 => "Okt",
        11 => "Nov",
        12 => "Des",
        _ => "",
    }
}

/// "d MMM yyyy" with Indonesian month names, e.g. "25 Agu 2026".
pub fn format_date_id(today: DateTime<Local>) -> String {
    format!(
        "{} {} {}",
        today.day(),
        month_abbrev_id(today.month()),
        today.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_identity_completeness() {
        let mut id = UserIdentity::default();
        assert!(!id.is_complete());

        id.name = "Budi".to_string();
        id.class = "3A".to_string();
        assert!(!id.is_complete());

        id.major = "Informatika".to_string();
        assert!(id.is_complete());
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name_id(Weekday::Mon), "Senin");
        assert_eq!(weekday_name_id(Weekday::Fri), "Jumat");
        assert_eq!(weekday_name_id(Weekday::Sun), "Minggu");
    }

    #[test]
    fn test_format_date_id() {
        let date = Local.with_ymd_and_hms(2026, 8, 25, 10, 0, 0).unwrap();
        assert_eq!(format_date_id(date), "25 Agu 2026");
    }

    #[test]
    fn test_identity_round_trip() {
        let id = UserIdentity {
            name: "Budi".to_string(),
            class: "3A".to_string(),
            major: "Informatika".to_string(),
        };
        let json = serde_json::to_string(&id).unwrap();
        let back: UserIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_identity_missing_fields_default_empty() {
        let id: UserIdentity = serde_json::from_str(r#"{"name": "Budi"}"#).unwrap();
        assert_eq!(id.name, "Budi");
        assert!(id.class.is_empty());
        assert!(!id.is_complete());
    }
}
