//! Remote data gateway — the portal REST API client.
//!
//! Four read-only GET operations, one per endpoint. Raw wire types mirror the
//! API's Indonesian field names and are normalized into the public types in
//! [`crate::types`]. Callers log failures and keep whatever they already had;
//! there is no retry, timeout, or cancellation here.

use serde::Deserialize;
use url::Url;

use crate::types::{Faculty, ScheduleEntry, StaffEntry, SyllabusEntry};

/// Default API origin when neither the environment nor config provides one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

// ============================================================================
// Wire types (deserialized from portal JSON)
// ============================================================================

#[derive(Debug, Deserialize)]
struct FacultyRaw {
    #[serde(default, rename = "fakultasName")]
    fakultas_name: String,
    #[serde(default, rename = "fakultasMajors")]
    fakultas_majors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ScheduleRaw {
    #[serde(default, rename = "jadwalMatkul")]
    jadwal_matkul: String,
    #[serde(default, rename = "jadwalWaktu")]
    jadwal_waktu: String,
    #[serde(default, rename = "jadwalRuang")]
    jadwal_ruang: String,
    // The API spells this one all-lowercase.
    #[serde(default, rename = "jadwalstaff")]
    jadwal_staff: String,
    #[serde(default, rename = "jadwalHari")]
    jadwal_hari: String,
}

#[derive(Debug, Deserialize)]
struct SyllabusRaw {
    #[serde(default, rename = "sapID")]
    sap_id: String,
    #[serde(default, rename = "sapTitle")]
    sap_title: String,
}

#[derive(Debug, Deserialize)]
struct StaffRaw {
    #[serde(default, rename = "staffName")]
    staff_name: String,
    #[serde(default, rename = "staffHomesite")]
    staff_homesite: String,
    #[serde(default, rename = "staffEmail")]
    staff_email: String,
}

impl From<FacultyRaw> for Faculty {
    fn from(raw: FacultyRaw) -> Self {
        Faculty {
            name: raw.fakultas_name,
            majors: raw.fakultas_majors,
        }
    }
}

impl From<ScheduleRaw> for ScheduleEntry {
    fn from(raw: ScheduleRaw) -> Self {
        ScheduleEntry {
            subject: raw.jadwal_matkul,
            time: raw.jadwal_waktu,
            room: raw.jadwal_ruang,
            instructor: raw.jadwal_staff,
            weekday: raw.jadwal_hari,
        }
    }
}

impl From<SyllabusRaw> for SyllabusEntry {
    fn from(raw: SyllabusRaw) -> Self {
        SyllabusEntry {
            id: raw.sap_id,
            title: raw.sap_title,
        }
    }
}

impl From<StaffRaw> for StaffEntry {
    fn from(raw: StaffRaw) -> Self {
        StaffEntry {
            name: raw.staff_name,
            homepage: raw.staff_homesite,
            email: raw.staff_email,
        }
    }
}

// ============================================================================
// Error type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("HTTP: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client for the portal API.
pub struct PortalClient {
    http: reqwest::Client,
    base: Url,
}

impl PortalClient {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base: Url::parse(base_url)?,
        })
    }

    /// Fetch the faculty catalog (`/api/fakultas/`).
    pub async fn fetch_faculties(&self) -> Result<Vec<Faculty>, GatewayError> {
        let raw: Vec<FacultyRaw> = self.get_json(&["api", "fakultas"]).await?;
        Ok(raw.into_iter().map(Faculty::from).collect())
    }

    /// Fetch the schedule for a class (`/api/jadwal/{kelas}/`).
    pub async fn fetch_schedule(&self, class: &str) -> Result<Vec<ScheduleEntry>, GatewayError> {
        let raw: Vec<ScheduleRaw> = self.get_json(&["api", "jadwal", class]).await?;
        Ok(raw.into_iter().map(ScheduleEntry::from).collect())
    }

    /// Fetch SAP documents for a major (`/api/sap/{jurusan}/`).
    pub async fn fetch_syllabus(&self, major: &str) -> Result<Vec<SyllabusEntry>, GatewayError> {
        let raw: Vec<SyllabusRaw> = self.get_json(&["api", "sap", major]).await?;
        Ok(raw.into_iter().map(SyllabusEntry::from).collect())
    }

    /// Fetch the staff/lecturer directory (`/api/staff/`).
    pub async fn fetch_staff(&self) -> Result<Vec<StaffEntry>, GatewayError> {
        let raw: Vec<StaffRaw> = self.get_json(&["api", "staff"]).await?;
        Ok(raw.into_iter().map(StaffEntry::from).collect())
    }

    /// One GET request against `base` with the given path segments (trailing
    /// slash preserved, segments percent-encoded by the Url builder).
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<T, GatewayError> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            path.extend(segments);
            // The portal routes all end in a slash.
            path.push("");
        }

        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GatewayError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faculty_deserialization() {
        let json = r#"[
            {
                "fakultasName": "Fakultas Teknologi Industri",
                "fakultasMajors": ["Informatika", "Teknik Elektro"]
            },
            {
                "fakultasName": "Fakultas Ekonomi",
                "fakultasMajors": ["Akuntansi"]
            }
        ]"#;

        let raw: Vec<FacultyRaw> = serde_json::from_str(json).unwrap();
        let faculties: Vec<Faculty> = raw.into_iter().map(Faculty::from).collect();
        assert_eq!(faculties.len(), 2);
        assert_eq!(faculties[0].name, "Fakultas Teknologi Industri");
        assert_eq!(faculties[0].majors, vec!["Informatika", "Teknik Elektro"]);
    }

    #[test]
    fn test_schedule_deserialization() {
        let json = r#"[
            {
                "jadwalMatkul": "Kalkulus",
                "jadwalWaktu": "08:30 - 10:30",
                "jadwalRuang": "E433",
                "jadwalstaff": "Dr. Sari",
                "jadwalHari": "Senin"
            }
        ]"#;

        let raw: Vec<ScheduleRaw> = serde_json::from_str(json).unwrap();
        let entries: Vec<ScheduleEntry> = raw.into_iter().map(ScheduleEntry::from).collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].subject, "Kalkulus");
        assert_eq!(entries[0].instructor, "Dr. Sari");
        assert_eq!(entries[0].weekday, "Senin");
    }

    #[test]
    fn test_schedule_missing_fields_default_empty() {
        let json = r#"[{"jadwalMatkul": "Kalkulus"}]"#;
        let raw: Vec<ScheduleRaw> = serde_json::from_str(json).unwrap();
        assert_eq!(raw[0].jadwal_matkul, "Kalkulus");
        assert!(raw[0].jadwal_hari.is_empty());
    }

    #[test]
    fn test_syllabus_deserialization_keeps_empty_ids() {
        // The API pads with empty-id rows; the gateway passes them through
        // and the panel filters at render time.
        let json = r#"[
            {"sapID": "", "sapTitle": "x"},
            {"sapID": "S1", "sapTitle": "y"}
        ]"#;

        let raw: Vec<SyllabusRaw> = serde_json::from_str(json).unwrap();
        let entries: Vec<SyllabusEntry> = raw.into_iter().map(SyllabusEntry::from).collect();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].id.is_empty());
        assert_eq!(entries[1].id, "S1");
    }

    #[test]
    fn test_staff_deserialization() {
        let json = r#"[
            {
                "staffName": "Prof. Andi",
                "staffHomesite": "https://andi.example.ac.id",
                "staffEmail": "andi@example.ac.id"
            }
        ]"#;

        let raw: Vec<StaffRaw> = serde_json::from_str(json).unwrap();
        let entries: Vec<StaffEntry> = raw.into_iter().map(StaffEntry::from).collect();
        assert_eq!(entries[0].name, "Prof. Andi");
        assert_eq!(entries[0].email, "andi@example.ac.id");
    }

    #[test]
    fn test_client_builds_trailing_slash_paths() {
        let client = PortalClient::new("http://localhost:8000").unwrap();
        let mut url = client.base.clone();
        {
            let mut path = url.path_segments_mut().unwrap();
            path.extend(["api", "jadwal", "3KA07"]);
            path.push("");
        }
        assert_eq!(url.as_str(), "http://localhost:8000/api/jadwal/3KA07/");
    }

    #[test]
    fn test_client_encodes_path_params() {
        let client = PortalClient::new("http://localhost:8000").unwrap();
        let mut url = client.base.clone();
        {
            let mut path = url.path_segments_mut().unwrap();
            path.extend(["api", "sap", "Teknik Elektro"]);
            path.push("");
        }
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/sap/Teknik%20Elektro/"
        );
    }

    #[test]
    fn test_rejects_cannot_be_a_base_url() {
        assert!(PortalClient::new("not a url").is_err());
    }
}
