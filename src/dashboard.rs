//! Dashboard screen: three panels over the list caches.
//!
//! The shell drives the lifecycle: `begin_*_fetch` captures the panel's
//! identity dependency (and Today, for the schedule) and enters Loading; the
//! matching `*_loaded` settles the panel. Render functions return plain text
//! lines. An identity change after mount does not auto-refresh a panel; only
//! an explicit refresh re-reads the current identity.

use crate::gateway::GatewayError;
use crate::panel::{schedule_for_day, syllabus_with_ids, Panel};
use crate::state::AppState;
use crate::types::{
    format_date_id, weekday_name_id, ScheduleEntry, StaffEntry, SyllabusEntry, UserIdentity,
};
use chrono::Datelike;

const LOADING_MESSAGE: &str = "Mengambil data dari server...";
const EMPTY_SCHEDULE_MESSAGE: &str = "Tidak ada jadwal untuk hari ini";

pub struct Dashboard {
    pub schedule: Panel<ScheduleEntry>,
    pub syllabus: Panel<SyllabusEntry>,
    pub staff: Panel<StaffEntry>,
    /// Class captured when the schedule fetch began.
    schedule_class: String,
    /// Indonesian weekday name captured when the schedule fetch began.
    schedule_weekday: String,
    /// Major captured when the syllabus fetch began.
    syllabus_major: String,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            schedule: Panel::new(),
            syllabus: Panel::new(),
            staff: Panel::new(),
            schedule_class: String::new(),
            schedule_weekday: String::new(),
            syllabus_major: String::new(),
        }
    }

    /// Begin the schedule fetch: reset Today, capture its weekday and the
    /// current class. Returns the class the shell should fetch with.
    pub fn begin_schedule_fetch(&mut self, state: &AppState) -> String {
        let now = state.reset_today();
        self.schedule_weekday = weekday_name_id(now.weekday()).to_string();
        self.schedule_class = state.identity().class;
        self.schedule.begin_fetch();
        self.schedule_class.clone()
    }

    pub fn schedule_loaded(&mut self, result: Result<Vec<ScheduleEntry>, GatewayError>) {
        self.schedule.settle("jadwal", result);
    }

    /// Begin the syllabus fetch, capturing the current major. Returns the
    /// major the shell should fetch with.
    pub fn begin_syllabus_fetch(&mut self, state: &AppState) -> String {
        self.syllabus_major = state.identity().major;
        self.syllabus.begin_fetch();
        self.syllabus_major.clone()
    }

    pub fn syllabus_loaded(&mut self, result: Result<Vec<SyllabusEntry>, GatewayError>) {
        self.syllabus.settle("sap", result);
    }

    pub fn begin_staff_fetch(&mut self) {
        self.staff.begin_fetch();
    }

    pub fn staff_loaded(&mut self, result: Result<Vec<StaffEntry>, GatewayError>) {
        self.staff.settle("staff", result);
    }

    /// Header: today's Indonesian weekday and date, then the user's name and
    /// class.
    pub fn render_header(&self, state: &AppState, identity: &UserIdentity) -> Vec<String> {
        let today = state.today();
        vec![
            weekday_name_id(today.weekday()).to_string(),
            format_date_id(today),
            identity.name.clone(),
            identity.class.to_uppercase(),
        ]
    }

    /// "Kelas hari ini" panel: entries whose weekday matches the captured
    /// weekday, with a count and an empty-state message at zero.
    pub fn render_schedule(&self) -> Vec<String> {
        let todays = schedule_for_day(self.schedule.entries(), &self.schedule_weekday);
        let mut lines = vec![format!("KELAS HARI INI ({})", todays.len())];

        if self.schedule.is_loading() {
            lines.push(LOADING_MESSAGE.to_string());
        } else if todays.is_empty() {
            lines.push(EMPTY_SCHEDULE_MESSAGE.to_string());
        } else {
            for entry in todays {
                lines.push(format!(
                    "  {} | {} | {} | {}",
                    entry.subject, entry.time, entry.room, entry.instructor
                ));
            }
        }

        lines
    }

    /// "SAP untuk jurusan" panel: entries with a non-empty id, with a count.
    pub fn render_syllabus(&self) -> Vec<String> {
        let visible = syllabus_with_ids(self.syllabus.entries());
        let mut lines = vec![format!(
            "SAP UNTUK JURUSAN {} ({})",
            self.syllabus_major,
            visible.len()
        )];

        if self.syllabus.is_loading() {
            lines.push(LOADING_MESSAGE.to_string());
        } else {
            for entry in visible {
                lines.push(format!("  {} | {}", entry.id, entry.title));
            }
        }

        lines
    }

    /// "Daftar Staff / Dosen" panel: unfiltered, with a count.
    pub fn render_staff(&self) -> Vec<String> {
        let entries = self.staff.entries();
        let mut lines = vec![format!("DAFTAR STAFF / DOSEN ({})", entries.len())];

        if self.staff.is_loading() {
            lines.push(LOADING_MESSAGE.to_string());
        } else {
            for entry in entries {
                lines.push(format!(
                    "  {} | {} | {}",
                    entry.name, entry.homepage, entry.email
                ));
            }
        }

        lines
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
