//! Per-panel fetch lifecycle: Idle -> Loading -> Loaded.
//!
//! Each dashboard panel owns one `Panel<T>` cache. A fetch begins by entering
//! Loading and capturing whatever identity value the fetch depends on; the
//! completion settles the panel back to Loaded. On success the cache is
//! replaced wholesale; on failure the error is logged and the prior cache
//! contents stay visible.

use crate::gateway::GatewayError;
use crate::types::{ScheduleEntry, SyllabusEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
}

/// Fetch state plus the cache a panel renders from.
#[derive(Debug, Default)]
pub struct Panel<T> {
    status: PanelStatus,
    entries: Vec<T>,
}

impl<T> Panel<T> {
    pub fn new() -> Self {
        Self {
            status: PanelStatus::Idle,
            entries: Vec::new(),
        }
    }

    pub fn status(&self) -> PanelStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == PanelStatus::Loading
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Enter Loading. The caller captures its identity dependency (and Today,
    /// for the schedule panel) at this point, not at render time.
    pub fn begin_fetch(&mut self) {
        self.status = PanelStatus::Loading;
    }

    /// Settle a completed fetch. Ok replaces the cache wholesale; Err keeps
    /// the prior entries so the last-known data stays visible.
    pub fn settle(&mut self, panel_name: &str, result: Result<Vec<T>, GatewayError>) {
        match result {
            Ok(entries) => {
                self.entries = entries;
            }
            Err(e) => {
                log::warn!("{} fetch failed: {}", panel_name, e);
            }
        }
        self.status = PanelStatus::Loaded;
    }
}

/// Today's schedule: entries whose weekday matches the weekday name captured
/// at fetch time.
pub fn schedule_for_day<'a>(entries: &'a [ScheduleEntry], weekday: &str) -> Vec<&'a ScheduleEntry> {
    entries.iter().filter(|e| e.weekday == weekday).collect()
}

/// SAP entries minus the API's empty-id placeholder rows.
pub fn syllabus_with_ids(entries: &[SyllabusEntry]) -> Vec<&SyllabusEntry> {
    entries.iter().filter(|e| !e.id.is_empty()).collect()
}
