//! Identity-entry screen.
//!
//! Two states: Unresolved (session checked, faculty catalog loading or
//! loaded) and Resolved (identity complete, navigation to the dashboard
//! triggered). All I/O results are passed in by the shell, so the transitions
//! here are synchronous and directly testable.

use crate::gateway::GatewayError;
use crate::panel::Panel;
use crate::state::AppState;
use crate::types::{Faculty, UserIdentity, ValidationInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Unresolved,
    Resolved,
}

/// An editable field of the identity form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Class,
    Major,
}

impl Field {
    /// Indonesian field key, used in the edit-time validation message.
    fn key(self) -> &'static str {
        match self {
            Field::Name => "nama",
            Field::Class => "kelas",
            Field::Major => "jurusan",
        }
    }
}

pub struct EntryScreen {
    state: EntryState,
    pub faculties: Panel<Faculty>,
    pub info: ValidationInfo,
}

impl EntryScreen {
    pub fn new() -> Self {
        Self {
            state: EntryState::Unresolved,
            faculties: Panel::new(),
            info: ValidationInfo::default(),
        }
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    pub fn is_resolved(&self) -> bool {
        self.state == EntryState::Resolved
    }

    /// Mount the screen. A complete persisted identity resolves immediately;
    /// otherwise the faculty catalog fetch begins and the initial validation
    /// messages are computed against the current identity.
    ///
    /// Returns true when the screen resolved (navigate to the dashboard).
    pub fn mount(&mut self, state: &AppState, session: Option<UserIdentity>) -> bool {
        if let Some(identity) = session {
            state.set_identity(identity);
            self.state = EntryState::Resolved;
            return true;
        }

        self.faculties.begin_fetch();
        self.info = initial_validation(&state.identity());
        false
    }

    /// Settle the faculty catalog fetch started by `mount`.
    pub fn faculties_loaded(&mut self, result: Result<Vec<Faculty>, GatewayError>) {
        self.faculties.settle("fakultas", result);
    }

    /// Majors across all faculties, flattened in catalog order for the
    /// numbered terminal picker.
    pub fn major_options(&self) -> Vec<&str> {
        self.faculties
            .entries()
            .iter()
            .flat_map(|f| f.majors.iter().map(String::as_str))
            .collect()
    }

    /// Edit one field: update the identity and recompute that field's
    /// validation message only.
    pub fn edit(&mut self, state: &AppState, field: Field, value: &str) {
        state.update_identity(|identity| {
            let slot = match field {
                Field::Name => &mut identity.name,
                Field::Class => &mut identity.class,
                Field::Major => &mut identity.major,
            };
            *slot = value.to_string();
        });

        let message = if value.is_empty() {
            format!("{} Tidak Bisa Kosong", field.key())
        } else {
            String::new()
        };
        match field {
            Field::Name => self.info.name = message,
            Field::Class => self.info.class = message,
            Field::Major => self.info.major = message,
        }
    }

    /// Submit the form. A no-op (no navigation, no persistence) while any
    /// field is empty; otherwise persists the triple and resolves.
    ///
    /// Returns true when the screen resolved (navigate to the dashboard).
    pub fn submit(&mut self, state: &AppState, session_path: &std::path::Path) -> bool {
        let identity = state.identity();
        if !identity.is_complete() {
            return false;
        }

        if let Err(e) = crate::state::save_session(session_path, &identity) {
            log::warn!("Failed to persist session: {}", e);
        }
        self.state = EntryState::Resolved;
        true
    }
}

impl Default for EntryScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Initial-mount validation: one "cannot be empty" message per empty field.
fn initial_validation(identity: &UserIdentity) -> ValidationInfo {
    let mut info = ValidationInfo::default();
    if identity.name.is_empty() {
        info.name = "Nama tidak boleh kosong".to_string();
    }
    if identity.class.is_empty() {
        info.class = "Kelas tidak boleh kosong".to_string();
    }
    if identity.major.is_empty() {
        info.major = "Jurusan tidak boleh kosong".to_string();
    }
    info
}
