//! Application state and on-disk persistence (config + session identity).
//!
//! The identity, today timestamp, and the three list caches live behind
//! `Mutex` fields so panels can update their own cache from fetch completions
//! without touching anyone else's. Session and config I/O are explicit calls;
//! nothing here persists automatically.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::types::{ScheduleEntry, StaffEntry, SyllabusEntry, UserIdentity};

/// Application state shared by the screens.
pub struct AppState {
    pub identity: Mutex<UserIdentity>,
    /// Reset each time the schedule panel (re)fetches; read-only elsewhere.
    pub today: Mutex<DateTime<Local>>,
    pub schedule_cache: Mutex<Vec<ScheduleEntry>>,
    pub syllabus_cache: Mutex<Vec<SyllabusEntry>>,
    pub staff_cache: Mutex<Vec<StaffEntry>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            identity: Mutex::new(UserIdentity::default()),
            today: Mutex::new(Local::now()),
            schedule_cache: Mutex::new(Vec::new()),
            syllabus_cache: Mutex::new(Vec::new()),
            staff_cache: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the current identity.
    pub fn identity(&self) -> UserIdentity {
        self.identity
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Apply a field-by-field mutation to the identity.
    pub fn update_identity(&self, f: impl FnOnce(&mut UserIdentity)) {
        if let Ok(mut guard) = self.identity.lock() {
            f(&mut guard);
        }
    }

    /// Replace the identity wholesale (session rehydration).
    pub fn set_identity(&self, identity: UserIdentity) {
        if let Ok(mut guard) = self.identity.lock() {
            *guard = identity;
        }
    }

    pub fn today(&self) -> DateTime<Local> {
        self.today
            .lock()
            .map(|guard| *guard)
            .unwrap_or_else(|_| Local::now())
    }

    /// Reset "today" to the current time. Called at schedule fetch time so
    /// the weekday filter stays stable until the next refresh.
    pub fn reset_today(&self) -> DateTime<Local> {
        let now = Local::now();
        if let Ok(mut guard) = self.today.lock() {
            *guard = now;
        }
        now
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Config
// ============================================================================

/// Client configuration from ~/.gundar-portal/config.json.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub base_url: String,
}

/// Get the canonical config file path (~/.gundar-portal/config.json).
pub fn config_path() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or("Could not find home directory")?;
    Ok(home.join(".gundar-portal").join("config.json"))
}

/// Load configuration from disk. Missing file is an error the caller treats
/// as "use defaults".
pub fn load_config() -> Result<Config, String> {
    let path = config_path()?;

    if !path.exists() {
        return Err(format!("Config file not found at {}", path.display()));
    }

    let content =
        fs::read_to_string(&path).map_err(|e| format!("Failed to read config: {}", e))?;

    serde_json::from_str(&content).map_err(|e| format!("Failed to parse config: {}", e))
}

/// Resolve the API base URL: PORTAL_API_URL env var, then config.json, then
/// the built-in default.
pub fn resolve_base_url() -> String {
    if let Ok(url) = std::env::var("PORTAL_API_URL") {
        if !url.is_empty() {
            return url;
        }
    }

    match load_config() {
        Ok(config) if !config.base_url.is_empty() => config.base_url,
        Ok(_) => crate::gateway::DEFAULT_BASE_URL.to_string(),
        Err(e) => {
            log::debug!("No usable config: {}. Using default base URL.", e);
            crate::gateway::DEFAULT_BASE_URL.to_string()
        }
    }
}

// ============================================================================
// Session identity persistence
// ============================================================================

/// Default session file path under the OS cache directory.
pub fn session_path() -> Result<PathBuf, String> {
    let cache = dirs::cache_dir().ok_or("Could not find cache directory")?;
    Ok(cache.join("gundar-portal").join("session.json"))
}

/// Persist the identity verbatim. Called by the entry screen on successful
/// submission, never anywhere else.
pub fn save_session(path: &Path, identity: &UserIdentity) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create session dir: {}", e))?;
        }
    }

    let content = serde_json::to_string_pretty(identity)
        .map_err(|e| format!("Serialize error: {}", e))?;
    fs::write(path, content).map_err(|e| format!("Write error: {}", e))?;

    Ok(())
}

/// Rehydrate a previously persisted identity. Returns `None` when the file is
/// missing, unreadable, or does not hold a complete triple.
pub fn load_session(path: &Path) -> Option<UserIdentity> {
    if !path.exists() {
        return None;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Failed to read session file: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<UserIdentity>(&content) {
        Ok(identity) if identity.is_complete() => Some(identity),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Failed to parse session file: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_identity() -> UserIdentity {
        UserIdentity {
            name: "Budi".to_string(),
            class: "3A".to_string(),
            major: "Informatika".to_string(),
        }
    }

    #[test]
    fn test_identity_update_field_by_field() {
        let state = AppState::new();
        state.update_identity(|id| id.name = "Budi".to_string());
        state.update_identity(|id| id.class = "3A".to_string());

        let id = state.identity();
        assert_eq!(id.name, "Budi");
        assert_eq!(id.class, "3A");
        assert!(id.major.is_empty());
    }

    #[test]
    fn test_reset_today_advances() {
        let state = AppState::new();
        let before = state.today();
        let after = state.reset_today();
        assert!(after >= before);
        assert_eq!(state.today(), after);
    }

    #[test]
    fn test_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let identity = complete_identity();
        save_session(&path, &identity).unwrap();

        assert_eq!(load_session(&path), Some(identity));
    }

    #[test]
    fn test_session_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        assert_eq!(load_session(&path), None);
    }

    #[test]
    fn test_session_corrupt_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(load_session(&path), None);
    }

    #[test]
    fn test_session_incomplete_identity_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"name": "Budi", "class": "", "major": ""}"#).unwrap();
        assert_eq!(load_session(&path), None);
    }

    #[test]
    fn test_save_session_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        save_session(&path, &complete_identity()).unwrap();
        assert!(path.exists());
    }
}
