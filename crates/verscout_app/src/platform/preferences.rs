//! Persisted display preference.
//!
//! One RON file under the user config dir holding the stored string form
//! ("light"/"dark"). Reads are tolerant: anything missing or unreadable
//! falls back to the default inside the core. Writes are atomic and
//! best-effort.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use client_logging::{client_error, client_info, client_warn};
use serde::{Deserialize, Serialize};
use verscout_core::DisplayPreference;

const PREFS_FILENAME: &str = "preferences.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPreferences {
    theme: String,
}

/// Location of the preference file, scoped to this user on this device.
pub(crate) fn preference_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("verscout")
        .join(PREFS_FILENAME)
}

/// The raw stored preference string, if any. Interpretation happens in the
/// core, so an invalid stored value reads back as `Some` here and falls back
/// there.
pub(crate) fn load(path: &Path) -> Option<String> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            client_warn!("Failed to read preferences from {:?}: {}", path, err);
            return None;
        }
    };

    match ron::from_str::<PersistedPreferences>(&content) {
        Ok(prefs) => Some(prefs.theme),
        Err(err) => {
            client_warn!("Failed to parse preferences from {:?}: {}", path, err);
            None
        }
    }
}

/// Best-effort persistence: failures are logged and swallowed, the
/// in-memory value stays authoritative for the session.
pub(crate) fn save(path: &Path, preference: DisplayPreference) {
    let state = PersistedPreferences {
        theme: preference.as_stored().to_string(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&state, pretty) {
        Ok(text) => text,
        Err(err) => {
            client_error!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    match write_atomic(path, &content) {
        Ok(()) => {
            client_info!("Persisted display preference {}", preference.as_stored());
        }
        Err(err) => {
            client_error!("Failed to write preferences to {:?}: {}", path, err);
        }
    }
}

/// Write via temp file + rename so a crash never leaves a torn file behind.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    if path.exists() {
        fs::remove_file(path)?;
    }
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFS_FILENAME);

        save(&path, DisplayPreference::Dark);
        assert_eq!(load(&path), Some("dark".to_string()));

        save(&path, DisplayPreference::Light);
        assert_eq!(load(&path), Some("light".to_string()));
    }

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(load(&dir.path().join(PREFS_FILENAME)), None);
    }

    #[test]
    fn corrupt_file_loads_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFS_FILENAME);
        fs::write(&path, "definitely not ron {{{").expect("write");
        assert_eq!(load(&path), None);
    }
}
