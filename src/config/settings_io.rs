use std::fs;
use std::path::{Path, PathBuf};

use crate::config::settings::AppSettings;

pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("story_forge");
    path.push("settings.json");
    path
}

pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_path())
}

pub fn save_settings(settings: &AppSettings) {
    if let Err(e) = save_settings_to(&settings_path(), settings) {
        tracing::warn!(error = %e, "failed to save settings");
    }
}

/// Missing or unparsable files fall back to defaults.
pub fn load_settings_from(path: &Path) -> AppSettings {
    let Ok(raw) = fs::read_to_string(path) else {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return AppSettings::default();
    };

    match serde_json::from_str(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid settings file, using defaults");
            AppSettings::default()
        }
    }
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings {
            ui_scale: 1.5,
            interactive_retry: true,
            poll_max_attempts: Some(4),
            ..AppSettings::default()
        };
        save_settings_to(&path, &settings).unwrap();

        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_settings_from(&dir.path().join("absent.json"));
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_invalid_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_settings_from(&path), AppSettings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"poll_delay_secs": 5}"#).unwrap();

        let loaded = load_settings_from(&path);
        assert_eq!(loaded.poll_delay_secs, 5);
        assert_eq!(loaded.text_model, AppSettings::default().text_model);
    }
}
