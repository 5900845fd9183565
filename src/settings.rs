use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persistent application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Default flight-log locator (URL or path)
    pub source: Option<String>,
    /// Time-compression multiplier for replay
    pub speed_multiplier: f64,
    /// Scene scale passed to the projection
    pub scale: f64,
    /// Reload interval in seconds for follow mode
    pub poll_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            source: None,
            speed_multiplier: 100.0,
            scale: 0.001,
            poll_secs: 30,
        }
    }
}

impl AppSettings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("skytrace").join("settings.json"))
    }

    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                if let Ok(contents) = fs::read_to_string(&path) {
                    if let Ok(settings) = serde_json::from_str(&contents) {
                        return settings;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(json) = serde_json::to_string_pretty(self) {
                let _ = fs::write(&path, json);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_roundtrip_through_json() {
        let settings = AppSettings {
            source: Some("https://track.example.org/data.csv".to_string()),
            speed_multiplier: 250.0,
            scale: 0.01,
            poll_secs: 10,
        };

        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.source, settings.source);
        assert_eq!(back.speed_multiplier, 250.0);
        assert_eq!(back.poll_secs, 10);
    }

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.speed_multiplier, 100.0);
        assert_eq!(settings.poll_secs, 30);
        assert!(settings.source.is_none());
    }
}
