use serde::{Serialize, Deserialize};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::theme;

// Demo defaults
pub const DEFAULT_BOX_ID: &str = "demo-chat";
pub const DEFAULT_TITLE: &str = "Alice";

/// Settings for the demo binary: which box to build and how its input
/// region is labelled.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Settings {
    pub box_id: String,
    pub title: String,
    /// Whether the demo box gets an input footer.
    pub input_enabled: bool,
    /// Placeholder text shown in the input region.
    pub input_placeholder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            box_id: DEFAULT_BOX_ID.to_string(),
            title: DEFAULT_TITLE.to_string(),
            input_enabled: true,
            input_placeholder: theme::INPUT_PLACEHOLDER.to_string(),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("io", "chatkit", "chatkit") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings)
            .expect("settings serialize to JSON");
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.box_id, "demo-chat");
        assert!(settings.input_enabled);
        assert_eq!(settings.input_placeholder, "Type a message...");
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings {
            box_id: "support".into(),
            title: "Support".into(),
            input_enabled: false,
            input_placeholder: "Say hi...".into(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.box_id, "support");
        assert!(!back.input_enabled);
    }
}
