//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
///
/// Validation patterns, help text, the notification palette and all delays
/// are fixed in-code tables; only presentation preferences live here.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Skip the form entrance animation
    pub skip_entrance_animation: Option<bool>,
    /// Hide the help text for the focused field
    pub hide_field_help: Option<bool>,
}

#[allow(dead_code)]
impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("mx", "rh", "empleados-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn skip_entrance_animation(&self) -> bool {
        self.skip_entrance_animation.unwrap_or(false)
    }

    pub fn show_field_help(&self) -> bool {
        !self.hide_field_help.unwrap_or(false)
    }
}
