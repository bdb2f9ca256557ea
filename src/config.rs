//! Engine configuration persistence
//!
//! Stores smart-change overrides in `~/.config/editable/config.yaml`

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default debounce delay after a delimiter keystroke
pub const DEFAULT_DELAY_MS: u64 = 1_000;
/// Default idle threshold for non-delimiter keystrokes
pub const DEFAULT_IDLE_MS: u64 = 10_000;

fn default_delimiters() -> Vec<String> {
    // tab and Enter are named alongside the punctuation delimiters
    [":", ";", ".", "!", "?", "\t", "Enter"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_idle_ms() -> u64 {
    DEFAULT_IDLE_MS
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

/// Smart-content-change tuning applied to newly bound regions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SmartChangeSettings {
    /// Characters/named keys that end an edit unit
    #[serde(default = "default_delimiters")]
    pub delimiters: Vec<String>,
    #[serde(default = "default_idle_ms")]
    pub idle_ms: u64,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for SmartChangeSettings {
    fn default() -> Self {
        Self {
            delimiters: default_delimiters(),
            idle_ms: default_idle_ms(),
            delay_ms: default_delay_ms(),
        }
    }
}

/// Engine configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub smart_change: SmartChangeSettings,
}

impl Settings {
    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from a specific path, falling back to defaults on any
    /// missing or malformed file (a bad config never fails the engine)
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded config from {}", path.display());
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to disk, creating the config directory if needed
    pub fn save(&self) -> anyhow::Result<()> {
        let path =
            crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiters() {
        let settings = SmartChangeSettings::default();
        for d in [":", ";", ".", "!", "?", "\t", "Enter"] {
            assert!(settings.delimiters.iter().any(|s| s == d), "missing {:?}", d);
        }
        assert_eq!(settings.idle_ms, 10_000);
        assert_eq!(settings.delay_ms, 1_000);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings: Settings =
            serde_yaml::from_str("smart_change:\n  delay_ms: 250\n").unwrap();
        assert_eq!(settings.smart_change.delay_ms, 250);
        assert_eq!(settings.smart_change.idle_ms, DEFAULT_IDLE_MS);
        assert!(!settings.smart_change.delimiters.is_empty());
    }

    #[test]
    fn test_roundtrip() {
        let mut settings = Settings::default();
        settings.smart_change.delimiters = vec![".".to_string()];
        settings.smart_change.idle_ms = 5_000;

        let yaml = serde_yaml::to_string(&settings).unwrap();
        let parsed: Settings = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, settings);
    }
}
