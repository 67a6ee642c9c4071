// Copyright 2025 the Shakl Authors
// SPDX-License-Identifier: Apache-2.0

//! Settings and configuration constants.
//!
//! Compiled-in defaults live at the top of this file. A TOML file can
//! override any of them; every key is optional:
//!
//! ```toml
//! [shaping]
//! transparent_marks = false
//!
//! [output]
//! format = "text"   # or "json"
//!
//! [log]
//! filter = "shakl=info"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::shaping::ShapeOptions;

// ============================================================================
// SHAPING SETTINGS
// ============================================================================
/// Whether combining marks are looked through when finding neighbours
const TRANSPARENT_MARKS: bool = false;

// ============================================================================
// LOG SETTINGS
// ============================================================================
/// Filter used when neither `RUST_LOG` nor the config file sets one
const LOG_FILTER: &str = "shakl=info";

// ============================================================================
// ENVIRONMENT
// ============================================================================
/// Environment variable naming a config file
const CONFIG_ENV_VAR: &str = "SHAKL_CONFIG";

// ============================================================================
// PUBLIC API
// ============================================================================

/// Shaping defaults
pub mod shaping {
    pub const TRANSPARENT_MARKS: bool = super::TRANSPARENT_MARKS;
}

/// Logging defaults
pub mod log {
    pub const FILTER: &str = super::LOG_FILTER;
}

/// Environment variables read at startup
pub mod env {
    pub const CONFIG: &str = super::CONFIG_ENV_VAR;
}

/// Errors raised while loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// How shaped text is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The shaped string, one line per input
    #[default]
    Text,
    /// A JSON array of per-character reports, one per input
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapingSettings {
    pub transparent_marks: bool,
}

impl Default for ShapingSettings {
    fn default() -> Self {
        Self {
            transparent_marks: shaping::TRANSPARENT_MARKS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: log::FILTER.to_string(),
        }
    }
}

/// Complete settings, as loaded from a config file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub shaping: ShapingSettings,
    pub output: OutputSettings,
    pub log: LogSettings,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Shaper options described by these settings.
    pub fn shape_options(&self) -> ShapeOptions {
        ShapeOptions {
            transparent_marks: self.shaping.transparent_marks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.shaping.transparent_marks);
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert_eq!(settings.log.filter, "shakl=info");
        assert_eq!(settings.shape_options(), ShapeOptions::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_full_file() {
        let settings = Settings::from_toml_str(
            r#"
            [shaping]
            transparent_marks = true

            [output]
            format = "json"

            [log]
            filter = "shakl=debug"
            "#,
        )
        .unwrap();

        assert!(settings.shape_options().transparent_marks);
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.log.filter, "shakl=debug");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings = Settings::from_toml_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.shaping, ShapingSettings::default());
        assert_eq!(settings.log, LogSettings::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Settings::from_toml_str("[shaping]\nligatures = true\n").is_err());
        assert!(Settings::from_toml_str("[output]\nformat = \"pdf\"\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("shakl-settings-does-not-exist.toml");
        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("shakl-settings-does-not-exist.toml"));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("shakl-settings-{}.toml", std::process::id()));
        std::fs::write(&path, "[shaping]\ntransparent_marks = true\n").unwrap();
        let loaded = Settings::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(loaded.unwrap().shaping.transparent_marks);
    }

    #[test]
    fn test_load_invalid_file() {
        let path = std::env::temp_dir().join(format!("shakl-invalid-{}.toml", std::process::id()));
        std::fs::write(&path, "[shaping\n").unwrap();
        let loaded = Settings::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(loaded, Err(ConfigError::Parse { .. })));
    }
}
