// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::color::{Color, Palette};

/// Canvas dimensions for the text renderer, in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub cols: u16,
    pub rows: u16,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self { cols: 80, rows: 24 }
    }
}

/// Behavior settings (non-visual preferences)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSettings {
    /// Label each cell with its region id
    pub show_region_ids: bool,
    /// Mark removable cells with an `x` in the corner
    pub show_remove_markers: bool,
    /// Repaint the canvas after every mutation
    pub render_after_mutation: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            show_region_ids: true,
            show_remove_markers: true,
            render_after_mutation: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas dimensions
    pub canvas: CanvasSettings,

    /// Behavior settings
    pub behavior: BehaviorSettings,

    /// Tint cycle for newly created regions
    pub palette: Vec<Color>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: CanvasSettings::default(),
            behavior: BehaviorSettings::default(),
            palette: Palette::presets(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/mondrian/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mondrian").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::ReadError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)?;
        Ok(path)
    }
}
