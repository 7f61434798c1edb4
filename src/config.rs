//! Engine configuration persistence
//!
//! Stores tunables in `~/.config/editcore/config.yaml`

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::editable::{
    DEFAULT_DOUBLE_CLICK_FRAMES, DEFAULT_MIN_THUMB_HEIGHT, DEFAULT_REPEAT_DELAY_FRAMES,
    DEFAULT_REPEAT_INTERVAL_FRAMES, DEFAULT_UNDO_LIMIT,
};

/// Engine tunables. Missing keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Text inserted by one indent step
    pub indent: String,
    /// Maximum number of undo snapshots kept
    pub undo_limit: usize,
    /// Frames within which a press continues a click sequence
    pub double_click_frames: u64,
    /// Frames a key is held before it starts repeating
    pub key_repeat_delay_frames: u32,
    /// Frames between repeats
    pub key_repeat_interval_frames: u32,
    pub scrollbar_width: f64,
    pub min_thumb_height: f64,
    /// Space between the widget bounds and its text
    pub padding: f64,
    /// Lines scrolled per wheel notch
    pub wheel_lines: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            undo_limit: DEFAULT_UNDO_LIMIT,
            double_click_frames: DEFAULT_DOUBLE_CLICK_FRAMES,
            key_repeat_delay_frames: DEFAULT_REPEAT_DELAY_FRAMES,
            key_repeat_interval_frames: DEFAULT_REPEAT_INTERVAL_FRAMES,
            scrollbar_width: 10.0,
            min_thumb_height: DEFAULT_MIN_THUMB_HEIGHT,
            padding: 4.0,
            wheel_lines: 3,
        }
    }
}

impl EngineConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load and validate config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.indent.is_empty() {
            anyhow::bail!("indent must not be empty");
        }
        if self.indent.contains('\n') {
            anyhow::bail!("indent must not contain a newline");
        }
        if self.undo_limit == 0 {
            anyhow::bail!("undo_limit must be at least 1");
        }
        if self.key_repeat_interval_frames == 0 {
            anyhow::bail!("key_repeat_interval_frames must be at least 1");
        }
        if self.scrollbar_width < 0.0 || self.padding < 0.0 || self.min_thumb_height < 0.0 {
            anyhow::bail!("scrollbar_width, padding and min_thumb_height must not be negative");
        }
        Ok(())
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file()
            .context("No config directory available")?;
        self.save_to(&path)
    }
}
