//! Configuration management for the component gallery
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_TICK_RATE_MS, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS,
};
use crate::symbols::SymbolTheme;
use crate::theme::ThemePreset;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub scroll_shadow: ScrollShadowConfig,
    pub gallery: GalleryConfig,
    pub logging: LoggingConfig,
}

/// Theme configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Colour preset: "default", "dark" or "mono"
    pub preset: String,
    /// Glyph set for icons and arrows
    pub symbols: SymbolTheme,
}

/// Scroll shadow behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollShadowConfig {
    /// Lines moved by PageUp/PageDown
    pub page_size: usize,
    /// Draw the boundary sensors on screen
    pub debug_show_sentinels: bool,
    /// Shade the rows just outside the container instead of inside it
    pub outer: bool,
}

/// Gallery application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Event loop tick in milliseconds; drives loader animation
    pub tick_rate_ms: u64,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Maximum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Log file; defaults to the data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: ThemePreset::default().name().to_string(),
            symbols: SymbolTheme::default(),
        }
    }
}

impl Default for ScrollShadowConfig {
    fn default() -> Self {
        Self {
            page_size: crate::behaviors::scroll_shadow::DEFAULT_PAGE_SIZE,
            debug_show_sentinels: false,
            outer: false,
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            mouse_enabled: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed log level
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level).with_context(|| format!("Invalid log level '{}'", self.level))
    }
}

impl GalleryConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Theme preset named by the configuration
    pub fn theme_preset(&self) -> Result<ThemePreset> {
        ThemePreset::from_str(&self.theme.preset).map_err(|e| anyhow::anyhow!(e))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.theme_preset()?;
        self.logging.level_filter()?;

        if self.scroll_shadow.page_size == 0 {
            anyhow::bail!("scroll_shadow.page_size must be at least 1");
        }

        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&self.gallery.tick_rate_ms) {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {} milliseconds, got {}",
                MIN_TICK_RATE_MS,
                MAX_TICK_RATE_MS,
                self.gallery.tick_rate_ms
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Component Gallery Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
