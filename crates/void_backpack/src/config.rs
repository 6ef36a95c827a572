//! Backpack Configuration
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. Built-in defaults (10 slots, banner on, empty backpack)
//! 2. Config file: `$BACKPACK_CONFIG`, else `backpack.toml`
//! 3. Environment variables: `BACKPACK_CAPACITY`, `BACKPACK_NO_BANNER`
//!
//! # Example Config File
//!
//! ```toml
//! capacity = 10
//! banner = true
//!
//! [[items]]
//! name = "Medkit"
//! category = "Heal"
//! quantity = 2
//! priority = 5
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use void_inventory::{Item, DEFAULT_CAPACITY};

/// Largest capacity a config may ask for
pub const MAX_CAPACITY: usize = 64;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "backpack.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML syntax or schema error (includes invalid starter items)
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Semantically invalid setting
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Complete backpack configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackpackConfig {
    /// Number of item slots
    pub capacity: usize,
    /// Print the welcome banner on start-up
    pub banner: bool,
    /// Items packed at start-up, in order
    pub items: Vec<Item>,
    /// Config file the settings came from
    #[serde(skip)]
    pub config_path: Option<String>,
}

impl Default for BackpackConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            banner: true,
            items: Vec::new(),
            config_path: None,
        }
    }
}

impl BackpackConfig {
    /// Load configuration from all sources
    ///
    /// Problems are logged and the offending layer is skipped.
    pub fn load() -> Self {
        let mut config = Self::default();

        let path = std::env::var("BACKPACK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        if Path::new(&path).exists() {
            match Self::load_from_file(&path) {
                Ok(loaded) => {
                    config = loaded;
                    log::info!("Loaded backpack config from {}", path);
                }
                Err(e) => log::warn!("Ignoring config file {}: {}", path, e),
            }
        } else {
            log::debug!("No config file at {}", path);
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load and validate configuration from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.display().to_string());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check capacity bounds and that the starter items fit
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 || self.capacity > MAX_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "capacity must be between 1 and {}, got {}",
                MAX_CAPACITY, self.capacity
            )));
        }
        if self.items.len() > self.capacity {
            return Err(ConfigError::Invalid(format!(
                "{} starter items do not fit in {} slots",
                self.items.len(),
                self.capacity
            )));
        }
        Ok(())
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(capacity) = lookup("BACKPACK_CAPACITY") {
            match capacity.trim().parse::<usize>() {
                Ok(c) if (1..=MAX_CAPACITY).contains(&c) && c >= self.items.len() => {
                    self.capacity = c;
                    log::info!("Capacity from env: {}", c);
                }
                _ => log::warn!("Ignoring BACKPACK_CAPACITY={}", capacity),
            }
        }

        if lookup("BACKPACK_NO_BANNER")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
        {
            self.banner = false;
        }
    }

    /// Print configuration summary
    pub fn log_summary(&self) {
        log::info!(
            "Backpack: {} slots, {} starter items, config {}",
            self.capacity,
            self.items.len(),
            self.config_path.as_deref().unwrap_or("(defaults)")
        );
    }
}
