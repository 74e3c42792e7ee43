//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.shopfront/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The nav menu itself is configuration: `[[menu]]` tables replace the stock
//! tree wholesale when present, which is also how tests inject small trees.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::menu::{self, MenuItem};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub shop_name: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SHOP_NAME: &str = "Apex Nutrition";
pub const DEFAULT_SESSION_BASE_URL: &str = "http://localhost:8787/v1";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub shop_name: String,
    pub session_base_url: String,
    pub session_token: Option<String>,
    pub menu: Vec<MenuItem>,
    pub offline: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.shopfront/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".shopfront").join("config.toml"))
}

/// Load config from `~/.shopfront/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ShopConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ShopConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ShopConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ShopConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ShopConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r##"# Shopfront Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# shop_name = "Apex Nutrition"

# [session]
# base_url = "http://localhost:8787/v1"  # Or set SHOPFRONT_SESSION_URL env var
# token = "sf-..."                       # Or set SHOPFRONT_SESSION_TOKEN env var

# [[menu]] tables replace the stock menu tree entirely when present.
# A leaf entry links directly; an entry with [[menu.submenu]] tables is a
# collapsible parent (its own href is a placeholder, use "#").

# [[menu]]
# label = "All Products"
# href = "/products"

# [[menu]]
# label = "Categories"
# href = "#"
#
# [[menu.submenu]]
# label = "Protein"
# href = "/products?category=protein"
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_offline` comes from the `--offline` flag.
pub fn resolve(config: &ShopConfig, cli_offline: bool) -> ResolvedConfig {
    // Shop name: env → config → default
    let shop_name = std::env::var("SHOPFRONT_SHOP_NAME")
        .ok()
        .or_else(|| config.general.shop_name.clone())
        .unwrap_or_else(|| DEFAULT_SHOP_NAME.to_string());

    // Session base URL: env → config → default
    let session_base_url = std::env::var("SHOPFRONT_SESSION_URL")
        .ok()
        .or_else(|| config.session.base_url.clone())
        .unwrap_or_else(|| DEFAULT_SESSION_BASE_URL.to_string());

    // Session token: env → config
    let session_token = std::env::var("SHOPFRONT_SESSION_TOKEN")
        .ok()
        .or_else(|| config.session.token.clone());

    // Menu: config file replaces the stock tree wholesale
    let menu = if config.menu.is_empty() {
        menu::default_menu()
    } else {
        config.menu.clone()
    };

    ResolvedConfig {
        shop_name,
        session_base_url,
        session_token,
        menu,
        offline: cli_offline,
    }
}
