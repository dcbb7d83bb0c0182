// SPDX-License-Identifier: MPL-2.0
//! This module handles the component configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Default toast lifetime and auto-dismiss tick interval
//! - `[table]` - Data table paging
//! - `[diagnostics]` - Size of the in-memory event buffer
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`
//! 3. Set `INVOICE_KIT_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use invoice_kit::config::{self, Config};
//!
//! // Load existing configuration; a broken file yields defaults and a warning
//! let (mut config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{}", warning.message);
//! }
//!
//! // Keep notifications on screen longer
//! config.notifications.default_lifetime_ms = Some(8000);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::diagnostics::{WarningEvent, WarningType};
use crate::domain::{BufferCapacity, Lifetime, RowsPerPage, TickInterval};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "InvoiceKit";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "INVOICE_KIT_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Notification queue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Lifetime used when a producer passes none. Zero or less never expires.
    #[serde(
        default = "default_lifetime_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_lifetime_ms: Option<i64>,

    /// Interval between auto-dismiss checks.
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,
}

impl NotificationsConfig {
    /// Resolved default lifetime.
    #[must_use]
    pub fn lifetime(&self) -> Lifetime {
        Lifetime::from_millis(
            self.default_lifetime_ms
                .unwrap_or(DEFAULT_NOTIFICATION_LIFETIME_MS),
        )
    }

    /// Resolved tick interval, clamped to valid bounds.
    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        TickInterval::new(self.tick_interval_ms.unwrap_or(DEFAULT_TICK_INTERVAL_MS))
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_lifetime_ms: default_lifetime_ms(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

/// Data table settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableConfig {
    /// Rows shown on one page.
    #[serde(
        default = "default_rows_per_page",
        skip_serializing_if = "Option::is_none"
    )]
    pub rows_per_page: Option<usize>,
}

impl TableConfig {
    /// Resolved page size, clamped to valid bounds.
    #[must_use]
    pub fn rows_per_page(&self) -> RowsPerPage {
        RowsPerPage::new(self.rows_per_page.unwrap_or(DEFAULT_ROWS_PER_PAGE))
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: default_rows_per_page(),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept before the oldest are evicted.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl DiagnosticsConfig {
    /// Resolved buffer capacity, clamped to valid bounds.
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        BufferCapacity::new(
            self.buffer_capacity
                .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        )
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Component configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Notification queue settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,

    /// Data table settings.
    #[serde(default)]
    pub table: TableConfig,

    /// Diagnostics settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_lifetime_ms() -> Option<i64> {
    Some(DEFAULT_NOTIFICATION_LIFETIME_MS)
}

fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

fn default_rows_per_page() -> Option<usize> {
    Some(DEFAULT_ROWS_PER_PAGE)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring an explicit override first.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If an existing file cannot
/// be loaded, returns the default config and a [`WarningType::ConfigLoad`]
/// warning naming the file and the failure, ready to pass to
/// [`DiagnosticsHandle::log_warning`](crate::diagnostics::DiagnosticsHandle::log_warning).
pub fn load() -> (Config, Option<WarningEvent>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<WarningEvent>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    let warning = WarningEvent::new(WarningType::ConfigLoad, err.to_string());
                    return (Config::default(), Some(warning));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|err| Error::io(path, &err))?;
    toml::from_str(&content).map_err(|err| Error::parse(path, &err))
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| Error::io(parent, &err))?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).map_err(|err| Error::io(path, &err))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let mut config = Config::default();
        config.notifications.default_lifetime_ms = Some(1200);
        config.table.rows_per_page = Some(50);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_take_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[table]\nrows_per_page = 10\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.table.rows_per_page, Some(10));
        assert_eq!(loaded.notifications, NotificationsConfig::default());
        assert_eq!(loaded.diagnostics, DiagnosticsConfig::default());
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Parse { ref path, .. }) if *path == config_path));
    }

    #[test]
    fn load_with_override_falls_back_with_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());

        let warning = warning.expect("broken file should produce a warning");
        assert_eq!(warning.warning_type, WarningType::ConfigLoad);
        assert!(warning.message.contains(CONFIG_FILE));
    }

    #[test]
    fn load_from_missing_path_reports_io_error_with_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("absent.toml");

        let err = load_from_path(&config_path).expect_err("missing file should fail");
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(err.path(), Some(config_path.as_path()));
    }

    #[test]
    fn load_with_override_returns_default_when_file_is_absent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("deep");
        save_with_override(&Config::default(), Some(dir.clone())).expect("save");
        assert!(dir.join(CONFIG_FILE).exists());
    }

    #[test]
    fn resolved_values_are_clamped_and_typed() {
        let mut config = Config::default();
        config.notifications.default_lifetime_ms = Some(0);
        config.notifications.tick_interval_ms = Some(1);
        config.table.rows_per_page = Some(100_000);

        assert!(config.notifications.lifetime().is_persistent());
        assert_eq!(config.notifications.tick_interval().millis(), MIN_TICK_INTERVAL_MS);
        assert_eq!(config.table.rows_per_page().value(), MAX_ROWS_PER_PAGE);
    }

    #[test]
    fn default_config_uses_five_second_lifetime() {
        let config = Config::default();
        assert_eq!(
            config.notifications.lifetime().duration(),
            Some(Duration::from_millis(5000))
        );
        assert_eq!(
            config.diagnostics.buffer_capacity().value(),
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }
}
