//! Configuration loading for the toast store.
//!
//! Strongly-typed settings loaded with `figment` from, in order:
//! 1. A TOML file (`config/toastbus.toml` by default)
//! 2. Environment variables prefixed with `TOASTBUS_`
//!
//! Later sources win, so the environment overrides the file. Every field has
//! a default, which means the crate runs with no configuration file at all.
//! Nested fields use `__` as the environment separator so that field names
//! containing underscores survive the mapping:
//!
//! ```text
//! TOASTBUS_APPLICATION__LOG_LEVEL=debug
//! TOASTBUS_STORE__MAX_VISIBLE=5
//! TOASTBUS_STORE__DISPLAY__WARNING=10s
//! ```
//!
//! Durations are written in human-readable form (`"3s"`, `"500ms"`).
//!
//! # Example
//! ```no_run
//! use toastbus::config::Settings;
//!
//! # fn main() -> Result<(), toastbus::error::ToastError> {
//! let settings = Settings::load()?;
//! settings.validate().map_err(toastbus::error::ToastError::Validation)?;
//! println!("showing at most {} toasts", settings.store.max_visible);
//! # Ok(())
//! # }
//! ```

use crate::error::ToastResult;
use crate::toast::ToastKind;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default configuration file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/toastbus.toml";

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Application-level settings.
    #[serde(default)]
    pub application: ApplicationSettings,
    /// Toast store policy settings.
    #[serde(default)]
    pub store: StoreSettings,
}

/// Application-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSettings {
    /// Application name, used in log output.
    #[serde(default = "default_application_name")]
    pub name: String,
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Display policy for the toast store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Maximum number of toasts displayed at once. Excess toasts queue in
    /// FIFO order and are promoted as slots free up.
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
    /// Per-kind auto-dismiss durations.
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Per-kind auto-dismiss durations.
///
/// A toast's countdown starts when it is displayed, not when it was queued.
/// The `error` duration is optional: when absent (the default), error toasts
/// stay until dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Display duration for success toasts.
    #[serde(default = "default_success_duration", with = "humantime_serde")]
    pub success: Duration,
    /// Display duration for info toasts.
    #[serde(default = "default_info_duration", with = "humantime_serde")]
    pub info: Duration,
    /// Display duration for warning toasts.
    #[serde(default = "default_warning_duration", with = "humantime_serde")]
    pub warning: Duration,
    /// Display duration for error toasts. `None` means sticky.
    #[serde(default, with = "humantime_serde")]
    pub error: Option<Duration>,
}

// Default value functions
fn default_application_name() -> String {
    "toastbus".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_visible() -> usize {
    3
}

fn default_success_duration() -> Duration {
    Duration::from_secs(3)
}

fn default_info_duration() -> Duration {
    Duration::from_secs(3)
}

fn default_warning_duration() -> Duration {
    Duration::from_secs(5)
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            name: default_application_name(),
            log_level: default_log_level(),
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
            display: DisplaySettings::default(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            success: default_success_duration(),
            info: default_info_duration(),
            warning: default_warning_duration(),
            error: None,
        }
    }
}

impl DisplaySettings {
    /// Auto-dismiss duration for a toast of the given kind.
    ///
    /// Returns `None` when toasts of this kind stay until dismissed.
    pub fn auto_dismiss(&self, kind: ToastKind) -> Option<Duration> {
        match kind {
            ToastKind::Success => Some(self.success),
            ToastKind::Info => Some(self.info),
            ToastKind::Warning => Some(self.warning),
            ToastKind::Error => self.error,
        }
    }
}

impl Settings {
    /// Load settings from the default file location and the environment.
    ///
    /// Missing files are not an error; defaults fill every gap.
    pub fn load() -> ToastResult<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load settings from a specific file path and the environment.
    pub fn load_from<P: AsRef<Path>>(path: P) -> ToastResult<Self> {
        let settings = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("TOASTBUS_").split("__"))
            .extract()?;
        Ok(settings)
    }

    /// Validate settings after loading.
    pub fn validate(&self) -> Result<(), String> {
        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.application.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.application.log_level,
                valid_levels.join(", ")
            ));
        }

        // The store needs at least one display slot
        if self.store.max_visible == 0 {
            return Err("Invalid max_visible 0. Must be at least 1".to_string());
        }

        // A zero duration would remove a toast in the same tick it appears
        for kind in ToastKind::ALL {
            if self.store.display.auto_dismiss(kind) == Some(Duration::ZERO) {
                return Err(format!(
                    "Invalid display duration for '{kind}'. Must be non-zero"
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.store.max_visible, 3);
        assert_eq!(settings.application.log_level, "info");
    }

    #[test]
    fn default_durations_match_display_policy() {
        let display = DisplaySettings::default();
        assert_eq!(
            display.auto_dismiss(ToastKind::Success),
            Some(Duration::from_secs(3))
        );
        assert_eq!(
            display.auto_dismiss(ToastKind::Info),
            Some(Duration::from_secs(3))
        );
        assert_eq!(
            display.auto_dismiss(ToastKind::Warning),
            Some(Duration::from_secs(5))
        );
        assert_eq!(display.auto_dismiss(ToastKind::Error), None);
    }

    #[test]
    fn invalid_log_level_fails_validation() {
        let mut settings = Settings::default();
        settings.application.log_level = "verbose".to_string();

        let err = settings.validate().unwrap_err();
        assert!(err.contains("Invalid log_level 'verbose'"));
    }

    #[test]
    fn zero_max_visible_fails_validation() {
        let mut settings = Settings::default();
        settings.store.max_visible = 0;

        assert!(settings.validate().is_err());
    }

    #[test]
    fn zero_duration_fails_validation() {
        let mut settings = Settings::default();
        settings.store.display.warning = Duration::ZERO;

        let err = settings.validate().unwrap_err();
        assert!(err.contains("warning"));
    }

    #[test]
    fn configured_error_duration_overrides_sticky_default() {
        let mut settings = Settings::default();
        settings.store.display.error = Some(Duration::from_secs(30));

        assert_eq!(
            settings.store.display.auto_dismiss(ToastKind::Error),
            Some(Duration::from_secs(30))
        );
        assert!(settings.validate().is_ok());
    }
}
