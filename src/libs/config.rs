//! Configuration management for streakr.
//!
//! The configuration document lists the tracked applications together with the
//! two tracker settings. It is stored as pretty-printed JSON in the per-user
//! data directory (see [`DataStorage`]):
//!
//! ```json
//! {
//!   "applications": {
//!     "code": { "name": "Code", "min_minutes": 30 }
//!   },
//!   "check_interval": 60,
//!   "inactivity_timeout": 120
//! }
//! ```
//!
//! ## Error Handling
//!
//! - **Missing file**: a default document is written and returned
//! - **Malformed file**: [`Config::load`] reports [`StreakError::Configuration`];
//!   [`Config::read`] and [`Config::read_from`] recover with defaults
//! - **Invalid user input**: rejected with [`StreakError::Validation`] before it
//!   reaches the document
//!
//! ## Usage
//!
//! ```rust,no_run
//! use streakr::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.add_application("code", "Code", 30)?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::error::StreakError;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::Path;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Seconds between two tracker ticks.
pub const DEFAULT_CHECK_INTERVAL: u64 = 60;

/// Seconds without keyboard or mouse input before the user counts as inactive.
pub const DEFAULT_INACTIVITY_TIMEOUT: u64 = 120;

/// Suggested daily requirement for newly added applications.
pub const DEFAULT_REQUIRED_MINUTES: u32 = 15;

/// Per-application settings as stored in the document, keyed by process name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Display name; also the key of the application's streak record.
    pub name: String,
    /// Minutes of active use required for the day to count toward the streak.
    pub min_minutes: u32,
}

/// A tracked application with its process identifier attached.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedApplication {
    pub process: String,
    pub name: String,
    pub min_minutes: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Tracked applications keyed by OS process name.
    #[serde(default)]
    pub applications: BTreeMap<String, AppConfig>,

    /// Seconds between two tracker ticks. Each tick credits this many seconds
    /// of usage to every running application while the user is active.
    #[serde(default = "default_check_interval")]
    pub check_interval: u64,

    /// Seconds without input after which the user is considered inactive.
    #[serde(default = "default_inactivity_timeout")]
    pub inactivity_timeout: u64,
}

fn default_check_interval() -> u64 {
    DEFAULT_CHECK_INTERVAL
}

fn default_inactivity_timeout() -> u64 {
    DEFAULT_INACTIVITY_TIMEOUT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            applications: BTreeMap::new(),
            check_interval: DEFAULT_CHECK_INTERVAL,
            inactivity_timeout: DEFAULT_INACTIVITY_TIMEOUT,
        }
    }
}

impl Config {
    /// Loads the configuration document at `path`.
    ///
    /// When the file does not exist a default document is written there and
    /// returned. A document that cannot be read, parsed, or that carries
    /// invalid values yields [`StreakError::Configuration`].
    pub fn load(path: &Path) -> Result<Config, StreakError> {
        if !path.exists() {
            let config = Config::default();
            config.write(path).map_err(|e| StreakError::configuration(path, e))?;
            msg_print!(Message::ConfigCreated(path.display().to_string()));
            return Ok(config);
        }

        let config_str = fs::read_to_string(path).map_err(|e| StreakError::configuration(path, e))?;
        let config: Config = serde_json::from_str(&config_str).map_err(|e| StreakError::configuration(path, e))?;
        config.validate().map_err(|e| StreakError::configuration(path, e))?;
        Ok(config)
    }

    /// Reads the configuration from the default data directory, falling back
    /// to defaults when the document is malformed.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads the configuration from `storage`, falling back to defaults when
    /// the document is malformed.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let path = storage.get_path(CONFIG_FILE_NAME)?;
        match Self::load(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                msg_warning!(Message::ConfigRecovered(e.to_string()));
                Ok(Config::default())
            }
        }
    }

    /// Saves the configuration to the default data directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let path = storage.get_path(CONFIG_FILE_NAME)?;
        self.write(&path)
    }

    /// Rewrites the whole document at `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Checks every value a user could have edited by hand.
    pub fn validate(&self) -> Result<(), StreakError> {
        validate_check_interval(self.check_interval)?;
        validate_inactivity_timeout(self.inactivity_timeout)?;
        let mut owners: BTreeMap<&str, &str> = BTreeMap::new();
        for (process, app) in &self.applications {
            validate_required_minutes(app.min_minutes)?;
            // Display names key the streak records.
            if let Some(owner) = owners.insert(app.name.as_str(), process.as_str()) {
                return Err(StreakError::Validation(Message::DisplayNameInUse {
                    name: app.name.clone(),
                    process: owner.to_string(),
                }));
            }
        }
        Ok(())
    }

    /// All tracked applications, ordered by process name.
    pub fn tracked(&self) -> Vec<TrackedApplication> {
        self.applications
            .iter()
            .map(|(process, app)| TrackedApplication {
                process: process.clone(),
                name: app.name.clone(),
                min_minutes: app.min_minutes,
            })
            .collect()
    }

    pub fn application(&self, process: &str) -> Option<TrackedApplication> {
        self.applications.get(process).map(|app| TrackedApplication {
            process: process.to_string(),
            name: app.name.clone(),
            min_minutes: app.min_minutes,
        })
    }

    /// Looks up the configured application whose display name is `name`.
    pub fn application_by_name(&self, name: &str) -> Option<TrackedApplication> {
        self.applications
            .iter()
            .find(|(_, app)| app.name == name)
            .and_then(|(process, _)| self.application(process))
    }

    /// Adds `process` to the tracked applications, or updates it when it is
    /// already tracked.
    ///
    /// # Errors
    ///
    /// Returns [`StreakError::Validation`] when a field is empty, when
    /// `min_minutes` is zero, or when `name` already belongs to another process
    /// (display names key the streak records).
    pub fn add_application(&mut self, process: &str, name: &str, min_minutes: u32) -> Result<TrackedApplication, StreakError> {
        let process = process.trim();
        let name = name.trim();
        if process.is_empty() {
            return Err(StreakError::Validation(Message::EmptyProcessName));
        }
        if name.is_empty() {
            return Err(StreakError::Validation(Message::EmptyDisplayName));
        }
        validate_required_minutes(min_minutes)?;

        if let Some((other, _)) = self.applications.iter().find(|(other, app)| app.name == name && other.as_str() != process) {
            return Err(StreakError::Validation(Message::DisplayNameInUse {
                name: name.to_string(),
                process: other.clone(),
            }));
        }

        self.applications.insert(
            process.to_string(),
            AppConfig {
                name: name.to_string(),
                min_minutes,
            },
        );
        Ok(TrackedApplication {
            process: process.to_string(),
            name: name.to_string(),
            min_minutes,
        })
    }

    /// Stops tracking `process`, returning what was removed.
    pub fn remove_application(&mut self, process: &str) -> Option<TrackedApplication> {
        self.applications.remove(process).map(|app| TrackedApplication {
            process: process.to_string(),
            name: app.name,
            min_minutes: app.min_minutes,
        })
    }

    /// Replaces both tracker settings after validating them.
    pub fn update_settings(&mut self, check_interval: u64, inactivity_timeout: u64) -> Result<(), StreakError> {
        validate_check_interval(check_interval)?;
        validate_inactivity_timeout(inactivity_timeout)?;
        self.check_interval = check_interval;
        self.inactivity_timeout = inactivity_timeout;
        Ok(())
    }

    /// Interactive settings wizard.
    ///
    /// Starts from the stored configuration (or defaults if it cannot be read)
    /// and prompts for the check interval and the inactivity timeout. Tracked
    /// applications are left untouched; the caller saves the result.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigModuleSettings);
        let check_interval: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCheckInterval.to_string())
            .default(config.check_interval)
            .validate_with(|value: &u64| validate_check_interval(*value).map_err(|e| e.to_string()))
            .interact_text()?;

        let inactivity_timeout: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptInactivityTimeout.to_string())
            .default(config.inactivity_timeout)
            .validate_with(|value: &u64| validate_inactivity_timeout(*value).map_err(|e| e.to_string()))
            .interact_text()?;

        config.update_settings(check_interval, inactivity_timeout)?;
        Ok(config)
    }
}

pub fn validate_required_minutes(min_minutes: u32) -> Result<(), StreakError> {
    if min_minutes == 0 {
        return Err(StreakError::Validation(Message::InvalidRequiredMinutes));
    }
    Ok(())
}

pub fn validate_check_interval(check_interval: u64) -> Result<(), StreakError> {
    if check_interval == 0 {
        return Err(StreakError::Validation(Message::InvalidCheckInterval));
    }
    Ok(())
}

pub fn validate_inactivity_timeout(inactivity_timeout: u64) -> Result<(), StreakError> {
    if inactivity_timeout == 0 {
        return Err(StreakError::Validation(Message::InvalidInactivityTimeout));
    }
    Ok(())
}
