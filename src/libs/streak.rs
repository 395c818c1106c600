//! Streak accounting.
//!
//! Converts periodic "is the application running and is the user active"
//! observations into per-day usage totals and streak transitions. The engine
//! performs no I/O: the tracker probes processes and persists the
//! [`StreakBook`] around each [`StreakBook::tick`].
//!
//! ## Rules applied on every tick, per application
//!
//! 1. A missing record is created with zero counters.
//! 2. If the record's last usage date is not today, today's minutes reset to 0.
//! 3. A gap of more than one day since the last usage date (as it was before
//!    this tick) resets the current streak to 0.
//! 4. If the application is running and the user is active, the tick's
//!    elapsed time is credited to today and today becomes the last usage date.
//! 5. Once today's minutes reach the requirement, the current streak is
//!    incremented, at most once per calendar day.
//!
//! A tick's whole interval is credited to the date of the tick, even when the
//! interval started before midnight.
//!
//! ## Persistence
//!
//! The book is stored as `streak_data.json`, a mapping from display name to
//! [`StreakRecord`]. Dates use `YYYY-MM-DD`; absent dates are `null`.

use super::config::{Config, TrackedApplication};
use super::data_storage::DataStorage;
use super::error::StreakError;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_print, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::Path;

/// Streak data file name inside the data directory.
pub const STREAK_DATA_FILE_NAME: &str = "streak_data.json";

/// Usage and streak state of one application.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StreakRecord {
    /// Consecutive qualifying days.
    #[serde(default)]
    pub current_streak: u32,

    /// Highest `current_streak` ever reached.
    #[serde(default)]
    pub longest_streak: u32,

    /// Last date on which any usage was credited.
    #[serde(default)]
    pub last_used_date: Option<NaiveDate>,

    /// Minutes credited on `last_used_date`.
    #[serde(default, rename = "today_usage")]
    pub today_usage_minutes: f64,

    /// Date of the last streak increment.
    #[serde(default)]
    pub streak_date: Option<NaiveDate>,
}

impl StreakRecord {
    /// Minutes credited on `date`; zero unless `date` is the last usage date.
    pub fn usage_on(&self, date: NaiveDate) -> f64 {
        if self.last_used_date == Some(date) {
            self.today_usage_minutes
        } else {
            0.0
        }
    }

    /// Whole days between the last usage date and `today`, if there is one.
    pub fn days_since_last_use(&self, today: NaiveDate) -> Option<i64> {
        self.last_used_date.map(|last| (today - last).num_days())
    }

    /// Applies one tick to this record.
    ///
    /// Returns the streak transition the tick caused, if any.
    fn apply(&mut self, today: NaiveDate, elapsed_minutes: f64, required_minutes: f64, counted: bool) -> Option<Transition> {
        let mut transition = None;

        if self.last_used_date.is_some_and(|last| last != today) {
            self.today_usage_minutes = 0.0;
        }

        // Gap check uses the last usage date from before this tick.
        if let Some(gap_days) = self.days_since_last_use(today) {
            if gap_days > 1 && self.current_streak > 0 {
                self.current_streak = 0;
                transition = Some(Transition::Broken { gap_days });
            }
        }

        if counted {
            self.today_usage_minutes += elapsed_minutes;
            self.last_used_date = Some(today);
        }

        if self.today_usage_minutes >= required_minutes && self.streak_date != Some(today) {
            self.current_streak += 1;
            self.streak_date = Some(today);
            self.longest_streak = self.longest_streak.max(self.current_streak);
            transition = Some(Transition::Incremented { streak: self.current_streak });
        }

        transition
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Transition {
    Incremented { streak: u32 },
    Broken { gap_days: i64 },
}

/// One application's sample for a tick.
#[derive(Debug, Clone)]
pub struct Observation<'a> {
    pub app: &'a TrackedApplication,
    pub is_running: bool,
}

/// Read-only view of one tracked application for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct StreakSnapshot {
    pub name: String,
    pub process: String,
    pub min_minutes: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub today_usage_minutes: f64,
    pub streak_date: Option<NaiveDate>,
}

impl StreakSnapshot {
    /// Today's progress toward the requirement, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        (self.today_usage_minutes / self.min_minutes as f64 * 100.0).min(100.0)
    }

    pub fn requirement_met(&self) -> bool {
        self.today_usage_minutes >= self.min_minutes as f64
    }
}

/// All streak records, keyed by application display name.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct StreakBook {
    records: BTreeMap<String, StreakRecord>,
}

impl StreakBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the book at `path`, writing an empty one when the file is absent.
    pub fn load(path: &Path) -> Result<StreakBook, StreakError> {
        if !path.exists() {
            let book = StreakBook::new();
            book.write(path).map_err(|e| StreakError::configuration(path, e))?;
            msg_print!(Message::StreakDataCreated(path.display().to_string()));
            return Ok(book);
        }

        let data = fs::read_to_string(path).map_err(|e| StreakError::configuration(path, e))?;
        serde_json::from_str(&data).map_err(|e| StreakError::configuration(path, e))
    }

    /// Reads the book from `storage`, starting empty when the file is malformed.
    pub fn read_from(storage: &DataStorage) -> Result<StreakBook> {
        let path = storage.get_path(STREAK_DATA_FILE_NAME)?;
        match Self::load(&path) {
            Ok(book) => Ok(book),
            Err(e) => {
                msg_warning!(Message::StreakDataRecovered(e.to_string()));
                Ok(StreakBook::new())
            }
        }
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let path = storage.get_path(STREAK_DATA_FILE_NAME)?;
        self.write(&path)
    }

    /// Rewrites the whole document at `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(&file, &self)?;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&StreakRecord> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StreakRecord)> {
        self.records.iter()
    }

    /// Creates a zero record for `name` unless one exists. Returns whether a
    /// record was created.
    pub fn ensure(&mut self, name: &str) -> bool {
        if self.records.contains_key(name) {
            return false;
        }
        self.records.insert(name.to_string(), StreakRecord::default());
        true
    }

    /// Moves the record stored under `from` to `to`. Returns whether a record moved.
    pub fn rename(&mut self, from: &str, to: &str) -> bool {
        match self.records.remove(from) {
            Some(record) => {
                self.records.insert(to.to_string(), record);
                true
            }
            None => false,
        }
    }

    /// Stores `record` under `name`, replacing any existing record.
    pub fn insert(&mut self, name: String, record: StreakRecord) {
        self.records.insert(name, record);
    }

    pub fn remove(&mut self, name: &str) -> Option<StreakRecord> {
        self.records.remove(name)
    }

    /// Drops records of applications that are no longer configured. Returns
    /// whether anything was dropped.
    pub fn retain_tracked(&mut self, config: &Config) -> bool {
        let before = self.records.len();
        self.records.retain(|name, _| config.applications.values().any(|app| &app.name == name));
        before != self.records.len()
    }

    /// Applies one tick to every observed application.
    ///
    /// `elapsed_secs` is credited in full to `today` for each application that
    /// is running while `user_active` is true. Returns whether any record
    /// changed.
    ///
    /// # Panics
    ///
    /// Panics if `elapsed_secs` is negative or not finite.
    pub fn tick(&mut self, today: NaiveDate, elapsed_secs: f64, observations: &[Observation<'_>], user_active: bool) -> bool {
        assert!(
            elapsed_secs.is_finite() && elapsed_secs >= 0.0,
            "elapsed seconds must be a non-negative number, got {}",
            elapsed_secs
        );
        let elapsed_minutes = elapsed_secs / 60.0;
        let mut changed = false;

        for observation in observations {
            let app = observation.app;
            let created = !self.records.contains_key(&app.name);
            let record = self.records.entry(app.name.clone()).or_default();
            let before = record.clone();

            let counted = observation.is_running && user_active;
            let transition = record.apply(today, elapsed_minutes, app.min_minutes as f64, counted);

            msg_debug!(format!(
                "tick {}: running={} active={} usage={:.1}/{} streak={}",
                app.name, observation.is_running, user_active, record.today_usage_minutes, app.min_minutes, record.current_streak
            ));
            match transition {
                Some(Transition::Incremented { streak }) => {
                    tracing::info!(app = %app.name, streak, "streak incremented");
                    msg_debug!(Message::StreakIncremented {
                        name: app.name.clone(),
                        streak,
                    });
                }
                Some(Transition::Broken { gap_days }) => {
                    tracing::info!(app = %app.name, gap_days, "streak broken");
                    msg_debug!(Message::StreakBroken {
                        name: app.name.clone(),
                        gap_days,
                    });
                }
                None => {}
            }

            changed |= created || *record != before;
        }

        changed
    }

    /// Presentation rows for every configured application, in config order.
    pub fn snapshot(&self, config: &Config, today: NaiveDate) -> Vec<StreakSnapshot> {
        config
            .tracked()
            .into_iter()
            .map(|app| {
                let record = self.records.get(&app.name).cloned().unwrap_or_default();
                StreakSnapshot {
                    today_usage_minutes: record.usage_on(today),
                    current_streak: record.current_streak,
                    longest_streak: record.longest_streak,
                    streak_date: record.streak_date,
                    min_minutes: app.min_minutes,
                    name: app.name,
                    process: app.process,
                }
            })
            .collect()
    }
}
