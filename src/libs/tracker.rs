//! The tracking loop.
//!
//! Once per check interval the tracker reloads the configuration, asks the
//! activity detector whether the user is active, probes every tracked process,
//! feeds the results to the [`StreakBook`] and persists the book when it
//! changed. Ticks run on a single task and therefore never overlap.
//!
//! A failed probe only affects that application for that tick. A failure to
//! persist the book halts tracking instead of retrying.

use super::activity::ActivityDetector;
use super::config::{Config, CONFIG_FILE_NAME};
use super::data_storage::DataStorage;
use super::error::StreakError;
use super::probe::PresenceProbe;
use super::streak::{Observation, StreakBook};
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::future::Future;
use tokio::time::{self, Duration};

pub struct Tracker {
    storage: DataStorage,
    config: Config,
    book: StreakBook,
    probe: Box<dyn PresenceProbe>,
    detector: ActivityDetector,
    listen_input: bool,
}

impl Tracker {
    /// Loads configuration and streak data from `storage`.
    pub fn new(storage: DataStorage, probe: Box<dyn PresenceProbe>) -> Result<Self> {
        let config = Config::read_from(&storage)?;
        let book = StreakBook::read_from(&storage)?;
        let detector = ActivityDetector::new(config.inactivity_timeout);
        Ok(Tracker {
            storage,
            config,
            book,
            probe,
            detector,
            listen_input: true,
        })
    }

    /// Runs without attaching to OS input events; activity then only changes
    /// through the detector's own API.
    pub fn without_input_listener(mut self) -> Self {
        self.listen_input = false;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn book(&self) -> &StreakBook {
        &self.book
    }

    pub fn detector(&self) -> &ActivityDetector {
        &self.detector
    }

    /// Performs one tick for `today`. Returns whether the streak data changed
    /// (and was written).
    ///
    /// # Errors
    ///
    /// Returns [`StreakError::Driver`] when the streak data cannot be saved.
    pub fn tick(&mut self, today: NaiveDate) -> Result<bool> {
        let renamed = self.reload_config();
        self.detector.configure(self.config.inactivity_timeout);
        let user_active = self.detector.is_user_active();

        let apps = self.config.tracked();
        let probe_ready = match self.probe.refresh() {
            Ok(()) => true,
            Err(e) => {
                msg_warning!(Message::ProbeFailed {
                    process: "*".to_string(),
                    reason: e.to_string(),
                });
                false
            }
        };

        let observations: Vec<Observation<'_>> = apps
            .iter()
            .map(|app| {
                let is_running = probe_ready
                    && self.probe.is_running(&app.process).unwrap_or_else(|e| {
                        msg_warning!(Message::ProbeFailed {
                            process: app.process.clone(),
                            reason: e.to_string(),
                        });
                        false
                    });
                Observation { app, is_running }
            })
            .collect();

        tracing::debug!(apps = observations.len(), user_active, %today, "tracker tick");

        let pruned = self.book.retain_tracked(&self.config);
        let ticked = self.book.tick(today, self.config.check_interval as f64, &observations, user_active);

        let changed = renamed || pruned || ticked;
        if changed {
            self.book
                .save_to(&self.storage)
                .map_err(|e| StreakError::Driver(Message::StreakDataSaveFailed(e.to_string()).to_string()))?;
        }
        Ok(changed)
    }

    /// Runs the tracking loop until `shutdown` resolves or a tick fails.
    ///
    /// The activity detector is started first and is always stopped (and
    /// awaited) before returning.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        if self.listen_input {
            self.detector.start();
        } else {
            self.detector.start_polling();
        }

        msg_info!(Message::TrackerStarted {
            applications: self.config.applications.len(),
            check_interval: self.config.check_interval,
            inactivity_timeout: self.config.inactivity_timeout,
        });

        tokio::pin!(shutdown);
        let result = loop {
            let interval = Duration::from_secs(self.config.check_interval);
            tokio::select! {
                _ = &mut shutdown => {
                    msg_info!(Message::TrackerShuttingDown);
                    break Ok(());
                }
                _ = time::sleep(interval) => {
                    if let Err(e) = self.tick(Local::now().date_naive()) {
                        break Err(e);
                    }
                }
            }
        };

        self.detector.stop().await;
        match &result {
            Ok(()) => msg_info!(Message::TrackerStopped),
            Err(e) => msg_error!(Message::TrackerHalted(e.to_string())),
        }
        result
    }

    // Picks up applications and settings changed by other commands while the
    // tracker runs. A missing or broken document keeps the current config.
    // Returns whether any streak record was moved to a new display name.
    fn reload_config(&mut self) -> bool {
        let path = match self.storage.get_path(CONFIG_FILE_NAME) {
            Ok(path) => path,
            Err(e) => {
                msg_warning!(Message::ConfigReloadFailed(e.to_string()));
                return false;
            }
        };
        if !path.exists() {
            return false;
        }
        match Config::load(&path) {
            Ok(config) => {
                let renamed = self.follow_renames(&config);
                self.config = config;
                renamed
            }
            Err(e) => {
                msg_warning!(Message::ConfigReloadFailed(e.to_string()));
                false
            }
        }
    }

    // A process re-added under a new display name keeps its streak record.
    // Records are lifted out first so that swapped names do not clobber.
    fn follow_renames(&mut self, next: &Config) -> bool {
        let moved: Vec<_> = self
            .config
            .applications
            .iter()
            .filter_map(|(process, previous)| {
                let current = next.applications.get(process)?;
                if current.name == previous.name {
                    return None;
                }
                let record = self.book.remove(&previous.name)?;
                tracing::info!(%process, from = %previous.name, to = %current.name, "streak record renamed");
                Some((current.name.clone(), record))
            })
            .collect();

        let renamed = !moved.is_empty();
        for (name, record) in moved {
            self.book.insert(name, record);
        }
        renamed
    }
}
