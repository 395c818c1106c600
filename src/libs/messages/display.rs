//! Display implementation for streakr messages.
//!
//! All message text is defined here so wording stays consistent between the
//! interactive commands and the background tracker.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigCreated(path) => format!("Created default configuration at {}", path),
            Message::ConfigRecovered(reason) => format!("Configuration could not be read ({}), using defaults", reason),
            Message::ConfigReloadFailed(reason) => format!("Failed to reload configuration, keeping previous settings: {}", reason),
            Message::ConfigModuleSettings => "Tracking settings".to_string(),
            Message::SettingsUpdated {
                check_interval,
                inactivity_timeout,
            } => format!(
                "Settings saved: check interval {}s, inactivity timeout {}s",
                check_interval, inactivity_timeout
            ),
            Message::SettingsHeader => "Current settings:".to_string(),
            Message::PromptCheckInterval => "Check interval (seconds)".to_string(),
            Message::PromptInactivityTimeout => "Inactivity timeout (seconds)".to_string(),

            // === APPLICATION MESSAGES ===
            Message::ApplicationAdded(name) => format!("Added {} to tracked applications.", name),
            Message::ApplicationRemoved(name) => format!("Removed {} from tracked applications.", name),
            Message::ApplicationNotTracked(process) => format!("Process '{}' is not tracked.", process),
            Message::ApplicationRemoveCancelled => "Removal cancelled.".to_string(),
            Message::ConfirmRemoveApplication(name) => format!("Remove {} and its streak history?", name),
            Message::NoApplicationsTracked => "No applications are tracked yet. Use 'streakr add' first.".to_string(),
            Message::NoRunningApplications => "No running applications found.".to_string(),
            Message::RunningApplicationsHeader => "Running applications:".to_string(),
            Message::PromptSelectApplication => "Select process".to_string(),
            Message::PromptDisplayName => "Display name".to_string(),
            Message::PromptRequiredMinutes => "Minutes required per day".to_string(),

            // === STREAK MESSAGES ===
            Message::StreakDataCreated(path) => format!("Created streak data file at {}", path),
            Message::StreakDataRecovered(reason) => format!("Streak data could not be read ({}), starting empty", reason),
            Message::StatsHeader(date) => format!("Date: {}", date),
            Message::StreakIncremented { name, streak } => format!("{} streak is now {} day(s)", name, streak),
            Message::StreakBroken { name, gap_days } => format!("{} streak reset after {} day(s) without use", name, gap_days),

            // === VALIDATION MESSAGES ===
            Message::InvalidRequiredMinutes => "Minutes required must be a positive number.".to_string(),
            Message::InvalidCheckInterval => "Check interval must be at least 1 second.".to_string(),
            Message::InvalidInactivityTimeout => "Inactivity timeout must be at least 1 second.".to_string(),
            Message::EmptyProcessName => "Process name must not be empty.".to_string(),
            Message::EmptyDisplayName => "Display name must not be empty.".to_string(),
            Message::DisplayNameInUse { name, process } => {
                format!("Display name '{}' is already used by process '{}'.", name, process)
            }

            // === TRACKER MESSAGES ===
            Message::TrackerStarted {
                applications,
                check_interval,
                inactivity_timeout,
            } => format!(
                "Tracking {} application(s) every {}s, inactivity timeout {}s. Press Ctrl-C to stop.",
                applications, check_interval, inactivity_timeout
            ),
            Message::TrackerStopped => "Tracking stopped".to_string(),
            Message::TrackerShuttingDown => "Shutting down tracker...".to_string(),
            Message::TrackerHalted(reason) => format!("Tracking halted: {}", reason),
            Message::TrackerTaskPanicked(error) => format!("Tracker task panicked: {}", error),
            Message::ProbeFailed { process, reason } => format!("Could not check process '{}': {}", process, reason),
            Message::StreakDataSaveFailed(error) => format!("Failed to save streak data: {}", error),

            // === ACTIVITY MESSAGES ===
            Message::ActivityListenerFailed(error) => format!("Failed to listen for input events: {}. Retrying in 1 second...", error),
            Message::ActivityBecameIdle => "No input detected, usage is not counted until activity resumes".to_string(),
            Message::ActivityResumed => "Input detected, counting usage again".to_string(),

            // === SIGNAL MESSAGES ===
            Message::ReceivedSigterm => "Received SIGTERM, stopping tracker".to_string(),
            Message::ReceivedSigint => "Received SIGINT, stopping tracker".to_string(),
            Message::ReceivedCtrlC => "Received Ctrl-C, stopping tracker".to_string(),
            Message::CtrlCListenFailed(error) => format!("Failed to listen for Ctrl-C: {}", error),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),
            Message::SignalHandlingNotSupported => "Signal handling is not supported on this platform".to_string(),
        };
        write!(f, "{}", text)
    }
}
