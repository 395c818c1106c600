/// Every user-facing message produced by streakr.
///
/// Text lives in `display.rs`; variants carry only the data that needs to be
/// interpolated.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigCreated(String),                   // path
    ConfigRecovered(String),                 // reason
    ConfigReloadFailed(String),              // reason
    ConfigModuleSettings,
    SettingsUpdated { check_interval: u64, inactivity_timeout: u64 },
    SettingsHeader,
    PromptCheckInterval,
    PromptInactivityTimeout,

    // === APPLICATION MESSAGES ===
    ApplicationAdded(String),                // display name
    ApplicationRemoved(String),              // display name
    ApplicationNotTracked(String),           // process
    ApplicationRemoveCancelled,
    ConfirmRemoveApplication(String),        // display name
    NoApplicationsTracked,
    NoRunningApplications,
    RunningApplicationsHeader,
    PromptSelectApplication,
    PromptDisplayName,
    PromptRequiredMinutes,

    // === STREAK MESSAGES ===
    StreakDataCreated(String),               // path
    StreakDataRecovered(String),             // reason
    StatsHeader(String),                     // date
    StreakIncremented { name: String, streak: u32 },
    StreakBroken { name: String, gap_days: i64 },

    // === VALIDATION MESSAGES ===
    InvalidRequiredMinutes,
    InvalidCheckInterval,
    InvalidInactivityTimeout,
    EmptyProcessName,
    EmptyDisplayName,
    DisplayNameInUse { name: String, process: String },

    // === TRACKER MESSAGES ===
    TrackerStarted { applications: usize, check_interval: u64, inactivity_timeout: u64 },
    TrackerStopped,
    TrackerShuttingDown,
    TrackerHalted(String),                   // reason
    TrackerTaskPanicked(String),
    ProbeFailed { process: String, reason: String },
    StreakDataSaveFailed(String),

    // === ACTIVITY MESSAGES ===
    ActivityListenerFailed(String),
    ActivityBecameIdle,
    ActivityResumed,

    // === SIGNAL MESSAGES ===
    ReceivedSigterm,
    ReceivedSigint,
    ReceivedCtrlC,
    CtrlCListenFailed(String),
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,
    SignalHandlingNotSupported,
}
