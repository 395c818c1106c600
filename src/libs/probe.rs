//! Process presence probing and running-application enumeration.
//!
//! The tracker only depends on the [`PresenceProbe`] trait; the `add` picker
//! depends on [`ApplicationLister`]. [`NativeProbe`] is the implementation
//! selected for the current build.

use super::error::StreakError;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use sysinfo::{get_current_pid, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};

/// Answers "is a process with this name running?".
pub trait PresenceProbe: Send {
    /// Takes a fresh process snapshot. Called once per tick before any query.
    fn refresh(&mut self) -> Result<(), StreakError> {
        Ok(())
    }

    fn is_running(&self, process: &str) -> Result<bool, StreakError>;
}

/// Lists the names of applications the user currently has running.
pub trait ApplicationLister {
    fn list_active_application_names(&mut self) -> BTreeSet<String>;
}

/// Probe backed by `sysinfo`. Names are compared case-insensitively.
pub struct SysinfoProbe {
    system: System,
    running: HashSet<String>,
}

pub type NativeProbe = SysinfoProbe;

impl SysinfoProbe {
    pub fn new() -> Self {
        SysinfoProbe {
            system: System::new(),
            running: HashSet::new(),
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl PresenceProbe for SysinfoProbe {
    fn refresh(&mut self) -> Result<(), StreakError> {
        self.system
            .refresh_processes_specifics(ProcessesToUpdate::All, true, ProcessRefreshKind::nothing());
        self.running = self
            .system
            .processes()
            .values()
            .map(|process| process.name().to_string_lossy().to_lowercase())
            .collect();
        Ok(())
    }

    fn is_running(&self, process: &str) -> Result<bool, StreakError> {
        Ok(self.running.contains(&process.to_lowercase()))
    }
}

impl ApplicationLister for SysinfoProbe {
    /// Distinct names of processes owned by the current user, sorted.
    fn list_active_application_names(&mut self) -> BTreeSet<String> {
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_user(UpdateKind::OnlyIfNotSet),
        );
        let own_user = get_current_pid()
            .ok()
            .and_then(|pid| self.system.process(pid))
            .and_then(|process| process.user_id().cloned());

        self.system
            .processes()
            .values()
            .filter(|process| match (&own_user, process.user_id()) {
                (Some(own), Some(user)) => own == user,
                _ => true,
            })
            .map(|process| process.name().to_string_lossy().into_owned())
            .filter(|name| !name.trim().is_empty())
            .collect()
    }
}

/// Suggests a display name for a process: the extension is dropped and each
/// word capitalized, so `"code.exe"` becomes `"Code"`.
pub fn suggest_display_name(process: &str) -> String {
    let base = Path::new(process)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| process.to_string());

    base.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
