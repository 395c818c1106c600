//! Add an application to the tracked set.
//!
//! With a process name the application is added directly; without one the
//! user picks from the currently running applications and is prompted for the
//! display name and the daily requirement.

use crate::libs::config::{Config, TrackedApplication, DEFAULT_REQUIRED_MINUTES};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::probe::{suggest_display_name, ApplicationLister, NativeProbe};
use crate::libs::streak::StreakBook;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// OS process name, e.g. `code` or `Code.exe`
    ///
    /// When omitted, a picker over the running applications is shown.
    process: Option<String>,

    /// Display name shown in statistics (derived from the process name if omitted)
    #[arg(long, short)]
    name: Option<String>,

    /// Minutes of active use required per day
    #[arg(long, short)]
    minutes: Option<u32>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let storage = DataStorage::new();
    let interactive = args.process.is_none();

    let process = match args.process {
        Some(process) => process,
        None => pick_process()?,
    };

    let suggested = suggest_display_name(&process);
    let name = match args.name {
        Some(name) => name,
        None if interactive => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDisplayName.to_string())
            .default(suggested)
            .interact_text()?,
        None => suggested,
    };

    let minutes = match args.minutes {
        Some(minutes) => minutes,
        None if interactive => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRequiredMinutes.to_string())
            .default(DEFAULT_REQUIRED_MINUTES)
            .interact_text()?,
        None => DEFAULT_REQUIRED_MINUTES,
    };

    let app = add_application(&storage, &process, &name, minutes)?;
    msg_success!(Message::ApplicationAdded(app.name));
    Ok(())
}

/// Adds the application to the configuration and creates its streak record.
///
/// Re-adding a tracked process under a new display name carries its streak
/// record over to the new name.
pub fn add_application(storage: &DataStorage, process: &str, name: &str, minutes: u32) -> Result<TrackedApplication> {
    let mut config = Config::read_from(storage)?;
    let previous = config.application(process.trim());
    let app = config.add_application(process, name, minutes)?;
    config.save_to(storage)?;

    let mut book = StreakBook::read_from(storage)?;
    let renamed = match previous {
        Some(previous) if previous.name != app.name => book.rename(&previous.name, &app.name),
        _ => false,
    };
    if book.ensure(&app.name) || renamed {
        book.save_to(storage)?;
    }
    Ok(app)
}

fn pick_process() -> Result<String> {
    let names: Vec<String> = NativeProbe::new().list_active_application_names().into_iter().collect();
    if names.is_empty() {
        msg_bail_anyhow!(Message::NoRunningApplications);
    }

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectApplication.to_string())
        .items(&names)
        .interact()?;
    Ok(names[selection].clone())
}
