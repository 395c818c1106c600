//! Remove a tracked application together with its streak record.

use crate::libs::config::{Config, TrackedApplication};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::streak::StreakBook;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Process name of the tracked application
    process: String,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

pub fn cmd(args: RemoveArgs) -> Result<()> {
    let storage = DataStorage::new();
    let config = Config::read_from(&storage)?;

    let Some(app) = config.application(&args.process) else {
        msg_warning!(Message::ApplicationNotTracked(args.process));
        return Ok(());
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmRemoveApplication(app.name.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::ApplicationRemoveCancelled);
            return Ok(());
        }
    }

    if let Some(removed) = remove_application(&storage, &app.process)? {
        msg_success!(Message::ApplicationRemoved(removed.name));
    }
    Ok(())
}

/// Removes the application from the configuration and deletes its streak record.
pub fn remove_application(storage: &DataStorage, process: &str) -> Result<Option<TrackedApplication>> {
    let mut config = Config::read_from(storage)?;
    let Some(removed) = config.remove_application(process) else {
        return Ok(None);
    };
    config.save_to(storage)?;

    let mut book = StreakBook::read_from(storage)?;
    if book.remove(&removed.name).is_some() {
        book.save_to(storage)?;
    }
    Ok(Some(removed))
}
