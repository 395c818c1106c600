//! Show or change the tracker settings.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Seconds between two usage checks
    #[arg(long)]
    check_interval: Option<u64>,

    /// Seconds without keyboard or mouse input before usage stops counting
    #[arg(long)]
    inactivity_timeout: Option<u64>,
}

pub fn cmd(args: SettingsArgs) -> Result<()> {
    let mut config = Config::read()?;

    if args.check_interval.is_none() && args.inactivity_timeout.is_none() {
        msg_print!(Message::SettingsHeader);
        View::settings_table(&config).printstd();
        return Ok(());
    }

    let check_interval = args.check_interval.unwrap_or(config.check_interval);
    let inactivity_timeout = args.inactivity_timeout.unwrap_or(config.inactivity_timeout);
    config.update_settings(check_interval, inactivity_timeout)?;
    config.save()?;

    msg_success!(Message::SettingsUpdated {
        check_interval,
        inactivity_timeout,
    });
    Ok(())
}
