//! Streak statistics for every tracked application.
//!
//! Read-only: usage recorded on an earlier date is shown as zero for today,
//! but nothing is written back until the tracker's next tick.

use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::streak::StreakBook;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let storage = DataStorage::new();
    let config = Config::read_from(&storage)?;
    if config.applications.is_empty() {
        msg_info!(Message::NoApplicationsTracked);
        return Ok(());
    }

    let today = Local::now().date_naive();
    let book = StreakBook::read_from(&storage)?;
    let snapshots = book.snapshot(&config, today);

    msg_print!(Message::StatsHeader(today.format("%Y-%m-%d").to_string()), true);
    View::stats_table(&snapshots).printstd();
    Ok(())
}
