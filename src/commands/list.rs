use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;

/// Prints the tracked applications.
pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let apps = config.tracked();
    if apps.is_empty() {
        msg_info!(Message::NoApplicationsTracked);
        return Ok(());
    }

    View::applications_table(&apps).printstd();
    Ok(())
}
