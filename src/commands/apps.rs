use crate::libs::messages::Message;
use crate::libs::probe::{ApplicationLister, NativeProbe};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

/// Lists running applications, as offered by the `add` picker.
pub fn cmd() -> Result<()> {
    let names = NativeProbe::new().list_active_application_names();
    if names.is_empty() {
        msg_info!(Message::NoRunningApplications);
        return Ok(());
    }

    msg_print!(Message::RunningApplicationsHeader);
    View::running_applications_table(&names).printstd();
    Ok(())
}
