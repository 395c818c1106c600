use super::config::{Config, TrackedApplication};
use super::streak::StreakSnapshot;
use prettytable::{row, Table};
use std::collections::BTreeSet;

pub struct View {}

impl View {
    pub fn applications_table(apps: &[TrackedApplication]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["NAME", "PROCESS", "MINUTES REQUIRED"]);
        for app in apps {
            table.add_row(row![app.name, app.process, app.min_minutes]);
        }
        table
    }

    pub fn stats_table(snapshots: &[StreakSnapshot]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["NAME", "CURRENT", "LONGEST", "TODAY", "PROGRESS", "", "LAST STREAK UPDATE"]);
        for snapshot in snapshots {
            let status = if snapshot.requirement_met() { "✓" } else { "..." };
            let last_update = snapshot.streak_date.map(|date| date.format("%Y-%m-%d").to_string()).unwrap_or_default();
            table.add_row(row![
                snapshot.name,
                format!("{} days", snapshot.current_streak),
                format!("{} days", snapshot.longest_streak),
                format_usage(snapshot.today_usage_minutes, snapshot.min_minutes),
                format!("{:.0}%", snapshot.progress_percent()),
                status,
                last_update
            ]);
        }
        table
    }

    pub fn settings_table(config: &Config) -> Table {
        let mut table = Table::new();

        table.add_row(row!["SETTING", "VALUE"]);
        table.add_row(row!["Check interval", format!("{}s", config.check_interval)]);
        table.add_row(row!["Inactivity timeout", format!("{}s", config.inactivity_timeout)]);
        table.add_row(row!["Tracked applications", config.applications.len()]);
        table
    }

    pub fn running_applications_table(names: &BTreeSet<String>) -> Table {
        let mut table = Table::new();

        table.add_row(row!["PROCESS"]);
        for name in names {
            table.add_row(row![name]);
        }
        table
    }
}

/// Today's usage against the requirement, e.g. `"12.5/15 minutes"`.
pub fn format_usage(usage_minutes: f64, min_minutes: u32) -> String {
    format!("{:.1}/{} minutes", usage_minutes, min_minutes)
}
