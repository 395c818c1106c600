#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use streakr::libs::config::{Config, TrackedApplication};
    use streakr::libs::streak::{Observation, StreakBook};

    fn app(name: &str, min_minutes: u32) -> TrackedApplication {
        TrackedApplication {
            process: name.to_lowercase(),
            name: name.to_string(),
            min_minutes,
        }
    }

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap() + Duration::days(offset)
    }

    fn tick(book: &mut StreakBook, app: &TrackedApplication, today: NaiveDate, elapsed_secs: f64, running: bool, active: bool) -> bool {
        let observations = [Observation { app, is_running: running }];
        book.tick(today, elapsed_secs, &observations, active)
    }

    /// One tick long enough to meet the requirement on its own.
    fn qualify(book: &mut StreakBook, app: &TrackedApplication, today: NaiveDate) {
        tick(book, app, today, app.min_minutes as f64 * 60.0, true, true);
    }

    #[test]
    fn test_threshold_crossing_increments_once_per_day() {
        let editor = app("Editor", 10);
        let mut book = StreakBook::new();

        tick(&mut book, &editor, day(0), 300.0, true, true);
        let record = book.get("Editor").unwrap();
        assert_eq!(record.today_usage_minutes, 5.0);
        assert_eq!(record.current_streak, 0);

        tick(&mut book, &editor, day(0), 300.0, true, true);
        let record = book.get("Editor").unwrap();
        assert_eq!(record.today_usage_minutes, 10.0);
        assert_eq!(record.current_streak, 1);
        assert_eq!(record.streak_date, Some(day(0)));

        tick(&mut book, &editor, day(0), 300.0, true, true);
        let record = book.get("Editor").unwrap();
        assert_eq!(record.today_usage_minutes, 15.0);
        assert_eq!(record.current_streak, 1, "streak must not increase twice on the same day");
        assert_eq!(record.longest_streak, 1);
    }

    #[test]
    fn test_consecutive_days_extend_streak() {
        let editor = app("Editor", 10);
        let mut book = StreakBook::new();

        for offset in 0..4 {
            qualify(&mut book, &editor, day(offset));
        }

        let record = book.get("Editor").unwrap();
        assert_eq!(record.current_streak, 4);
        assert_eq!(record.longest_streak, 4);
        assert_eq!(record.streak_date, Some(day(3)));
    }

    #[test]
    fn test_missed_day_resets_streak_without_usage() {
        let editor = app("Editor", 10);
        let mut book = StreakBook::new();
        qualify(&mut book, &editor, day(0));
        assert_eq!(book.get("Editor").unwrap().current_streak, 1);

        // Nothing on day 1; first tick on day 2 has zero usage.
        tick(&mut book, &editor, day(2), 60.0, false, true);

        let record = book.get("Editor").unwrap();
        assert_eq!(record.current_streak, 0);
        assert_eq!(record.longest_streak, 1);
        assert_eq!(record.today_usage_minutes, 0.0);
        assert_eq!(record.last_used_date, Some(day(0)));
    }

    #[test]
    fn test_qualifying_day_after_gap_starts_new_streak() {
        let editor = app("Editor", 10);
        let mut book = StreakBook::new();
        for offset in 0..3 {
            qualify(&mut book, &editor, day(offset));
        }

        // The very first tick after the gap already meets the requirement.
        qualify(&mut book, &editor, day(5));

        let record = book.get("Editor").unwrap();
        assert_eq!(record.current_streak, 1);
        assert_eq!(record.longest_streak, 3);
        assert_eq!(record.streak_date, Some(day(5)));
    }

    #[test]
    fn test_inactive_user_accrues_nothing_and_keeps_streak() {
        let editor = app("Editor", 10);
        let mut book = StreakBook::new();
        qualify(&mut book, &editor, day(0));

        for _ in 0..20 {
            tick(&mut book, &editor, day(1), 300.0, true, false);
        }

        let record = book.get("Editor").unwrap();
        assert_eq!(record.today_usage_minutes, 0.0);
        assert_eq!(record.current_streak, 1);
        assert_eq!(record.last_used_date, Some(day(0)));
    }

    #[test]
    fn test_not_running_accrues_nothing() {
        let editor = app("Editor", 10);
        let mut book = StreakBook::new();

        tick(&mut book, &editor, day(0), 300.0, false, true);

        let record = book.get("Editor").unwrap();
        assert_eq!(record.today_usage_minutes, 0.0);
        assert_eq!(record.last_used_date, None);
    }

    #[test]
    fn test_usage_resets_when_date_advances() {
        let editor = app("Editor", 30);
        let mut book = StreakBook::new();
        tick(&mut book, &editor, day(0), 300.0, true, true);
        assert_eq!(book.get("Editor").unwrap().today_usage_minutes, 5.0);

        tick(&mut book, &editor, day(1), 300.0, false, true);

        let record = book.get("Editor").unwrap();
        assert_eq!(record.today_usage_minutes, 0.0);
        assert_eq!(record.usage_on(day(1)), 0.0);
    }

    #[test]
    fn test_tick_across_midnight_credits_new_day() {
        let editor = app("Editor", 30);
        let mut book = StreakBook::new();
        tick(&mut book, &editor, day(0), 300.0, true, true);

        tick(&mut book, &editor, day(1), 600.0, true, true);

        let record = book.get("Editor").unwrap();
        assert_eq!(record.today_usage_minutes, 10.0);
        assert_eq!(record.last_used_date, Some(day(1)));
    }

    #[test]
    fn test_fractional_minutes_reach_threshold() {
        let editor = app("Editor", 3);
        let mut book = StreakBook::new();

        tick(&mut book, &editor, day(0), 90.0, true, true);
        assert_eq!(book.get("Editor").unwrap().current_streak, 0);
        tick(&mut book, &editor, day(0), 90.0, true, true);

        let record = book.get("Editor").unwrap();
        assert_eq!(record.today_usage_minutes, 3.0);
        assert_eq!(record.current_streak, 1);
    }

    #[test]
    fn test_longest_streak_never_below_current() {
        let editor = app("Editor", 5);
        let mut book = StreakBook::new();
        // Two unused days every week: runs of five days separated by gaps.
        for offset in 0..60 {
            let used = !matches!(offset % 7, 3 | 4);
            for _ in 0..3 {
                tick(&mut book, &editor, day(offset), 120.0, used, true);
                let record = book.get("Editor").unwrap();
                assert!(record.longest_streak >= record.current_streak, "day {}: {:?}", offset, record);
            }
        }
        assert_eq!(book.get("Editor").unwrap().longest_streak, 5);
    }

    #[test]
    fn test_apps_are_accounted_independently() {
        let editor = app("Editor", 5);
        let browser = app("Browser", 5);
        let mut book = StreakBook::new();

        let observations = [
            Observation { app: &editor, is_running: true },
            Observation { app: &browser, is_running: false },
        ];
        book.tick(day(0), 300.0, &observations, true);

        assert_eq!(book.get("Editor").unwrap().current_streak, 1);
        assert_eq!(book.get("Browser").unwrap().current_streak, 0);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_tick_reports_changes() {
        let editor = app("Editor", 5);
        let mut book = StreakBook::new();

        assert!(tick(&mut book, &editor, day(0), 60.0, false, true), "new record is a change");
        assert!(!tick(&mut book, &editor, day(0), 60.0, false, true));
        assert!(tick(&mut book, &editor, day(0), 60.0, true, true));
    }

    #[test]
    #[should_panic]
    fn test_negative_elapsed_is_rejected() {
        let editor = app("Editor", 5);
        let mut book = StreakBook::new();
        tick(&mut book, &editor, day(0), -1.0, true, true);
    }

    #[test]
    fn test_ensure_rename_and_remove() {
        let mut book = StreakBook::new();
        assert!(book.ensure("Editor"));
        assert!(!book.ensure("Editor"));

        assert!(book.rename("Editor", "Code"));
        assert!(book.get("Editor").is_none());
        assert!(book.get("Code").is_some());

        assert!(book.remove("Code").is_some());
        assert!(book.is_empty());
    }

    #[test]
    fn test_retain_tracked_drops_removed_apps() {
        let mut config = Config::default();
        config.add_application("code", "Code", 10).unwrap();

        let mut book = StreakBook::new();
        book.ensure("Code");
        book.ensure("Old App");

        assert!(book.retain_tracked(&config));
        assert!(book.get("Code").is_some());
        assert!(book.get("Old App").is_none());
        assert!(!book.retain_tracked(&config));
    }

    #[test]
    fn test_snapshot_shows_today_only() {
        let mut config = Config::default();
        config.add_application("code", "Code", 10).unwrap();
        config.add_application("firefox", "Firefox", 20).unwrap();
        let code = config.application("code").unwrap();

        let mut book = StreakBook::new();
        tick(&mut book, &code, day(0), 900.0, true, true);

        let today = book.snapshot(&config, day(0));
        assert_eq!(today.len(), 2);
        let code_row = today.iter().find(|row| row.name == "Code").unwrap();
        assert_eq!(code_row.today_usage_minutes, 15.0);
        assert_eq!(code_row.current_streak, 1);
        assert_eq!(code_row.progress_percent(), 100.0);
        assert!(code_row.requirement_met());

        let firefox_row = today.iter().find(|row| row.name == "Firefox").unwrap();
        assert_eq!(firefox_row.current_streak, 0);
        assert!(!firefox_row.requirement_met());

        let tomorrow = book.snapshot(&config, day(1));
        let code_row = tomorrow.iter().find(|row| row.name == "Code").unwrap();
        assert_eq!(code_row.today_usage_minutes, 0.0);
        assert_eq!(code_row.progress_percent(), 0.0);
    }
}
