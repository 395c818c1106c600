#[cfg(test)]
mod tests {
    use streakr::libs::probe::{suggest_display_name, ApplicationLister, NativeProbe, PresenceProbe};

    #[test]
    fn test_suggest_display_name() {
        assert_eq!(suggest_display_name("code.exe"), "Code");
        assert_eq!(suggest_display_name("firefox"), "Firefox");
        assert_eq!(suggest_display_name("google chrome"), "Google Chrome");
        assert_eq!(suggest_display_name("OBS64.exe"), "Obs64");
    }

    #[test]
    fn test_unknown_process_is_not_running() {
        let mut probe = NativeProbe::new();
        probe.refresh().unwrap();
        assert!(!probe.is_running("streakr-test-no-such-process-4f1c").unwrap());
    }

    #[test]
    fn test_lists_running_applications() {
        let mut probe = NativeProbe::new();
        let names = probe.list_active_application_names();

        assert!(!names.is_empty(), "the test process itself is running");
        assert!(names.iter().all(|name| !name.trim().is_empty()));
    }

    #[test]
    fn test_listed_application_is_reported_running() {
        let mut probe = NativeProbe::new();
        let names = probe.list_active_application_names();

        probe.refresh().unwrap();
        assert!(names.iter().any(|name| probe.is_running(name).unwrap()));
        assert!(names.iter().any(|name| probe.is_running(&name.to_uppercase()).unwrap()));
    }
}
