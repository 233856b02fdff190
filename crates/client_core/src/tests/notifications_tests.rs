use super::*;

#[test]
fn success_fades_after_three_seconds_and_is_removed_after_fade() {
    let start = Instant::now();
    let mut notifications = Notifications::new();
    let id = notifications.success("Employee added successfully!", start);
    assert_eq!(notifications.get(id).map(Notification::phase), Some(NotificationPhase::Created));

    notifications.tick(start + Duration::from_millis(10));
    assert_eq!(notifications.get(id).map(Notification::phase), Some(NotificationPhase::Visible));

    notifications.tick(start + Duration::from_millis(2_999));
    assert_eq!(notifications.get(id).map(Notification::phase), Some(NotificationPhase::Visible));

    notifications.tick(start + SUCCESS_DISPLAY);
    assert_eq!(notifications.get(id).map(Notification::phase), Some(NotificationPhase::Fading));

    notifications.tick(start + SUCCESS_DISPLAY + FADE_DURATION);
    assert!(notifications.get(id).is_none());
    assert!(notifications.is_empty());
}

#[test]
fn errors_stay_longer_than_successes() {
    let start = Instant::now();
    let mut notifications = Notifications::new();
    let ok = notifications.success("saved", start);
    let failed = notifications.error("Failed to add employee", start);

    notifications.tick(start + Duration::from_secs(4));
    assert_eq!(notifications.get(ok).map(Notification::phase), None);
    assert_eq!(
        notifications.get(failed).map(Notification::phase),
        Some(NotificationPhase::Visible)
    );

    notifications.tick(start + ERROR_DISPLAY + Duration::from_millis(100));
    assert_eq!(
        notifications.get(failed).map(Notification::phase),
        Some(NotificationPhase::Fading)
    );
}

#[test]
fn notifications_coexist_with_independent_timers() {
    let start = Instant::now();
    let mut notifications = Notifications::new();
    notifications.success("first", start);
    notifications.success("second", start + Duration::from_secs(2));
    assert_eq!(notifications.len(), 2);

    notifications.tick(start + Duration::from_millis(3_400));
    let remaining: Vec<&str> = notifications.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(remaining, vec!["second"]);
}

#[test]
fn next_deadline_tracks_the_earliest_transition() {
    let start = Instant::now();
    let mut notifications = Notifications::new();
    assert_eq!(notifications.next_deadline(), None);

    notifications.error("later", start);
    notifications.success("sooner", start);
    assert_eq!(notifications.next_deadline(), Some(start + SUCCESS_DISPLAY));

    notifications.tick(start + SUCCESS_DISPLAY);
    assert_eq!(
        notifications.next_deadline(),
        Some(start + SUCCESS_DISPLAY + FADE_DURATION)
    );
}

#[test]
fn fade_progress_runs_from_zero_to_one() {
    let start = Instant::now();
    let mut notifications = Notifications::new();
    let id = notifications.success("saved", start);
    let notification = notifications.get(id).cloned().expect("notification");

    assert_eq!(notification.fade_progress(start), 0.0);
    let halfway = notification.fade_progress(start + SUCCESS_DISPLAY + FADE_DURATION / 2);
    assert!((halfway - 0.5).abs() < 0.01, "halfway progress {halfway}");
    assert_eq!(notification.fade_progress(start + Duration::from_secs(10)), 1.0);
}
