mod common;

use common::{cin, cout, day, ts};
use rattendlog::core::view::AttendanceView;
use rattendlog::models::action::Action;

#[test]
fn fresh_view_offers_check_in() {
    let view = AttendanceView::new("1001", day(), ts("08:00:00"));

    assert!(!view.is_running());
    assert_eq!(view.next_action(), Action::CheckIn);
    assert_eq!(view.clock(), "00:00:00");
}

#[test]
fn load_then_tick_advances_only_the_clock() {
    let mut view = AttendanceView::new("1001", day(), ts("09:00:00"));
    assert!(view.load(1, &[cin("09:00:00")]));

    let before = view.report.clone();
    view.tick(ts("10:15:30"));

    assert_eq!(view.report, before);
    assert_eq!(view.elapsed_seconds(), 4530);
    assert_eq!(view.clock(), "01:15:30");
    assert_eq!(view.next_action(), Action::CheckOut);
}

#[test]
fn stale_snapshot_is_discarded() {
    let mut view = AttendanceView::new("1001", day(), ts("18:00:00"));

    assert!(view.load(2, &[cin("09:00:00"), cout("17:00:00")]));
    // an older fetch completing late must not overwrite the newer one
    assert!(!view.load(1, &[cin("09:00:00")]));

    assert_eq!(view.generation, 2);
    assert_eq!(view.report.worked_seconds, 28800);
    assert!(!view.is_running());
}

#[test]
fn same_generation_reload_is_accepted() {
    let mut view = AttendanceView::new("1001", day(), ts("18:00:00"));
    assert!(view.load(3, &[cin("09:00:00")]));
    assert!(view.load(3, &[cin("09:00:00"), cout("12:00:00")]));
    assert_eq!(view.report.worked_seconds, 10800);
}

#[test]
fn submit_builds_next_action_at_current_time() {
    let mut view = AttendanceView::new("1001", day(), ts("09:00:00"));
    view.load(1, &[]);

    let first = view.submit(Some("ios".into()), Some("alice".into()));
    assert_eq!(first.action, Action::CheckIn);
    assert_eq!(first.staff_id, "1001");
    assert_eq!(first.date, "2025-09-15");
    assert_eq!(first.time_stamp, "2025-09-15T09:00:00");
    assert_eq!(first.device.as_deref(), Some("ios"));
    assert_eq!(first.created_by.as_deref(), Some("alice"));
    assert!(view.awaiting_reload);

    // reload with the submitted entry, then the next submit is a check-out
    view.load(2, &[first.clone()]);
    assert!(!view.awaiting_reload);

    view.tick(ts("12:00:00"));
    let second = view.submit(None, None);
    assert_eq!(second.action, Action::CheckOut);
    assert_eq!(second.time_stamp, "2025-09-15T12:00:00");

    view.load(3, &[first, second]);
    assert_eq!(view.report.worked_seconds, 3 * 3600);
    assert_eq!(view.next_action(), Action::CheckIn);
}
