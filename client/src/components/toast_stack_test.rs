use super::*;
use session::NoticeKind;

#[test]
fn toast_class_marks_warnings() {
    assert_eq!(toast_class(Severity::Warning), "toast toast--warning");
    assert_eq!(toast_class(Severity::Info), "toast toast--info");
}

#[test]
fn unscheduled_skips_already_scheduled_ids() {
    let mut state = SessionState::default();
    state.push_notice(NoticeKind::Farewell);
    state.push_notice(NoticeKind::Disconnected);
    state.push_notice(NoticeKind::LoggedIn { name: "Alice".to_owned() });

    let fresh = unscheduled(&state.notices, 1);
    assert_eq!(fresh.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![2, 3]);
    assert!(fresh.iter().all(|(_, d)| *d == Duration::from_secs(5)));
}

#[test]
fn unscheduled_is_empty_when_caught_up() {
    let mut state = SessionState::default();
    state.push_notice(NoticeKind::Farewell);
    assert!(unscheduled(&state.notices, 1).is_empty());
}
