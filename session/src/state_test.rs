use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_state_default_is_anonymous_and_idle() {
    let state = SessionState::default();
    assert_eq!(state.phase, Phase::Anonymous);
    assert!(!state.authenticated());
    assert!(!state.loading.any());
    assert!(state.notices.is_empty());
    assert!(!state.restore_attempted);
}

// =============================================================
// LoadingFlags
// =============================================================

#[test]
fn loading_flags_are_independent() {
    let mut flags = LoadingFlags::default();
    flags.set(LoadingFlag::Message, true);
    assert!(flags.get(LoadingFlag::Message));
    assert!(!flags.get(LoadingFlag::Profile));
    assert!(!flags.get(LoadingFlag::SignUp));
    assert!(flags.any());
    flags.set(LoadingFlag::Message, false);
    assert!(!flags.any());
}

#[test]
fn shared_loading_flag_drops_with_last_hold() {
    let mut state = SessionState::default();
    state.hold_loading(LoadingFlag::Profile);
    state.hold_loading(LoadingFlag::Profile);
    assert_eq!(state.loading_holds.count(LoadingFlag::Profile), 2);

    state.release_loading(LoadingFlag::Profile);
    assert!(state.loading.profile);

    state.release_loading(LoadingFlag::Profile);
    assert!(!state.loading.profile);
    assert_eq!(state.loading_holds.count(LoadingFlag::Profile), 0);
}

#[test]
fn release_without_hold_stays_lowered() {
    let mut state = SessionState::default();
    state.release_loading(LoadingFlag::Message);
    assert!(!state.loading.message);
    assert_eq!(state.loading_holds.count(LoadingFlag::Message), 0);
}

// =============================================================
// FormState
// =============================================================

#[test]
fn form_requires_both_credentials() {
    let mut form = FormState::default();
    assert!(!form.can_submit());
    form.username = "alice".to_owned();
    assert!(!form.can_submit());
    form.password = "pw".to_owned();
    assert!(form.can_submit());
}

#[test]
fn clear_credentials_keeps_error_and_open() {
    let mut form = FormState {
        open: true,
        username: "alice".to_owned(),
        password: "pw".to_owned(),
        error: "bad".to_owned(),
    };
    form.clear_credentials();
    assert!(form.username.is_empty());
    assert!(form.password.is_empty());
    assert!(form.open);
    assert_eq!(form.error, "bad");
}

// =============================================================
// Notices
// =============================================================

#[test]
fn push_notice_assigns_increasing_ids() {
    let mut state = SessionState::default();
    let a = state.push_notice(NoticeKind::Farewell);
    let b = state.push_notice(NoticeKind::Disconnected);
    assert!(b > a);
    assert_eq!(state.notices.len(), 2);
}

#[test]
fn dismiss_notice_removes_only_that_id() {
    let mut state = SessionState::default();
    let a = state.push_notice(NoticeKind::Farewell);
    let b = state.push_notice(NoticeKind::Disconnected);
    state.dismiss_notice(a);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].id, b);
}

#[test]
fn logged_in_notice_greets_by_name() {
    let kind = NoticeKind::LoggedIn { name: "Alice".to_owned() };
    assert_eq!(kind.title(), "Logged in");
    assert!(kind.description("SecretLab").starts_with("Hello Alice! welcome to the SecretLab!"));
    assert_eq!(kind.severity(), Severity::Info);
}

#[test]
fn disconnected_notice_is_a_warning() {
    assert_eq!(NoticeKind::Disconnected.severity(), Severity::Warning);
    assert_eq!(NoticeKind::Disconnected.title(), "Disconnected");
}

#[test]
fn notices_last_five_seconds() {
    let mut state = SessionState::default();
    state.push_notice(NoticeKind::Farewell);
    assert_eq!(state.notices[0].duration(), Duration::from_secs(5));
}

// =============================================================
// reset_session / StateCell
// =============================================================

#[test]
fn reset_session_clears_profile_and_message() {
    let mut state = SessionState {
        phase: Phase::Authenticated,
        profile_name: "Alice".to_owned(),
        secret_message: "M".to_owned(),
        epoch: 3,
        ..SessionState::default()
    };
    state.reset_session();
    assert_eq!(state.phase, Phase::Anonymous);
    assert!(state.profile_name.is_empty());
    assert!(state.secret_message.is_empty());
    assert_eq!(state.epoch, 3);
}

#[test]
fn rc_refcell_cell_reads_and_writes() {
    let cell = Rc::new(RefCell::new(SessionState::default()));
    cell.write(|s| s.profile_name = "Alice".to_owned());
    assert_eq!(cell.read(|s| s.profile_name.clone()), "Alice");
    assert_eq!(cell.snapshot().profile_name, "Alice");
}
