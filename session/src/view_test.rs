use super::*;
use crate::state::{LoadingFlags, Phase};

fn authenticated() -> SessionState {
    SessionState {
        phase: Phase::Authenticated,
        profile_name: "Alice".to_owned(),
        secret_message: "M".to_owned(),
        ..SessionState::default()
    }
}

// =============================================================
// message_panel
// =============================================================

#[test]
fn message_loading_wins_over_authentication() {
    let mut state = authenticated();
    state.loading.message = true;
    assert_eq!(message_panel(&state, Theme::Light), MessagePanel::Loading);
}

#[test]
fn message_shows_secret_when_authenticated() {
    assert_eq!(
        message_panel(&authenticated(), Theme::Dark),
        MessagePanel::Secret { message: "M".to_owned(), image: WELCOME_IMAGE }
    );
}

#[test]
fn not_authorized_image_follows_theme() {
    let state = SessionState::default();
    assert_eq!(message_panel(&state, Theme::Light), MessagePanel::NotAuthorized { image: FORBIDDEN_IMAGE_LIGHT });
    assert_eq!(message_panel(&state, Theme::Dark), MessagePanel::NotAuthorized { image: FORBIDDEN_IMAGE_DARK });
}

#[test]
fn theme_does_not_change_authenticated_panel() {
    let state = authenticated();
    assert_eq!(message_panel(&state, Theme::Light), message_panel(&state, Theme::Dark));
}

#[test]
fn authenticating_phase_is_not_authorized_yet() {
    let state = SessionState { phase: Phase::Authenticating, ..SessionState::default() };
    assert!(matches!(message_panel(&state, Theme::Light), MessagePanel::NotAuthorized { .. }));
}

// =============================================================
// profile_panel / header_action
// =============================================================

#[test]
fn profile_spinner_while_loading() {
    let state = SessionState {
        loading: LoadingFlags { profile: true, ..LoadingFlags::default() },
        ..authenticated()
    };
    assert_eq!(profile_panel(&state), ProfilePanel::Loading);
}

#[test]
fn profile_name_when_authenticated() {
    assert_eq!(profile_panel(&authenticated()), ProfilePanel::Name("Alice".to_owned()));
}

#[test]
fn profile_empty_when_anonymous() {
    assert_eq!(profile_panel(&SessionState::default()), ProfilePanel::Empty);
}

#[test]
fn header_action_tracks_authentication() {
    assert_eq!(header_action(&SessionState::default()), HeaderAction::SignIn);
    assert_eq!(header_action(&authenticated()), HeaderAction::SignOut);
    assert_eq!(HeaderAction::SignOut.label(), "Sign out");
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_toggle_round_trips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert!(Theme::from_dark(true).is_dark());
    assert!(!Theme::from_dark(false).is_dark());
}
