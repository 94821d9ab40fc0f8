use std::time::Duration;

use kyros_portal::api::{LoginPhase, LoginSession, SubmitOutcome};
use kyros_portal::interaction::{ActiveField, Theme};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn assembled_session() -> LoginSession {
    let mut session = LoginSession::new(ms(500), ms(2000));
    session.mark_assembled();
    session
}

#[test]
fn submissions_before_assembly_are_ignored() {
    let mut session = LoginSession::new(ms(500), ms(2000));
    session.set_username("adept");
    session.set_password("lead");
    assert!(!session.can_submit());
    assert_eq!(session.submit(), SubmitOutcome::Ignored);
    assert_eq!(session.phase(), LoginPhase::Idle);
}

#[test]
fn empty_field_raises_error_pulse_for_hold_duration() {
    let mut session = assembled_session();
    session.set_username("adept");
    assert_eq!(session.submit(), SubmitOutcome::Rejected);
    assert!(session.has_error());
    assert!(session.frame_state().has_error);

    assert_eq!(session.advance(ms(499)), None);
    assert!(session.has_error());
    session.advance(ms(1));
    assert!(!session.has_error());
}

#[test]
fn filled_form_is_accepted_after_login_delay() {
    let mut session = assembled_session();
    session.set_username("Nicolas");
    session.set_password("flamel");
    assert!(session.can_submit());
    assert_eq!(session.submit(), SubmitOutcome::Started);
    assert_eq!(session.phase(), LoginPhase::Authenticating);
    assert_eq!(session.submit(), SubmitOutcome::Ignored);

    assert_eq!(session.advance(ms(1999)), None);
    let accepted = session.advance(ms(1)).expect("login accepted");
    assert_eq!(accepted.username, "Nicolas");
    assert_eq!(session.phase(), LoginPhase::Accepted);
    assert_eq!(session.advance(ms(5000)), None);
}

#[test]
fn frame_state_mirrors_form_inputs() {
    let mut session = assembled_session();
    session.set_username("ab");
    session.set_password("ᚠᚢᚦ");
    session.focus(ActiveField::Password);
    assert!(session.toggle_password_reveal());
    assert_eq!(session.toggle_theme(), Theme::Light);

    let state = session.frame_state();
    assert_eq!(state.username_len(), 2);
    assert_eq!(state.password_len(), 3);
    assert!(state.is_focused(ActiveField::Password));
    assert!(state.password_revealed);
    assert!(state.assembled);
    assert_eq!(state.theme, Theme::Light);

    session.blur();
    assert_eq!(session.frame_state().active_field, ActiveField::None);
}

#[test]
fn restart_keeps_theme_only() {
    let mut session = assembled_session();
    session.set_username("adept");
    session.toggle_theme();
    let fresh = session.restarted();
    assert_eq!(fresh.username(), "");
    assert!(!fresh.is_assembled());
    assert_eq!(fresh.theme(), Theme::Light);
}
