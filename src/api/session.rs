use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::OneShotTimer;
use crate::interaction::{ActiveField, FrameState, PointerPosition, Theme};

/// Progress of the simulated authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoginPhase {
    #[default]
    Idle,
    Authenticating,
    Accepted,
}

/// Result of pressing the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// A field was empty; the error pulse was raised.
    Rejected,
    /// Both fields were filled; authentication is under way.
    Started,
    /// The form was not interactive yet or a login is already running.
    Ignored,
}

/// Emitted once the simulated authentication delay has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAccepted {
    pub username: String,
}

/// Page-level state holder of the login form.
///
/// Owns the text of both fields and every form timer, and lends the scene an
/// immutable [`FrameState`] each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSession {
    username: String,
    password: String,
    active_field: ActiveField,
    password_revealed: bool,
    theme: Theme,
    pointer: PointerPosition,
    assembled: bool,
    has_error: bool,
    phase: LoginPhase,
    error_hold: Duration,
    login_delay: Duration,
    error_timer: OneShotTimer,
    login_timer: OneShotTimer,
}

impl LoginSession {
    #[must_use]
    pub fn new(error_hold: Duration, login_delay: Duration) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            active_field: ActiveField::None,
            password_revealed: false,
            theme: Theme::Dark,
            pointer: PointerPosition::default(),
            assembled: false,
            has_error: false,
            phase: LoginPhase::Idle,
            error_hold,
            login_delay,
            error_timer: OneShotTimer::default(),
            login_timer: OneShotTimer::default(),
        }
    }

    /// Fresh session with the same timings and theme.
    #[must_use]
    pub fn restarted(&self) -> Self {
        let mut session = Self::new(self.error_hold, self.login_delay);
        session.theme = self.theme;
        session
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn active_field(&self) -> ActiveField {
        self.active_field
    }

    #[must_use]
    pub fn is_password_revealed(&self) -> bool {
        self.password_revealed
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn is_assembled(&self) -> bool {
        self.assembled
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    #[must_use]
    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    /// Whether the submit button would accept a click.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.assembled
            && self.phase == LoginPhase::Idle
            && !self.username.is_empty()
            && !self.password.is_empty()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn focus(&mut self, field: ActiveField) {
        self.active_field = field;
    }

    pub fn blur(&mut self) {
        self.active_field = ActiveField::None;
    }

    /// Flips the reveal toggle and returns the new state.
    pub fn toggle_password_reveal(&mut self) -> bool {
        self.password_revealed = !self.password_revealed;
        self.password_revealed
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn set_pointer(&mut self, pointer: PointerPosition) {
        self.pointer = pointer;
    }

    /// Records that the orb finished assembling; the form becomes interactive.
    pub fn mark_assembled(&mut self) {
        self.assembled = true;
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.assembled || self.phase != LoginPhase::Idle {
            warn!(
                assembled = self.assembled,
                phase = ?self.phase,
                "ignoring login submission"
            );
            return SubmitOutcome::Ignored;
        }
        if self.username.is_empty() || self.password.is_empty() {
            self.has_error = true;
            self.error_timer.arm(self.error_hold);
            debug!("login rejected: empty field");
            return SubmitOutcome::Rejected;
        }
        self.phase = LoginPhase::Authenticating;
        self.login_timer.arm(self.login_delay);
        debug!(username = %self.username, "authentication started");
        SubmitOutcome::Started
    }

    /// Runs the error hold and authentication timers forward.
    pub fn advance(&mut self, delta: Duration) -> Option<LoginAccepted> {
        if self.error_timer.advance(delta) {
            self.has_error = false;
        }
        if self.login_timer.advance(delta) {
            self.phase = LoginPhase::Accepted;
            debug!(username = %self.username, "login accepted");
            return Some(LoginAccepted {
                username: self.username.clone(),
            });
        }
        None
    }

    #[must_use]
    pub fn frame_state(&self) -> FrameState<'_> {
        FrameState {
            active_field: self.active_field,
            username: &self.username,
            password: &self.password,
            password_revealed: self.password_revealed,
            assembled: self.assembled,
            has_error: self.has_error,
            theme: self.theme,
            pointer: self.pointer,
        }
    }
}
