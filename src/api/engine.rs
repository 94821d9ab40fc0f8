use std::time::Duration;

use tracing::{debug, warn};

use crate::core::{FrameTime, Viewport};
use crate::error::{PortalError, PortalResult};
use crate::interaction::{ActiveField, PointerPosition, Theme};
use crate::render::{RenderFrame, Renderer};
use crate::scene::{DashboardScene, PortalScene};

use super::validation::validate_config;
use super::{LoginSession, PortalConfig, PortalEvent, PortalObserver, StageKind, SubmitOutcome};

pub(super) enum Stage {
    Login(Box<PortalScene>),
    Dashboard(Box<DashboardScene>),
}

impl Stage {
    pub(super) fn kind(&self) -> StageKind {
        match self {
            Self::Login(_) => StageKind::Login,
            Self::Dashboard(_) => StageKind::Dashboard,
        }
    }
}

/// Host-facing facade over the login portal and the dashboard.
///
/// The host forwards form input, calls [`Self::advance`] once per frame with
/// the elapsed time, then [`Self::render`].
pub struct PortalEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PortalConfig,
    pub(super) viewport: Viewport,
    pub(super) session: LoginSession,
    pub(super) stage: Stage,
    pub(super) observers: Vec<Box<dyn PortalObserver>>,
    pub(super) elapsed: Duration,
    pub(super) stage_elapsed: Duration,
}

impl<R: Renderer> PortalEngine<R> {
    pub fn new(renderer: R, config: PortalConfig) -> PortalResult<Self> {
        validate_config(&config)?;
        let session = LoginSession::new(config.error_hold(), config.login_delay());
        let stage = Stage::Login(Box::new(PortalScene::new(
            config.sphere,
            config.particles.login,
            &session.frame_state(),
            config.seed,
        )?));
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            "portal engine created"
        );
        Ok(Self {
            renderer,
            config,
            viewport: config.viewport,
            session,
            stage,
            observers: Vec::new(),
            elapsed: Duration::ZERO,
            stage_elapsed: Duration::ZERO,
        })
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.session.set_username(value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.session.set_password(value);
    }

    pub fn focus(&mut self, field: ActiveField) {
        self.session.focus(field);
    }

    pub fn blur(&mut self) {
        self.session.blur();
    }

    pub fn toggle_password_reveal(&mut self) -> bool {
        self.session.toggle_password_reveal()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.session.toggle_theme()
    }

    pub fn set_pointer(&mut self, pointer: PointerPosition) {
        self.session.set_pointer(pointer);
    }

    /// Normalizes a window-space pointer against the current viewport.
    pub fn set_pointer_from_window(&mut self, client_x: f64, client_y: f64) {
        let pointer = PointerPosition::from_window(
            client_x,
            client_y,
            f64::from(self.viewport.width),
            f64::from(self.viewport.height),
        );
        self.session.set_pointer(pointer);
    }

    /// Submits the login form. Only the login stage accepts submissions.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.stage.kind() != StageKind::Login {
            warn!("ignoring login submission outside the login stage");
            return SubmitOutcome::Ignored;
        }
        let outcome = self.session.submit();
        if outcome == SubmitOutcome::Started {
            self.emit_observer_event(&PortalEvent::LoginStarted);
        }
        outcome
    }

    /// Advances every timer and animation by `delta`.
    ///
    /// Returns the events raised during this frame, in the order observers
    /// saw them.
    pub fn advance(&mut self, delta: Duration) -> Vec<PortalEvent> {
        self.elapsed = self.elapsed.saturating_add(delta);
        self.stage_elapsed = self.stage_elapsed.saturating_add(delta);
        let time = FrameTime::new(delta, self.stage_elapsed);
        let mut events = Vec::new();

        let accepted = self.session.advance(delta);
        match &mut self.stage {
            Stage::Login(scene) => {
                let update = scene.update(&self.session.frame_state(), time);
                if update.error_triggered {
                    events.push(PortalEvent::ErrorTriggered);
                }
                if update.assembly_completed {
                    self.session.mark_assembled();
                    events.push(PortalEvent::AssemblyCompleted);
                }
            }
            Stage::Dashboard(scene) => scene.update(time),
        }

        if let Some(accepted) = accepted {
            self.enter_dashboard(&accepted.username);
            events.push(PortalEvent::LoginAccepted {
                username: accepted.username,
            });
        }

        for event in &events {
            self.emit_observer_event(event);
        }
        events
    }

    fn enter_dashboard(&mut self, username: &str) {
        self.stage = Stage::Dashboard(Box::new(DashboardScene::new(
            username,
            self.config.particles.dashboard,
            self.config.seed.wrapping_add(2),
        )));
        self.stage_elapsed = Duration::ZERO;
    }

    /// Leaves the dashboard and replays the login assembly from scratch.
    ///
    /// Returns `false` when the login stage is already active.
    pub fn logout(&mut self) -> PortalResult<bool> {
        if self.stage.kind() == StageKind::Login {
            return Ok(false);
        }
        self.session = self.session.restarted();
        self.stage = Stage::Login(Box::new(PortalScene::new(
            self.config.sphere,
            self.config.particles.login,
            &self.session.frame_state(),
            self.config.seed,
        )?));
        self.stage_elapsed = Duration::ZERO;
        debug!("logged out");
        self.emit_observer_event(&PortalEvent::LoggedOut);
        Ok(true)
    }

    /// Hovers one dashboard card, or clears the hover with `None`.
    pub fn set_dashboard_hover(&mut self, card: Option<usize>) -> PortalResult<()> {
        match &mut self.stage {
            Stage::Dashboard(scene) => scene.set_hovered(card),
            Stage::Login(_) => Err(PortalError::InvalidData(
                "card hover requires the dashboard stage".to_owned(),
            )),
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> PortalResult<()> {
        if !viewport.is_valid() {
            return Err(PortalError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        match &self.stage {
            Stage::Login(scene) => scene.build_frame(self.viewport, self.session.theme()),
            Stage::Dashboard(scene) => scene.build_frame(self.viewport),
        }
    }

    /// Builds, validates and hands the current frame to the renderer.
    pub fn render(&mut self) -> PortalResult<()> {
        let frame = self.build_render_frame();
        frame.validate()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &LoginSession {
        &self.session
    }

    #[must_use]
    pub fn stage(&self) -> StageKind {
        self.stage.kind()
    }

    #[must_use]
    pub fn portal_scene(&self) -> Option<&PortalScene> {
        match &self.stage {
            Stage::Login(scene) => Some(scene.as_ref()),
            Stage::Dashboard(_) => None,
        }
    }

    #[must_use]
    pub fn dashboard_scene(&self) -> Option<&DashboardScene> {
        match &self.stage {
            Stage::Dashboard(scene) => Some(scene.as_ref()),
            Stage::Login(_) => None,
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
