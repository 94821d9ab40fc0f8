use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::ActiveField;

use super::LoginPhase;

/// Which stage the engine is currently driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageKind {
    Login,
    Dashboard,
}

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortalContext {
    pub viewport: Viewport,
    pub stage: StageKind,
    pub login_phase: LoginPhase,
    pub active_field: ActiveField,
    pub assembly_progress: f64,
    pub shake_intensity: f64,
    pub elapsed_seconds: f64,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortalEvent {
    AssemblyCompleted,
    ErrorTriggered,
    LoginStarted,
    LoginAccepted { username: String },
    LoggedOut,
}

/// Hook interface for host-side reactions to portal events.
///
/// Observers read engine context but never mutate engine internals.
pub trait PortalObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PortalEvent, context: PortalContext);
}
