//! Host-facing API: configuration, the login session, observers and the
//! [`PortalEngine`] facade.

mod config;
mod engine;
mod events;
mod observer_dispatch;
mod observer_registry;
mod session;
mod validation;

pub use config::{ParticleCounts, PortalConfig};
pub use engine::PortalEngine;
pub use events::{PortalContext, PortalEvent, PortalObserver, StageKind};
pub use session::{LoginAccepted, LoginPhase, LoginSession, SubmitOutcome};
