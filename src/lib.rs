//! kyros-portal: headless animation engine for the Kyros celestial portal.
//!
//! Every frame the engine advances owned animation state (smoothed
//! interpolators, tick-driven assembly and shake drivers, typing pulses) and
//! emits a plain-value scene tree that any backend can draw through the
//! [`render::Renderer`] trait.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod scene;
pub mod telemetry;

pub use api::{PortalConfig, PortalEngine, PortalEvent, PortalObserver};
pub use error::{PortalError, PortalResult};
