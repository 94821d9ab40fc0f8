//! Scene elements of the login portal and the dashboard.
//!
//! Every element owns its animation state, advances it in `update` from a
//! read-only snapshot, and emits a fresh [`SceneNode`](crate::render::SceneNode)
//! subtree in `node`.

pub mod camera;
pub mod celestial_core;
pub mod dashboard;
pub mod floor;
pub mod palette;
pub mod particles;
pub mod portal;
pub mod ring;
pub mod sphere;

pub use camera::{CameraRig, field_pose};
pub use celestial_core::CelestialCore;
pub use dashboard::{AlchemicalOrb, DashboardCard, DashboardScene, FloatMotion};
pub use floor::{ReflectiveFloor, fade_alpha, ripple_height};
pub use particles::GoldDust;
pub use portal::PortalScene;
pub use ring::{CelestialRing, RingConfig, RingProps, rune_for};
pub use sphere::{CelestialSphere, SphereConfig, SphereUpdate};
