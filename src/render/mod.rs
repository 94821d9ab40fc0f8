mod frame;
mod node;
mod null_renderer;
mod primitives;

pub use frame::{CameraPose, DrawCall, DrawKind, Fog, RenderFrame};
pub use node::{NodeContent, SceneNode, Transform};
pub use null_renderer::NullRenderer;
pub use primitives::{Blending, Color, Geometry, Light, LightKind, Material, ShaderParams, Side};

use crate::error::PortalResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from animation and session logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PortalResult<()>;
}
