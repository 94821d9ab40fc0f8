use crate::error::PortalResult;
use crate::render::{DrawKind, RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content and counts draw calls so tests can catch
/// invalid scenes before a real backend is wired in.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_mesh_count: usize,
    pub last_light_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PortalResult<()> {
        frame.validate()?;
        let calls = frame.draw_calls();
        self.last_mesh_count = calls
            .iter()
            .filter(|call| matches!(call.kind, DrawKind::Mesh { .. }))
            .count();
        self.last_light_count = calls.len() - self.last_mesh_count;
        self.frames_rendered += 1;
        Ok(())
    }
}
