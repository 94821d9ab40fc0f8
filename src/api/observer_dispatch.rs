use crate::render::Renderer;

use super::engine::Stage;
use super::{PortalContext, PortalEngine, PortalEvent};

impl<R: Renderer> PortalEngine<R> {
    #[must_use]
    pub fn observer_context(&self) -> PortalContext {
        let (assembly_progress, shake_intensity) = match &self.stage {
            Stage::Login(scene) => (
                scene.sphere().assembly().progress(),
                scene.sphere().shake().intensity(),
            ),
            Stage::Dashboard(_) => (1.0, 0.0),
        };
        PortalContext {
            viewport: self.viewport,
            stage: self.stage.kind(),
            login_phase: self.session.phase(),
            active_field: self.session.active_field(),
            assembly_progress,
            shake_intensity,
            elapsed_seconds: self.elapsed.as_secs_f64(),
        }
    }

    pub(super) fn emit_observer_event(&mut self, event: &PortalEvent) {
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
