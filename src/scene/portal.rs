use glam::DVec3;

use crate::core::{FrameTime, Viewport};
use crate::error::PortalResult;
use crate::interaction::{FrameState, Theme};
use crate::render::{CameraPose, Fog, Light, LightKind, RenderFrame, SceneNode};

use super::camera::CameraRig;
use super::floor::ReflectiveFloor;
use super::palette::{AMBIENT_PURPLE, GOLD, NIGHT, TEAL, VIOLET};
use super::particles::GoldDust;
use super::sphere::{CelestialSphere, SphereConfig, SphereUpdate};

/// Fixed lighting rig of the login scene.
#[must_use]
pub fn login_lights() -> [SceneNode; 4] {
    [
        SceneNode::light("ambient", Light::new(LightKind::Ambient, AMBIENT_PURPLE, 0.15)),
        SceneNode::light("rim-light", Light::new(LightKind::Directional, TEAL, 0.4))
            .at(DVec3::new(5.0, 3.0, -5.0)),
        SceneNode::light("accent-light", Light::new(LightKind::Directional, VIOLET, 0.3))
            .at(DVec3::new(-5.0, 2.0, 5.0)),
        SceneNode::light(
            "fill-light",
            Light::new(
                LightKind::Point {
                    distance: 10.0,
                    decay: 2.0,
                },
                GOLD,
                0.5,
            ),
        )
        .at(DVec3::new(0.0, 3.0, 0.0)),
    ]
}

/// Login stage: orb, gold dust, rippling floor, lights and camera.
#[derive(Debug, Clone)]
pub struct PortalScene {
    sphere: CelestialSphere,
    particles: GoldDust,
    floor: ReflectiveFloor,
    camera: CameraRig,
}

impl PortalScene {
    pub fn new(
        sphere: SphereConfig,
        particle_count: usize,
        initial: &FrameState<'_>,
        seed: u64,
    ) -> PortalResult<Self> {
        Ok(Self {
            sphere: CelestialSphere::new(sphere, initial, seed)?,
            particles: GoldDust::new(particle_count, seed.wrapping_add(1)),
            floor: ReflectiveFloor::new(),
            camera: CameraRig::login(),
        })
    }

    #[must_use]
    pub fn sphere(&self) -> &CelestialSphere {
        &self.sphere
    }

    #[must_use]
    pub fn particles(&self) -> &GoldDust {
        &self.particles
    }

    #[must_use]
    pub fn camera(&self) -> CameraPose {
        self.camera.pose()
    }

    pub fn update(&mut self, state: &FrameState<'_>, time: FrameTime) -> SphereUpdate {
        let t = time.elapsed_seconds();
        self.camera.update_login(state.active_field, time.delta_seconds());
        self.particles.update(t, state.pointer);
        self.floor.update(t);
        self.sphere.update(state, time)
    }

    #[must_use]
    pub fn build_frame(&self, viewport: Viewport, theme: Theme) -> RenderFrame {
        let scene = SceneNode::group("portal")
            .with_children(login_lights())
            .with_child(self.particles.node())
            .with_child(self.floor.node())
            .with_child(self.sphere.node());
        RenderFrame::new(viewport, theme.background(), self.camera.pose())
            .with_fog(Fog {
                color: NIGHT,
                near: 5.0,
                far: 20.0,
            })
            .with_node(scene)
    }
}
