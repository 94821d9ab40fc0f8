use std::f64::consts::TAU;

use glam::DVec3;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::{
    AssemblyConfig, AssemblyDriver, AssemblyPhase, AssemblyStep, ErrorShake, ShakeConfig,
    TypingPulse, TypingPulseConfig,
};
use crate::core::{FragmentLayout, FrameTime, Smoothed, SmoothingFactor, strut_opacity};
use crate::error::PortalResult;
use crate::interaction::{ActiveField, FrameState};
use crate::render::{Geometry, Material, SceneNode, Transform};

use super::celestial_core::CelestialCore;
use super::palette::ANTIQUE_GOLD;
use super::ring::{CelestialRing, RingConfig, RingProps};

/// Radius and rest height of the username, password and decorative rings.
pub const RING_LAYOUT: [(f64, f64); 3] = [(1.2, 0.4), (1.0, 0.0), (0.8, -0.4)];
/// Fragment index of the core.
pub const CORE_FRAGMENT: u32 = 3;
/// Per-axis multipliers applied to each ring fragment's spin angle.
const RING_SPIN_AXES: [DVec3; 3] = [
    DVec3::new(0.5, 1.0, 0.0),
    DVec3::new(-0.3, 1.0, 0.2),
    DVec3::new(0.4, -1.0, 0.0),
];
const DECORATIVE_RING_GLOW: f64 = 0.15;
const STRUT_COUNT: usize = 4;

/// Tunables of the celestial orb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereConfig {
    #[serde(default)]
    pub assembly: AssemblyConfig,
    #[serde(default)]
    pub shake: ShakeConfig,
    #[serde(default)]
    pub typing: TypingPulseConfig,
    #[serde(default)]
    pub ring: RingConfig,
    #[serde(default)]
    pub fragments: FragmentLayout,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            assembly: AssemblyConfig::default(),
            shake: ShakeConfig::default(),
            typing: TypingPulseConfig::default(),
            ring: RingConfig::default(),
            fragments: FragmentLayout::celestial(),
        }
    }
}

impl SphereConfig {
    /// Slower, linear timing of the cylinder variant of the orb.
    #[must_use]
    pub fn cylinder() -> Self {
        Self {
            assembly: AssemblyConfig::cylinder(),
            typing: TypingPulseConfig::cylinder(),
            fragments: FragmentLayout::cylinder(),
            ..Self::default()
        }
    }

    pub fn validate(self) -> PortalResult<Self> {
        self.assembly.validate()?;
        self.shake.validate()?;
        self.typing.validate()?;
        self.ring.validate()?;
        self.fragments.validate()?;
        Ok(self)
    }
}

/// What happened to the orb during one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SphereUpdate {
    pub assembly_completed: bool,
    pub error_triggered: bool,
}

/// The assembled orb: three rings around a core.
///
/// Owns every per-element animation driver; callers only hand in a read-only
/// [`FrameState`] and the frame time.
#[derive(Debug, Clone)]
pub struct CelestialSphere {
    fragments: FragmentLayout,
    assembly: AssemblyDriver,
    shake: ErrorShake,
    username_typing: TypingPulse,
    password_typing: TypingPulse,
    rings: [CelestialRing; 3],
    core: CelestialCore,
    rng: StdRng,
    glow_per_char: f64,
    last_error: bool,
    float_y: f64,
    sway_y: f64,
    offset_x: Smoothed,
    tilt_z: Smoothed,
}

impl CelestialSphere {
    /// Builds the orb for a form that already holds `initial` text.
    pub fn new(config: SphereConfig, initial: &FrameState<'_>, seed: u64) -> PortalResult<Self> {
        let config = config.validate()?;
        let rings = [0_u8, 1, 2].map(|index| {
            let (radius, height) = RING_LAYOUT[usize::from(index)];
            CelestialRing::new(index, radius, height, config.ring)
        });
        Ok(Self {
            fragments: config.fragments,
            assembly: AssemblyDriver::new(config.assembly)?,
            shake: ErrorShake::new(config.shake)?,
            username_typing: TypingPulse::new(config.typing, initial.username_len())?,
            password_typing: TypingPulse::new(config.typing, initial.password_len())?,
            rings,
            core: CelestialCore::new(),
            rng: StdRng::seed_from_u64(seed),
            glow_per_char: config.ring.glow_per_char,
            last_error: false,
            float_y: 0.0,
            sway_y: 0.0,
            offset_x: Smoothed::new(0.0, SmoothingFactor::BRISK),
            tilt_z: Smoothed::new(0.0, SmoothingFactor::BRISK),
        })
    }

    #[must_use]
    pub fn assembly(&self) -> &AssemblyDriver {
        &self.assembly
    }

    #[must_use]
    pub fn shake(&self) -> &ErrorShake {
        &self.shake
    }

    #[must_use]
    pub fn rings(&self) -> &[CelestialRing; 3] {
        &self.rings
    }

    #[must_use]
    pub fn core(&self) -> &CelestialCore {
        &self.core
    }

    #[must_use]
    pub fn is_typing(&self, field: ActiveField) -> bool {
        match field {
            ActiveField::Username => self.username_typing.is_typing(),
            ActiveField::Password => self.password_typing.is_typing(),
            ActiveField::None => false,
        }
    }

    /// Horizontal shake offset and roll of the whole orb.
    #[must_use]
    pub fn shake_offset(&self) -> (f64, f64) {
        (self.offset_x.value(), self.tilt_z.value())
    }

    pub fn update(&mut self, state: &FrameState<'_>, time: FrameTime) -> SphereUpdate {
        let mut update = SphereUpdate::default();

        let step = if self.assembly.phase() == AssemblyPhase::NotStarted {
            self.assembly.start(state.assembled)
        } else {
            match self.assembly.set_assembled(state.assembled) {
                AssemblyStep::Idle => self.assembly.advance(time.delta),
                completed => completed,
            }
        };
        update.assembly_completed = step.is_completed();

        self.username_typing.advance(time.delta);
        self.password_typing.advance(time.delta);
        self.username_typing.observe(state.username_len());
        self.password_typing.observe(state.password_len());

        if state.has_error && !self.last_error {
            self.shake.trigger();
            update.error_triggered = true;
            debug!("error edge observed");
        }
        self.last_error = state.has_error;
        self.shake.advance(time.delta);

        let t = time.elapsed_seconds();
        self.float_y = (t * 0.4).sin() * 0.1;
        self.sway_y = (t * 0.15).sin() * 0.15;
        match self.shake.jitter(&mut self.rng) {
            Some(jitter) => {
                self.offset_x.set(jitter.offset_x);
                self.tilt_z.set(jitter.rotation_z);
            }
            None => {
                self.offset_x.step(0.0);
                self.tilt_z.step(0.0);
            }
        }

        let username_glow = state.username_len() as f64 * self.glow_per_char;
        let password_glow = state.password_len() as f64 * self.glow_per_char;
        let ring_props = [
            RingProps {
                is_active: state.is_focused(ActiveField::Username),
                is_typing: self.username_typing.is_typing(),
                glow_intensity: username_glow,
                is_open: false,
                typed_chars: state.username,
            },
            RingProps {
                is_active: state.is_focused(ActiveField::Password),
                is_typing: self.password_typing.is_typing(),
                glow_intensity: password_glow,
                is_open: state.password_revealed,
                typed_chars: state.password,
            },
            RingProps::idle(DECORATIVE_RING_GLOW, state.password_revealed),
        ];
        for (ring, props) in self.rings.iter_mut().zip(&ring_props) {
            ring.update(props, time);
        }
        self.core.update(state.password_revealed, password_glow, time);

        update
    }

    #[must_use]
    pub fn node(&self) -> SceneNode {
        let progress = self.assembly.progress();
        let mut sphere = SceneNode::group("celestial-sphere").with_transform(
            Transform::from_translation(DVec3::new(self.offset_x.value(), self.float_y, 0.0))
                .with_rotation(DVec3::new(0.0, self.sway_y, self.tilt_z.value())),
        );

        for ((index, ring), spin_axes) in (0_u32..).zip(&self.rings).zip(RING_SPIN_AXES) {
            let fragment = self.fragments.layout(index, progress);
            sphere.push_child(
                SceneNode::group("ring-fragment")
                    .with_transform(
                        Transform::from_translation(fragment.position)
                            .with_rotation(spin_axes * fragment.rotation),
                    )
                    .with_opacity(fragment.opacity.clamp(0.0, 1.0))
                    .with_child(ring.node()),
            );
        }

        let core_fragment = self.fragments.layout(CORE_FRAGMENT, progress);
        sphere.push_child(
            SceneNode::group("core-fragment")
                .at(core_fragment.position)
                .with_opacity(core_fragment.opacity.clamp(0.0, 1.0))
                .with_child(self.core.node()),
        );

        if let Some(opacity) = strut_opacity(progress) {
            let struts = (0..STRUT_COUNT).map(|i| {
                let angle = i as f64 / STRUT_COUNT as f64 * TAU;
                SceneNode::mesh(
                    "strut",
                    Geometry::Cylinder {
                        radius_top: 0.015,
                        radius_bottom: 0.015,
                        height: 0.8,
                    },
                    Material::standard(ANTIQUE_GOLD)
                        .with_emissive(ANTIQUE_GOLD, 0.3)
                        .with_surface(1.0, 0.3)
                        .with_opacity(opacity),
                )
                .with_transform(
                    Transform::from_translation(DVec3::new(
                        angle.cos() * 0.5,
                        0.0,
                        angle.sin() * 0.5,
                    ))
                    .with_rotation(DVec3::new(0.0, angle, 0.0)),
                )
            });
            sphere.push_child(SceneNode::group("struts").with_children(struts));
        }

        sphere
    }
}
