use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec3;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{FrameTime, Smoothed, SmoothingFactor};
use crate::error::{PortalError, PortalResult};
use crate::render::{Color, Geometry, Material, SceneNode, Transform};

use super::palette::{ANTIQUE_GOLD, OBSIDIAN, RUNE_BLACK, TEAL, VIOLET};

/// Glyphs projected above a focused ring, picked by character code.
pub const RUNES: [char; 24] = [
    'ᚠ', 'ᚢ', 'ᚦ', 'ᚨ', 'ᚱ', 'ᚲ', 'ᚷ', 'ᚹ', 'ᚺ', 'ᚾ', 'ᛁ', 'ᛃ', 'ᛇ', 'ᛈ', 'ᛉ', 'ᛊ', 'ᛏ', 'ᛒ',
    'ᛖ', 'ᛗ', 'ᛚ', 'ᛜ', 'ᛞ', 'ᛟ',
];
pub const RUNE_PLATE_COUNT: usize = 16;
pub const HOLOGRAM_RUNE_LIMIT: usize = 8;

/// Rune shown for one typed character.
#[must_use]
pub fn rune_for(character: char) -> char {
    RUNES[u32::from(character) as usize % RUNES.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingConfig {
    /// Radians of spin target added per second while typing.
    pub spin_speed: f64,
    pub rotation_smoothing: SmoothingFactor,
    pub open_smoothing: SmoothingFactor,
    /// Vertical separation of the outer rings while the core is revealed.
    pub open_offset: f64,
    /// Glow contributed by every typed character.
    pub glow_per_char: f64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            spin_speed: 1.5,
            rotation_smoothing: SmoothingFactor::RING,
            open_smoothing: SmoothingFactor::GENTLE,
            open_offset: 0.4,
            glow_per_char: 0.08,
        }
    }
}

impl RingConfig {
    pub fn validate(self) -> PortalResult<Self> {
        for (name, value) in [
            ("spin_speed", self.spin_speed),
            ("open_offset", self.open_offset),
            ("glow_per_char", self.glow_per_char),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PortalError::InvalidData(format!(
                    "ring `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Per-frame inputs of one ring, derived from the frame state by its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingProps<'a> {
    pub is_active: bool,
    pub is_typing: bool,
    pub glow_intensity: f64,
    pub is_open: bool,
    pub typed_chars: &'a str,
}

impl RingProps<'_> {
    #[must_use]
    pub fn idle(glow_intensity: f64, is_open: bool) -> Self {
        Self {
            is_active: false,
            is_typing: false,
            glow_intensity,
            is_open,
            typed_chars: "",
        }
    }
}

/// Obsidian ring with gold inlay and rune plates.
///
/// Spins toward an accumulated target while its field is typed into,
/// wobbles when idle, and slides open while the core is revealed.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialRing {
    index: u8,
    radius: f64,
    base_height: f64,
    config: RingConfig,
    target_rotation: f64,
    rotation: Smoothed,
    open_offset: Smoothed,
    rotation_x: f64,
    rotation_y: f64,
    active: bool,
    glow: f64,
    holograms: SmallVec<[char; HOLOGRAM_RUNE_LIMIT]>,
}

impl CelestialRing {
    #[must_use]
    pub fn new(index: u8, radius: f64, base_height: f64, config: RingConfig) -> Self {
        Self {
            index,
            radius,
            base_height,
            config,
            target_rotation: 0.0,
            rotation: Smoothed::new(0.0, config.rotation_smoothing),
            open_offset: Smoothed::new(0.0, config.open_smoothing),
            rotation_x: 0.0,
            rotation_y: 0.0,
            active: false,
            glow: 0.0,
            holograms: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn index(&self) -> u8 {
        self.index
    }

    #[must_use]
    pub fn rotation_y(&self) -> f64 {
        self.rotation_y
    }

    #[must_use]
    pub fn target_rotation(&self) -> f64 {
        self.target_rotation
    }

    #[must_use]
    pub fn open_offset(&self) -> f64 {
        self.open_offset.value()
    }

    #[must_use]
    pub fn holograms(&self) -> &[char] {
        &self.holograms
    }

    fn open_target(&self, is_open: bool) -> f64 {
        match (is_open, self.index) {
            (true, 0) => self.config.open_offset,
            (true, 2) => -self.config.open_offset,
            _ => 0.0,
        }
    }

    pub fn update(&mut self, props: &RingProps<'_>, time: FrameTime) {
        let t = time.elapsed_seconds();
        let phase = f64::from(self.index);

        if props.is_typing && props.is_active {
            self.target_rotation += time.delta_seconds() * self.config.spin_speed;
        }
        self.rotation_y = self.rotation.step(self.target_rotation);

        if !props.is_active {
            self.rotation_y += (t * 0.5 + phase * 2.0).sin() * 0.002;
            self.rotation_x = (t * 0.3 + phase).sin() * 0.02;
        }

        self.open_offset.step(self.open_target(props.is_open));

        self.active = props.is_active;
        self.glow = if props.glow_intensity.is_finite() {
            props.glow_intensity.max(0.0)
        } else {
            0.0
        };
        self.holograms.clear();
        if props.is_active {
            let count = props.typed_chars.chars().count();
            self.holograms.extend(
                props
                    .typed_chars
                    .chars()
                    .skip(count.saturating_sub(HOLOGRAM_RUNE_LIMIT))
                    .map(rune_for),
            );
        }
    }

    fn accent(&self) -> Color {
        if self.active && self.index == 1 { VIOLET } else { TEAL }
    }

    #[must_use]
    pub fn node(&self) -> SceneNode {
        let accent = self.accent();
        let body_glow = if self.active {
            0.3 + self.glow * 0.4
        } else {
            0.05
        };

        let mut ring = SceneNode::group("celestial-ring")
            .with_transform(
                Transform::from_translation(DVec3::new(
                    0.0,
                    self.base_height + self.open_offset.value(),
                    0.0,
                ))
                .with_rotation(DVec3::new(self.rotation_x, self.rotation_y, 0.0)),
            )
            .with_child(SceneNode::mesh(
                "ring-body",
                Geometry::Torus {
                    radius: self.radius,
                    tube: 0.08,
                },
                Material::standard(OBSIDIAN)
                    .with_emissive(accent, body_glow)
                    .with_surface(0.95, 0.15),
            ))
            .with_child(SceneNode::mesh(
                "ring-gold-accent",
                Geometry::Torus {
                    radius: self.radius,
                    tube: 0.02,
                },
                Material::standard(ANTIQUE_GOLD)
                    .with_emissive(ANTIQUE_GOLD, 0.2)
                    .with_surface(1.0, 0.3),
            ))
            .with_child(SceneNode::mesh(
                "ring-inner",
                Geometry::Torus {
                    radius: self.radius - 0.1,
                    tube: 0.015,
                },
                Material::standard(ANTIQUE_GOLD)
                    .with_emissive(accent, if self.active { 0.4 } else { 0.1 })
                    .with_surface(0.9, 0.2),
            ));

        let plates = (0..RUNE_PLATE_COUNT).map(|i| {
            let angle = i as f64 / RUNE_PLATE_COUNT as f64 * TAU;
            let glow = if self.active {
                0.6 + (i as f64 + self.glow * 8.0).sin() * 0.3
            } else {
                0.08
            };
            SceneNode::mesh(
                "rune-plate",
                Geometry::Cuboid {
                    width: 0.15,
                    height: 0.04,
                    depth: 0.06,
                },
                Material::standard(RUNE_BLACK)
                    .with_emissive(accent, glow)
                    .with_surface(0.95, 0.1),
            )
            .with_transform(
                Transform::from_translation(DVec3::new(
                    angle.cos() * self.radius,
                    0.0,
                    angle.sin() * self.radius,
                ))
                .with_rotation(DVec3::new(0.0, -angle + FRAC_PI_2, 0.0)),
            )
        });
        ring.push_child(SceneNode::group("rune-plates").with_children(plates));

        if !self.holograms.is_empty() {
            let projection_radius = self.radius * 0.6;
            let glyphs = self.holograms.iter().enumerate().map(|(i, rune)| {
                let angle = i as f64 / HOLOGRAM_RUNE_LIMIT as f64 * TAU - FRAC_PI_2;
                SceneNode::mesh(
                    "hologram-rune",
                    Geometry::Text {
                        content: rune.to_string(),
                        font_size: 0.12,
                    },
                    Material::standard(accent),
                )
                .with_transform(
                    Transform::from_translation(DVec3::new(
                        angle.cos() * projection_radius,
                        0.0,
                        angle.sin() * projection_radius,
                    ))
                    .with_rotation(DVec3::new(0.0, -angle + FRAC_PI_2, 0.0)),
                )
            });
            ring.push_child(
                SceneNode::group("hologram-runes")
                    .at(DVec3::new(0.0, 0.3, 0.0))
                    .with_children(glyphs),
            );
        }

        ring
    }
}
