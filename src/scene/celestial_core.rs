use std::f64::consts::TAU;

use glam::DVec3;

use crate::core::{FrameTime, Smoothed, SmoothedVec3, SmoothingFactor};
use crate::render::{Geometry, Light, LightKind, Material, SceneNode, Side, Transform};

use super::palette::{CREAM, GOLD, IVORY, WHITE};

pub const RAY_COUNT: usize = 8;

/// Brilliant core inside the rings, revealed while the password is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialCore {
    revealed: bool,
    intensity: f64,
    rotation: DVec3,
    rays_spin: f64,
    inner_scale: SmoothedVec3,
    glow_scale: SmoothedVec3,
    ray_lengths: [Smoothed; RAY_COUNT],
}

impl Default for CelestialCore {
    fn default() -> Self {
        Self::new()
    }
}

impl CelestialCore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            revealed: false,
            intensity: 0.0,
            rotation: DVec3::ZERO,
            rays_spin: 0.0,
            inner_scale: SmoothedVec3::new(DVec3::ONE, SmoothingFactor::GENTLE),
            glow_scale: SmoothedVec3::new(DVec3::ONE, SmoothingFactor::SLOW),
            ray_lengths: [Smoothed::new(1.0, SmoothingFactor::GENTLE); RAY_COUNT],
        }
    }

    #[must_use]
    pub fn inner_scale(&self) -> f64 {
        self.inner_scale.value().x
    }

    #[must_use]
    pub fn glow_scale(&self) -> f64 {
        self.glow_scale.value().x
    }

    #[must_use]
    pub fn ray_length(&self, index: usize) -> Option<f64> {
        self.ray_lengths.get(index).map(|ray| ray.value())
    }

    pub fn update(&mut self, revealed: bool, intensity: f64, time: FrameTime) {
        let t = time.elapsed_seconds();
        self.revealed = revealed;
        self.intensity = if intensity.is_finite() {
            intensity.max(0.0)
        } else {
            0.0
        };
        self.rotation = DVec3::new((t * 0.2).sin() * 0.1, t * 0.3, 0.0);
        self.rays_spin = t * 0.5;

        let inner = if revealed { 1.0 + (t * 4.0).sin() * 0.1 } else { 0.3 };
        self.inner_scale.step(DVec3::splat(inner));

        let glow = if revealed { 2.0 + (t * 2.0).sin() * 0.3 } else { 0.5 };
        self.glow_scale.step(DVec3::splat(glow));

        for (i, ray) in self.ray_lengths.iter_mut().enumerate() {
            let length = if revealed {
                1.0 + (t * 3.0 + i as f64).sin() * 0.2
            } else {
                0.1
            };
            ray.step(length);
        }
    }

    #[must_use]
    pub fn node(&self) -> SceneNode {
        let revealed = self.revealed;
        let pick = |on: f64, off: f64| if revealed { on } else { off };

        let rays = self.ray_lengths.iter().enumerate().map(|(i, length)| {
            let angle = i as f64 / RAY_COUNT as f64 * TAU;
            SceneNode::mesh(
                "light-ray",
                Geometry::Plane {
                    width: 0.02,
                    height: 2.0,
                },
                Material::standard(IVORY)
                    .with_opacity(pick(0.3, 0.02))
                    .with_side(Side::Double)
                    .additive(),
            )
            .with_transform(
                Transform::IDENTITY
                    .with_rotation(DVec3::new(0.0, 0.0, angle))
                    .with_scale(DVec3::new(1.0, length.value().max(f64::EPSILON), 1.0)),
            )
        });

        SceneNode::group("celestial-core")
            .with_transform(Transform::IDENTITY.with_rotation(self.rotation))
            .with_child(
                SceneNode::mesh(
                    "core-inner",
                    Geometry::Icosahedron {
                        radius: 0.25,
                        detail: 2,
                    },
                    Material::standard(WHITE)
                        .with_emissive(IVORY, pick(3.0 + self.intensity, 0.5))
                        .with_opacity(pick(1.0, 0.3)),
                )
                .with_transform(Transform::IDENTITY.with_scale(self.inner_scale.value())),
            )
            .with_child(
                SceneNode::mesh(
                    "core-lattice",
                    Geometry::Dodecahedron { radius: 0.3 },
                    Material::standard(GOLD)
                        .with_emissive(GOLD, pick(1.5, 0.2))
                        .with_opacity(0.6)
                        .wireframe(),
                )
                .with_transform(Transform::IDENTITY.with_uniform_scale(0.8)),
            )
            .with_child(
                SceneNode::mesh(
                    "core-glow",
                    Geometry::Sphere { radius: 0.4 },
                    Material::standard(CREAM)
                        .with_emissive(GOLD, pick(0.8, 0.1))
                        .with_opacity(pick(0.3, 0.05))
                        .with_side(Side::Back),
                )
                .with_transform(Transform::IDENTITY.with_scale(self.glow_scale.value())),
            )
            .with_child(
                SceneNode::group("light-rays")
                    .with_transform(
                        Transform::IDENTITY.with_rotation(DVec3::new(0.0, 0.0, self.rays_spin)),
                    )
                    .with_children(rays),
            )
            .with_child(SceneNode::light(
                "core-light",
                Light::new(
                    LightKind::Point {
                        distance: 8.0,
                        decay: 2.0,
                    },
                    GOLD,
                    pick(3.0 + self.intensity, 0.3),
                ),
            ))
            .with_child(SceneNode::light(
                "core-light-white",
                Light::new(
                    LightKind::Point {
                        distance: 4.0,
                        decay: 2.0,
                    },
                    WHITE,
                    pick(2.0, 0.1),
                ),
            ))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn hidden_core_shrinks_toward_rest_scale() {
        let mut core = CelestialCore::new();
        let time = FrameTime::new(Duration::from_millis(16), Duration::from_secs(1));
        for _ in 0..400 {
            core.update(false, 0.0, time);
        }
        assert!((core.inner_scale() - 0.3).abs() < 1e-3);
        assert!((core.glow_scale() - 0.5).abs() < 1e-3);
        assert!(core.ray_length(7).is_some_and(|len| (len - 0.1).abs() < 1e-3));
        assert_eq!(core.ray_length(RAY_COUNT), None);
    }
}
