use std::f64::consts::TAU;

use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::interaction::PointerPosition;
use crate::render::{Color, Geometry, Material, SceneNode, Transform};

pub const SHELL_INNER_RADIUS: f64 = 3.0;
pub const SHELL_THICKNESS: f64 = 12.0;
const PARALLAX: f64 = 0.02;
const CREAM_DUST: Color = Color::rgb(0.95, 0.9, 0.7);
const TEAL_DUST: Color = Color::rgb(0.2, 0.8, 0.8);

/// Samples one particle color: mostly rich gold, some cream, a few teal.
fn sample_color<R: Rng>(rng: &mut R) -> Color {
    let variant = rng.random::<f64>();
    if variant < 0.6 {
        Color::rgb(
            0.95 + rng.random::<f64>() * 0.05,
            0.75 + rng.random::<f64>() * 0.15,
            0.2 + rng.random::<f64>() * 0.2,
        )
    } else if variant < 0.85 {
        CREAM_DUST
    } else {
        TEAL_DUST
    }
}

/// Uniform direction on the unit sphere scaled into the dust shell.
fn sample_position<R: Rng>(rng: &mut R) -> DVec3 {
    let radius = SHELL_INNER_RADIUS + rng.random::<f64>() * SHELL_THICKNESS;
    let theta = rng.random::<f64>() * TAU;
    let phi = (2.0 * rng.random::<f64>() - 1.0).acos();
    DVec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Drifting gold dust around the scene.
///
/// Rest positions are sampled once from a seeded generator, so two clouds
/// with the same seed are identical.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldDust {
    origins: Vec<DVec3>,
    positions: Vec<DVec3>,
    colors: Vec<Color>,
    spin: f64,
}

impl GoldDust {
    #[must_use]
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut origins = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            origins.push(sample_position(&mut rng));
            colors.push(sample_color(&mut rng));
        }
        Self {
            positions: origins.clone(),
            origins,
            colors,
            spin: 0.0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    #[must_use]
    pub fn origins(&self) -> &[DVec3] {
        &self.origins
    }

    #[must_use]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Recomputes drift and pointer parallax from the rest positions.
    pub fn update(&mut self, time: f64, pointer: PointerPosition) {
        let time = if time.is_finite() { time } else { 0.0 };
        for (i, (position, origin)) in self.positions.iter_mut().zip(&self.origins).enumerate() {
            let phase = i as f64;
            let drift = DVec3::new(
                (time * 0.3 + phase * 0.1).sin() * 0.1,
                (time * 0.2 + phase * 0.15).sin() * 0.15,
                (time * 0.25 + phase * 0.1).cos() * 0.1,
            );
            let parallax = DVec3::new(pointer.x, pointer.y, 0.0) * (origin.z * PARALLAX);
            *position = *origin + drift + parallax;
        }
        self.spin = time * 0.02;
    }

    #[must_use]
    pub fn node(&self) -> SceneNode {
        SceneNode::mesh(
            "gold-dust",
            Geometry::Points {
                positions: self.positions.clone(),
                colors: self.colors.clone(),
                size: 0.03,
            },
            Material::standard(Color::rgb(1.0, 1.0, 1.0))
                .with_opacity(0.8)
                .additive(),
        )
        .with_transform(Transform::IDENTITY.with_rotation(DVec3::new(0.0, self.spin, 0.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_inside_the_shell() {
        let dust = GoldDust::new(256, 11);
        assert_eq!(dust.len(), 256);
        for origin in dust.origins() {
            let radius = origin.length();
            assert!(radius >= SHELL_INNER_RADIUS - 1e-9);
            assert!(radius <= SHELL_INNER_RADIUS + SHELL_THICKNESS + 1e-9);
        }
    }

    #[test]
    fn same_seed_gives_same_cloud() {
        assert_eq!(GoldDust::new(32, 7), GoldDust::new(32, 7));
        assert_ne!(GoldDust::new(32, 7).origins(), GoldDust::new(32, 8).origins());
    }
}
