use std::f64::consts::FRAC_PI_2;

use glam::DVec3;

use crate::core::smoothstep;
use crate::render::{Geometry, Material, SceneNode, ShaderParams, Side, Transform};

use super::palette::{DUSK, NIGHT};

pub const FLOOR_SIZE: f64 = 30.0;
pub const FLOOR_HEIGHT: f64 = -2.5;
const FADE_RADIUS: f64 = 10.0;
const MAX_ALPHA: f64 = 0.6;

/// Vertical ripple displacement of the floor at local `(x, z)`.
#[must_use]
pub fn ripple_height(x: f64, z: f64, time: f64) -> f64 {
    (x * 2.0 + time * 0.5).sin() * (z * 2.0 + time * 0.3).cos() * 0.05
}

/// Radial fade: `0.6` at the centre down to `0` at radius 10.
#[must_use]
pub fn fade_alpha(x: f64, z: f64) -> f64 {
    let distance = x.hypot(z) / FADE_RADIUS;
    smoothstep(1.0, 0.0, distance) * MAX_ALPHA
}

/// Dark rippling water plane under the orb.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReflectiveFloor {
    time: f64,
}

impl ReflectiveFloor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, time: f64) {
        if time.is_finite() {
            self.time = time;
        }
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn node(&self) -> SceneNode {
        SceneNode::mesh(
            "reflective-floor",
            Geometry::Plane {
                width: FLOOR_SIZE,
                height: FLOOR_SIZE,
            },
            Material::standard(NIGHT)
                .with_opacity(MAX_ALPHA)
                .with_side(Side::Double)
                .with_shader(ShaderParams::RippleFloor {
                    time: self.time,
                    base: NIGHT,
                    highlight: DUSK,
                }),
        )
        .with_transform(
            Transform::from_translation(DVec3::new(0.0, FLOOR_HEIGHT, 0.0))
                .with_rotation(DVec3::new(-FRAC_PI_2, 0.0, 0.0)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{fade_alpha, ripple_height};

    #[test]
    fn fade_is_strongest_at_centre_and_gone_at_edge() {
        assert!((fade_alpha(0.0, 0.0) - 0.6).abs() < 1e-12);
        assert_eq!(fade_alpha(6.0, 8.0), 0.0);
        assert!(fade_alpha(3.0, 0.0) > fade_alpha(5.0, 0.0));
    }

    #[test]
    fn ripple_stays_within_amplitude() {
        for step in 0..100 {
            let x = f64::from(step) * 0.37;
            assert!(ripple_height(x, -x, f64::from(step)).abs() <= 0.05);
        }
    }
}
