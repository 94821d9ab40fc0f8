use std::f64::consts::TAU;

use glam::{DQuat, DVec3};

use crate::core::{SmoothedVec3, SmoothingFactor};
use crate::interaction::ActiveField;
use crate::render::CameraPose;

pub const FOV_DEGREES: f64 = 50.0;
/// Auto-orbit speed in orbit-control units (one unit is a turn per minute).
pub const LOGIN_AUTO_ROTATE: f64 = 0.3;
pub const DASHBOARD_AUTO_ROTATE: f64 = 0.2;

/// Framing of the orb for the focused form field.
#[must_use]
pub fn field_pose(field: ActiveField) -> CameraPose {
    let (position, look_at) = match field {
        ActiveField::Password => (DVec3::new(2.0, 1.5, 4.0), DVec3::new(0.0, -0.2, 0.0)),
        ActiveField::Username => (DVec3::new(-0.5, 1.0, 5.0), DVec3::new(0.0, 0.3, 0.0)),
        ActiveField::None => (DVec3::new(0.0, 0.5, 5.0), DVec3::ZERO),
    };
    CameraPose {
        position,
        look_at,
        fov_degrees: FOV_DEGREES,
    }
}

/// Damped camera that eases between poses and orbits while idle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    home: CameraPose,
    position: SmoothedVec3,
    look_at: SmoothedVec3,
    auto_rotate_speed: f64,
    orbit_angle: f64,
    focus: ActiveField,
}

impl CameraRig {
    #[must_use]
    pub fn new(home: CameraPose, auto_rotate_speed: f64) -> Self {
        Self {
            home,
            position: SmoothedVec3::new(home.position, SmoothingFactor::GENTLE),
            look_at: SmoothedVec3::new(home.look_at, SmoothingFactor::GENTLE),
            auto_rotate_speed,
            orbit_angle: 0.0,
            focus: ActiveField::None,
        }
    }

    /// Login rig: starts unfocused and orbits at 0.3.
    #[must_use]
    pub fn login() -> Self {
        Self::new(field_pose(ActiveField::None), LOGIN_AUTO_ROTATE)
    }

    /// Dashboard rig: fixed pose at `(0, 0, 8)` orbiting at 0.2.
    #[must_use]
    pub fn dashboard() -> Self {
        Self::new(
            CameraPose {
                position: DVec3::new(0.0, 0.0, 8.0),
                look_at: DVec3::ZERO,
                fov_degrees: FOV_DEGREES,
            },
            DASHBOARD_AUTO_ROTATE,
        )
    }

    #[must_use]
    pub fn orbit_angle(&self) -> f64 {
        self.orbit_angle
    }

    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position.value(),
            look_at: self.look_at.value(),
            fov_degrees: self.home.fov_degrees,
        }
    }

    /// Eases toward the pose for `focus`; orbits only while nothing is focused.
    pub fn update_login(&mut self, focus: ActiveField, delta_seconds: f64) {
        if focus != self.focus {
            self.focus = focus;
            self.home = field_pose(focus);
            if focus != ActiveField::None {
                self.orbit_angle = 0.0;
            }
        }
        self.step(focus == ActiveField::None, delta_seconds);
    }

    /// Orbits unconditionally around the home pose.
    pub fn update_orbit(&mut self, delta_seconds: f64) {
        self.step(true, delta_seconds);
    }

    fn step(&mut self, orbiting: bool, delta_seconds: f64) {
        if orbiting && delta_seconds.is_finite() {
            self.orbit_angle =
                (self.orbit_angle + delta_seconds * self.auto_rotate_speed * TAU / 60.0) % TAU;
        }
        let offset = self.home.position - self.home.look_at;
        let target = self.home.look_at + DQuat::from_rotation_y(self.orbit_angle) * offset;
        self.position.step(target);
        self.look_at.step(self.home.look_at);
    }
}
