use std::f64::consts::{FRAC_PI_4, TAU};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};

use super::easing::{Easing, clamp_unit};

/// Progress above which the connecting struts between rings fade in.
pub const STRUT_REVEAL_PROGRESS: f64 = 0.8;

/// Derived transform of one assembly fragment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentTransform {
    pub position: DVec3,
    /// Spin angle in radians, scaled per axis by the owning element.
    pub rotation: f64,
    pub opacity: f64,
}

impl FragmentTransform {
    #[must_use]
    pub fn is_identity(self) -> bool {
        self.position == DVec3::ZERO && self.rotation == 0.0
    }
}

/// Scatter geometry used to explode fragments away from their rest pose.
///
/// Fragment `i` starts at angle `i / count * 2π + angle_offset`, pushed out
/// by `spread_distance` and lifted by `(i - (count - 1) / 2) * height_step`.
/// Everything collapses to the identity transform as progress reaches 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FragmentLayout {
    pub fragment_count: u32,
    pub angle_offset: f64,
    pub spread_distance: f64,
    pub height_step: f64,
    /// Full turns applied at progress 0.
    pub spin_turns: f64,
    pub easing: Easing,
}

impl Default for FragmentLayout {
    fn default() -> Self {
        Self::celestial()
    }
}

impl FragmentLayout {
    /// Four-fragment orb: three rings and the core.
    #[must_use]
    pub const fn celestial() -> Self {
        Self {
            fragment_count: 4,
            angle_offset: FRAC_PI_4,
            spread_distance: 6.0,
            height_step: 2.0,
            spin_turns: 1.0,
            easing: Easing::CubicOut,
        }
    }

    /// Three-fragment cylinder with linear, spin-free assembly.
    #[must_use]
    pub const fn cylinder() -> Self {
        Self {
            fragment_count: 3,
            angle_offset: 0.0,
            spread_distance: 8.0,
            height_step: 3.0,
            spin_turns: 0.0,
            easing: Easing::Linear,
        }
    }

    pub fn validate(self) -> PortalResult<Self> {
        if self.fragment_count == 0 {
            return Err(PortalError::InvalidData(
                "fragment count must be > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("angle_offset", self.angle_offset),
            ("spread_distance", self.spread_distance),
            ("height_step", self.height_step),
            ("spin_turns", self.spin_turns),
        ] {
            if !value.is_finite() {
                return Err(PortalError::InvalidData(format!(
                    "fragment layout `{name}` must be finite"
                )));
            }
        }
        if self.spread_distance < 0.0 {
            return Err(PortalError::InvalidData(
                "fragment spread distance must be >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Pure layout of fragment `index` at assembly `progress`.
    ///
    /// Progress is clamped to `[0, 1]`; non-finite progress counts as 0.
    #[must_use]
    pub fn layout(&self, index: u32, progress: f64) -> FragmentTransform {
        let eased = self.easing.apply(progress);
        let remaining = 1.0 - eased;
        let count = f64::from(self.fragment_count.max(1));
        let index = f64::from(index);

        let angle = index / count * TAU + self.angle_offset;
        let distance = remaining * self.spread_distance;
        let height = remaining * (index - (count - 1.0) / 2.0) * self.height_step;

        FragmentTransform {
            position: DVec3::new(angle.cos() * distance, height, angle.sin() * distance),
            rotation: remaining * self.spin_turns * TAU,
            opacity: eased,
        }
    }
}

/// Celestial-preset layout of one fragment.
#[must_use]
pub fn layout(index: u32, progress: f64) -> FragmentTransform {
    FragmentLayout::celestial().layout(index, progress)
}

/// Opacity of the connecting struts, or `None` while they stay hidden.
#[must_use]
pub fn strut_opacity(progress: f64) -> Option<f64> {
    let progress = clamp_unit(progress);
    if progress > STRUT_REVEAL_PROGRESS {
        Some(((progress - STRUT_REVEAL_PROGRESS) * 5.0).min(1.0))
    } else {
        None
    }
}
