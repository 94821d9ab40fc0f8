use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PortalError, PortalResult};

/// Per-frame exponential smoothing factor in `(0, 1]`.
///
/// Smaller factors converge more slowly. Values are validated on
/// construction so the per-frame path never sees an invalid factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SmoothingFactor(f64);

impl SmoothingFactor {
    /// Glow shells and other slow-breathing layers.
    pub const SLOW: Self = Self(0.03);
    /// Scale pulses and ring open/close offsets.
    pub const GENTLE: Self = Self(0.05);
    /// Ring rotation toward its accumulated spin target.
    pub const RING: Self = Self(0.08);
    /// Hover scales and the post-shake return to rest.
    pub const BRISK: Self = Self(0.1);

    pub fn new(value: f64) -> PortalResult<Self> {
        if !value.is_finite() || value <= 0.0 || value > 1.0 {
            return Err(PortalError::InvalidData(format!(
                "smoothing factor must be finite and in (0, 1], got {value}"
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for SmoothingFactor {
    type Error = PortalError;

    fn try_from(value: f64) -> PortalResult<Self> {
        Self::new(value)
    }
}

impl From<SmoothingFactor> for f64 {
    fn from(factor: SmoothingFactor) -> Self {
        factor.0
    }
}

/// Unguarded linear interpolation `current + (target - current) * factor`.
#[must_use]
pub fn lerp(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

/// One guarded smoothing step.
///
/// A non-finite target leaves `current` untouched. A non-finite `current`
/// is snapped to the target so a corrupted value cannot keep propagating.
#[must_use]
pub fn smooth_toward(current: f64, target: f64, factor: SmoothingFactor) -> f64 {
    if !target.is_finite() {
        warn!(target, "ignoring non-finite smoothing target");
        return if current.is_finite() { current } else { 0.0 };
    }
    if !current.is_finite() {
        warn!(current, "resetting non-finite smoothed value to target");
        return target;
    }
    lerp(current, target, factor.get())
}

/// Scalar animation property smoothed toward a per-frame target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothed {
    value: f64,
    factor: SmoothingFactor,
}

impl Smoothed {
    #[must_use]
    pub const fn new(initial: f64, factor: SmoothingFactor) -> Self {
        Self {
            value: initial,
            factor,
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn factor(self) -> SmoothingFactor {
        self.factor
    }

    /// Overwrites the value without smoothing.
    pub fn set(&mut self, value: f64) {
        if value.is_finite() {
            self.value = value;
        } else {
            warn!(value, "ignoring non-finite snap value");
        }
    }

    /// Advances one frame toward `target` and returns the new value.
    pub fn step(&mut self, target: f64) -> f64 {
        self.value = smooth_toward(self.value, target, self.factor);
        self.value
    }
}

/// Three-component variant of [`Smoothed`] used for scales and camera poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedVec3 {
    value: DVec3,
    factor: SmoothingFactor,
}

impl SmoothedVec3 {
    #[must_use]
    pub const fn new(initial: DVec3, factor: SmoothingFactor) -> Self {
        Self {
            value: initial,
            factor,
        }
    }

    #[must_use]
    pub const fn value(self) -> DVec3 {
        self.value
    }

    /// Advances one frame toward `target`.
    ///
    /// The whole vector is skipped when any target component is non-finite.
    pub fn step(&mut self, target: DVec3) -> DVec3 {
        if !target.is_finite() {
            warn!(?target, "ignoring non-finite vector smoothing target");
            return self.value;
        }
        self.value = DVec3::new(
            smooth_toward(self.value.x, target.x, self.factor),
            smooth_toward(self.value.y, target.y, self.factor),
            smooth_toward(self.value.z, target.z, self.factor),
        );
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::{SmoothingFactor, smooth_toward};

    #[test]
    fn factor_rejects_out_of_range_values() {
        assert!(SmoothingFactor::new(0.0).is_err());
        assert!(SmoothingFactor::new(1.5).is_err());
        assert!(SmoothingFactor::new(f64::NAN).is_err());
        assert!(SmoothingFactor::new(1.0).is_ok());
    }

    #[test]
    fn nan_current_snaps_to_finite_target() {
        let value = smooth_toward(f64::NAN, 2.0, SmoothingFactor::BRISK);
        assert_eq!(value, 2.0);
    }

    #[test]
    fn nan_on_both_sides_collapses_to_zero() {
        let value = smooth_toward(f64::NAN, f64::NAN, SmoothingFactor::BRISK);
        assert_eq!(value, 0.0);
    }
}
