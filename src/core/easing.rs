use serde::{Deserialize, Serialize};

/// Progress-to-displacement curve applied by the fragment layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^3`, decelerating toward completion.
    #[default]
    CubicOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => clamp_unit(t),
            Self::CubicOut => ease_out_cubic(t),
        }
    }
}

/// Clamps to `[0, 1]`; non-finite input maps to `0`.
#[must_use]
pub fn clamp_unit(t: f64) -> f64 {
    if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 }
}

#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = clamp_unit(t);
    1.0 - (1.0 - t).powi(3)
}

/// Hermite smoothstep with GLSL semantics, including reversed edges.
#[must_use]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = clamp_unit((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::{Easing, ease_out_cubic, smoothstep};

    #[test]
    fn cubic_out_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() <= 1e-12);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::CubicOut.apply(-3.0), 0.0);
        assert_eq!(Easing::Linear.apply(4.0), 1.0);
        assert_eq!(Easing::Linear.apply(f64::NAN), 0.0);
    }

    #[test]
    fn reversed_smoothstep_fades_out() {
        assert_eq!(smoothstep(1.0, 0.0, 0.0), 1.0);
        assert_eq!(smoothstep(1.0, 0.0, 1.0), 0.0);
        assert!((smoothstep(1.0, 0.0, 0.5) - 0.5).abs() <= 1e-12);
    }
}
