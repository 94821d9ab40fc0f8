use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::IntervalTicker;
use crate::error::{PortalError, PortalResult};

/// Decay and jitter tuning for the error shake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShakeConfig {
    pub tick_interval_ms: u64,
    /// Multiplier applied to intensity on every decay tick.
    pub decay: f64,
    /// Intensity below which the shake snaps to rest.
    pub threshold: f64,
    pub position_jitter: f64,
    pub rotation_jitter: f64,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 30,
            decay: 0.9,
            threshold: 0.01,
            position_jitter: 0.3,
            rotation_jitter: 0.1,
        }
    }
}

impl ShakeConfig {
    #[must_use]
    pub fn tick_interval(self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(self) -> PortalResult<Self> {
        if self.tick_interval_ms == 0 {
            return Err(PortalError::InvalidData(
                "shake tick interval must be > 0".to_owned(),
            ));
        }
        if !self.decay.is_finite() || self.decay <= 0.0 || self.decay >= 1.0 {
            return Err(PortalError::InvalidData(
                "shake decay must be finite and in (0, 1)".to_owned(),
            ));
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 || self.threshold >= 1.0 {
            return Err(PortalError::InvalidData(
                "shake threshold must be finite and in (0, 1)".to_owned(),
            ));
        }
        for (name, value) in [
            ("position_jitter", self.position_jitter),
            ("rotation_jitter", self.rotation_jitter),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PortalError::InvalidData(format!(
                    "shake `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// One frame of shake displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeJitter {
    pub offset_x: f64,
    pub rotation_z: f64,
}

/// Decaying shake intensity started by an error edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorShake {
    config: ShakeConfig,
    intensity: f64,
    ticker: IntervalTicker,
}

impl ErrorShake {
    pub fn new(config: ShakeConfig) -> PortalResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            intensity: 0.0,
            ticker: IntervalTicker::new(config.tick_interval())?,
        })
    }

    #[must_use]
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.intensity > 0.0
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    /// Restarts the shake at full intensity.
    pub fn trigger(&mut self) {
        self.intensity = 1.0;
        self.ticker.start();
        debug!("error shake triggered");
    }

    /// Applies elapsed decay ticks; returns whether the shake is still active.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let ticks = self.ticker.advance(delta);
        for _ in 0..ticks {
            self.intensity *= self.config.decay;
            if self.intensity < self.config.threshold {
                self.intensity = 0.0;
                self.ticker.cancel();
                trace!("error shake settled");
                break;
            }
        }
        self.is_active()
    }

    /// Samples this frame's jitter, or `None` at rest.
    ///
    /// Each component lies within `±0.5 * intensity * jitter_scale`.
    pub fn jitter<R: Rng>(&self, rng: &mut R) -> Option<ShakeJitter> {
        if !self.is_active() {
            return None;
        }
        let offset_x =
            (rng.random::<f64>() - 0.5) * self.intensity * self.config.position_jitter;
        let rotation_z =
            (rng.random::<f64>() - 0.5) * self.intensity * self.config.rotation_jitter;
        Some(ShakeJitter {
            offset_x,
            rotation_z,
        })
    }
}
