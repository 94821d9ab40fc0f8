use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::IntervalTicker;
use crate::error::{PortalError, PortalResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssemblyPhase {
    NotStarted,
    Running,
    Complete,
}

/// Tick cadence of the assembly progress driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssemblyConfig {
    pub tick_interval_ms: u64,
    /// Progress added per tick.
    pub increment: f64,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 30,
            increment: 0.015,
        }
    }
}

impl AssemblyConfig {
    /// Slower, coarser cadence of the cylinder portal.
    #[must_use]
    pub fn cylinder() -> Self {
        Self {
            tick_interval_ms: 50,
            increment: 0.02,
        }
    }

    #[must_use]
    pub fn tick_interval(self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(self) -> PortalResult<Self> {
        if self.tick_interval_ms == 0 {
            return Err(PortalError::InvalidData(
                "assembly tick interval must be > 0".to_owned(),
            ));
        }
        if !self.increment.is_finite() || self.increment <= 0.0 || self.increment > 1.0 {
            return Err(PortalError::InvalidData(
                "assembly increment must be finite and in (0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Outcome of one driver call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyStep {
    Idle,
    Advanced,
    /// Reported exactly once per driver, on entry to `Complete`.
    Completed,
}

impl AssemblyStep {
    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Drives assembly progress from 0 to 1 on a fixed tick.
///
/// Progress is monotonically non-decreasing and clamped at 1. Entering
/// `Complete` cancels the ticker, so later `advance` calls are no-ops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblyDriver {
    config: AssemblyConfig,
    phase: AssemblyPhase,
    progress: f64,
    ticks: u32,
    ticker: IntervalTicker,
}

impl AssemblyDriver {
    pub fn new(config: AssemblyConfig) -> PortalResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            phase: AssemblyPhase::NotStarted,
            progress: 0.0,
            ticks: 0,
            ticker: IntervalTicker::new(config.tick_interval())?,
        })
    }

    #[must_use]
    pub fn phase(&self) -> AssemblyPhase {
        self.phase
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == AssemblyPhase::Complete
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    /// Mounts the driver.
    ///
    /// Starts ticking when `assembled` is false; otherwise jumps straight to
    /// `Complete` without animating. Calls after the first are ignored.
    pub fn start(&mut self, assembled: bool) -> AssemblyStep {
        if self.phase != AssemblyPhase::NotStarted {
            return AssemblyStep::Idle;
        }
        if assembled {
            return self.finish();
        }
        self.phase = AssemblyPhase::Running;
        self.ticker.start();
        debug!(
            tick_interval_ms = self.config.tick_interval_ms,
            increment = self.config.increment,
            "assembly started"
        );
        AssemblyStep::Idle
    }

    /// Applies an externally supplied `assembled` flag.
    ///
    /// A true flag completes the driver if it has not completed yet. A false
    /// flag never rewinds progress.
    pub fn set_assembled(&mut self, assembled: bool) -> AssemblyStep {
        if assembled && self.phase != AssemblyPhase::Complete {
            return self.finish();
        }
        AssemblyStep::Idle
    }

    pub fn advance(&mut self, delta: Duration) -> AssemblyStep {
        if self.phase != AssemblyPhase::Running {
            return AssemblyStep::Idle;
        }
        let ticks = self.ticker.advance(delta);
        if ticks == 0 {
            return AssemblyStep::Idle;
        }
        // Progress is `ticks * increment`, never an accumulated sum.
        self.ticks = self.ticks.saturating_add(ticks);
        let progress = f64::from(self.ticks) * self.config.increment;
        trace!(ticks = self.ticks, progress, "assembly tick");
        if progress >= 1.0 {
            return self.finish();
        }
        self.progress = progress;
        AssemblyStep::Advanced
    }

    fn finish(&mut self) -> AssemblyStep {
        self.ticker.cancel();
        self.progress = 1.0;
        self.phase = AssemblyPhase::Complete;
        debug!("assembly complete");
        AssemblyStep::Completed
    }
}
