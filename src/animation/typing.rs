use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{OneShotTimer, TimerSet};
use crate::error::{PortalError, PortalResult};

/// How clear timers are scheduled when edits arrive faster than the delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypingPulsePolicy {
    /// One timer per field, re-armed on every change. The flag clears
    /// `clear_delay` after the most recent change.
    #[default]
    Debounce,
    /// Every change schedules its own timer and any firing timer clears the
    /// flag, even if a newer change is still inside its window.
    OverlappingTimers,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypingPulseConfig {
    pub clear_delay_ms: u64,
    #[serde(default)]
    pub policy: TypingPulsePolicy,
}

impl Default for TypingPulseConfig {
    fn default() -> Self {
        Self {
            clear_delay_ms: 150,
            policy: TypingPulsePolicy::Debounce,
        }
    }
}

impl TypingPulseConfig {
    #[must_use]
    pub fn cylinder() -> Self {
        Self {
            clear_delay_ms: 200,
            policy: TypingPulsePolicy::Debounce,
        }
    }

    #[must_use]
    pub fn clear_delay(self) -> Duration {
        Duration::from_millis(self.clear_delay_ms)
    }

    pub fn validate(self) -> PortalResult<Self> {
        if self.clear_delay_ms == 0 {
            return Err(PortalError::InvalidData(
                "typing pulse clear delay must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Transient "recently typed" flag for one text field.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingPulse {
    config: TypingPulseConfig,
    last_len: usize,
    typing: bool,
    debounce: OneShotTimer,
    overlapping: TimerSet,
}

impl TypingPulse {
    /// Creates a detector that treats `initial_len` as already observed.
    pub fn new(config: TypingPulseConfig, initial_len: usize) -> PortalResult<Self> {
        Ok(Self {
            config: config.validate()?,
            last_len: initial_len,
            typing: false,
            debounce: OneShotTimer::default(),
            overlapping: TimerSet::default(),
        })
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        match self.config.policy {
            TypingPulsePolicy::Debounce => usize::from(self.debounce.is_armed()),
            TypingPulsePolicy::OverlappingTimers => self.overlapping.len(),
        }
    }

    /// Records the current text length; returns `true` when it changed.
    pub fn observe(&mut self, len: usize) -> bool {
        if len == self.last_len {
            return false;
        }
        trace!(previous = self.last_len, len, "typing pulse");
        self.last_len = len;
        self.typing = true;
        let delay = self.config.clear_delay();
        match self.config.policy {
            TypingPulsePolicy::Debounce => self.debounce.arm(delay),
            TypingPulsePolicy::OverlappingTimers => self.overlapping.schedule(delay),
        }
        true
    }

    /// Runs pending clear timers forward by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        let fired = match self.config.policy {
            TypingPulsePolicy::Debounce => self.debounce.advance(delta),
            TypingPulsePolicy::OverlappingTimers => self.overlapping.advance(delta) > 0,
        };
        if fired {
            self.typing = false;
        }
    }
}
