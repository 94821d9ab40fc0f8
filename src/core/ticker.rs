use std::time::Duration;

use smallvec::SmallVec;

use crate::error::{PortalError, PortalResult};

/// Fixed-interval ticker advanced by host frame deltas.
///
/// The ticker is a plain owned value: cancelling it or dropping its owner
/// guarantees no further ticks. Leftover time below one period carries over
/// to the next `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTicker {
    period: Duration,
    accumulated: Duration,
    running: bool,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> PortalResult<Self> {
        if period.is_zero() {
            return Err(PortalError::InvalidData(
                "tick interval must be > 0".to_owned(),
            ));
        }
        Ok(Self {
            period,
            accumulated: Duration::ZERO,
            running: false,
        })
    }

    #[must_use]
    pub fn period(self) -> Duration {
        self.period
    }

    #[must_use]
    pub fn is_running(self) -> bool {
        self.running
    }

    /// (Re)starts the ticker with an empty accumulator.
    pub fn start(&mut self) {
        self.running = true;
        self.accumulated = Duration::ZERO;
    }

    pub fn cancel(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    /// Returns the number of whole periods elapsed during `delta`.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulated = self.accumulated.saturating_add(delta);
        let ticks = self.accumulated.as_nanos() / self.period.as_nanos();
        let ticks = u32::try_from(ticks).unwrap_or(u32::MAX);
        self.accumulated = self
            .accumulated
            .saturating_sub(self.period.saturating_mul(ticks));
        ticks
    }
}

/// Single-deadline timer; re-arming replaces the pending deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OneShotTimer {
    remaining: Option<Duration>,
}

impl OneShotTimer {
    pub fn arm(&mut self, delay: Duration) {
        self.remaining = Some(delay);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    #[must_use]
    pub fn is_armed(self) -> bool {
        self.remaining.is_some()
    }

    /// Returns `true` exactly once, on the advance that reaches the deadline.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.advance_past(delta).is_some()
    }

    /// Like [`Self::advance`], but reports how far `delta` ran past the
    /// deadline when it fires.
    pub fn advance_past(&mut self, delta: Duration) -> Option<Duration> {
        let remaining = self.remaining?;
        if delta >= remaining {
            self.remaining = None;
            Some(delta - remaining)
        } else {
            self.remaining = Some(remaining - delta);
            None
        }
    }
}

/// Independent one-shot deadlines that all stay pending until they fire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerSet {
    pending: SmallVec<[Duration; 4]>,
}

impl TimerSet {
    pub fn schedule(&mut self, delay: Duration) {
        self.pending.push(delay);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns how many deadlines fired during `delta`.
    pub fn advance(&mut self, delta: Duration) -> usize {
        let before = self.pending.len();
        self.pending.retain(|remaining| {
            if delta >= *remaining {
                false
            } else {
                *remaining -= delta;
                true
            }
        });
        before - self.pending.len()
    }
}
