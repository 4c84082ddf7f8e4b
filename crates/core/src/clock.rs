//! Gravity clock - turns elapsed frame time into gravity steps.
//!
//! The runner feeds the clock the time since the previous frame and the
//! current level. Once the accumulated time is strictly greater than the
//! level's drop interval, the clock reports a single gravity step and starts
//! over. Surplus time is discarded, so a stalled frame never produces a burst
//! of drops.

use crate::scoring::drop_interval_ms;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GravityClock {
    elapsed_ms: u32,
}

impl GravityClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `elapsed_ms`; returns true when a gravity step is due.
    pub fn advance(&mut self, elapsed_ms: u32, level: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms > drop_interval_ms(level) {
            self.elapsed_ms = 0;
            return true;
        }
        false
    }

    /// Time accumulated towards the next step.
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}
