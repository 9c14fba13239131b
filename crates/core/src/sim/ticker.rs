//! Tick sources.
//!
//! The pipeline clock owns no timers. A `TickSource` decides when the next cycle
//! happens, so the same driver loop serves an interactive cadence and batch runs.

use std::thread;
use std::time::Duration;

/// Something that produces "advance one cycle" requests.
pub trait TickSource {
    /// Blocks until the next tick is due.
    ///
    /// Returns `false` once the source has no more ticks to give.
    fn next_tick(&mut self) -> bool;
}

/// Ticks at a fixed wall-clock interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntervalTicker {
    interval: Duration,
}

impl IntervalTicker {
    /// Creates a ticker that sleeps `interval` before every tick.
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Creates a ticker from a millisecond interval.
    pub const fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Interval between ticks.
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl TickSource for IntervalTicker {
    fn next_tick(&mut self) -> bool {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        true
    }
}

/// Ticks immediately, as fast as the caller asks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FreeRunningTicker;

impl TickSource for FreeRunningTicker {
    fn next_tick(&mut self) -> bool {
        true
    }
}

impl<T: TickSource + ?Sized> TickSource for &mut T {
    fn next_tick(&mut self) -> bool {
        (**self).next_tick()
    }
}
