//! Simulator: pairs the pipeline clock with its configuration.
//!
//! The clock only knows how to advance one cycle. The simulator adds the loop around it:
//! pulling ticks from a [`TickSource`], enforcing `clock.max_ticks`, and reporting each
//! cycle to an observer.

use tracing::{debug, info};

use super::ticker::TickSource;
use crate::common::error::{ClockError, Transition};
use crate::config::Config;
use crate::isa::RawInstruction;
use crate::pipeline::{ClockState, PipelineClock, PipelineSnapshot, TickOutcome};
use crate::stats::PipelineStats;

/// Why [`Simulator::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The last instruction retired.
    Finished,
    /// The tick source ran dry.
    SourceExhausted,
    /// `clock.max_ticks` was reached.
    TickLimit,
    /// The clock was paused; further ticks would be ignored.
    Paused,
}

/// Summary of one [`Simulator::run`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Why the loop stopped.
    pub reason: StopReason,
    /// Ticks delivered to the clock during this call.
    pub ticks: u64,
    /// Clock cycle when the loop stopped.
    pub cycle: u64,
}

/// Top-level simulator: pipeline clock plus configuration.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    clock: PipelineClock,
    config: Config,
}

impl Simulator {
    /// Creates an idle simulator with the given configuration.
    pub const fn new(config: Config) -> Self {
        Self {
            clock: PipelineClock::new(),
            config,
        }
    }

    /// Configuration in use.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying clock.
    pub const fn clock(&self) -> &PipelineClock {
        &self.clock
    }

    /// Mutable access to the clock for pause, resume, and reset.
    pub const fn clock_mut(&mut self) -> &mut PipelineClock {
        &mut self.clock
    }

    /// Starts a new run of `program`.
    ///
    /// # Errors
    ///
    /// As [`PipelineClock::start`].
    pub fn load(&mut self, program: Vec<RawInstruction>) -> Result<(), ClockError> {
        self.clock.start(program)
    }

    /// Advances one cycle.
    ///
    /// # Errors
    ///
    /// As [`PipelineClock::tick`].
    pub fn tick(&mut self) -> Result<TickOutcome, ClockError> {
        self.clock.tick()
    }

    /// Snapshot using the configured register naming.
    pub fn snapshot(&self) -> PipelineSnapshot {
        self.clock.snapshot(self.config.display.register_names)
    }

    /// Statistics of the active run, if any.
    pub fn stats(&self) -> Option<PipelineStats> {
        self.clock.simulation().map(PipelineStats::collect)
    }

    /// Drives the clock from `source` until it finishes, pauses, the source is exhausted,
    /// or `clock.max_ticks` ticks have been delivered.
    ///
    /// `observer` is called after every tick with the clock and the tick's outcome.
    ///
    /// # Arguments
    ///
    /// * `source` - Decides when each tick happens.
    /// * `observer` - Per-tick callback, typically a renderer.
    ///
    /// # Errors
    ///
    /// [`ClockError::InvalidTransition`] if no program is loaded.
    pub fn run<S, F>(&mut self, mut source: S, mut observer: F) -> Result<RunOutcome, ClockError>
    where
        S: TickSource,
        F: FnMut(&PipelineClock, TickOutcome),
    {
        let limit = self.config.clock.max_ticks;
        let mut ticks = 0;

        let reason = loop {
            match self.clock.state() {
                ClockState::Finished => break StopReason::Finished,
                ClockState::Paused => break StopReason::Paused,
                ClockState::Idle => {
                    return Err(ClockError::invalid(
                        Transition::Tick,
                        ClockState::Idle,
                        "no program loaded",
                    ));
                }
                ClockState::Running => {}
            }
            if limit.is_some_and(|max| ticks >= max) {
                info!(ticks, "tick limit reached");
                break StopReason::TickLimit;
            }
            if !source.next_tick() {
                break StopReason::SourceExhausted;
            }

            let outcome = self.clock.tick()?;
            ticks += 1;
            observer(&self.clock, outcome);
        };

        let outcome = RunOutcome {
            reason,
            ticks,
            cycle: self.clock.current_cycle(),
        };
        debug!(?outcome, "run stopped");
        Ok(outcome)
    }
}
