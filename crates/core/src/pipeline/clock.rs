//! Pipeline Clock.
//!
//! This module implements the cycle state machine that drives a simulation. It performs:
//! 1. **Lifecycle:** `start`, `pause`, `resume`, and `reset` with guarded transitions.
//! 2. **Cycle Advance:** One cycle per `tick`, recomputing every instruction's stage.
//! 3. **Bubble Injection:** Each load-use stall is consumed exactly once, in the cycle its
//!    dependent instruction would otherwise enter ID.
//! 4. **Termination:** The run finishes once the cycle passes the completion cycle, which
//!    grows by one for every injected bubble.
//!
//! ```text
//!            start            pause
//!   Idle ───────────▶ Running ─────▶ Paused
//!    ▲                 │   ▲ resume    │
//!    │                 │   └───────────┘
//!    │ reset (any)     ▼ last WB
//!    └──────────── Finished
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, info, trace};

use super::hazards::{self, HazardReport};
use super::occupancy::{self, OccupancyGrid};
use super::stage::Stage;
use crate::common::constants::STAGE_COUNT;
use crate::common::error::{ClockError, Transition};
use crate::common::reg::Reg;
use crate::isa::{DecodedInstruction, RawInstruction, decode};

/// Observable phase of the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockState {
    /// No program loaded.
    Idle,
    /// Advancing on every tick.
    Running,
    /// Suspended with cycles left; ticks are ignored.
    Paused,
    /// Last instruction has retired; state is frozen.
    Finished,
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// A bubble that has been injected into the schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct InjectedBubble {
    /// Index of the load producing the value.
    pub producer: usize,
    /// Index of the dependent instruction held back by this bubble.
    pub before: usize,
    /// Register the dependent instruction was waiting on.
    pub register: Reg,
    /// Cycle in which the bubble occupied the pipeline.
    pub cycle: u64,
}

/// Result of a single [`PipelineClock::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The pipeline moved to `cycle` with no bubble.
    Advanced {
        /// New current cycle.
        cycle: u64,
    },
    /// The pipeline moved to `cycle` and a bubble was injected ahead of `before`.
    Bubble {
        /// New current cycle.
        cycle: u64,
        /// Dependent instruction held in IF.
        before: usize,
    },
    /// The last instruction retired; the clock is now finished at `cycle`.
    Finished {
        /// Completion cycle.
        cycle: u64,
    },
    /// The clock is paused or finished; nothing changed.
    Held,
}

/// State of one simulation run.
///
/// Created by [`PipelineClock::start`] and owned exclusively by the clock. The hazard
/// report is computed once at creation and never changes afterwards.
#[derive(Clone, Debug)]
pub struct SimulationState {
    instructions: Vec<RawInstruction>,
    decoded: Vec<DecodedInstruction>,
    hazards: HazardReport,
    current_cycle: u64,
    stage_per_instruction: Vec<Option<Stage>>,
    phase: ClockState,
    bubbles: Vec<InjectedBubble>,
}

impl SimulationState {
    fn new(instructions: Vec<RawInstruction>) -> Self {
        let decoded: Vec<DecodedInstruction> =
            instructions.iter().map(|raw| decode(raw.word())).collect();
        let hazards = hazards::analyze(&decoded);

        let mut sim = Self {
            instructions,
            decoded,
            hazards,
            current_cycle: 1,
            stage_per_instruction: Vec::new(),
            phase: ClockState::Running,
            bubbles: Vec::new(),
        };
        sim.stage_per_instruction = sim.project(1);
        sim
    }

    /// Program being simulated, as submitted.
    pub fn instructions(&self) -> &[RawInstruction] {
        &self.instructions
    }

    /// Decoded form of each instruction.
    pub fn decoded(&self) -> &[DecodedInstruction] {
        &self.decoded
    }

    /// Hazards found when the run started.
    pub const fn hazards(&self) -> &HazardReport {
        &self.hazards
    }

    /// Current cycle (one-based).
    pub const fn current_cycle(&self) -> u64 {
        self.current_cycle
    }

    /// Stage of every instruction in the current cycle.
    pub fn stage_per_instruction(&self) -> &[Option<Stage>] {
        &self.stage_per_instruction
    }

    /// Stage of instruction `index` in the current cycle.
    pub fn stage_of(&self, index: usize) -> Option<Stage> {
        self.stage_per_instruction.get(index).copied().flatten()
    }

    /// Number of pipeline stages.
    pub const fn stage_count(&self) -> usize {
        STAGE_COUNT
    }

    /// Bubbles injected so far, in injection order.
    pub fn bubbles(&self) -> &[InjectedBubble] {
        &self.bubbles
    }

    /// Number of bubbles injected so far.
    pub fn bubbles_consumed(&self) -> u64 {
        self.bubbles.len() as u64
    }

    /// Bubbles consumed per dependent instruction.
    pub fn stall_bubbles_consumed(&self) -> BTreeMap<usize, u64> {
        let mut per_instruction = BTreeMap::new();
        for bubble in &self.bubbles {
            *per_instruction.entry(bubble.before).or_insert(0) += 1;
        }
        per_instruction
    }

    /// Bubbles injected ahead of instruction `index` by the end of `cycle`.
    pub fn bubbles_before(&self, index: usize, cycle: u64) -> u64 {
        self.bubbles
            .iter()
            .filter(|b| b.before <= index && b.cycle <= cycle)
            .count() as u64
    }

    /// Completion cycle given the bubbles injected so far.
    pub fn completion_cycle(&self) -> u64 {
        occupancy::completion_cycle(self.instructions.len(), self.bubbles_consumed())
    }

    /// Completion cycle once every known stall has been consumed.
    pub fn projected_completion_cycle(&self) -> u64 {
        occupancy::completion_cycle(self.instructions.len(), self.hazards.stall_count() as u64)
    }

    /// Current lifecycle phase.
    pub const fn phase(&self) -> ClockState {
        self.phase
    }

    /// Occupancy of every instruction over cycles `1..=completion_cycle`.
    ///
    /// Columns past the current cycle assume no further bubbles.
    pub fn occupancy_grid(&self) -> OccupancyGrid {
        OccupancyGrid::project(self.instructions.len(), self.completion_cycle(), |i, c| {
            self.bubbles_before(i, c)
        })
    }

    fn project(&self, cycle: u64) -> Vec<Option<Stage>> {
        (0..self.instructions.len())
            .map(|index| occupancy::stage_for(index, cycle, self.bubbles_before(index, cycle)))
            .collect()
    }

    fn is_consumed(&self, dependent: usize) -> bool {
        self.bubbles.iter().any(|b| b.before == dependent)
    }

    /// Consumes every pending stall whose dependent instruction would enter ID at `cycle`.
    ///
    /// Returns the first bubble injected, if any.
    fn inject_due_bubbles(&mut self, cycle: u64) -> Option<InjectedBubble> {
        let mut first = None;
        let pending: Vec<_> = self
            .hazards
            .stalls()
            .filter(|edge| !self.is_consumed(edge.to))
            .copied()
            .collect();

        for edge in pending {
            let bubbles = self.bubbles_before(edge.to, cycle);
            if occupancy::stage_for(edge.to, cycle, bubbles) != Some(Stage::Id) {
                continue;
            }
            let bubble = InjectedBubble {
                producer: edge.from,
                before: edge.to,
                register: edge.register,
                cycle,
            };
            info!(
                cycle,
                producer = edge.from,
                dependent = edge.to,
                register = %edge.register,
                "load-use stall: injecting bubble"
            );
            self.bubbles.push(bubble);
            first = first.or(Some(bubble));
        }
        first
    }
}

/// Cycle state machine for a single simulation.
///
/// At most one [`SimulationState`] exists at a time; `reset` discards it.
///
/// # Examples
///
/// ```
/// use mipsviz_core::PipelineClock;
/// use mipsviz_core::isa::RawInstruction;
///
/// let program = vec!["00221820".parse::<RawInstruction>()?, "00000000".parse()?];
/// let mut clock = PipelineClock::new();
/// clock.start(program)?;
///
/// let mut ticks = 0;
/// while !clock.is_finished() {
///     clock.tick()?;
///     ticks += 1;
/// }
/// assert_eq!(ticks, 6);
/// assert_eq!(clock.current_cycle(), 6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct PipelineClock {
    sim: Option<SimulationState>,
}

impl PipelineClock {
    /// Creates an idle clock.
    pub const fn new() -> Self {
        Self { sim: None }
    }

    /// Current phase.
    pub fn state(&self) -> ClockState {
        self.sim.as_ref().map_or(ClockState::Idle, SimulationState::phase)
    }

    /// Active simulation, if any.
    pub const fn simulation(&self) -> Option<&SimulationState> {
        self.sim.as_ref()
    }

    /// Current cycle; zero while idle.
    pub fn current_cycle(&self) -> u64 {
        self.sim.as_ref().map_or(0, SimulationState::current_cycle)
    }

    /// Completion cycle so far; zero while idle.
    pub fn max_cycles(&self) -> u64 {
        self.sim.as_ref().map_or(0, SimulationState::completion_cycle)
    }

    /// Returns `true` while the clock advances on ticks.
    pub fn is_running(&self) -> bool {
        self.state() == ClockState::Running
    }

    /// Returns `true` once the last instruction has retired.
    pub fn is_finished(&self) -> bool {
        self.state() == ClockState::Finished
    }

    /// Stage of every instruction in the current cycle; empty while idle.
    pub fn stage_per_instruction(&self) -> &[Option<Stage>] {
        match &self.sim {
            Some(sim) => sim.stage_per_instruction(),
            None => &[],
        }
    }

    /// Hazards of the active program.
    pub fn hazards(&self) -> Option<&HazardReport> {
        self.sim.as_ref().map(SimulationState::hazards)
    }

    /// Loads `instructions` and begins at cycle 1.
    ///
    /// Valid while idle or after a run has finished. The instructions must already be
    /// validated; decoding never fails.
    ///
    /// # Errors
    ///
    /// [`ClockError::InvalidTransition`] if a run is in progress or `instructions` is empty.
    pub fn start(&mut self, instructions: Vec<RawInstruction>) -> Result<(), ClockError> {
        let state = self.state();
        if matches!(state, ClockState::Running | ClockState::Paused) {
            return Err(ClockError::invalid(
                Transition::Start,
                state,
                "a simulation is already in progress",
            ));
        }
        if instructions.is_empty() {
            return Err(ClockError::invalid(Transition::Start, state, "program is empty"));
        }

        let sim = SimulationState::new(instructions);
        debug!(
            instructions = sim.instructions.len(),
            forwards = sim.hazards.forward_count(),
            stalls = sim.hazards.stall_count(),
            "simulation started"
        );
        self.sim = Some(sim);
        Ok(())
    }

    /// Advances one cycle.
    ///
    /// While paused or finished the tick is ignored and [`TickOutcome::Held`] is returned.
    ///
    /// # Errors
    ///
    /// [`ClockError::InvalidTransition`] if no program is loaded.
    pub fn tick(&mut self) -> Result<TickOutcome, ClockError> {
        let Some(sim) = self.sim.as_mut() else {
            return Err(ClockError::invalid(
                Transition::Tick,
                ClockState::Idle,
                "no program loaded",
            ));
        };
        if sim.phase != ClockState::Running {
            trace!(phase = %sim.phase, "tick ignored");
            return Ok(TickOutcome::Held);
        }

        let next = sim.current_cycle + 1;
        let bubble = sim.inject_due_bubbles(next);
        sim.stage_per_instruction = sim.project(next);

        let completion = sim.completion_cycle();
        if next > completion {
            sim.current_cycle = completion;
            sim.phase = ClockState::Finished;
            debug!(cycle = completion, bubbles = sim.bubbles.len(), "simulation finished");
            return Ok(TickOutcome::Finished { cycle: completion });
        }

        sim.current_cycle = next;
        trace!(cycle = next, stages = ?sim.stage_per_instruction, "tick");
        Ok(match bubble {
            Some(b) => TickOutcome::Bubble {
                cycle: next,
                before: b.before,
            },
            None => TickOutcome::Advanced { cycle: next },
        })
    }

    /// Suspends a running simulation without touching the cycle.
    ///
    /// # Errors
    ///
    /// [`ClockError::InvalidTransition`] unless the clock is running.
    pub fn pause(&mut self) -> Result<(), ClockError> {
        let state = self.state();
        match self.sim.as_mut() {
            Some(sim) if state == ClockState::Running => {
                sim.phase = ClockState::Paused;
                debug!(cycle = sim.current_cycle, "simulation paused");
                Ok(())
            }
            _ => Err(ClockError::invalid(
                Transition::Pause,
                state,
                "only a running simulation can be paused",
            )),
        }
    }

    /// Continues a paused simulation.
    ///
    /// # Errors
    ///
    /// [`ClockError::InvalidTransition`] unless the clock is paused.
    pub fn resume(&mut self) -> Result<(), ClockError> {
        let state = self.state();
        match self.sim.as_mut() {
            Some(sim) if state == ClockState::Paused => {
                sim.phase = ClockState::Running;
                debug!(cycle = sim.current_cycle, "simulation resumed");
                Ok(())
            }
            _ => Err(ClockError::invalid(
                Transition::Resume,
                state,
                "only a paused simulation can be resumed",
            )),
        }
    }

    /// Discards all simulation state and returns to idle. Always succeeds.
    pub fn reset(&mut self) {
        if let Some(sim) = self.sim.take() {
            debug!(cycle = sim.current_cycle, "simulation reset");
        }
    }
}
