//! Read-only pipeline snapshot.
//!
//! A `PipelineSnapshot` is everything a presentation layer needs to draw one cycle: the
//! clock flags, each instruction with its disassembly and stage, and the hazard edges.
//! It owns its data and serializes to JSON for the browser and `--json` output.

use std::collections::BTreeMap;

use serde::Serialize;

use super::clock::{ClockState, PipelineClock};
use super::hazards::{HazardEdge, HazardKind};
use super::stage::Stage;
use crate::common::reg::RegisterNaming;
use crate::isa::disassemble_with;

/// One row of the instruction list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InstructionView {
    /// Program position.
    pub index: usize,
    /// Hex text as supplied.
    pub hex: String,
    /// Disassembly.
    pub text: String,
    /// Stage in the current cycle, if in flight.
    pub stage: Option<Stage>,
}

/// A hazard edge with its register rendered for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HazardView {
    /// Producer index.
    pub from: usize,
    /// Consumer index.
    pub to: usize,
    /// Register name (`$2`, or `$v0` with ABI naming).
    pub register: String,
    /// Resolution.
    pub kind: HazardKind,
}

impl HazardView {
    fn new(edge: &HazardEdge, naming: RegisterNaming) -> Self {
        Self {
            from: edge.from,
            to: edge.to,
            register: edge.register.name(naming),
            kind: edge.kind,
        }
    }
}

/// Point-in-time view of a [`PipelineClock`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PipelineSnapshot {
    /// Lifecycle phase.
    pub state: ClockState,
    /// Current cycle; zero while idle.
    pub current_cycle: u64,
    /// Completion cycle given the bubbles injected so far.
    pub max_cycles: u64,
    /// `true` while ticks advance the clock.
    pub is_running: bool,
    /// `true` once the last instruction has retired.
    pub is_finished: bool,
    /// Instruction list with current stages.
    pub instructions: Vec<InstructionView>,
    /// Forwarding edges.
    pub forwards: Vec<HazardView>,
    /// Load-use stall edges.
    pub stalls: Vec<HazardView>,
    /// Bubbles injected so far, keyed by dependent instruction.
    pub bubbles: BTreeMap<usize, u64>,
}

impl PipelineSnapshot {
    /// Captures the clock's current state.
    pub fn capture(clock: &PipelineClock, naming: RegisterNaming) -> Self {
        let Some(sim) = clock.simulation() else {
            return Self::idle();
        };

        let instructions = sim
            .instructions()
            .iter()
            .zip(sim.decoded())
            .enumerate()
            .map(|(index, (raw, decoded))| InstructionView {
                index,
                hex: raw.as_str().to_owned(),
                text: disassemble_with(decoded, naming),
                stage: sim.stage_of(index),
            })
            .collect();

        let hazards = sim.hazards();
        Self {
            state: sim.phase(),
            current_cycle: sim.current_cycle(),
            max_cycles: sim.completion_cycle(),
            is_running: sim.phase() == ClockState::Running,
            is_finished: sim.phase() == ClockState::Finished,
            instructions,
            forwards: hazards.forwards().map(|e| HazardView::new(e, naming)).collect(),
            stalls: hazards.stalls().map(|e| HazardView::new(e, naming)).collect(),
            bubbles: sim.stall_bubbles_consumed(),
        }
    }

    fn idle() -> Self {
        Self {
            state: ClockState::Idle,
            current_cycle: 0,
            max_cycles: 0,
            is_running: false,
            is_finished: false,
            instructions: Vec::new(),
            forwards: Vec::new(),
            stalls: Vec::new(),
            bubbles: BTreeMap::new(),
        }
    }

    /// Serializes to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; in practice this cannot fail for this type.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes to indented JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; in practice this cannot fail for this type.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl PipelineClock {
    /// Captures a [`PipelineSnapshot`] of the current state.
    pub fn snapshot(&self, naming: RegisterNaming) -> PipelineSnapshot {
        PipelineSnapshot::capture(self, naming)
    }
}
