//! Pipeline model.
//!
//! This module implements the five-stage in-order pipeline as seen by the visualizer. It
//! includes:
//! 1. **Stages:** The IF/ID/EX/MEM/WB stage enumeration.
//! 2. **Hazards:** Adjacent-pair RAW analysis, computed once per run.
//! 3. **Occupancy:** Pure mapping from `(instruction, cycle)` to stage.
//! 4. **Clock:** The lifecycle state machine and bubble injection.
//! 5. **Snapshot:** Serializable read-only views for presentation layers.

/// Cycle state machine and per-run simulation state.
pub mod clock;

/// Data hazard analysis between neighbouring instructions.
pub mod hazards;

/// Stage occupancy projection.
pub mod occupancy;

/// Read-only snapshots for presentation layers.
pub mod snapshot;

/// Pipeline stage enumeration.
pub mod stage;

pub use clock::{ClockState, InjectedBubble, PipelineClock, SimulationState, TickOutcome};
pub use hazards::{HazardEdge, HazardKind, HazardReport};
pub use occupancy::{OccupancyGrid, completion_cycle, stage_for};
pub use snapshot::{HazardView, InstructionView, PipelineSnapshot};
pub use stage::Stage;
