//! Text rendering of pipeline state for the terminal.

use std::fmt::Write as _;

use mipsviz_core::common::RegisterNaming;
use mipsviz_core::isa::disassemble_with;
use mipsviz_core::pipeline::{HazardKind, HazardReport, SimulationState, TickOutcome};
use mipsviz_core::sim::{RunOutcome, StopReason};
use mipsviz_core::stats::PipelineStats;
use serde_json::json;

/// Width of one cycle column in the grid.
const COL: usize = 4;

/// Instruction listing with hex, disassembly, and hazard annotations.
pub fn program_listing(sim: &SimulationState, naming: RegisterNaming) -> String {
    let mut out = String::new();
    let hazards = sim.hazards();
    for (index, (raw, decoded)) in sim.instructions().iter().zip(sim.decoded()).enumerate() {
        let text = disassemble_with(decoded, naming);
        let note = annotation(hazards, index, naming);
        let _ = writeln!(out, "  #{index:<3} {raw}  {text:<24}{note}");
    }
    out
}

fn annotation(hazards: &HazardReport, index: usize, naming: RegisterNaming) -> String {
    hazards
        .edges()
        .iter()
        .find(|e| e.to == index)
        .map(|e| {
            let reg = e.register.name(naming);
            match e.kind {
                HazardKind::LoadUseStall => format!("stall: {reg} from #{}", e.from),
                HazardKind::Forward => format!("fwd: {reg} from #{}", e.from),
            }
        })
        .unwrap_or_default()
}

/// Occupancy grid up to `through_cycle`, one row per instruction.
pub fn grid(sim: &SimulationState, through_cycle: u64) -> String {
    let grid = sim.occupancy_grid();
    let last = through_cycle.min(grid.cycles());
    let mut out = String::new();

    let _ = write!(out, "{:>6}", "cycle");
    for cycle in 1..=last {
        let _ = write!(out, "{cycle:>COL$}");
    }
    let _ = writeln!(out);

    for index in 0..grid.instruction_count() {
        let _ = write!(out, "{:>6}", format!("#{index}"));
        for cycle in 1..=last {
            let cell = grid.stage(index, cycle).map_or(".", |s| s.name());
            let _ = write!(out, "{cell:>COL$}");
        }
        let _ = writeln!(out);
    }

    for bubble in sim.bubbles().iter().filter(|b| b.cycle <= last) {
        let _ = writeln!(
            out,
            "  bubble in cycle {}: #{} waits on {} from #{}",
            bubble.cycle, bubble.before, bubble.register, bubble.producer
        );
    }
    out
}

/// One status line per tick.
pub fn tick_line(outcome: TickOutcome) -> Option<String> {
    match outcome {
        TickOutcome::Advanced { cycle } => Some(format!("[cycle {cycle}]")),
        TickOutcome::Bubble { cycle, before } => {
            Some(format!("[cycle {cycle}] bubble injected before #{before}"))
        }
        TickOutcome::Finished { cycle } => Some(format!(
            "[done] last instruction retired in cycle {cycle}"
        )),
        TickOutcome::Held => None,
    }
}

/// Closing JSON line of `run --json`: how the run stopped plus its statistics.
///
/// # Errors
///
/// Returns the serializer error.
pub fn run_summary_json(
    outcome: &RunOutcome,
    stats: Option<&PipelineStats>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&json!({
        "summary": {
            "finished": outcome.reason == StopReason::Finished,
            "stop_reason": format!("{:?}", outcome.reason),
            "ticks": outcome.ticks,
            "cycle": outcome.cycle,
            "stats": stats,
        }
    }))
}
