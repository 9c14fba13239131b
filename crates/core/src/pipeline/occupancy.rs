//! Stage Occupancy Projection.
//!
//! Maps `(instruction, cycle)` to the stage that instruction occupies. In a bubble-free
//! schedule instruction `i` is fetched in cycle `i + 1` and advances one stage per cycle;
//! every bubble injected ahead of it pushes its remaining schedule back by one cycle.

use crate::common::constants::PIPELINE_DRAIN_CYCLES;

use super::stage::Stage;

/// Stage occupied by instruction `index` at `cycle`.
///
/// Returns `None` when the instruction has not been fetched yet or has already retired.
///
/// # Arguments
///
/// * `index` - Zero-based program position.
/// * `cycle` - One-based cycle number.
/// * `bubbles_before` - Bubbles injected ahead of this instruction up to and including `cycle`.
#[inline]
pub fn stage_for(index: usize, cycle: u64, bubbles_before: u64) -> Option<Stage> {
    let offset = (index as u64).checked_add(1)?.checked_add(bubbles_before)?;
    let expected = cycle.checked_sub(offset)?;
    usize::try_from(expected).ok().and_then(Stage::from_index)
}

/// Cycle in which the last of `instruction_count` instructions leaves write-back.
///
/// Zero for an empty program.
#[inline]
pub const fn completion_cycle(instruction_count: usize, bubbles: u64) -> u64 {
    if instruction_count == 0 {
        0
    } else {
        instruction_count as u64 + PIPELINE_DRAIN_CYCLES + bubbles
    }
}

/// Full instruction × cycle table of stage occupancy.
///
/// Column `c` (one-based) holds the stage of each instruction during cycle `c`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    cycles: u64,
    rows: Vec<Vec<Option<Stage>>>,
}

impl OccupancyGrid {
    /// Evaluates [`stage_for`] over cycles `1..=cycles` for every instruction.
    ///
    /// `bubbles_at(index, cycle)` must return the number of bubbles injected ahead of
    /// `index` by the end of `cycle`.
    pub fn project<F>(instruction_count: usize, cycles: u64, bubbles_at: F) -> Self
    where
        F: Fn(usize, u64) -> u64,
    {
        let rows = (0..instruction_count)
            .map(|index| {
                (1..=cycles)
                    .map(|cycle| stage_for(index, cycle, bubbles_at(index, cycle)))
                    .collect()
            })
            .collect();
        Self { cycles, rows }
    }

    /// Number of cycle columns.
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Number of instruction rows.
    pub fn instruction_count(&self) -> usize {
        self.rows.len()
    }

    /// All rows, one per instruction.
    pub fn rows(&self) -> &[Vec<Option<Stage>>] {
        &self.rows
    }

    /// Stage of instruction `index` during one-based `cycle`.
    pub fn stage(&self, index: usize, cycle: u64) -> Option<Stage> {
        let col = usize::try_from(cycle.checked_sub(1)?).ok()?;
        self.rows.get(index)?.get(col).copied().flatten()
    }

    /// First cycle in which instruction `index` occupies `stage`.
    pub fn first_cycle_in(&self, index: usize, stage: Stage) -> Option<u64> {
        self.rows
            .get(index)?
            .iter()
            .position(|s| *s == Some(stage))
            .map(|col| col as u64 + 1)
    }
}
