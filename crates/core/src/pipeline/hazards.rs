//! Data Hazard Detection.
//!
//! This module classifies read-after-write dependencies between neighbouring instructions.
//! It provides:
//! 1. **Load-Use Detection:** A value loaded by `lw` is needed by the very next instruction,
//!    so one bubble must be injected before that instruction decodes.
//! 2. **Forwarding Detection:** A value produced by any other writer is bypassed to the next
//!    instruction without a bubble.
//! 3. **Derived Views:** Per-instruction stall and forwarding lookups, computed once per run.
//!
//! Only adjacent pairs `(i - 1, i)` are inspected. A dependency that skips one or more
//! instructions is never reported.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::common::reg::Reg;
use crate::isa::DecodedInstruction;

/// How a dependency between two neighbouring instructions is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum HazardKind {
    /// Value bypassed from the producer; no bubble.
    Forward,
    /// Producer is a load; one bubble before the consumer's ID stage.
    LoadUseStall,
}

/// A dependency from instruction `from` to instruction `to` through `register`.
///
/// `to` is always `from + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct HazardEdge {
    /// Index of the producing instruction.
    pub from: usize,
    /// Index of the consuming instruction.
    pub to: usize,
    /// Register carrying the dependency.
    pub register: Reg,
    /// Resolution.
    pub kind: HazardKind,
}

/// The other end of a forwarding edge, as seen from one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Partner {
    /// Index of the partner instruction.
    pub index: usize,
    /// Register forwarded.
    pub register: Reg,
}

/// Classifies the dependency of `curr` on the instruction immediately before it.
///
/// Returns the register and resolution, or `None` if `curr` reads nothing `prev` writes.
/// A pair yields at most one classification, and load-use wins over forwarding.
///
/// # Arguments
///
/// * `prev` - The older instruction (potential producer).
/// * `curr` - The younger instruction (potential consumer).
pub fn classify_pair(
    prev: &DecodedInstruction,
    curr: &DecodedInstruction,
) -> Option<(Reg, HazardKind)> {
    let reg = prev.written_register()?;
    if !curr.reads(reg) {
        return None;
    }

    if prev.mnemonic.is_load_word() {
        if curr.mnemonic.is_load_word() {
            return None;
        }
        return Some((reg, HazardKind::LoadUseStall));
    }

    Some((reg, HazardKind::Forward))
}

/// Scans every adjacent pair and returns the resulting hazard report.
///
/// # Examples
///
/// ```
/// use mipsviz_core::isa::decode;
/// use mipsviz_core::pipeline::hazards::{HazardKind, analyze};
///
/// // lw $2, 0($1)
/// // add $3, $2, $4   <- needs $2 one cycle too early
/// let program = [decode(0x8C220000), decode(0x00441820)];
/// let report = analyze(&program);
///
/// assert_eq!(report.edges().len(), 1);
/// assert_eq!(report.edges()[0].kind, HazardKind::LoadUseStall);
/// assert!(report.is_stall_target(1));
/// ```
pub fn analyze(instructions: &[DecodedInstruction]) -> HazardReport {
    let edges: Vec<HazardEdge> = instructions
        .windows(2)
        .enumerate()
        .filter_map(|(from, pair)| {
            classify_pair(&pair[0], &pair[1]).map(|(register, kind)| HazardEdge {
                from,
                to: from + 1,
                register,
                kind,
            })
        })
        .collect();

    HazardReport::from_edges(edges)
}

/// All hazards of one program, plus the lookups the clock and presentation need.
///
/// Built once when a simulation starts and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HazardReport {
    edges: Vec<HazardEdge>,
    stall_at: BTreeSet<usize>,
    forward_from: BTreeMap<usize, Partner>,
    forward_to: BTreeMap<usize, Partner>,
}

impl HazardReport {
    /// Derives the lookup tables from an ordered edge list.
    pub fn from_edges(edges: Vec<HazardEdge>) -> Self {
        let stall_at = edges
            .iter()
            .filter(|e| e.kind == HazardKind::LoadUseStall)
            .map(|e| e.to)
            .collect();

        let forwards = || edges.iter().filter(|e| e.kind == HazardKind::Forward);
        let forward_from = forwards()
            .map(|e| {
                (
                    e.from,
                    Partner {
                        index: e.to,
                        register: e.register,
                    },
                )
            })
            .collect();
        let forward_to = forwards()
            .map(|e| {
                (
                    e.to,
                    Partner {
                        index: e.from,
                        register: e.register,
                    },
                )
            })
            .collect();

        Self {
            edges,
            stall_at,
            forward_from,
            forward_to,
        }
    }

    /// Every edge, in scan order.
    pub fn edges(&self) -> &[HazardEdge] {
        &self.edges
    }

    /// Forwarding edges, in scan order.
    pub fn forwards(&self) -> impl Iterator<Item = &HazardEdge> + '_ {
        self.edges
            .iter()
            .filter(|e| e.kind == HazardKind::Forward)
    }

    /// Load-use stall edges, in scan order.
    pub fn stalls(&self) -> impl Iterator<Item = &HazardEdge> + '_ {
        self.edges
            .iter()
            .filter(|e| e.kind == HazardKind::LoadUseStall)
    }

    /// Indices of instructions that must be preceded by one bubble.
    pub const fn stall_at(&self) -> &BTreeSet<usize> {
        &self.stall_at
    }

    /// Returns `true` if instruction `index` is the consumer of a load-use stall.
    pub fn is_stall_target(&self, index: usize) -> bool {
        self.stall_at.contains(&index)
    }

    /// Consumer and register if instruction `index` forwards its result.
    pub fn forward_from(&self, index: usize) -> Option<Partner> {
        self.forward_from.get(&index).copied()
    }

    /// Producer and register if instruction `index` receives a forwarded value.
    pub fn forward_to(&self, index: usize) -> Option<Partner> {
        self.forward_to.get(&index).copied()
    }

    /// Number of load-use stall edges.
    pub fn stall_count(&self) -> usize {
        self.stall_at.len()
    }

    /// Number of forwarding edges.
    pub fn forward_count(&self) -> usize {
        self.forward_from.len()
    }

    /// Returns `true` if no hazard was found.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
