//! Pipeline run statistics collection and reporting.
//!
//! This module summarizes a simulation run. It provides:
//! 1. **Cycles and CPI:** Elapsed cycles, instruction count, and cycles per instruction.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump, unknown).
//! 3. **Hazards:** Forwarding edges, load-use stall edges, and bubbles injected so far.

use std::fmt::Write as _;

use serde::Serialize;

use crate::isa::Mnemonic;
use crate::pipeline::SimulationState;

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"hazards"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "hazards"];

/// Statistics for one simulation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    /// Cycles elapsed so far.
    pub cycles: u64,
    /// Instructions in the program.
    pub instructions: u64,
    /// Bubbles injected so far.
    pub stall_bubbles: u64,
    /// Forwarding edges found.
    pub forwards: u64,
    /// Load-use stall edges found.
    pub load_use_stalls: u64,

    /// Count of ALU (arithmetic, logic, shift) instructions.
    pub inst_alu: u64,
    /// Count of load instructions.
    pub inst_load: u64,
    /// Count of store instructions.
    pub inst_store: u64,
    /// Count of conditional branches.
    pub inst_branch: u64,
    /// Count of jumps (`j`, `jal`, `jr`).
    pub inst_jump: u64,
    /// Count of unsupported encodings.
    pub inst_unknown: u64,
}

impl PipelineStats {
    /// Collects statistics from a simulation in its current state.
    pub fn collect(sim: &SimulationState) -> Self {
        let hazards = sim.hazards();
        let mut stats = Self {
            cycles: sim.current_cycle(),
            instructions: sim.decoded().len() as u64,
            stall_bubbles: sim.bubbles_consumed(),
            forwards: hazards.forward_count() as u64,
            load_use_stalls: hazards.stall_count() as u64,
            ..Self::default()
        };

        for inst in sim.decoded() {
            let m = inst.mnemonic;
            let counter = match m {
                Mnemonic::Unknown => &mut stats.inst_unknown,
                Mnemonic::J | Mnemonic::Jal | Mnemonic::Jr => &mut stats.inst_jump,
                _ if m.is_load() => &mut stats.inst_load,
                _ if m.is_store() => &mut stats.inst_store,
                _ if m.is_branch() => &mut stats.inst_branch,
                _ => &mut stats.inst_alu,
            };
            *counter += 1;
        }
        stats
    }

    /// Cycles per instruction, or `0.0` for an empty run.
    pub fn cpi(&self) -> f64 {
        if self.instructions == 0 {
            return 0.0;
        }
        self.cycles as f64 / self.instructions as f64
    }

    /// Renders only the requested sections.
    ///
    /// # Arguments
    ///
    /// * `sections` - Section names from [`STATS_SECTIONS`], or empty for all.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let instr = self.instructions.max(1);
        let pct = |n: u64| (n as f64 / instr as f64) * 100.0;
        let mut out = String::new();

        // Writing into a String cannot fail.
        if want("summary") {
            let _ = writeln!(out, "\n==========================================================");
            let _ = writeln!(out, "MIPS PIPELINE STATISTICS");
            let _ = writeln!(out, "==========================================================");
            let _ = writeln!(out, "sim_cycles               {}", self.cycles);
            let _ = writeln!(out, "sim_insts                {}", self.instructions);
            let _ = writeln!(out, "sim_cpi                  {:.4}", self.cpi());
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (label, n) in [
                ("alu", self.inst_alu),
                ("load", self.inst_load),
                ("store", self.inst_store),
                ("branch", self.inst_branch),
                ("jump", self.inst_jump),
                ("unknown", self.inst_unknown),
            ] {
                let _ = writeln!(out, "  op.{label:<20}{n} ({:.2}%)", pct(n));
            }
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("hazards") {
            let _ = writeln!(out, "DATA HAZARDS");
            let _ = writeln!(out, "  hazard.forward         {}", self.forwards);
            let _ = writeln!(out, "  hazard.load_use        {}", self.load_use_stalls);
            let _ = writeln!(out, "  stall.bubbles          {}", self.stall_bubbles);
            let _ = writeln!(out, "==========================================================");
        }
        out
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render_sections(sections));
    }

    /// Prints every section to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
