//! General-purpose register identifiers.
//!
//! Only register *names* matter to the pipeline model: hazards are detected by comparing
//! register ids, never values. This module provides:
//! 1. **Identity:** The `Reg` newtype over a 5-bit register number.
//! 2. **Naming:** Numeric (`$3`) and ABI (`$v1`) renderings.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::constants::GPR_COUNT;

/// Mask for a 5-bit register field.
const REG_FIELD_MASK: u32 = 0x1F;

/// ABI register names for `$0`–`$31`.
const ABI_NAMES: [&str; GPR_COUNT] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// How register operands are rendered in disassembly and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum RegisterNaming {
    /// `$0` .. `$31`.
    #[default]
    Numeric,
    /// `$zero`, `$at`, `$v0`, ...
    #[serde(alias = "ABI")]
    Abi,
}

/// A MIPS general-purpose register number (0–31).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reg(u8);

impl Reg {
    /// The hardwired zero register. Writes to it are discarded, so it never produces a hazard.
    pub const ZERO: Self = Self(0);

    /// Creates a register id, or `None` if `idx` is not in `0..32`.
    pub const fn new(idx: u8) -> Option<Self> {
        if (idx as usize) < GPR_COUNT {
            Some(Self(idx))
        } else {
            None
        }
    }

    /// Builds a register id from a 5-bit instruction field (upper bits ignored).
    #[inline]
    pub(crate) const fn from_field(bits: u32) -> Self {
        Self((bits & REG_FIELD_MASK) as u8)
    }

    /// Register number.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns `true` for `$0`.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// ABI name of this register (`$t0`, `$sp`, ...).
    pub fn abi_name(self) -> &'static str {
        ABI_NAMES.get(self.0 as usize).copied().unwrap_or("$??")
    }

    /// Renders the register using the requested naming scheme.
    pub fn name(self, naming: RegisterNaming) -> String {
        match naming {
            RegisterNaming::Numeric => self.to_string(),
            RegisterNaming::Abi => self.abi_name().to_owned(),
        }
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl Serialize for Reg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
