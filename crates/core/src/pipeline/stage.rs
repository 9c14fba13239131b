//! Pipeline stages.

use std::fmt;

use serde::Serialize;

use crate::common::constants::STAGE_COUNT;

/// One of the five classic pipeline stages, in program order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stage {
    /// Instruction fetch.
    If,
    /// Instruction decode and register read.
    Id,
    /// Execute / address calculation.
    Ex,
    /// Memory access.
    Mem,
    /// Register write-back.
    Wb,
}

impl Stage {
    /// All stages in the order an instruction visits them.
    pub const ALL: [Self; STAGE_COUNT] = [Self::If, Self::Id, Self::Ex, Self::Mem, Self::Wb];

    /// Position of this stage in [`Stage::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stage at position `idx`, or `None` past write-back.
    #[inline]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < STAGE_COUNT {
            Some(Self::ALL[idx])
        } else {
            None
        }
    }

    /// Short uppercase name (`"IF"`, `"MEM"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::If => "IF",
            Self::Id => "ID",
            Self::Ex => "EX",
            Self::Mem => "MEM",
            Self::Wb => "WB",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
