//! Error definitions.
//!
//! This module defines the failure modes the pipeline model can surface. It provides:
//! 1. **Clock Transitions:** Rejected state-machine operations (`resume` while running, ...).
//! 2. **Program Input:** Malformed or missing hexadecimal instruction words.
//! 3. **Configuration:** Unreadable or unparsable configuration files.
//!
//! Decoding and hazard analysis are total and have no error type.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::ClockState;

/// Operations accepted by the pipeline clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Load a program and begin at cycle 1.
    Start,
    /// Advance one cycle.
    Tick,
    /// Suspend a running simulation.
    Pause,
    /// Continue a paused simulation.
    Resume,
    /// Discard all simulation state.
    Reset,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Tick => "tick",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Reset => "reset",
        };
        f.write_str(name)
    }
}

/// Errors raised by the pipeline clock.
///
/// A rejected operation never mutates the clock; the caller can inspect the state it was
/// rejected in and decide what to do.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The requested operation is not legal in the current state.
    #[error("invalid transition: cannot {transition} while {state} ({detail})")]
    InvalidTransition {
        /// Operation that was attempted.
        transition: Transition,
        /// State the clock was in when the operation was rejected.
        state: ClockState,
        /// Short human-readable reason.
        detail: &'static str,
    },
}

impl ClockError {
    /// Builds an [`ClockError::InvalidTransition`].
    pub(crate) const fn invalid(
        transition: Transition,
        state: ClockState,
        detail: &'static str,
    ) -> Self {
        Self::InvalidTransition {
            transition,
            state,
            detail,
        }
    }

    /// Returns the rejected operation.
    pub const fn transition(&self) -> Transition {
        match self {
            Self::InvalidTransition { transition, .. } => *transition,
        }
    }

    /// Returns the state the clock was in when the operation was rejected.
    pub const fn state(&self) -> ClockState {
        match self {
            Self::InvalidTransition { state, .. } => *state,
        }
    }
}

/// Errors raised while validating or loading program text.
#[derive(Debug, Error)]
pub enum InputError {
    /// The program contained no instruction lines.
    #[error("please enter at least one MIPS instruction in hexadecimal format")]
    Empty,

    /// A single word is not exactly eight hexadecimal digits.
    #[error("invalid instruction word {text:?}: expected 8 hexadecimal characters")]
    InvalidWord {
        /// Offending text, as supplied.
        text: String,
    },

    /// One or more program lines are malformed.
    ///
    /// Every malformed line is reported, not just the first.
    #[error(
        "invalid instruction format found: {}. Each instruction must be 8 hexadecimal characters",
        .texts.join(", ")
    )]
    InvalidFormat {
        /// 1-based line numbers of the malformed lines.
        lines: Vec<usize>,
        /// Trimmed text of each malformed line.
        texts: Vec<String>,
    },

    /// The program file could not be read.
    #[error("could not read program {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`crate::Config`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
