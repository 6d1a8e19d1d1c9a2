//! Error types for the engine and the Life 1.06 codec.

use thiserror::Error;

use crate::Pos;

/// Problems with a Life 1.06 input. All of them are fatal to a run.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("missing or invalid signature, expected `{expected}`")]
    Signature { expected: &'static str },

    #[error("line {line}: expected two integers `x y`, found `{content}`")]
    Coordinate { line: usize, content: String },

    #[error("please specify at least one live cell in the input")]
    Empty,
}

/// A tracked-set invariant was found broken while advancing a generation.
///
/// This never happens on a grid built through [`crate::Grid::seed`]; seeing
/// one means the engine itself is defective.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("neighbor {neighbor:?} of {of:?} is not tracked")]
    MissingNeighbor { of: Pos, neighbor: Pos },

    #[error("neighbor count of {0:?} would drop below zero")]
    Underflow(Pos),

    #[error("neighbor count of {0:?} would exceed eight")]
    Overflow(Pos),

    #[error("cell {0:?} to transition is not tracked")]
    MissingCell(Pos),

    #[error("dead cell {0:?} with no live neighbors is still tracked")]
    IdleFrontier(Pos),

    #[error("cell {pos:?} caches {cached} live neighbors but has {actual}")]
    CountMismatch { pos: Pos, cached: u8, actual: u8 },

    #[error("generation buffers no longer mirror each other")]
    Diverged,
}
