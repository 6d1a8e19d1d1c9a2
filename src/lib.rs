//! Sparse, incremental Conway's Game of Life (B3/S23) on an unbounded grid.
//!
//! Only live cells and their dead neighbors are tracked, each with a cached
//! live-neighbor count, so a generation costs time proportional to the live
//! population and its perimeter.

pub use utils::{Pos, NEIGHBOR_OFFSETS};
mod utils;

pub use error::{FormatError, InvariantViolation};
mod error;

pub use world::{Cell, OrderedWorld, World};
pub mod world;

pub use rules::RuleTable;
pub mod rules;

pub use sim::Grid;
mod sim;

pub mod life106;
