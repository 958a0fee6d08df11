//! Position evaluation for the minimax search

pub mod heuristic;

pub use heuristic::{evaluate, CELL_WEIGHTS};
