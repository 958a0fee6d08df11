//! Search module for the tic-tac-toe AI
//!
//! Contains the minimax game-tree search with optional alpha-beta pruning
//! and its per-search statistics.

pub mod minimax;

pub use minimax::{SearchConfig, SearchStats, Searcher};
