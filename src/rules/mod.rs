//! Game rules for tic-tac-toe
//!
//! This module implements the rule set:
//! - Win condition (three-in-a-row on any of the 8 lines)
//! - Winner / draw resolution

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_winning_line, has_three_in_row, is_draw, is_valid_move};
