//! Winning line analysis for N×N boards
//!
//! A line is a full row, a full column, the main diagonal or the
//! anti-diagonal. There is no shorter win length: a player must own all
//! `size` cells of one line.

use super::{Cell, Player};

/// Utility for analyzing winning lines on a row-major grid
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player owns every cell of some row, column or diagonal.
    ///
    /// `cells` is the row-major grid of a `size`×`size` board.
    pub fn has_won(cells: &[Cell], size: usize, player: Player) -> bool {
        debug_assert_eq!(cells.len(), size * size);
        if size == 0 {
            return false;
        }

        let target = player.to_cell();
        let owns = |row: usize, col: usize| cells[row * size + col] == target;

        if (0..size).any(|row| (0..size).all(|col| owns(row, col))) {
            return true;
        }

        if (0..size).any(|col| (0..size).all(|row| owns(row, col))) {
            return true;
        }

        if (0..size).all(|i| owns(i, i)) {
            return true;
        }

        (0..size).all(|i| owns(i, size - 1 - i))
    }
}
