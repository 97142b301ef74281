use crate::types::Coord2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One grid square.
///
/// A cell knows whether it hides a mine, whether the player has flagged or
/// revealed it, and a cached count of mined neighbors. It does not know its
/// own position; adjacency is a list of `(row, col)` handles into the board
/// arena, populated once during wiring and symmetric by construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    mine: bool,
    flagged: bool,
    revealed: bool,
    adjacent_mines: u8,
    neighbors: SmallVec<[Coord2; 8]>,
}

impl Cell {
    pub fn is_mine(&self) -> bool {
        self.mine
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Cached count of mined neighbors; stale until the board finishes
    /// construction, never refreshed afterwards.
    pub fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    /// Neighbor handles in wiring order. A grid has no wraparound, so the
    /// list holds at most 8 entries.
    pub fn neighbors(&self) -> &[Coord2] {
        &self.neighbors
    }

    pub(crate) fn toggle_mine(&mut self) {
        self.mine = !self.mine;
    }

    pub(crate) fn toggle_flag(&mut self) {
        self.flagged = !self.flagged;
    }

    /// Idempotent; `revealed` only goes back to false when the whole board
    /// is rebuilt.
    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn push_neighbor(&mut self, handle: Coord2) {
        self.neighbors.push(handle);
    }

    pub(crate) fn set_adjacent_mines(&mut self, count: u8) {
        self.adjacent_mines = count;
    }
}
