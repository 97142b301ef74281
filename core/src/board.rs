use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{GameError, Result};
use crate::input::{KeyPress, KeySignal, PointerButton};
use crate::types::{mult, CellCount, Coord, Coord2, ToNdIndex, CELL_SIZE_PX};
use crate::{FlagOutcome, InputOutcome, RevealOutcome};

/// Validated board parameters: dimensions and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// The dimension rule is checked before the mine rule. Negative mine
    /// counts are unrepresentable.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows < 2 || cols < 2 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }
        let cells = mult(rows, cols);
        if mines > cells {
            return Err(GameError::TooManyMines { mines, cells });
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn has_won(self) -> bool {
        matches!(self, Self::Won)
    }

    /// End-of-round banner text for the host to draw; `None` while playing.
    pub const fn banner(self) -> Option<&'static str> {
        match self {
            Self::Playing => None,
            Self::Won => Some("You won! Press enter to play again :)"),
            Self::Lost => Some("Game over! Press enter to play again :)"),
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

/// The playing field: a row-major arena of cells plus aggregate round state.
///
/// The board owns every cell and the RNG used for mine placement, so a
/// restart can redraw the layout without the host resupplying entropy.
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    grid: Array2<Cell>,
    mine_list: Vec<Coord2>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    status: GameStatus,
    rng: SmallRng,
}

impl Board {
    /// Validate the parameters and build a board in one step.
    pub fn create(rows: Coord, cols: Coord, mines: CellCount, seed: Option<u64>) -> Result<Self> {
        BoardConfig::new(rows, cols, mines).map(|config| Self::new(config, seed))
    }

    pub fn new(config: BoardConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => rand::make_rng(),
        };
        let mut board = Self {
            config,
            grid: Array2::default([config.rows as usize, config.cols as usize]),
            mine_list: Vec::new(),
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            status: GameStatus::Playing,
            rng,
        };
        board.rebuild();
        board
    }

    /// Build a board with an explicit mine layout instead of random
    /// placement. Duplicate handles collapse into one mine; out-of-bounds
    /// handles are rejected.
    pub fn with_mine_handles(
        rows: Coord,
        cols: Coord,
        mines: &[Coord2],
        seed: Option<u64>,
    ) -> Result<Self> {
        let mut board = Self::new(BoardConfig::new(rows, cols, 0)?, seed);
        for &handle in mines {
            if handle.0 >= rows || handle.1 >= cols {
                return Err(GameError::InvalidCoords);
            }
            let cell = &mut board.grid[handle.to_nd_index()];
            if !cell.is_mine() {
                cell.toggle_mine();
                board.mine_list.push(handle);
            }
        }
        board.config.mines = board.mine_list.len() as CellCount;
        board.cache_adjacent_counts();
        Ok(board)
    }

    /// Start a new round: same dimensions and mine count, fresh cells and a
    /// freshly drawn mine layout. Dimensions are not re-validated.
    pub fn reset(&mut self) {
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.grid = Array2::default([self.config.rows as usize, self.config.cols as usize]);
        self.wire_adjacency();
        self.place_mines();
        self.cache_adjacent_counts();
        self.revealed_count = Saturating(0);
        self.flagged_count = Saturating(0);
        self.status = GameStatus::Playing;
    }

    /// 2x2 window sweep over the grid. Each unordered pair of adjacent
    /// cells gets linked exactly once, and neighbor lists fill in a fixed
    /// order.
    fn wire_adjacency(&mut self) {
        let (rows, cols) = self.size();
        for r in 0..rows - 1 {
            for c in 0..cols - 1 {
                let top_left = (r, c);
                let top_right = (r, c + 1);
                let bottom_left = (r + 1, c);
                let bottom_right = (r + 1, c + 1);

                self.link(top_left, top_right);
                self.link(top_left, bottom_left);
                self.link(top_left, bottom_right);
                self.link(top_right, bottom_left);

                // the bottom edge closes while sweeping the second-to-last row
                if r == rows - 2 {
                    self.link(bottom_left, bottom_right);
                }
            }
            // the right edge closes at the end of each row
            self.link((r, cols - 1), (r + 1, cols - 1));
        }
    }

    /// Bidirectional link, this-then-other order. The sweep guarantees no
    /// pair is wired twice.
    fn link(&mut self, a: Coord2, b: Coord2) {
        self.grid[a.to_nd_index()].push_neighbor(b);
        self.grid[b.to_nd_index()].push_neighbor(a);
    }

    /// Uniform rank draw over the not-yet-mined cells, repeated until the
    /// configured count is placed.
    fn place_mines(&mut self) {
        let total = self.config.total_cells();
        let mines = self.config.mines;
        let cols = self.config.cols as CellCount;
        self.mine_list = Vec::with_capacity(mines as usize);

        // a full board needs no draws
        if mines == total {
            for cell in self.grid.iter_mut() {
                cell.toggle_mine();
            }
            self.mine_list = (0..total)
                .map(|offset| ((offset / cols) as Coord, (offset % cols) as Coord))
                .collect();
            return;
        }

        let mut free_cells = total;
        while (self.mine_list.len() as CellCount) < mines {
            let mut place: CellCount = self.rng.random_range(0..free_cells);
            let cells = self.grid.as_slice_mut().expect("row-major layout");
            for (offset, cell) in cells.iter_mut().enumerate() {
                let offset = offset as CellCount;
                if cell.is_mine() {
                    place += 1;
                }
                if offset == place {
                    cell.toggle_mine();
                    self.mine_list.push(((offset / cols) as Coord, (offset % cols) as Coord));
                    free_cells -= 1;
                    break;
                }
            }
        }

        log::debug!(
            "placed {} mines on a {}x{} board",
            self.mine_list.len(),
            self.config.rows,
            self.config.cols
        );
    }

    fn cache_adjacent_counts(&mut self) {
        let (rows, cols) = self.size();
        for r in 0..rows {
            for c in 0..cols {
                let count = self.adjacent_mine_count((r, c));
                self.grid[(r, c).to_nd_index()].set_adjacent_mines(count);
            }
        }
    }

    /// Recount of mined neighbors straight from the adjacency links,
    /// independent of the cached value. `O(degree)`, degree <= 8.
    pub fn adjacent_mine_count(&self, handle: Coord2) -> u8 {
        self.grid[handle.to_nd_index()]
            .neighbors()
            .iter()
            .filter(|&&pos| self.grid[pos.to_nd_index()].is_mine())
            .count()
            .try_into()
            .unwrap()
    }

    /// Reveal the cell and cascade through its zero-count region; returns
    /// the number of newly revealed cells.
    ///
    /// Revealed, flagged, and mined cells contribute nothing; a mine hit
    /// goes through [`Board::apply_reveal`], never through the cascade.
    pub fn flood_reveal(&mut self, handle: Coord2) -> CellCount {
        let mut revealed: CellCount = 0;
        let mut to_visit = VecDeque::from([handle]);

        while let Some(pos) = to_visit.pop_front() {
            let cell = &mut self.grid[pos.to_nd_index()];
            if cell.is_revealed() || cell.is_flagged() || cell.is_mine() {
                continue;
            }
            cell.reveal();
            revealed += 1;

            // neighbors are enqueued unconditionally; their own guard
            // decides whether they open
            if cell.adjacent_mines() == 0 {
                to_visit.extend(cell.neighbors().iter().copied());
            }
        }

        revealed
    }

    /// Player reveal action. Hitting a mine uncovers every mine and loses
    /// the round; otherwise the cascade runs and the win condition is
    /// checked.
    pub fn apply_reveal(&mut self, handle: Coord2) -> RevealOutcome {
        if self.status.is_over() {
            return RevealOutcome::NoChange;
        }
        let cell = &self.grid[handle.to_nd_index()];
        if cell.is_flagged() || cell.is_revealed() {
            return RevealOutcome::NoChange;
        }

        if cell.is_mine() {
            for &pos in &self.mine_list {
                self.grid[pos.to_nd_index()].reveal();
            }
            self.status = GameStatus::Lost;
            log::debug!("mine revealed at {:?}, round lost", handle);
            return RevealOutcome::HitMine;
        }

        let newly_revealed = self.flood_reveal(handle);
        self.revealed_count += newly_revealed;
        if self.revealed_count == Saturating(self.config.safe_cells()) {
            self.status = GameStatus::Won;
            log::debug!("all safe cells revealed, round won");
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Player flag action; only unrevealed cells can carry a flag.
    pub fn apply_flag_toggle(&mut self, handle: Coord2) -> FlagOutcome {
        if self.status.is_over() {
            return FlagOutcome::NoChange;
        }
        let cell = &mut self.grid[handle.to_nd_index()];
        if cell.is_revealed() {
            return FlagOutcome::NoChange;
        }

        cell.toggle_flag();
        if cell.is_flagged() {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        FlagOutcome::Changed
    }

    /// Pixel-to-grid mapping. A point exactly on the far or bottom edge
    /// belongs to the last column or row.
    pub fn point_to_cell(&self, x: i32, y: i32) -> Coord2 {
        let (rows, cols) = self.size();
        let col = if x == i32::from(cols) * CELL_SIZE_PX {
            cols - 1
        } else {
            (x / CELL_SIZE_PX) as Coord
        };
        let row = if y == i32::from(rows) * CELL_SIZE_PX {
            rows - 1
        } else {
            (y / CELL_SIZE_PX) as Coord
        };
        (row, col)
    }

    /// Pointer event entry point. `None` when the game is over or the point
    /// misses the board.
    pub fn handle_input(&mut self, x: i32, y: i32, button: PointerButton) -> Option<InputOutcome> {
        let (rows, cols) = self.size();
        let max_x = i32::from(cols) * CELL_SIZE_PX;
        let max_y = i32::from(rows) * CELL_SIZE_PX;
        if self.status.is_over() || !(0..=max_x).contains(&x) || !(0..=max_y).contains(&y) {
            return None;
        }

        let handle = self.point_to_cell(x, y);
        Some(match button {
            PointerButton::Primary => InputOutcome::Reveal(self.apply_reveal(handle)),
            PointerButton::Secondary => InputOutcome::Flag(self.apply_flag_toggle(handle)),
        })
    }

    /// Key event entry point; keys only matter once the round is over.
    pub fn handle_key(&mut self, key: KeyPress) -> KeySignal {
        if !self.status.is_over() {
            return KeySignal::Ignored;
        }
        match key {
            KeyPress::Restart => {
                self.reset();
                KeySignal::Restarted
            }
            KeyPress::Other => KeySignal::Exit,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        (self.config.rows, self.config.cols)
    }

    pub fn rows(&self) -> Coord {
        self.config.rows
    }

    pub fn cols(&self) -> Coord {
        self.config.cols
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn has_won(&self) -> bool {
        self.status.has_won()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// Mines minus flags, the usual HUD counter; goes negative when the
    /// player overflags.
    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flagged_count.0 as isize)
    }

    /// Render query surface: everything a host needs to draw one cell.
    pub fn cell_at(&self, handle: Coord2) -> &Cell {
        &self.grid[handle.to_nd_index()]
    }

    /// Handles of the mined cells, in placement order.
    pub fn mine_handles(&self) -> &[Coord2] {
        &self.mine_list
    }
}
