use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of one cell. The mine/number value itself lives in
/// the immutable [`Board`]; this grid only tracks what has been opened.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
}

impl Visibility {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of one reveal turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Nothing changed (cell was already revealed).
    NoChange,
    /// One or more safe cells were opened, game still running.
    Revealed,
    /// The clicked cell was a mine; the game is lost.
    HitMine,
    /// All safe cells are now open; the game is won.
    Won,
}

/// One in-progress Minesweeper game: an immutable board plus the mutable
/// reveal state. Mutated only through [`Game::reveal`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    visibility: Array2<Visibility>,
    revealed_safe: CellCount,
    status: GameStatus,
}

impl Game {
    pub fn new(board: Board) -> Self {
        let size = board.size();
        Self {
            board,
            visibility: Array2::default(size.to_nd_index()),
            revealed_safe: 0,
            status: GameStatus::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.visibility[coords.to_nd_index()].is_revealed()
    }

    pub fn revealed_safe(&self) -> CellCount {
        self.revealed_safe
    }

    /// Opens a cell. Exactly one of four things happens: the turn is
    /// rejected (completed game / bad coordinates, game unmodified), a mine
    /// ends the game, a zero cell flood-fills its region, or a numbered
    /// cell opens alone. The win check runs after every safe reveal.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        if self.is_completed() {
            return Err(GameError::AlreadyCompleted);
        }
        let coords = self.board.validate_coords(coords)?;

        if self.board.contains_mine(coords) {
            self.status = GameStatus::Lost;
            log::debug!("mine hit at {coords:?}, game lost");
            return Ok(RevealOutcome::HitMine);
        }

        let newly_opened = if self.board.adjacent_mines(coords) == 0 {
            self.flood_fill(coords)
        } else {
            self.mark_revealed(coords)
        };

        if self.revealed_safe == self.config().safe_cells() {
            self.status = GameStatus::Won;
            log::debug!("all safe cells open, game won");
            Ok(RevealOutcome::Won)
        } else if newly_opened == 0 {
            Ok(RevealOutcome::NoChange)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Breadth-first reveal from a zero-count cell. Numbered cells reached
    /// by the flood are opened but not expanded, so they form the region
    /// boundary; a zero cell has no mined neighbors, so the flood can never
    /// enqueue a mine. Each cell is opened at most once, bounding the work
    /// to the board area.
    fn flood_fill(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            if self.is_revealed(coords) {
                continue;
            }
            opened += self.mark_revealed(coords);

            if self.board.adjacent_mines(coords) == 0 {
                to_visit.extend(
                    self.board
                        .iter_neighbors(coords)
                        .filter(|&pos| !self.is_revealed(pos)),
                );
            }
        }

        opened
    }

    fn mark_revealed(&mut self, coords: Coord2) -> CellCount {
        let cell = &mut self.visibility[coords.to_nd_index()];
        if cell.is_revealed() {
            return 0;
        }
        *cell = Visibility::Revealed;
        self.revealed_safe += 1;
        1
    }
}
