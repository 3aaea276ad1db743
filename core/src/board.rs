use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Largest accepted board edge, in cells.
pub const MAX_DIM: Coord = 30;

/// Validated board parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    width: Coord,
    height: Coord,
    mines: CellCount,
}

impl GameConfig {
    /// Checks the creation contract: both edges within [`MAX_DIM`] and at
    /// least one safe cell left over. A zero-sized board can never satisfy
    /// `mines < width * height`, so it is rejected by the same rule.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        if width > MAX_DIM || height > MAX_DIM || mines >= mult(width, height) {
            return Err(GameError::InvalidParameters);
        }
        Ok(Self {
            width,
            height,
            mines,
        })
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    /// Board shape as `(height, width)`, matching row-major indexing.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// Immutable generated board: which cells hold mines, plus the precomputed
/// Moore-neighbor mine count for every cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    mine_mask: Array2<bool>,
    counts: Array2<u8>,
}

impl Board {
    /// Builds a board from an explicit mine mask. The mask shape must match
    /// the config and carry exactly `config.mines()` mines.
    pub fn from_mine_mask(config: GameConfig, mine_mask: Array2<bool>) -> Result<Self> {
        if mine_mask.dim() != (config.height().into(), config.width().into()) {
            return Err(GameError::InvalidParameters);
        }
        let placed: CellCount = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .map_err(|_| GameError::InvalidParameters)?;
        if placed != config.mines() {
            return Err(GameError::InvalidParameters);
        }

        let counts = adjacency_counts(&mine_mask, config.size());
        Ok(Self {
            config,
            mine_mask,
            counts,
        })
    }

    /// Test and generator convenience: board with mines at the given
    /// `(row, col)` coordinates.
    pub fn with_mines(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let config = GameConfig::new(width, height, mine_coords.len().try_into().unwrap_or(CellCount::MAX))?;
        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= height || coords.1 >= width {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(config, mine_mask)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (height, width) = self.size();
        if coords.0 < height && coords.1 < width {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask[coords.to_nd_index()]
    }

    /// Precomputed count of mines among the up-to-8 Moore neighbors.
    /// Always in `0..=8`; also stored for mine cells, where it is unused.
    pub fn adjacent_mines(&self, coords: Coord2) -> u8 {
        self.counts[coords.to_nd_index()]
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }
}

fn adjacency_counts(mine_mask: &Array2<bool>, size: Coord2) -> Array2<u8> {
    Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
        let center = (row as Coord, col as Coord);
        NeighborIter::new(center, size)
            .filter(|&pos| mine_mask[pos.to_nd_index()])
            .count() as u8
    })
}
