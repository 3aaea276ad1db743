use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniformly random mine placement by rejection sampling: draw `(row, col)`
/// pairs until the requested number of distinct cells is mined. Terminates
/// almost surely because every accepted config keeps at least one safe cell.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
}

impl RandomBoardGenerator {
    /// Entropy-seeded generator; distinct boards across calls.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Deterministic generator for reproducible boards.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBoardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Board {
        let (height, width) = config.size();

        loop {
            let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());

            let mut mines_placed: CellCount = 0;
            while mines_placed < config.mines() {
                let row = self.rng.random_range(0..height);
                let col = self.rng.random_range(0..width);

                let cell = &mut mine_mask[(row, col).to_nd_index()];
                if !*cell {
                    *cell = true;
                    mines_placed += 1;
                }
            }

            match Board::from_mine_mask(config, mine_mask) {
                Ok(board) => return board,
                // Unreachable for a validated config; redraw rather than poison the game.
                Err(err) => log::warn!("generated mask rejected ({err}), redrawing"),
            }
        }
    }
}
