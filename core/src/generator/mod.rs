use crate::*;
pub use random::*;

mod random;

/// Board generation strategy. Implementations must place exactly
/// `config.mines()` mines and leave the rest of the process untouched:
/// generation returns a fresh [`Board`] and mutates nothing shared.
pub trait BoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Board;
}
