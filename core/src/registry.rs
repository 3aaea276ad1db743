use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, RwLock};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::*;

/// Unique identifier assigned to every started game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for GameId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Externally visible result of a registry operation: identity, parameters,
/// completion flag, and the rendered field (full board once completed,
/// hidden view otherwise).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: GameId,
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
    pub completed: bool,
    pub field: Vec<Vec<char>>,
}

impl GameSnapshot {
    fn capture(game_id: GameId, game: &Game) -> Self {
        let config = game.config();
        let completed = game.is_completed();
        Self {
            game_id,
            width: config.width(),
            height: config.height(),
            mines: config.mines(),
            completed,
            field: if completed {
                full_field(game)
            } else {
                hidden_field(game)
            },
        }
    }
}

/// Concurrent id → game store owning every in-progress game. The outer
/// `RwLock` guards only map insert/lookup; each game carries its own
/// `Mutex`, held for the duration of one reveal. Games are never removed
/// (retention is the embedding process's concern).
pub struct GameRegistry<G = RandomBoardGenerator> {
    generator: Mutex<G>,
    games: RwLock<HashMap<GameId, Arc<Mutex<Game>>>>,
}

impl GameRegistry<RandomBoardGenerator> {
    pub fn new() -> Self {
        Self::with_generator(RandomBoardGenerator::new())
    }
}

impl Default for GameRegistry<RandomBoardGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: BoardGenerator> GameRegistry<G> {
    pub fn with_generator(generator: G) -> Self {
        Self {
            generator: Mutex::new(generator),
            games: RwLock::new(HashMap::new()),
        }
    }

    /// Starts a new game: validates the parameters, generates a board,
    /// registers it under a fresh id, and returns the all-blank snapshot.
    /// Nothing is registered when validation rejects.
    pub fn start(&self, width: Coord, height: Coord, mines: CellCount) -> Result<GameSnapshot> {
        let config = GameConfig::new(width, height, mines)?;

        let board = self
            .generator
            .lock()
            .expect("generator lock poisoned")
            .generate(config);
        let game = Game::new(board);
        let game_id = GameId::new();
        let snapshot = GameSnapshot::capture(game_id, &game);

        self.games
            .write()
            .expect("game registry write lock poisoned")
            .insert(game_id, Arc::new(Mutex::new(game)));
        log::info!(
            "game {game_id} started: {width}x{height}, {mines} mines"
        );

        Ok(snapshot)
    }

    /// Applies one reveal turn to a stored game and snapshots the result.
    pub fn reveal(&self, game_id: GameId, row: Coord, col: Coord) -> Result<GameSnapshot> {
        let game = self
            .games
            .read()
            .expect("game registry read lock poisoned")
            .get(&game_id)
            .cloned()
            .ok_or(GameError::GameNotFound)?;

        let mut game = game.lock().expect("game lock poisoned");
        let outcome = game.reveal((row, col))?;
        if game.is_completed() {
            log::info!("game {game_id} completed: {outcome:?}");
        }

        Ok(GameSnapshot::capture(game_id, &game))
    }

    pub fn contains(&self, game_id: GameId) -> bool {
        self.games
            .read()
            .expect("game registry read lock poisoned")
            .contains_key(&game_id)
    }

    pub fn len(&self) -> usize {
        self.games
            .read()
            .expect("game registry read lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> GameRegistry {
        GameRegistry::with_generator(RandomBoardGenerator::from_seed(99))
    }

    /// Deterministic generator: mines fill the first cells in row-major
    /// order, so `start(w, h, m)` mines exactly the first `m` cells.
    struct FrontLoadedGenerator;

    impl BoardGenerator for FrontLoadedGenerator {
        fn generate(&mut self, config: GameConfig) -> Board {
            let width = usize::from(config.width());
            let mut mask = ndarray::Array2::default(config.size().to_nd_index());
            for flat in 0..usize::from(config.mines()) {
                mask[[flat / width, flat % width]] = true;
            }
            Board::from_mine_mask(config, mask).unwrap()
        }
    }

    #[test]
    fn start_returns_all_blank_field_and_registers_the_game() {
        let registry = registry();

        let snapshot = registry.start(4, 3, 2).unwrap();

        assert_eq!((snapshot.width, snapshot.height, snapshot.mines), (4, 3, 2));
        assert!(!snapshot.completed);
        assert_eq!(snapshot.field.len(), 3);
        assert!(snapshot.field.iter().flatten().all(|&cell| cell == ' '));
        assert!(registry.contains(snapshot.game_id));
    }

    #[test]
    fn invalid_parameters_reject_and_register_nothing() {
        let registry = registry();

        assert_eq!(registry.start(31, 3, 1), Err(GameError::InvalidParameters));
        assert_eq!(registry.start(3, 31, 1), Err(GameError::InvalidParameters));
        assert_eq!(registry.start(3, 3, 9), Err(GameError::InvalidParameters));
        assert!(registry.is_empty());
    }

    #[test]
    fn reveal_on_unknown_id_is_game_not_found() {
        let registry = registry();

        assert_eq!(
            registry.reveal(GameId::new(), 0, 0),
            Err(GameError::GameNotFound)
        );
    }

    #[test]
    fn reveal_rejects_out_of_bounds_coordinates() {
        let registry = registry();
        let snapshot = registry.start(3, 2, 1).unwrap();

        assert_eq!(
            registry.reveal(snapshot.game_id, 2, 0),
            Err(GameError::OutOfBounds)
        );
        assert_eq!(
            registry.reveal(snapshot.game_id, 0, 3),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn losing_turn_exposes_the_full_board() {
        let registry = GameRegistry::with_generator(FrontLoadedGenerator);
        let started = registry.start(2, 2, 1).unwrap();

        let snapshot = registry.reveal(started.game_id, 0, 0).unwrap();

        assert!(snapshot.completed);
        assert_eq!(snapshot.field, vec![vec!['X', '1'], vec!['1', '1']]);
    }

    #[test]
    fn partial_reveal_keeps_everything_else_blank() {
        let registry = GameRegistry::with_generator(FrontLoadedGenerator);
        let started = registry.start(3, 3, 1).unwrap();

        let snapshot = registry.reveal(started.game_id, 1, 1).unwrap();

        assert!(!snapshot.completed);
        assert_eq!(snapshot.field[1][1], '1');
        let blanks = snapshot.field.iter().flatten().filter(|&&c| c == ' ').count();
        assert_eq!(blanks, 8);
    }

    #[test]
    fn win_on_three_by_three_with_eight_mines_takes_one_turn() {
        let registry = GameRegistry::with_generator(FrontLoadedGenerator);
        let started = registry.start(3, 3, 8).unwrap();

        // Only (2, 2) is safe.
        let snapshot = registry.reveal(started.game_id, 2, 2).unwrap();

        assert!(snapshot.completed);
        let mines = snapshot.field.iter().flatten().filter(|&&c| c == 'X').count();
        assert_eq!(mines, 8);
        assert_eq!(snapshot.field[2][2], '3');
    }

    #[test]
    fn completed_game_rejects_further_turns() {
        let registry = registry();
        let started = registry.start(1, 1, 0).unwrap();

        let won = registry.reveal(started.game_id, 0, 0).unwrap();
        assert!(won.completed);
        assert_eq!(won.field, vec![vec!['0']]);

        assert_eq!(
            registry.reveal(started.game_id, 0, 0),
            Err(GameError::AlreadyCompleted)
        );
    }

    #[test]
    fn winning_exposes_the_full_board_including_mines() {
        let registry = registry();
        let started = registry.start(2, 1, 0).unwrap();

        let snapshot = registry.reveal(started.game_id, 0, 0).unwrap();

        assert!(snapshot.completed);
        assert_eq!(snapshot.field, vec![vec!['0', '0']]);
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        let registry = Arc::new(registry());
        let mut handles = Vec::new();

        for mines in 0..4u16 {
            let registry = Arc::clone(&registry);
            handles.push(std::thread::spawn(move || {
                let snapshot = registry.start(5, 5, mines).unwrap();
                registry.reveal(snapshot.game_id, 2, 2).unwrap();
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 4);
    }
}
