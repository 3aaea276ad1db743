//! Wire message types for the Minesweeper engine. A transport adapter
//! (HTTP or otherwise, out of scope here) deserializes requests, converts
//! them through the checked accessors below, calls into `sapper-core`, and
//! serializes the resulting [`GameInfoResponse`] or [`ErrorResponse`].
//!
//! Field names and the field rendering (blank / `'X'` / `'0'..'8'`) are
//! wire-compatible with the original service.

use sapper_core::{CellCount, Coord, GameError, GameId, GameSnapshot, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGameRequest {
    pub width: i32,
    pub height: i32,
    pub mines_count: i32,
}

impl NewGameRequest {
    /// Checked narrowing to engine scalars. Negative or absurdly large
    /// values are invalid parameters before the engine ever sees them; the
    /// engine then applies its own bounds (max edge 30, at least one safe
    /// cell).
    pub fn dimensions(&self) -> Result<(Coord, Coord, CellCount)> {
        let width = Coord::try_from(self.width).map_err(|_| GameError::InvalidParameters)?;
        let height = Coord::try_from(self.height).map_err(|_| GameError::InvalidParameters)?;
        let mines = CellCount::try_from(self.mines_count).map_err(|_| GameError::InvalidParameters)?;
        Ok((width, height, mines))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTurnRequest {
    pub game_id: Uuid,
    pub row: i32,
    pub col: i32,
}

impl GameTurnRequest {
    pub fn game_id(&self) -> GameId {
        GameId::from(self.game_id)
    }

    /// Checked narrowing to board coordinates. Anything that cannot fit a
    /// coordinate axis is off the board by definition.
    pub fn coords(&self) -> Result<(Coord, Coord)> {
        let row = Coord::try_from(self.row).map_err(|_| GameError::OutOfBounds)?;
        let col = Coord::try_from(self.col).map_err(|_| GameError::OutOfBounds)?;
        Ok((row, col))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameInfoResponse {
    pub game_id: Uuid,
    pub width: i32,
    pub height: i32,
    pub mines_count: i32,
    pub completed: bool,
    pub field: Vec<Vec<char>>,
}

impl From<GameSnapshot> for GameInfoResponse {
    fn from(snapshot: GameSnapshot) -> Self {
        Self {
            game_id: snapshot.game_id.as_uuid(),
            width: snapshot.width.into(),
            height: snapshot.height.into(),
            mines_count: snapshot.mines.into(),
            completed: snapshot.completed,
            field: snapshot.field,
        }
    }
}

/// Rejection payload: the engine error's human-readable message, rendered
/// the way the original service answered bad requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<GameError> for ErrorResponse {
    fn from(err: GameError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
