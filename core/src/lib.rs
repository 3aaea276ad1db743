//! Server-side Minesweeper engine: board generation, the reveal /
//! flood-fill state machine, and a concurrent registry of in-progress
//! games. Transport adapters sit on top and speak [`GameSnapshot`]s; see
//! the `sapper-protocol` crate for the wire message types.

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use registry::*;
pub use types::*;
pub use view::*;

mod board;
mod engine;
mod error;
mod generator;
mod registry;
mod types;
mod view;
