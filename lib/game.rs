mod board;
mod r#move;
mod player;
mod state;

pub use board::*;
pub use r#move::*;
pub use player::*;
pub use state::*;

use arrayvec::ArrayVec;

/// The maximum number of cells on a board.
pub const MAX_CELLS: usize = 64;

/// A container with sufficient capacity to hold all [`Move`]s in any [`State`].
pub type Moves = ArrayVec<Move, MAX_CELLS>;
