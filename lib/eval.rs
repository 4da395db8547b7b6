mod centrality;
mod mobility;
mod overlap;

pub use centrality::*;
pub use mobility::*;
pub use overlap::*;

use crate::game::{Player, State};
use crate::search::Score;

/// A heuristic position evaluation.
pub trait Heuristic<S: State> {
    /// The value of `pos` from the point of view of `player`.
    ///
    /// Must be [`Score::WIN`] exactly when `player` has won and
    /// [`Score::LOSS`] exactly when `player` has lost.
    fn score(&self, pos: &S, player: Player) -> Score;
}

impl<S: State, F: Fn(&S, Player) -> Score> Heuristic<S> for F {
    #[inline(always)]
    fn score(&self, pos: &S, player: Player) -> Score {
        self(pos, player)
    }
}

/// The decided score of `pos` for `player`, if the game is over.
#[inline(always)]
fn decided<S: State>(pos: &S, player: Player) -> Option<Score> {
    if pos.is_winner(player) {
        Some(Score::WIN)
    } else if pos.is_loser(player) {
        Some(Score::LOSS)
    } else {
        None
    }
}
