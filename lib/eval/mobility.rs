use crate::eval::{Heuristic, decided};
use crate::game::{Player, State};
use crate::search::Score;

/// The number of own moves minus the number of opponent moves.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Mobility;

impl<S: State> Heuristic<S> for Mobility {
    fn score(&self, pos: &S, player: Player) -> Score {
        decided(pos, player).unwrap_or_else(|| {
            let ours = pos.moves_of(player).len() as f64;
            let theirs = pos.moves_of(player.opponent()).len() as f64;
            Score::new(ours - theirs)
        })
    }
}

/// The number of own moves.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Open;

impl<S: State> Heuristic<S> for Open {
    fn score(&self, pos: &S, player: Player) -> Score {
        decided(pos, player).unwrap_or_else(|| Score::new(pos.moves_of(player).len() as f64))
    }
}
