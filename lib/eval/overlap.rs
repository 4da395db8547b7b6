use crate::eval::{Heuristic, Mobility, decided};
use crate::game::{Player, State};
use crate::search::Score;

/// [`Mobility`] rewarded for every move the opponent could also reach.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Overlap {
    weight: f64,
}

impl Default for Overlap {
    fn default() -> Self {
        Self::new(Self::WEIGHT)
    }
}

impl Overlap {
    /// The default reward per shared move.
    pub const WEIGHT: f64 = 0.25;

    /// Constructs the heuristic with a custom reward per shared move.
    pub fn new(weight: f64) -> Self {
        Overlap { weight }
    }
}

impl<S: State> Heuristic<S> for Overlap {
    fn score(&self, pos: &S, player: Player) -> Score {
        if let Some(score) = decided(pos, player) {
            return score;
        }

        let ours = pos.moves_of(player);
        let theirs = pos.moves_of(player.opponent());
        let shared = ours.iter().filter(|m| theirs.contains(m)).count() as f64;
        Score::new(Mobility.score(pos, player).get() + shared * self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Move};
    use test_strategy::proptest;

    #[proptest]
    fn overlap_is_never_below_mobility(#[filter(!#b.moves().is_empty())] b: Board, p: Player) {
        assert!(Overlap::default().score(&b, p) >= Mobility.score(&b, p));
    }

    #[proptest]
    fn zero_weight_reduces_to_mobility(b: Board, p: Player) {
        assert_eq!(Overlap::new(0.).score(&b, p), Mobility.score(&b, p));
    }

    #[proptest]
    fn decided_games_score_infinite(#[filter(#b.moves().is_empty())] b: Board) {
        assert_eq!(Overlap::default().score(&b, b.turn()), Score::LOSS);
        assert_eq!(Overlap::default().score(&b, !b.turn()), Score::WIN);
    }

    #[test]
    fn rewards_shared_moves() {
        let board = Board::new(5, 5).expect("valid board size");
        let board = board.play(Move::new(0, 0)).play(Move::new(0, 2));

        // (0, 0) reaches (1, 2) and (2, 1); (0, 2) reaches (1, 0), (1, 4), (2, 1) and (2, 3).
        assert_eq!(Mobility.score(&board, Player::One), Score::new(-2.));
        assert_eq!(Overlap::default().score(&board, Player::One), Score::new(-1.75));
    }
}
