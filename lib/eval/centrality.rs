use crate::eval::{Heuristic, Mobility, decided};
use crate::game::{Move, Player, State};
use crate::search::Score;

/// [`Mobility`] adjusted by how far each player stands from the board centre.
///
/// The positional term is the weighted difference between the own and the
/// opponent's Manhattan distance to the centre. It vanishes until both
/// players are on the board.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Centrality {
    weight: f64,
}

impl Default for Centrality {
    fn default() -> Self {
        Self::new(Self::WEIGHT)
    }
}

impl Centrality {
    /// The default weight of the positional term.
    pub const WEIGHT: f64 = 0.075;

    /// Constructs the heuristic with a custom weight of the positional term.
    pub fn new(weight: f64) -> Self {
        Centrality { weight }
    }

    fn distance<S: State>(pos: &S, m: Move) -> f64 {
        let row = pos.height() as f64 / 2.;
        let col = pos.width() as f64 / 2.;
        (m.row() as f64 - row).abs() + (m.col() as f64 - col).abs()
    }
}

impl<S: State> Heuristic<S> for Centrality {
    fn score(&self, pos: &S, player: Player) -> Score {
        if let Some(score) = decided(pos, player) {
            return score;
        }

        let mobility = Mobility.score(pos, player).get();
        match (pos.location(player), pos.location(player.opponent())) {
            (Some(ours), Some(theirs)) => {
                let diff = Self::distance(pos, ours) - Self::distance(pos, theirs);
                Score::new(mobility + diff * self.weight)
            }

            _ => Score::new(mobility),
        }
    }
}
