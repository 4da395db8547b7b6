use crate::game::Move;
use crate::search::{Depth, Score};
use derive_more::with_trait::{Constructor, Display};
use std::time::Duration;

/// The move selected at the root of the search.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Decision {
    /// The side to move has no legal moves.
    #[display("none")]
    Stuck,
    /// The game has not started, the centre of the board is taken.
    #[display("{_0} (opening)")]
    Opening(Move),
    /// The move with the highest minimax score.
    #[display("{_0} ({_1})")]
    Best(Move, Score),
}

impl Decision {
    /// The move selected, if any.
    #[inline(always)]
    pub fn best(&self) -> Option<Move> {
        match *self {
            Decision::Stuck => None,
            Decision::Opening(m) | Decision::Best(m, _) => Some(m),
        }
    }

    /// The minimax score of the move selected, if it was searched.
    #[inline(always)]
    pub fn score(&self) -> Option<Score> {
        match *self {
            Decision::Best(_, s) => Some(s),
            _ => None,
        }
    }

    /// The coordinates of the move selected, or [`Move::NONE`].
    #[inline(always)]
    pub fn coordinates(&self) -> (i8, i8) {
        self.best().map_or(Move::NONE, Into::into)
    }
}

/// Information about the search result.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[display("depth {depth} best {decision} nodes {nodes} time {time:?}")]
pub struct Info {
    depth: Depth,
    time: Duration,
    nodes: u64,
    decision: Decision,
}

impl Info {
    /// The depth searched.
    #[inline(always)]
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// The duration searched.
    #[inline(always)]
    pub fn time(&self) -> Duration {
        self.time
    }

    /// The number of nodes searched.
    #[inline(always)]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// The move selected at the root.
    #[inline(always)]
    pub fn decision(&self) -> Decision {
        self.decision
    }

    /// The move selected, if any.
    #[inline(always)]
    pub fn best(&self) -> Option<Move> {
        self.decision.best()
    }
}
