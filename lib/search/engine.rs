use crate::eval::Heuristic;
use crate::game::{Move, Player, State};
use crate::search::{Deadline, Decision, Depth, Interrupt, Score};
use log::trace;
use std::ops::{Not, Range};

/// The side to move, relative to the searching player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
enum Side {
    Max,
    Min,
}

impl Side {
    /// The value of a node where this side is stuck.
    #[inline(always)]
    fn stuck(self) -> Score {
        match self {
            Side::Max => Score::LOSS,
            Side::Min => Score::WIN,
        }
    }

    /// The score this side prefers.
    #[inline(always)]
    fn pick(self, a: Score, b: Score) -> Score {
        match self {
            Side::Max => a.max(b),
            Side::Min => a.min(b),
        }
    }
}

impl Not for Side {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }
}

/// The move taken when the game has not started.
#[inline(always)]
fn centre<S: State>(pos: &S) -> Move {
    Move::new((pos.height() / 2) as i8, (pos.width() / 2) as i8)
}

/// The state of a single search.
#[derive(Debug)]
pub(super) struct Stack<'a, H: ?Sized> {
    heuristic: &'a H,
    deadline: Deadline<'a>,
    player: Player,
    nodes: u64,
}

impl<'a, H: ?Sized> Stack<'a, H> {
    /// Sets up a search on behalf of `player`.
    pub(super) fn new(heuristic: &'a H, deadline: Deadline<'a>, player: Player) -> Self {
        Stack {
            heuristic,
            deadline,
            player,
            nodes: 0,
        }
    }

    /// The number of nodes expanded so far.
    #[inline(always)]
    pub(super) fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Polls the deadline before expanding a node.
    #[inline(always)]
    fn expand(&mut self) -> Result<(), Interrupt> {
        self.nodes += 1;
        self.deadline.check()
    }

    #[inline(always)]
    fn evaluate<S: State>(&self, pos: &S) -> Score
    where
        H: Heuristic<S>,
    {
        self.heuristic.score(pos, self.player)
    }

    /// The shortcuts taken at the root before searching.
    fn shortcut<S: State>(&self, pos: &S, moves: &[Move]) -> Option<Decision> {
        if moves.is_empty() {
            trace!("no legal moves");
            Some(Decision::Stuck)
        } else if pos.move_count() == 0 {
            let m = centre(pos);
            trace!("opening at {m}");
            Some(Decision::Opening(m))
        } else {
            None
        }
    }

    /// The fixed-depth minimax search.
    pub(super) fn minimax<S: State>(&mut self, pos: &S, depth: Depth) -> Result<Decision, Interrupt>
    where
        H: Heuristic<S>,
    {
        self.expand()?;
        let moves = pos.moves();
        if let Some(decision) = self.shortcut(pos, &moves) {
            return Ok(decision);
        }

        let depth = depth.get();
        let mut head = moves[0];
        let mut tail = self.mm_child(pos, head, depth, Side::Min)?;
        for &m in &moves[1..] {
            let score = self.mm_child(pos, m, depth, Side::Min)?;
            if score > tail {
                (head, tail) = (m, score);
            }
        }

        Ok(Decision::Best(head, tail))
    }

    /// The minimax value of a node `depth` plies above the horizon.
    fn mm<S: State>(&mut self, pos: &S, depth: u32, side: Side) -> Result<Score, Interrupt>
    where
        H: Heuristic<S>,
    {
        self.expand()?;
        let moves = pos.moves();
        if moves.is_empty() {
            return Ok(side.stuck());
        }

        let mut value = side.stuck();
        for m in moves {
            value = side.pick(value, self.mm_child(pos, m, depth, !side)?);
        }

        Ok(value)
    }

    /// The minimax value of the node reached by playing `m`.
    #[inline(always)]
    fn mm_child<S: State>(&mut self, pos: &S, m: Move, depth: u32, side: Side) -> Result<Score, Interrupt>
    where
        H: Heuristic<S>,
    {
        let next = pos.play(m);
        if depth <= 1 {
            Ok(self.evaluate(&next))
        } else {
            self.mm(&next, depth - 1, side)
        }
    }

    /// The fixed-depth alpha-beta search.
    pub(super) fn alphabeta<S: State>(&mut self, pos: &S, depth: Depth) -> Result<Decision, Interrupt>
    where
        H: Heuristic<S>,
    {
        self.expand()?;
        let moves = pos.moves();
        if let Some(decision) = self.shortcut(pos, &moves) {
            return Ok(decision);
        }

        let depth = depth.get();
        let (mut alpha, beta) = (Score::LOSS, Score::WIN);
        let mut head = moves[0];
        let mut tail = self.ab_child(pos, head, alpha..beta, depth, Side::Min)?;
        for &m in &moves[1..] {
            if tail >= beta {
                break;
            } else if depth > 1 {
                alpha = alpha.max(tail);
            }

            let score = self.ab_child(pos, m, alpha..beta, depth, Side::Min)?;
            if score > tail {
                (head, tail) = (m, score);
            }
        }

        Ok(Decision::Best(head, tail))
    }

    /// The alpha-beta value of a node `depth` plies above the horizon.
    ///
    /// Bounds are only tightened above the last ply, since leaf evaluations
    /// have no children to prune.
    fn ab<S: State>(
        &mut self,
        pos: &S,
        bounds: Range<Score>,
        depth: u32,
        side: Side,
    ) -> Result<Score, Interrupt>
    where
        H: Heuristic<S>,
    {
        self.expand()?;
        let moves = pos.moves();
        if moves.is_empty() {
            return Ok(side.stuck());
        }

        let (mut alpha, mut beta) = (bounds.start, bounds.end);
        let mut value = side.stuck();
        for m in moves {
            value = side.pick(value, self.ab_child(pos, m, alpha..beta, depth, !side)?);
            match side {
                Side::Max if value >= beta => return Ok(value),
                Side::Min if value <= alpha => return Ok(value),
                Side::Max if depth > 1 => alpha = alpha.max(value),
                Side::Min if depth > 1 => beta = beta.min(value),
                _ => {}
            }
        }

        Ok(value)
    }

    /// The alpha-beta value of the node reached by playing `m`.
    #[inline(always)]
    fn ab_child<S: State>(
        &mut self,
        pos: &S,
        m: Move,
        bounds: Range<Score>,
        depth: u32,
        side: Side,
    ) -> Result<Score, Interrupt>
    where
        H: Heuristic<S>,
    {
        let next = pos.play(m);
        if depth <= 1 {
            Ok(self.evaluate(&next))
        } else {
            self.ab(&next, bounds, depth - 1, side)
        }
    }
}
