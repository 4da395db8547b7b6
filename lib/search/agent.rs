use crate::eval::Heuristic;
use crate::game::{Move, State};
use crate::search::{Deadline, Depth, Info, Interrupt, Options, Timer, engine::Stack};
use log::debug;
use rand::{SeedableRng, rngs::SmallRng, seq::IndexedRandom};
use std::time::Instant;

/// A game playing agent.
pub trait Agent<S: State> {
    /// Selects a move for the side to move in `pos` before `timer` runs out.
    ///
    /// Returns `None` if no move is available, either because the side to
    /// move is stuck or because the search was interrupted too early.
    fn get_move(&mut self, pos: &S, timer: &dyn Timer) -> Option<Move>;
}

/// Searches a single iteration of `depth` plies.
fn iterate<S: State, H: Heuristic<S> + ?Sized>(
    heuristic: &H,
    pos: &S,
    depth: Depth,
    deadline: Deadline<'_>,
    timestamp: Instant,
    pruning: bool,
) -> Result<Info, Interrupt> {
    let mut stack = Stack::new(heuristic, deadline, pos.turn());
    let decision = if pruning {
        stack.alphabeta(pos, depth)?
    } else {
        stack.minimax(pos, depth)?
    };

    Ok(Info::new(depth, timestamp.elapsed(), stack.nodes(), decision))
}

/// An agent that searches the full game tree up to a fixed depth.
#[derive(Debug, Default, Clone)]
pub struct Minimax<H> {
    options: Options,
    heuristic: H,
}

impl<H> Minimax<H> {
    /// Constructs the agent with default [`Options`].
    pub fn new(heuristic: H) -> Self {
        Self::with_options(heuristic, Options::default())
    }

    /// Constructs the agent with custom [`Options`].
    pub fn with_options(heuristic: H, options: Options) -> Self {
        Minimax { options, heuristic }
    }

    /// This agent's configuration.
    #[inline(always)]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Searches `pos` to the configured depth.
    pub fn search<S: State>(&self, pos: &S, timer: &dyn Timer) -> Result<Info, Interrupt>
    where
        H: Heuristic<S>,
    {
        let deadline = Deadline::new(timer, self.options.threshold);
        iterate(&self.heuristic, pos, self.options.depth, deadline, Instant::now(), false)
    }
}

impl<S: State, H: Heuristic<S>> Agent<S> for Minimax<H> {
    fn get_move(&mut self, pos: &S, timer: &dyn Timer) -> Option<Move> {
        match self.search(pos, timer) {
            Ok(info) => {
                debug!("{info}");
                info.best()
            }

            Err(e) => {
                debug!("{e} at depth {}", self.options.depth);
                None
            }
        }
    }
}

/// An agent that deepens alpha-beta searches until it runs out of time.
#[derive(Debug, Default, Clone)]
pub struct AlphaBeta<H> {
    options: Options,
    heuristic: H,
}

impl<H> AlphaBeta<H> {
    /// Constructs the agent with default [`Options`].
    pub fn new(heuristic: H) -> Self {
        Self::with_options(heuristic, Options::default())
    }

    /// Constructs the agent with custom [`Options`].
    pub fn with_options(heuristic: H, options: Options) -> Self {
        AlphaBeta { options, heuristic }
    }

    /// This agent's configuration.
    #[inline(always)]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Searches `pos` to a fixed `depth`.
    pub fn search<S: State>(&self, pos: &S, depth: Depth, timer: &dyn Timer) -> Result<Info, Interrupt>
    where
        H: Heuristic<S>,
    {
        let deadline = Deadline::new(timer, self.options.threshold);
        iterate(&self.heuristic, pos, depth, deadline, Instant::now(), true)
    }

    /// Searches `pos` one ply deeper at a time.
    ///
    /// Returns the result of the deepest iteration completed before the
    /// search was interrupted, if any.
    pub fn deepen<S: State>(&self, pos: &S, timer: &dyn Timer) -> Option<Info>
    where
        H: Heuristic<S>,
    {
        let timestamp = Instant::now();
        let deadline = Deadline::new(timer, self.options.threshold);

        let mut last = None;
        for depth in (1..=u32::MAX).filter_map(Depth::new) {
            let info = match iterate(&self.heuristic, pos, depth, deadline, timestamp, true) {
                Ok(info) => info,
                Err(e) => {
                    debug!("{e} at depth {depth}");
                    break;
                }
            };

            debug!("{info}");
            last = Some(info);

            // Deeper iterations would select the same move.
            if info.decision().score().is_none() || depth.get() > pos.horizon() {
                break;
            } else if self.options.max_depth.is_some_and(|max| depth >= max) {
                break;
            }
        }

        last
    }
}

impl<S: State, H: Heuristic<S>> Agent<S> for AlphaBeta<H> {
    fn get_move(&mut self, pos: &S, timer: &dyn Timer) -> Option<Move> {
        self.deepen(pos, timer).and_then(|info| info.best())
    }
}

/// An agent that plays uniformly random legal moves.
#[derive(Debug, Clone)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    /// Constructs the agent from a fixed `seed`.
    pub fn new(seed: u64) -> Self {
        Random {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<S: State> Agent<S> for Random {
    fn get_move(&mut self, pos: &S, _: &dyn Timer) -> Option<Move> {
        pos.moves().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{Centrality, Mobility, Overlap};
    use crate::game::{Board, Player};
    use crate::search::{Decision, Polls, Score};
    use std::time::Duration;
    use test_strategy::proptest;

    fn ample() -> Duration {
        Duration::MAX
    }

    fn expired() -> Duration {
        Duration::ZERO
    }

    fn shallow(max: u32) -> Options {
        Options::default().with_max_depth(Depth::new(max).unwrap())
    }

    #[proptest]
    fn minimax_searches_to_the_configured_depth(
        #[filter(#b.move_count() > 0 && !#b.moves().is_empty())] b: Board,
        #[strategy(1u32..=3)] d: u32,
    ) {
        let depth = Depth::new(d).unwrap();
        let agent = Minimax::with_options(Mobility, Options::default().with_depth(depth));
        let info = agent.search(&b, &ample)?;
        assert_eq!(info.depth(), depth);
        assert!(b.moves().contains(&info.best().expect("has moves")));
    }

    #[proptest]
    fn minimax_and_alphabeta_select_the_same_move(
        #[filter(#b.move_count() > 0)] b: Board,
        #[strategy(1u32..=3)] d: u32,
    ) {
        let depth = Depth::new(d).unwrap();
        let mm = Minimax::with_options(Overlap::default(), Options::default().with_depth(depth));
        let ab = AlphaBeta::new(Overlap::default());
        assert_eq!(
            mm.search(&b, &ample)?.decision(),
            ab.search(&b, depth, &ample)?.decision()
        );
    }

    #[proptest]
    fn get_move_is_idempotent(#[filter(!#b.moves().is_empty())] b: Board) {
        let mut mm = Minimax::new(Centrality::default());
        let mut ab = AlphaBeta::with_options(Centrality::default(), shallow(3));
        assert_eq!(mm.get_move(&b, &ample), mm.get_move(&b, &ample));
        assert_eq!(ab.get_move(&b, &ample), ab.get_move(&b, &ample));
    }

    #[proptest]
    fn agents_return_no_move_if_stuck(#[filter(#b.moves().is_empty())] b: Board, seed: u64) {
        assert_eq!(Minimax::new(Mobility).get_move(&b, &ample), None);
        assert_eq!(AlphaBeta::new(Mobility).get_move(&b, &ample), None);
        assert_eq!(Random::new(seed).get_move(&b, &ample), None);
    }

    #[proptest]
    fn deepening_stops_once_stuck(#[filter(#b.moves().is_empty())] b: Board) {
        let info = AlphaBeta::new(Mobility).deepen(&b, &ample).expect("completes");
        assert_eq!(info.depth().get(), 1);
        assert_eq!(info.decision(), Decision::Stuck);
    }

    #[test]
    fn agents_open_at_the_centre() {
        let b = Board::default();
        let centre = Some(Move::new(3, 3));
        assert_eq!(Minimax::new(Mobility).get_move(&b, &ample), centre);
        assert_eq!(AlphaBeta::new(Mobility).get_move(&b, &ample), centre);

        let info = AlphaBeta::new(Mobility).deepen(&b, &ample).expect("completes");
        assert_eq!(info.depth().get(), 1);
        assert_eq!(info.decision(), Decision::Opening(Move::new(3, 3)));
    }

    #[proptest]
    fn agents_return_no_move_if_time_is_up(b: Board) {
        assert_eq!(Minimax::new(Mobility).get_move(&b, &expired), None);
        assert_eq!(AlphaBeta::new(Mobility).get_move(&b, &expired), None);
        assert_eq!(AlphaBeta::new(Mobility).deepen(&b, &expired), None);
    }

    #[proptest]
    fn minimax_returns_no_move_if_interrupted(
        #[filter(#b.move_count() > 0 && !#b.moves().is_empty())] b: Board,
    ) {
        let agent = Minimax::new(Mobility);
        let nodes = agent.search(&b, &ample)?.nodes();
        assert_eq!(agent.search(&b, &Polls::new(nodes - 1)), Err(Interrupt));
        assert_eq!(Minimax::new(Mobility).get_move(&b, &Polls::new(nodes - 1)), None);
    }

    #[proptest]
    fn deepening_returns_the_last_completed_iteration(
        #[filter(#b.move_count() > 0 && !#b.moves().is_empty() && #b.horizon() >= 2)] b: Board,
    ) {
        let agent = AlphaBeta::new(Mobility);
        let one = agent.search(&b, Depth::new(1).unwrap(), &ample)?;
        let two = agent.search(&b, Depth::new(2).unwrap(), &ample)?;

        let info = agent.deepen(&b, &Polls::new(one.nodes() + two.nodes()));
        let info = info.expect("completes depth 2");
        assert_eq!(info.depth(), two.depth());
        assert_eq!(info.nodes(), two.nodes());
        assert_eq!(info.decision(), two.decision());
    }

    #[proptest]
    fn deepening_discards_partial_iterations(
        #[filter(#b.move_count() > 0 && !#b.moves().is_empty() && #b.horizon() >= 2)] b: Board,
    ) {
        let agent = AlphaBeta::new(Mobility);
        let one = agent.search(&b, Depth::new(1).unwrap(), &ample)?;
        let two = agent.search(&b, Depth::new(2).unwrap(), &ample)?;

        let info = agent.deepen(&b, &Polls::new(one.nodes() + two.nodes() - 1));
        let info = info.expect("completes depth 1");
        assert_eq!(info.depth(), one.depth());
        assert_eq!(info.decision(), one.decision());
    }

    #[proptest]
    fn deepening_stops_at_max_depth_or_past_the_horizon(
        #[filter(#b.move_count() > 0 && !#b.moves().is_empty())] b: Board,
        #[strategy(1u32..=3)] m: u32,
    ) {
        let agent = AlphaBeta::with_options(Mobility, shallow(m));
        let info = agent.deepen(&b, &ample).expect("completes");
        assert_eq!(info.depth().get(), m.min(b.horizon() + 1));
    }

    #[test]
    fn deepening_solves_endgames() {
        let b = [(0, 0), (2, 0), (2, 1), (1, 2)]
            .into_iter()
            .fold(Board::new(3, 3).expect("valid board size"), |b, (r, c)| {
                b.play(Move::new(r, c))
            });

        let info = AlphaBeta::new(Mobility).deepen(&b, &ample).expect("completes");
        assert_eq!(info.decision(), Decision::Best(Move::new(0, 2), Score::WIN));
        assert!(info.depth().get() > b.horizon());
    }

    #[proptest]
    fn random_plays_legal_moves(#[filter(!#b.moves().is_empty())] b: Board, seed: u64) {
        let m = Random::new(seed).get_move(&b, &expired);
        assert!(b.moves().contains(&m.expect("has moves")));
    }

    #[proptest]
    fn random_is_reproducible(#[filter(!#b.moves().is_empty())] b: Board, seed: u64) {
        let (mut a, mut c) = (Random::new(seed), Random::new(seed));
        for _ in 0..8 {
            assert_eq!(a.get_move(&b, &ample), c.get_move(&b, &ample));
        }
    }

    #[test]
    fn agents_are_object_safe() {
        let mut agents: Vec<Box<dyn Agent<Board>>> = vec![
            Box::new(Minimax::new(Mobility)),
            Box::new(AlphaBeta::with_options(Mobility, shallow(2))),
            Box::new(Random::new(0)),
        ];

        let b = Board::default().play(Move::new(3, 3));
        for agent in &mut agents {
            let m = agent.get_move(&b, &ample).expect("has moves");
            assert_eq!(b.try_play(m).map(|n| n.location(Player::Two)), Ok(Some(m)));
        }
    }
}
