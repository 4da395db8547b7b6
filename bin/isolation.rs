use anyhow::{Context, Error as Failure};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use isolation::eval::{Centrality, Heuristic, Mobility, Open, Overlap};
use isolation::game::{Board, Move, Player, State};
use isolation::search::{Agent, AlphaBeta, Countdown, Depth, Minimax, Options, Random, Timer};
use log::info;
use std::time::Duration;

/// The kind of agent.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Kind {
    /// Fixed-depth minimax search.
    Minimax,
    /// Iteratively deepened alpha-beta search.
    Alphabeta,
    /// Uniformly random legal moves.
    Random,
}

/// The position evaluation used by searching agents.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Eval {
    /// Own legal moves minus opponent legal moves.
    Mobility,
    /// Mobility, rewarding moves the opponent could also take.
    Overlap,
    /// Mobility, rewarding distance from the centre relative to the opponent.
    Centrality,
    /// Own legal moves.
    Open,
}

impl Kind {
    fn build<H: Heuristic<Board> + 'static>(
        self,
        heuristic: H,
        options: Options,
        seed: u64,
    ) -> Box<dyn Agent<Board>> {
        match self {
            Kind::Minimax => Box::new(Minimax::with_options(heuristic, options)),
            Kind::Alphabeta => Box::new(AlphaBeta::with_options(heuristic, options)),
            Kind::Random => Box::new(Random::new(seed)),
        }
    }
}

#[derive(Debug, Parser)]
#[clap(name = "Isolation", version, author)]
#[clap(about = "Plays a game of Isolation between two agents.")]
struct Cli {
    /// The number of rows on the board.
    #[arg(long, default_value_t = Board::DEFAULT_SIZE)]
    height: u8,

    /// The number of columns on the board.
    #[arg(long, default_value_t = Board::DEFAULT_SIZE)]
    width: u8,

    /// The time budget per move in milliseconds.
    #[arg(long, default_value_t = 150)]
    time: u64,

    /// The agent moving first.
    #[arg(long, value_enum, default_value_t = Kind::Alphabeta)]
    one: Kind,

    /// The evaluation used by the agent moving first.
    #[arg(long, value_enum, default_value_t = Eval::Centrality)]
    one_eval: Eval,

    /// The agent moving second.
    #[arg(long, value_enum, default_value_t = Kind::Minimax)]
    two: Kind,

    /// The evaluation used by the agent moving second.
    #[arg(long, value_enum, default_value_t = Eval::Mobility)]
    two_eval: Eval,

    /// The depth searched by minimax agents.
    #[arg(long, default_value_t = Options::DEPTH)]
    depth: Depth,

    /// Searches are interrupted once less than this many milliseconds are left.
    #[arg(long, default_value_t = Options::THRESHOLD.as_millis() as u64)]
    threshold: u64,

    /// The deepest iteration searched by alpha-beta agents.
    #[arg(long)]
    max_depth: Option<Depth>,

    /// The seed of random agents.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Moves replayed before the agents take over.
    #[arg(long, value_name = "ROW,COL")]
    opening: Vec<Move>,
}

impl Cli {
    fn options(&self) -> Options {
        let options = Options::default()
            .with_depth(self.depth)
            .with_threshold(Duration::from_millis(self.threshold));

        match self.max_depth {
            None => options,
            Some(depth) => options.with_max_depth(depth),
        }
    }

    fn agent(&self, player: Player) -> Box<dyn Agent<Board>> {
        let (kind, eval) = match player {
            Player::One => (self.one, self.one_eval),
            Player::Two => (self.two, self.two_eval),
        };

        let (options, seed) = (self.options(), self.seed.wrapping_add(player.index() as u64));
        match eval {
            Eval::Mobility => kind.build(Mobility, options, seed),
            Eval::Overlap => kind.build(Overlap::default(), options, seed),
            Eval::Centrality => kind.build(Centrality::default(), options, seed),
            Eval::Open => kind.build(Open, options, seed),
        }
    }
}

fn main() -> Result<(), Failure> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let mut board = Board::new(args.height, args.width).context("failed to set up the board")?;
    for &m in &args.opening {
        board = board
            .try_play(m)
            .with_context(|| format!("failed to replay the opening at move {m}"))?;
    }

    let mut agents = [args.agent(Player::One), args.agent(Player::Two)];
    let budget = Duration::from_millis(args.time);

    info!("starting position\n{board}");
    let winner = loop {
        if let Some(winner) = board.winner() {
            break winner;
        }

        let player = board.turn();
        let timer = Countdown::new(budget);
        let Some(m) = agents[player.index()].get_move(&board, &timer) else {
            info!("player {player} forfeits without a move");
            break !player;
        };

        if timer.time_left().is_zero() {
            info!("player {player} forfeits on time after {:?}", timer.elapsed());
            break !player;
        }

        board = board
            .try_play(m)
            .with_context(|| format!("player {player} attempted to play {m}"))?;

        info!("player {player} plays {m} after {:?}", timer.elapsed());
    };

    info!("final position after {} moves\n{board}", board.move_count());
    info!("player {winner} wins");

    Ok(())
}
