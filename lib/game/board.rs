use crate::game::{MAX_CELLS, Move, Moves, Player, State};
use derive_more::with_trait::{Display, Error};
use std::fmt::{self, Formatter, Write};

#[cfg(test)]
use proptest::{collection::vec, prelude::*, sample::Selector};

/// The displacements of a knight's jump.
const JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The reason why constructing a [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("the board must have between 1 and {MAX_CELLS} cells")]
pub struct InvalidBoardSize;

/// The reason why playing a [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("illegal move {_0}")]
pub struct IllegalMove(#[error(not(source))] pub Move);

/// The Isolation board.
///
/// Both players jump around like chess knights and every cell ever occupied
/// is blocked for the rest of the game. The first player unable to move
/// loses.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    height: u8,
    width: u8,
    blocked: u64,
    locations: [Option<Move>; 2],
    turn: Player,
    moves: u32,
}

#[cfg(test)]
impl Arbitrary for Board {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (3u8..=6, 3u8..=6, vec(any::<Selector>(), ..=16))
            .prop_map(|(height, width, selectors)| {
                let mut board = Board::new(height, width).expect("valid board size");
                for s in selectors {
                    let moves = board.moves();
                    if moves.is_empty() {
                        break;
                    }

                    board = board.play(s.select(moves));
                }

                board
            })
            .boxed()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty(Self::DEFAULT_SIZE, Self::DEFAULT_SIZE)
    }
}

impl Board {
    /// The number of rows and columns of the default board.
    pub const DEFAULT_SIZE: u8 = 7;

    fn empty(height: u8, width: u8) -> Self {
        Board {
            height,
            width,
            blocked: 0,
            locations: [None; 2],
            turn: Player::One,
            moves: 0,
        }
    }

    /// An empty board with `height` rows and `width` columns.
    pub fn new(height: u8, width: u8) -> Result<Self, InvalidBoardSize> {
        match height as usize * width as usize {
            0 => Err(InvalidBoardSize),
            n if n > MAX_CELLS => Err(InvalidBoardSize),
            _ => Ok(Board::empty(height, width)),
        }
    }

    /// Whether the cell `m` lies within the board.
    #[inline(always)]
    pub fn contains(&self, m: Move) -> bool {
        (0..self.height as i8).contains(&m.row()) && (0..self.width as i8).contains(&m.col())
    }

    #[inline(always)]
    fn bit(&self, m: Move) -> u64 {
        1 << (m.row() as u32 * self.width as u32 + m.col() as u32)
    }

    /// Whether the cell `m` lies within the board and was never occupied.
    #[inline(always)]
    pub fn is_blank(&self, m: Move) -> bool {
        self.contains(m) && self.blocked & self.bit(m) == 0
    }

    /// An iterator over the cells that were never occupied.
    pub fn blanks(&self) -> impl Iterator<Item = Move> {
        let width = self.width as i8;
        (0..self.height as i8)
            .flat_map(move |r| (0..width).map(move |c| Move::new(r, c)))
            .filter(|&m| self.is_blank(m))
    }

    /// The player who won the game, if it is over.
    pub fn winner(&self) -> Option<Player> {
        if self.moves().is_empty() {
            Some(!self.turn)
        } else {
            None
        }
    }

    /// Plays `m` if it is legal for the side to move.
    pub fn try_play(&self, m: Move) -> Result<Self, IllegalMove> {
        if self.moves().contains(&m) {
            Ok(self.play(m))
        } else {
            Err(IllegalMove(m))
        }
    }
}

impl State for Board {
    #[inline(always)]
    fn height(&self) -> u8 {
        self.height
    }

    #[inline(always)]
    fn width(&self) -> u8 {
        self.width
    }

    #[inline(always)]
    fn turn(&self) -> Player {
        self.turn
    }

    #[inline(always)]
    fn move_count(&self) -> u32 {
        self.moves
    }

    #[inline(always)]
    fn location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()]
    }

    fn moves_of(&self, player: Player) -> Moves {
        match self.location(player) {
            None => self.blanks().collect(),
            Some(wc) => JUMPS
                .iter()
                .map(|&(dr, dc)| wc.offset(dr, dc))
                .filter(|&m| self.is_blank(m))
                .collect(),
        }
    }

    fn play(&self, m: Move) -> Self {
        debug_assert!(self.moves().contains(&m), "illegal move {m}");

        let mut next = self.clone();
        next.blocked |= self.bit(m);
        next.locations[self.turn.index()] = Some(m);
        next.turn = !self.turn;
        next.moves += 1;
        next
    }

    #[inline(always)]
    fn horizon(&self) -> u32 {
        self.height as u32 * self.width as u32 - self.blocked.count_ones()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.height as i8 {
            for c in 0..self.width as i8 {
                let m = Move::new(r, c);
                let cell = if self.locations[0] == Some(m) {
                    '1'
                } else if self.locations[1] == Some(m) {
                    '2'
                } else if self.is_blank(m) {
                    ' '
                } else {
                    '-'
                };

                if c > 0 {
                    f.write_str(" | ")?;
                }

                f.write_char(cell)?;
            }

            f.write_char('\n')?;
        }

        Ok(())
    }
}
