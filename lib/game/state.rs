use crate::game::{Move, Moves, Player};

/// A two-player, perfect-information, zero-sum game state.
///
/// States are immutable values: [`State::play`] returns the successor state
/// and leaves `self` untouched.
pub trait State {
    /// The number of rows on the board.
    fn height(&self) -> u8;

    /// The number of columns on the board.
    fn width(&self) -> u8;

    /// The player to move.
    fn turn(&self) -> Player;

    /// The number of moves played so far.
    fn move_count(&self) -> u32;

    /// The cell occupied by `player`, if it has been placed on the board.
    fn location(&self, player: Player) -> Option<Move>;

    /// The legal moves of `player`, regardless of whose turn it is.
    fn moves_of(&self, player: Player) -> Moves;

    /// Plays a legal move of the side to move.
    fn play(&self, m: Move) -> Self
    where
        Self: Sized;

    /// An upper bound on the number of plies left before the game ends.
    fn horizon(&self) -> u32;

    /// The legal moves of the side to move.
    #[inline(always)]
    fn moves(&self) -> Moves {
        self.moves_of(self.turn())
    }

    /// Whether `player` has won, i.e. its opponent is to move and stuck.
    #[inline(always)]
    fn is_winner(&self, player: Player) -> bool {
        player != self.turn() && self.moves().is_empty()
    }

    /// Whether `player` has lost, i.e. it is to move and stuck.
    #[inline(always)]
    fn is_loser(&self, player: Player) -> bool {
        player == self.turn() && self.moves().is_empty()
    }
}
