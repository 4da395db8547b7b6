use derive_more::with_trait::Display;
use std::ops::Not;

/// One of the two players.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Player {
    #[display("1")]
    One,
    #[display("2")]
    Two,
}

impl Player {
    /// This player's opponent.
    #[inline(always)]
    pub fn opponent(self) -> Self {
        !self
    }

    /// This player's index in `[One, Two]`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Not for Player {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}
