use derive_more::with_trait::{Constructor, Display, Error};
use std::str::FromStr;

/// A move to a cell of the board, given as `(row, column)`.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display("({row}, {col})")]
pub struct Move {
    #[cfg_attr(test, strategy(0i8..8))]
    row: i8,
    #[cfg_attr(test, strategy(0i8..8))]
    col: i8,
}

impl Move {
    /// The coordinates standing in for the absence of a move.
    pub const NONE: (i8, i8) = (-1, -1);

    /// This move's row.
    #[inline(always)]
    pub fn row(&self) -> i8 {
        self.row
    }

    /// This move's column.
    #[inline(always)]
    pub fn col(&self) -> i8 {
        self.col
    }

    /// The move displaced by `(dr, dc)`.
    #[inline(always)]
    pub fn offset(&self, dr: i8, dc: i8) -> Self {
        Move::new(self.row + dr, self.col + dc)
    }
}

impl From<Move> for (i8, i8) {
    #[inline(always)]
    fn from(m: Move) -> Self {
        (m.row, m.col)
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse move, expected `row,col`")]
pub struct ParseMoveError;

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = s.split_once(',').ok_or(ParseMoveError)?;
        let row = row.trim().parse().map_err(|_| ParseMoveError)?;
        let col = col.trim().parse().map_err(|_| ParseMoveError)?;
        Ok(Move::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_move_is_an_identity(m: Move) {
        assert_eq!(m.to_string().parse(), Ok(m));
    }

    #[proptest]
    fn parses_comma_separated_coordinates(m: Move) {
        assert_eq!(format!("{},{}", m.row(), m.col()).parse(), Ok(m));
    }

    #[proptest]
    fn parsing_move_fails_without_separator(
        #[filter(!#s.contains(','))]
        s: String,
    ) {
        assert_eq!(s.parse::<Move>(), Err(ParseMoveError));
    }

    #[proptest]
    fn offset_displaces_coordinates(m: Move, #[strategy(-2i8..=2)] dr: i8, #[strategy(-2i8..=2)] dc: i8) {
        assert_eq!(m.offset(dr, dc), Move::new(m.row() + dr, m.col() + dc));
    }

    #[proptest]
    fn converts_into_coordinates(m: Move) {
        assert_eq!(<(i8, i8)>::from(m), (m.row(), m.col()));
    }
}
