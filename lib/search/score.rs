use derive_more::with_trait::Display;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

#[cfg(test)]
use proptest::prelude::*;

/// The minimax score.
///
/// An extended real number: either finite or one of the infinities that
/// stand for a decided game. Scores are totally ordered.
#[derive(Debug, Display, Default, Copy, Clone)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Score(
    #[cfg_attr(test, strategy(prop_oneof![
        Just(f64::NEG_INFINITY),
        Just(f64::INFINITY),
        (-1e3..1e3f64).prop_map(|v| v + 0.),
    ]))]
    f64,
);

impl Score {
    /// The score of a won game.
    pub const WIN: Self = Score(f64::INFINITY);

    /// The score of a lost game.
    pub const LOSS: Self = Score(f64::NEG_INFINITY);

    /// Constructs a score from a value that is not NaN.
    #[inline(always)]
    pub fn new(value: f64) -> Self {
        debug_assert!(!value.is_nan(), "score is NaN");
        Score(value + 0.)
    }

    /// This score's value.
    #[inline(always)]
    pub fn get(&self) -> f64 {
        self.0
    }

    /// Whether this score stands for a won game.
    #[inline(always)]
    pub fn is_win(&self) -> bool {
        *self == Self::WIN
    }

    /// Whether this score stands for a lost game.
    #[inline(always)]
    pub fn is_loss(&self) -> bool {
        *self == Self::LOSS
    }
}

impl Eq for Score {}

impl PartialEq for Score {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for Score {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Score {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Score {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}
