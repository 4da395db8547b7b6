use std::{num::NonZeroU32, time::Duration};

/// The search depth in plies.
pub type Depth = NonZeroU32;

/// Configuration of a searching agent.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Options {
    /// The number of plies searched by fixed-depth agents.
    pub depth: Depth,

    /// The search is interrupted once less than this much time is left.
    pub threshold: Duration,

    /// The deepest iteration searched by iterative deepening agents.
    pub max_depth: Option<Depth>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            depth: Self::DEPTH,
            threshold: Self::THRESHOLD,
            max_depth: None,
        }
    }
}

impl Options {
    /// The default fixed search depth.
    pub const DEPTH: Depth = Depth::new(3).unwrap();

    /// The default interruption threshold.
    pub const THRESHOLD: Duration = Duration::from_millis(10);

    /// Set the fixed search depth.
    #[must_use]
    #[inline(always)]
    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    /// Set the interruption threshold.
    #[must_use]
    #[inline(always)]
    pub fn with_threshold(mut self, threshold: Duration) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the deepest iteration.
    #[must_use]
    #[inline(always)]
    pub fn with_max_depth(mut self, depth: Depth) -> Self {
        self.max_depth = Some(depth);
        self
    }
}
