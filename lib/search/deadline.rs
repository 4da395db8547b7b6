use derive_more::with_trait::{Debug, Display, Error};
use std::time::{Duration, Instant};

/// Indicates the search was interrupted.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Error)]
#[display("the search was interrupted")]
pub struct Interrupt;

/// A source of the time remaining to make a move.
pub trait Timer {
    /// The time left before the move is due.
    fn time_left(&self) -> Duration;
}

impl<F: Fn() -> Duration + ?Sized> Timer for F {
    #[inline(always)]
    fn time_left(&self) -> Duration {
        self()
    }
}

/// A wall-clock [`Timer`] counting down from a fixed budget.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Countdown {
    timestamp: Instant,
    budget: Duration,
}

impl Countdown {
    /// Starts counting down `budget` from now.
    #[inline(always)]
    pub fn new(budget: Duration) -> Self {
        Countdown {
            timestamp: Instant::now(),
            budget,
        }
    }

    /// The time elapsed so far.
    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        self.timestamp.elapsed()
    }
}

impl Timer for Countdown {
    #[inline(always)]
    fn time_left(&self) -> Duration {
        self.budget.saturating_sub(self.elapsed())
    }
}

/// A [`Timer`] that runs out after a fixed number of polls.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct Polls(std::cell::Cell<u64>);

#[cfg(test)]
impl Polls {
    pub fn new(polls: u64) -> Self {
        Polls(std::cell::Cell::new(polls))
    }
}

#[cfg(test)]
impl Timer for Polls {
    fn time_left(&self) -> Duration {
        match self.0.get() {
            0 => Duration::ZERO,
            n => {
                self.0.set(n - 1);
                Duration::MAX
            }
        }
    }
}

/// Guards the search against running past its deadline.
///
/// The search polls [`Deadline::check`] before expanding every node and
/// unwinds with [`Interrupt`] once less than the threshold is left.
#[derive(Debug, Copy, Clone)]
#[debug("Deadline({threshold:?})")]
pub struct Deadline<'a> {
    timer: &'a dyn Timer,
    threshold: Duration,
}

impl<'a> Deadline<'a> {
    #[inline(always)]
    pub fn new(timer: &'a dyn Timer, threshold: Duration) -> Self {
        Deadline { timer, threshold }
    }

    /// Whether the search may expand one more node.
    #[inline(always)]
    pub fn check(&self) -> Result<(), Interrupt> {
        if self.timer.time_left() < self.threshold {
            Err(Interrupt)
        } else {
            Ok(())
        }
    }
}
