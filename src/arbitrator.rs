//! Deadline oracles that bound the time spent on a move

use std::time::{Duration, Instant};

/// Enforces the move deadline and collects the searching player's answer
pub trait Arbitrator {
    /// Cheap enough to be polled at every node of the search
    fn is_time_up(&self) -> bool;

    /// Records the current best column, the last call wins
    fn set_move(&mut self, column: usize);
}

/// An arbitrator whose deadline is a fixed duration after its creation
#[derive(Clone, Debug)]
pub struct TimedArbitrator {
    deadline: Instant,
    chosen_move: Option<usize>,
}

impl TimedArbitrator {
    pub fn new(budget: Duration) -> Self {
        Self {
            deadline: Instant::now() + budget,
            chosen_move: None,
        }
    }

    pub fn from_millis(msec: u64) -> Self {
        Self::new(Duration::from_millis(msec))
    }

    /// The last column reported by the player, if any
    pub fn chosen_move(&self) -> Option<usize> {
        self.chosen_move
    }
}

impl Arbitrator for TimedArbitrator {
    fn is_time_up(&self) -> bool {
        Instant::now() >= self.deadline
    }

    fn set_move(&mut self, column: usize) {
        self.chosen_move = Some(column);
    }
}

/// An arbitrator that never runs out of time
#[derive(Clone, Debug, Default)]
pub struct Unbounded {
    chosen_move: Option<usize>,
}

impl Unbounded {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chosen_move(&self) -> Option<usize> {
        self.chosen_move
    }
}

impl Arbitrator for Unbounded {
    fn is_time_up(&self) -> bool {
        false
    }

    fn set_move(&mut self, column: usize) {
        self.chosen_move = Some(column);
    }
}
