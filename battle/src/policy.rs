//! Move selection strategies for computer-controlled creatures

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::Move;

/// Picks a move from a creature's move list
pub trait MovePolicy {
    /// Choose one of `available`, or `None` if it is empty
    fn choose_move<'a>(&mut self, available: &'a [Move]) -> Option<&'a Move>;
}

impl<P: MovePolicy + ?Sized> MovePolicy for &mut P {
    fn choose_move<'a>(&mut self, available: &'a [Move]) -> Option<&'a Move> {
        (**self).choose_move(available)
    }
}

/// Uniform random choice, drawn independently every turn
#[derive(Debug, Clone)]
pub struct RandomPolicy<R = ThreadRng> {
    rng: R,
}

impl RandomPolicy<ThreadRng> {
    /// Random policy backed by the thread-local generator
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomPolicy<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPolicy<StdRng> {
    /// Reproducible random policy
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomPolicy<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MovePolicy for RandomPolicy<R> {
    fn choose_move<'a>(&mut self, available: &'a [Move]) -> Option<&'a Move> {
        let choice = available.choose(&mut self.rng);
        if let Some(m) = choice {
            tracing::debug!(chosen = %m.name, options = available.len(), "random move drawn");
        }
        choice
    }
}

/// Replays a fixed sequence of move indices, wrapping around at the end
///
/// Indices past the end of the move list wrap as well, so a script written
/// for one creature stays valid for any other.
#[derive(Debug, Clone)]
pub struct ScriptedPolicy {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedPolicy {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Always pick the same move slot
    pub fn always(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl MovePolicy for ScriptedPolicy {
    fn choose_move<'a>(&mut self, available: &'a [Move]) -> Option<&'a Move> {
        if available.is_empty() {
            return None;
        }
        let index = if self.script.is_empty() {
            0
        } else {
            let index = self.script[self.cursor % self.script.len()];
            self.cursor += 1;
            index
        };
        available.get(index % available.len())
    }
}
