//! Quiz question selection.
//!
//! A quiz session is owned by the client: it sends the ids it has already
//! been served and gets back one fresh question, or nothing once every
//! question of the category has been played.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

/// Outcome of one draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizDraw {
    /// A question that has not been served yet.
    Question(i64),
    /// Every candidate has already been served.
    Exhausted,
}

/// Questions of one category minus those already served.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    remaining: Vec<i64>,
}

impl CandidateSet {
    pub fn new(category_ids: impl IntoIterator<Item = i64>, previous: &[i64]) -> Self {
        let served: HashSet<i64> = previous.iter().copied().collect();
        let remaining = category_ids
            .into_iter()
            .filter(|id| !served.contains(id))
            .collect();
        Self { remaining }
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Pick one remaining id uniformly at random.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> QuizDraw {
        match self.remaining.choose(rng) {
            Some(&id) => QuizDraw::Question(id),
            None => QuizDraw::Exhausted,
        }
    }
}
