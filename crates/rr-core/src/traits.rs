//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.

use crate::models::{Review, SentimentScores};

/// In-memory review collection contract.
///
/// Reviews are only ever appended; nothing is updated or removed.
pub trait ReviewRepo: Send + Sync {
    /// Replaces the contents with already-normalized seed rows.
    fn load(&mut self, seed: Vec<Review>);

    /// Adds a review to the end of the sequence.
    fn append(&mut self, review: Review);

    /// The current sequence, in insertion order.
    fn all(&self) -> &[Review];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Black-box text sentiment capability.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait SentimentScorer: Send + Sync {
    /// Scores `text`; `compound` must fall in `[-1, 1]`.
    fn score(&self, text: &str) -> SentimentScores;
}
