//! # rr-store-memory
//! rusty-reviews/crates/rr-plugins/rr-store-memory/src/lib.rs
//! In-process implementation of `ReviewRepo`.
//! Reviews live in a plain append-only `Vec` for the lifetime of the process.

use rr_core::models::Review;
use rr_core::traits::ReviewRepo;

#[derive(Debug, Default)]
pub struct MemoryReviewRepo {
    reviews: Vec<Review>,
}

impl MemoryReviewRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repo already holding `seed`.
    pub fn with_reviews(seed: Vec<Review>) -> Self {
        Self { reviews: seed }
    }
}

impl ReviewRepo for MemoryReviewRepo {
    fn load(&mut self, seed: Vec<Review>) {
        if !self.reviews.is_empty() {
            tracing::warn!(
                discarded = self.reviews.len(),
                "reloading a non-empty review store"
            );
        }
        self.reviews = seed;
    }

    fn append(&mut self, review: Review) {
        self.reviews.push(review);
    }

    fn all(&self) -> &[Review] {
        &self.reviews
    }
}
