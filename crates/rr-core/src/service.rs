//! # ReviewService
//!
//! Orchestrates the read and write paths over a [`ReviewRepo`] and a
//! [`SentimentScorer`]. Holds the only handle to the store.

use chrono::NaiveDateTime;

use crate::error::{AppError, Result, INVALID_LOCATION, MISSING_FIELDS};
use crate::filter::ReviewFilter;
use crate::locations::is_valid_location;
use crate::models::{Review, ScoredReview};
use crate::traits::{ReviewRepo, SentimentScorer};

pub struct ReviewService {
    repo: Box<dyn ReviewRepo>,
    scorer: Box<dyn SentimentScorer>,
}

impl ReviewService {
    pub fn new(repo: Box<dyn ReviewRepo>, scorer: Box<dyn SentimentScorer>) -> Self {
        Self { repo, scorer }
    }

    /// Seeds the store. Called once at startup.
    pub fn load(&mut self, seed: Vec<Review>) {
        tracing::info!(count = seed.len(), "loading seed reviews");
        self.repo.load(seed);
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Filters, scores and ranks reviews by descending compound score.
    ///
    /// The sort is stable, so equal scores keep store order.
    pub fn list(&self, filter: &ReviewFilter) -> Vec<ScoredReview> {
        let mut scored: Vec<ScoredReview> = filter
            .apply(self.repo.all())
            .into_iter()
            .map(|review| ScoredReview::new(review, self.scorer.score(&review.body)))
            .collect();

        scored.sort_by(|a, b| b.sentiment.compound.total_cmp(&a.sentiment.compound));
        scored
    }

    /// Validates and stores a submission stamped with the current time.
    pub fn submit(&mut self, body: Option<&str>, location: Option<&str>) -> Result<Review> {
        let (body, location) = validate_submission(body, location)?;
        self.store(Review::new(body, location))
    }

    /// Same as [`ReviewService::submit`] with an explicit creation instant.
    pub fn submit_at(
        &mut self,
        body: Option<&str>,
        location: Option<&str>,
        now: NaiveDateTime,
    ) -> Result<Review> {
        let (body, location) = validate_submission(body, location)?;
        self.store(Review::new_at(body, location, now))
    }

    fn store(&mut self, review: Review) -> Result<Review> {
        self.repo.append(review.clone());
        tracing::info!(id = %review.id, location = %review.location, "review stored");
        Ok(review)
    }
}

/// Presence check first, then the allow-list.
fn validate_submission<'a>(
    body: Option<&'a str>,
    location: Option<&'a str>,
) -> Result<(&'a str, &'a str)> {
    match (body, location) {
        (Some(body), Some(location)) if !body.is_empty() && !location.is_empty() => {
            if is_valid_location(location) {
                Ok((body, location))
            } else {
                Err(AppError::validation(INVALID_LOCATION))
            }
        }
        _ => Err(AppError::validation(MISSING_FIELDS)),
    }
}
