//! # rr-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the
//! `ReviewService`.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::Response;
use rr_core::error::AppError;
use rr_core::filter::ReviewFilter;
use rr_core::service::ReviewService;

use crate::error::ApiError;
use crate::params::{ReviewQuery, ReviewSubmission};
use crate::response::json_response;

/// State shared by every request.
///
/// The service sits behind one mutex, held for the whole of each
/// handler, so requests never interleave inside the store.
pub struct AppState {
    service: Mutex<ReviewService>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(service: ReviewService) -> SharedState {
        Arc::new(Self {
            service: Mutex::new(service),
        })
    }

    pub fn service(&self) -> Result<MutexGuard<'_, ReviewService>, ApiError> {
        self.service
            .lock()
            .map_err(|_| ApiError(AppError::Internal("review store lock poisoned".into())))
    }

    pub fn review_count(&self) -> Result<usize, ApiError> {
        Ok(self.service()?.len())
    }
}

/// Entry point for every request, whatever the path.
///
/// Only the method decides what happens: GET lists, POST submits, and
/// everything else (HEAD included) is refused.
pub async fn dispatch(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    match method {
        Method::GET => list_reviews(&state, uri.query().unwrap_or_default()),
        Method::POST => {
            let body = body.map_err(|e| AppError::validation(e.body_text()))?;
            submit_review(&state, &body)
        }
        other => {
            tracing::debug!(method = %other, %uri, "unsupported method");
            Err(ApiError(AppError::MethodNotAllowed))
        }
    }
}

/// Lists reviews, filtered and ranked by descending sentiment.
pub fn list_reviews(state: &AppState, query: &str) -> Result<Response, ApiError> {
    let params = ReviewQuery::parse(query)?;
    let filter = ReviewFilter::from_params(
        params.location.as_deref(),
        params.start_date.as_deref(),
        params.end_date.as_deref(),
    )?;

    let reviews = state.service()?.list(&filter);
    tracing::debug!(count = reviews.len(), ?filter, "reviews listed");
    Ok(json_response(StatusCode::OK, &reviews))
}

/// Validates and stores a new review.
pub fn submit_review(state: &AppState, body: &[u8]) -> Result<Response, ApiError> {
    let submission = ReviewSubmission::parse(body)?;

    let review = state.service()?.submit(
        submission.review_body.as_deref(),
        submission.location.as_deref(),
    )?;
    Ok(json_response(StatusCode::CREATED, &review))
}
