//! rusty-reviews/crates/rr-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Rusty-Reviews.

pub mod error;
pub mod filter;
pub mod locations;
pub mod models;
pub mod service;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use filter::ReviewFilter;
pub use locations::{is_valid_location, VALID_LOCATIONS};
pub use models::*;
pub use service::ReviewService;
pub use traits::*;
