//! Read-path filtering over the review sequence.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{AppError, Result};
use crate::models::Review;

/// Calendar-date format accepted for `start_date` / `end_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Optional read filters. Every bound is inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    pub location: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl ReviewFilter {
    /// Builds a filter from raw query values.
    ///
    /// Blank values count as absent. Dates resolve to midnight of that
    /// day, for both bounds: an `end_date` therefore excludes anything
    /// later than 00:00:00 on the given day.
    pub fn from_params(
        location: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            location: non_blank(location).map(str::to_owned),
            start: non_blank(start_date)
                .map(|raw| parse_day_start("start_date", raw))
                .transpose()?,
            end: non_blank(end_date)
                .map(|raw| parse_day_start("end_date", raw))
                .transpose()?,
        })
    }

    pub fn matches(&self, review: &Review) -> bool {
        if let Some(location) = &self.location {
            if review.location != *location {
                return false;
            }
        }
        if let Some(start) = self.start {
            if review.timestamp < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if review.timestamp > end {
                return false;
            }
        }
        true
    }

    /// Keeps matching reviews in their original order.
    pub fn apply<'a>(&self, reviews: &'a [Review]) -> Vec<&'a Review> {
        reviews.iter().filter(|r| self.matches(r)).collect()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_day_start(field: &str, raw: &str) -> Result<NaiveDateTime> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(|day| day.and_time(NaiveTime::MIN))
        .map_err(|e| {
            AppError::validation(format!(
                "Invalid {field} '{raw}': expected YYYY-MM-DD ({e})"
            ))
        })
}
