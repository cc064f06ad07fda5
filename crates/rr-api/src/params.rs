//! Decoding of the query string and form body.
//!
//! Both are read as `application/x-www-form-urlencoded` pairs whatever
//! the request headers say. Blank values are dropped and the first
//! remaining value of a repeated key wins.

use rr_core::error::AppError;

type Pairs = Vec<(String, String)>;

fn decode(raw: &str) -> Result<Pairs, AppError> {
    serde_urlencoded::from_str(raw).map_err(|e| AppError::validation(e.to_string()))
}

fn take_first(pairs: &mut Pairs, key: &str) -> Option<String> {
    let index = pairs.iter().position(|(k, v)| k == key && !v.is_empty())?;
    Some(pairs.remove(index).1)
}

/// Query string of `GET`. Every field is optional.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ReviewQuery {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let mut pairs = decode(raw)?;
        Ok(Self {
            location: take_first(&mut pairs, "location"),
            start_date: take_first(&mut pairs, "start_date"),
            end_date: take_first(&mut pairs, "end_date"),
        })
    }
}

/// Form body of `POST`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReviewSubmission {
    pub review_body: Option<String>,
    pub location: Option<String>,
}

impl ReviewSubmission {
    pub fn parse(body: &[u8]) -> Result<Self, AppError> {
        let raw = std::str::from_utf8(body)
            .map_err(|e| AppError::validation(format!("request body is not valid UTF-8: {e}")))?;
        let mut pairs = decode(raw)?;
        Ok(Self {
            review_body: take_first(&mut pairs, "ReviewBody"),
            location: take_first(&mut pairs, "Location"),
        })
    }
}
