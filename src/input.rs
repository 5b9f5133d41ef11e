//! Caller-side input checks
//!
//! Validation that belongs in front of the summarizer: the raw text must not
//! be blank and the requested length must parse as a positive integer.

use crate::errors::{Result, SummarizeError};

/// Strip surrounding whitespace and reject blank text
pub fn prepare_text(raw: &str) -> Result<&str> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(SummarizeError::EmptyInput);
    }
    Ok(text)
}

/// Parse a user-supplied sentence count; must be a positive integer
pub fn parse_sentence_count(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(SummarizeError::invalid_length(raw.trim())),
    }
}
