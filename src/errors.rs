//! Error types for summarization.

use thiserror::Error;

/// Result type alias for summarization operations.
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Errors surfaced by the summarization pipeline and its input helpers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizeError {
    /// The requested sentence count is not a positive integer.
    #[error("Please enter a valid positive number for summary length (got {value:?})")]
    InvalidLengthRequest {
        /// The rejected value as it was supplied.
        value: String,
    },

    /// No text was supplied.
    #[error("Please enter or load text to summarize")]
    EmptyInput,

    /// Non-empty input produced no usable summary.
    #[error("Summary could not be generated: {reason}")]
    SummarizationFailed {
        /// What went wrong.
        reason: String,
    },

    /// A configuration value is out of range or could not be parsed.
    #[error("Invalid summarizer configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },
}

impl SummarizeError {
    pub(crate) fn failed(reason: impl Into<String>) -> Self {
        Self::SummarizationFailed {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_length(value: impl ToString) -> Self {
        Self::InvalidLengthRequest {
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SummarizeError::invalid_length("-2");
        assert!(err.to_string().contains("positive number"));
        assert!(err.to_string().contains("-2"));

        let err = SummarizeError::failed("no sentences");
        assert_eq!(
            err.to_string(),
            "Summary could not be generated: no sentences"
        );
    }
}
