//! # rapid-summarize
//!
//! Extractive summarization by sentence centrality.
//!
//! A document is split into sentences, each sentence becomes a bag-of-words
//! vector over the document's vocabulary, and sentences are compared
//! pairwise by cosine similarity. Reading the similarity matrix as a
//! weighted graph, the most central sentences form the summary.
//!
//! ```rust
//! let text = "Solar panels turn sunlight into power. \
//!             Rooftop solar panels cut power bills. \
//!             Penguins live in Antarctica.";
//! let summary = rapid_summarize::summarize(text, 1).unwrap();
//! assert!(summary.to_lowercase().contains("solar panels"));
//! ```
//!
//! Selected sentences come back in ranking order, not document order. Texts
//! that already have no more sentences than requested are returned as-is.

pub mod errors;
pub mod graph;
pub mod input;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;

pub use errors::{Result, SummarizeError};
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::Tokenizer;
pub use summarizer::textrank::{Summarizer, Summary};
pub use types::{Centrality, Sentence, SummarizerConfig};

/// Summarize `text` to at most `requested` sentences with the default
/// English configuration
///
/// `requested == 0` is rejected with [`SummarizeError::InvalidLengthRequest`].
pub fn summarize(text: &str, requested: usize) -> Result<String> {
    Summarizer::new().summarize(text, requested)
}
