//! Summarization components
//!
//! Provides extractive summarization: sentences are vectorized, compared
//! pairwise, and ranked by their centrality in the resulting graph.

pub mod ranker;
pub mod textrank;
pub mod vectorizer;
