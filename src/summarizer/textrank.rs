//! TextRank summarizer: text in, central sentences out.
//!
//! Stages run strictly forward:
//! 1. Segment the document into sentences
//! 2. Short-circuit when there are no more sentences than requested
//! 3. Vectorize sentences over a shared vocabulary
//! 4. Build the pairwise similarity matrix
//! 5. Rank by centrality and keep the top sentences
//! 6. Join the selection with single spaces

use std::sync::Arc;

use serde::Serialize;

use super::ranker::SentenceRanker;
use super::vectorizer::Vectorizer;
use crate::errors::{Result, SummarizeError};
use crate::graph::similarity::SimilarityMatrix;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{Sentence, SummarizerConfig};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Emit a debug event (when the `tracing` feature is enabled).
macro_rules! trace_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)+);
    };
}

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_VECTORIZE: &str = "vectorize";
pub const STAGE_SIMILARITY: &str = "similarity";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";

/// Outcome of one summarization call
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Final summary text
    pub text: String,
    /// Selected sentences in ranking order (empty on short-circuit)
    pub sentences: Vec<Sentence>,
    /// Number of sentences found in the input
    pub total_sentences: usize,
    /// Distinct tokens across the input (0 on short-circuit)
    pub vocabulary_size: usize,
    /// Whether the input was returned unchanged
    pub short_circuited: bool,
}

/// Extractive summarizer over a similarity graph of sentences
#[derive(Debug, Clone)]
pub struct Summarizer {
    tokenizer: Tokenizer,
    vectorizer: Vectorizer,
    ranker: SentenceRanker,
    parallel_threshold: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::with_tokenizer(Tokenizer::default(), &SummarizerConfig::default())
    }
}

impl Summarizer {
    /// Create a summarizer with the default English configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a summarizer from a validated configuration
    pub fn with_config(config: &SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let stopwords = StopwordFilter::shared(&config.language);
        Ok(Self::with_tokenizer(Tokenizer::new(stopwords), config))
    }

    /// Create a summarizer with a custom stopword filter
    pub fn with_stopwords(stopwords: Arc<StopwordFilter>, config: &SummarizerConfig) -> Self {
        Self::with_tokenizer(Tokenizer::new(stopwords), config)
    }

    fn with_tokenizer(tokenizer: Tokenizer, config: &SummarizerConfig) -> Self {
        Self {
            vectorizer: Vectorizer::new(tokenizer.clone()),
            tokenizer,
            ranker: SentenceRanker::with_config(config),
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// Summarize `text` down to at most `requested` sentences
    pub fn summarize(&self, text: &str, requested: usize) -> Result<String> {
        self.summarize_detailed(text, requested)
            .map(|summary| summary.text)
    }

    /// Summarize and keep the selected sentences with their scores
    pub fn summarize_detailed(&self, text: &str, requested: usize) -> Result<Summary> {
        if requested == 0 {
            return Err(SummarizeError::invalid_length(requested));
        }

        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            self.tokenizer.segment_sentences(text)
        };
        let total_sentences = sentences.len();
        trace_event!(sentences = total_sentences, requested, "segmented input");

        if total_sentences <= requested {
            trace_event!("input already within requested length, returning as-is");
            return Ok(Summary {
                text: text.to_string(),
                sentences: Vec::new(),
                total_sentences,
                vocabulary_size: 0,
                short_circuited: true,
            });
        }

        let (vocabulary, vectors) = {
            trace_stage!(STAGE_VECTORIZE);
            self.vectorizer.vectorize_all(&sentences)
        };
        trace_event!(vocabulary = vocabulary.len(), "vectorized sentences");

        let matrix = {
            trace_stage!(STAGE_SIMILARITY);
            SimilarityMatrix::build_with_threshold(&vectors, self.parallel_threshold)
        };

        let selected = {
            trace_stage!(STAGE_RANK);
            self.ranker.rank(&sentences, &matrix, requested)
        };

        trace_stage!(STAGE_SELECT);
        let text = selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        if text.trim().is_empty() {
            return Err(SummarizeError::failed(format!(
                "no sentence text survived ranking ({total_sentences} sentences in input)"
            )));
        }

        Ok(Summary {
            text,
            sentences: selected,
            total_sentences,
            vocabulary_size: vocabulary.len(),
            short_circuited: false,
        })
    }
}
