//! Core data types shared across the pipeline

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SummarizeError};

/// A sentence cut from the input document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text, trimmed of surrounding whitespace
    pub text: String,
    /// Byte offset of the first character in the document
    pub start: usize,
    /// Byte offset one past the last character in the document
    pub end: usize,
    /// Position of the sentence in the document
    pub index: usize,
    /// Centrality score (0 until ranked)
    pub score: f64,
}

impl Sentence {
    /// Create an unscored sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            score: 0.0,
        }
    }
}

/// How sentence centrality is computed from the similarity matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Centrality {
    /// Sum of each sentence's similarity row
    #[default]
    RowSum,
    /// Weighted PageRank power iteration over the similarity graph
    PageRank,
}

impl Centrality {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().replace('-', "_").as_str() {
            "row_sum" | "rowsum" | "degree" => Some(Centrality::RowSum),
            "page_rank" | "pagerank" => Some(Centrality::PageRank),
            _ => None,
        }
    }
}

impl std::str::FromStr for Centrality {
    type Err = SummarizeError;

    fn from_str(value: &str) -> Result<Self> {
        Centrality::parse(value)
            .ok_or_else(|| SummarizeError::invalid_config(format!("unknown centrality {value:?}")))
    }
}

/// Configuration for the summarizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Stopword language code
    pub language: String,
    /// Centrality measure used for ranking
    pub centrality: Centrality,
    /// PageRank damping factor
    pub damping: f64,
    /// PageRank iteration cap
    pub max_iterations: usize,
    /// PageRank convergence threshold (L1 delta)
    pub threshold: f64,
    /// Sentence count at which the similarity matrix is built in parallel
    pub parallel_threshold: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            centrality: Centrality::RowSum,
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
            parallel_threshold: 64,
        }
    }
}

impl SummarizerConfig {
    /// Set the stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the centrality measure
    pub fn with_centrality(mut self, centrality: Centrality) -> Self {
        self.centrality = centrality;
        self
    }

    /// Set the PageRank damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the parallel matrix threshold
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SummarizeError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is within range
    pub fn validate(&self) -> Result<()> {
        if self.damping.is_nan() || self.damping <= 0.0 || self.damping >= 1.0 {
            return Err(SummarizeError::invalid_config(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
        if self.max_iterations == 0 {
            return Err(SummarizeError::invalid_config(
                "max_iterations must be at least 1",
            ));
        }
        if self.threshold.is_nan() || self.threshold < 0.0 {
            return Err(SummarizeError::invalid_config(format!(
                "threshold must be non-negative, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}
