//! Centrality-based sentence ranking
//!
//! The similarity matrix is read as a weighted graph over sentences; each
//! sentence gets a centrality score and sentences are ordered by it.

use crate::graph::similarity::SimilarityMatrix;
use crate::pagerank::standard::StandardPageRank;
use crate::types::{Centrality, Sentence, SummarizerConfig};

/// Orders sentences by centrality in the similarity graph
#[derive(Debug, Clone)]
pub struct SentenceRanker {
    centrality: Centrality,
    pagerank: StandardPageRank,
}

impl Default for SentenceRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceRanker {
    /// Row-sum ranker
    pub fn new() -> Self {
        Self {
            centrality: Centrality::RowSum,
            pagerank: StandardPageRank::default(),
        }
    }

    /// Ranker configured from summarizer settings
    pub fn with_config(config: &SummarizerConfig) -> Self {
        Self {
            centrality: config.centrality,
            pagerank: StandardPageRank::from(config),
        }
    }

    /// Set the centrality measure
    pub fn with_centrality(mut self, centrality: Centrality) -> Self {
        self.centrality = centrality;
        self
    }

    /// One score per sentence, by position
    pub fn score_sentences(&self, matrix: &SimilarityMatrix) -> Vec<f64> {
        match self.centrality {
            Centrality::RowSum => matrix.row_sums(),
            Centrality::PageRank => self.pagerank.run(matrix).scores,
        }
    }

    /// Top `top_n` sentences by descending score
    ///
    /// Equal scores keep document order. The result is in ranking order,
    /// not document order.
    pub fn rank(
        &self,
        sentences: &[Sentence],
        matrix: &SimilarityMatrix,
        top_n: usize,
    ) -> Vec<Sentence> {
        let scores = self.score_sentences(matrix);

        let mut ranked: Vec<Sentence> = sentences
            .iter()
            .zip(scores)
            .map(|(sentence, score)| Sentence {
                score,
                ..sentence.clone()
            })
            .collect();

        // Stable: ties stay in document order
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(top_n);
        ranked
    }
}
