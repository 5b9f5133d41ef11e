//! Dense sentence similarity graph
//!
//! Nodes are sentences, edge weights are cosine similarities of their
//! term-count vectors. The matrix is stored row-major; the diagonal is
//! always 0 so a sentence never votes for itself.

use rayon::prelude::*;

use crate::summarizer::vectorizer::SentenceVector;

/// Cosine similarity of two count vectors, in [0, 1]
///
/// A zero-magnitude vector on either side gives 0.0.
pub fn cosine_similarity(a: &SentenceVector, b: &SentenceVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// N×N matrix of pairwise sentence similarities
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    /// Number of sentences
    pub size: usize,
    /// Row-major values, `size * size` entries
    pub values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build the matrix sequentially
    pub fn build(vectors: &[SentenceVector]) -> Self {
        let size = vectors.len();
        let mut values = Vec::with_capacity(size * size);
        for i in 0..size {
            values.extend(Self::row_for(vectors, i));
        }
        Self { size, values }
    }

    /// Build the matrix with rows computed on the rayon pool
    pub fn build_parallel(vectors: &[SentenceVector]) -> Self {
        let size = vectors.len();
        let rows: Vec<Vec<f64>> = (0..size)
            .into_par_iter()
            .map(|i| Self::row_for(vectors, i))
            .collect();
        Self {
            size,
            values: rows.concat(),
        }
    }

    /// Build sequentially below `parallel_threshold` sentences, in parallel from it on
    pub fn build_with_threshold(vectors: &[SentenceVector], parallel_threshold: usize) -> Self {
        if vectors.len() < parallel_threshold {
            Self::build(vectors)
        } else {
            Self::build_parallel(vectors)
        }
    }

    fn row_for(vectors: &[SentenceVector], i: usize) -> Vec<f64> {
        vectors
            .iter()
            .enumerate()
            .map(|(j, other)| {
                if i == j {
                    0.0
                } else {
                    cosine_similarity(&vectors[i], other)
                }
            })
            .collect()
    }

    /// Similarity between sentences `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Row of sentence `i`
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.size).map(move |i| self.row(i))
    }

    /// Sum of each row
    pub fn row_sums(&self) -> Vec<f64> {
        self.rows().map(|row| row.iter().sum()).collect()
    }

    /// Check if the matrix has no sentences
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of non-zero off-diagonal entries (each undirected edge counted twice)
    pub fn num_edges(&self) -> usize {
        self.values.iter().filter(|&&v| v > 0.0).count()
    }
}
