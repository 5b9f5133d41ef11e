//! Standard PageRank algorithm
//!
//! Weighted power iteration over a dense similarity matrix, with the mass of
//! dangling sentences (no similarity to any other sentence) spread uniformly.

use super::PageRankResult;
use crate::graph::similarity::SimilarityMatrix;
use crate::types::SummarizerConfig;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl From<&SummarizerConfig> for StandardPageRank {
    fn from(config: &SummarizerConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.threshold,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on the sentence graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, matrix: &SimilarityMatrix) -> PageRankResult {
        let n = matrix.size;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        let total_weight = matrix.row_sums();
        let dangling: Vec<usize> = (0..n).filter(|&i| total_weight[i] == 0.0).collect();

        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            let dangling_mass: f64 = dangling.iter().map(|&d| scores[d]).sum();
            new_scores.fill(teleport + self.damping * dangling_mass / n as f64);

            for (node, row) in matrix.rows().enumerate() {
                if total_weight[node] == 0.0 {
                    continue;
                }
                let share = self.damping * scores[node] / total_weight[node];
                for (neighbor, &weight) in row.iter().enumerate() {
                    if weight > 0.0 {
                        new_scores[neighbor] += share * weight;
                    }
                }
            }

            // L1 distance between iterations
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult::new(scores, iterations, delta, delta <= self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(size: usize, values: &[f64]) -> SimilarityMatrix {
        SimilarityMatrix {
            size,
            values: values.to_vec(),
        }
    }

    fn triangle() -> SimilarityMatrix {
        #[rustfmt::skip]
        let values = [
            0.0, 1.0, 1.0,
            1.0, 0.0, 1.0,
            1.0, 1.0, 0.0,
        ];
        matrix(3, &values)
    }

    fn star() -> SimilarityMatrix {
        // Hub (0) similar to three otherwise unrelated sentences
        #[rustfmt::skip]
        let values = [
            0.0, 0.5, 0.5, 0.5,
            0.5, 0.0, 0.0, 0.0,
            0.5, 0.0, 0.0, 0.0,
            0.5, 0.0, 0.0, 0.0,
        ];
        matrix(4, &values)
    }

    #[test]
    fn test_triangle_equal_scores() {
        let result = StandardPageRank::new().run(&triangle());

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_star_hub_highest() {
        let result = StandardPageRank::new().run(&star());

        assert!(result.converged);
        let hub = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub > score);
        }
    }

    #[test]
    fn test_scores_sum_to_one() {
        let result = StandardPageRank::new().run(&star());
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_all_dangling_is_uniform() {
        let result = StandardPageRank::new().run(&matrix(3, &[0.0; 9]));

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_graph() {
        let result = StandardPageRank::new().run(&SimilarityMatrix::default());

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let pr = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0);

        let result = pr.run(&star());

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_damping_factor() {
        let low = StandardPageRank::new().with_damping(0.5).run(&star());
        let high = StandardPageRank::new().with_damping(0.95).run(&star());

        let advantage_low = low.scores[0] - low.scores[1];
        let advantage_high = high.scores[0] - high.scores[1];
        assert!(advantage_high > advantage_low);
    }

    #[test]
    fn test_from_config() {
        let config = SummarizerConfig::default().with_damping(0.6);
        let pr = StandardPageRank::from(&config);
        assert_eq!(pr.damping, 0.6);
        assert_eq!(pr.max_iterations, config.max_iterations);
    }
}
