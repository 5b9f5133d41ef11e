//! Bag-of-words vectors for sentences
//!
//! Every sentence of a document is mapped onto a shared vocabulary; each
//! dimension holds how often that token occurs in the sentence.

use rustc_hash::FxHashMap;

use crate::nlp::tokenizer::Tokenizer;
use crate::types::Sentence;

/// Distinct tokens of one document, each bound to a dimension
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Maps token -> dimension index
    term_to_id: FxHashMap<String, u32>,
    /// Terms in dimension order
    terms: Vec<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the union of the given token lists, indexed by first occurrence
    pub fn from_token_lists<S: AsRef<str>>(token_lists: &[Vec<S>]) -> Self {
        let mut vocabulary = Self::new();
        for tokens in token_lists {
            for token in tokens {
                vocabulary.get_or_insert(token.as_ref());
            }
        }
        vocabulary
    }

    /// Get or assign the dimension for a token
    pub fn get_or_insert(&mut self, term: &str) -> u32 {
        if let Some(&id) = self.term_to_id.get(term) {
            return id;
        }

        let id = self.terms.len() as u32;
        self.term_to_id.insert(term.to_string(), id);
        self.terms.push(term.to_string());
        id
    }

    /// Dimension of a token, if known
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.term_to_id.get(term).map(|&id| id as usize)
    }

    /// Term stored at a dimension
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Dense term-count vector of one sentence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentenceVector {
    pub counts: Vec<f64>,
}

impl SentenceVector {
    /// All-zero vector with `len` dimensions
    pub fn zeros(len: usize) -> Self {
        Self {
            counts: vec![0.0; len],
        }
    }

    /// Wrap precomputed counts
    pub fn from_counts(counts: Vec<f64>) -> Self {
        Self { counts }
    }

    /// Count tokens against the vocabulary; unknown tokens are ignored
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], vocabulary: &Vocabulary) -> Self {
        let mut vector = Self::zeros(vocabulary.len());
        for token in tokens {
            if let Some(index) = vocabulary.index_of(token.as_ref()) {
                vector.counts[index] += 1.0;
            }
        }
        vector
    }

    /// L2 norm
    pub fn norm(&self) -> f64 {
        self.counts.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Dot product over the shared dimensions
    pub fn dot(&self, other: &SentenceVector) -> f64 {
        self.counts
            .iter()
            .zip(&other.counts)
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Number of dimensions
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// True when no dimension is set
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&v| v == 0.0)
    }
}

/// Tokenizes sentences and turns them into vectors over a shared vocabulary
#[derive(Debug, Clone, Default)]
pub struct Vectorizer {
    tokenizer: Tokenizer,
}

impl Vectorizer {
    /// Create a vectorizer that tokenizes with `tokenizer`
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Vocabulary over every sentence of the document
    pub fn build_vocabulary(&self, sentences: &[Sentence]) -> Vocabulary {
        Vocabulary::from_token_lists(&self.tokenize_all(sentences))
    }

    /// Vector for a single sentence
    pub fn vectorize(&self, sentence: &str, vocabulary: &Vocabulary) -> SentenceVector {
        SentenceVector::from_tokens(&self.tokenizer.tokenize_words(sentence), vocabulary)
    }

    /// Vocabulary and one vector per sentence, tokenizing each sentence once
    pub fn vectorize_all(&self, sentences: &[Sentence]) -> (Vocabulary, Vec<SentenceVector>) {
        let token_lists = self.tokenize_all(sentences);
        let vocabulary = Vocabulary::from_token_lists(&token_lists);
        let vectors = token_lists
            .iter()
            .map(|tokens| SentenceVector::from_tokens(tokens, &vocabulary))
            .collect();
        (vocabulary, vectors)
    }

    fn tokenize_all(&self, sentences: &[Sentence]) -> Vec<Vec<String>> {
        sentences
            .iter()
            .map(|s| self.tokenizer.tokenize_words(&s.text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;

    fn vectorizer() -> Vectorizer {
        Vectorizer::new(Tokenizer::with_stopwords(StopwordFilter::from_list(&[
            "the", "a", "on",
        ])))
    }

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, 0, t.len(), i))
            .collect()
    }

    #[test]
    fn test_vocabulary_dedup() {
        let vocab = Vocabulary::from_token_lists(&[vec!["cat", "mat"], vec!["cat", "hat"]]);

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.index_of("cat"), Some(0));
        assert_eq!(vocab.term(2), Some("hat"));
        assert_eq!(vocab.index_of("dog"), None);
    }

    #[test]
    fn test_build_vocabulary_skips_stopwords() {
        let vocab = vectorizer().build_vocabulary(&sentences(&["The cat sat.", "A dog sat."]));

        assert_eq!(vocab.len(), 3);
        assert!(vocab.index_of("the").is_none());
    }

    #[test]
    fn test_vectorize_counts_occurrences() {
        let v = vectorizer();
        let doc = sentences(&["Cat cat cat on the mat.", "Dog."]);
        let vocab = v.build_vocabulary(&doc);

        let vector = v.vectorize(&doc[0].text, &vocab);
        assert_eq!(vector.len(), vocab.len());
        assert_eq!(vector.counts[vocab.index_of("cat").unwrap()], 3.0);
        assert_eq!(vector.counts[vocab.index_of("mat").unwrap()], 1.0);
        assert_eq!(vector.counts[vocab.index_of("dog").unwrap()], 0.0);
    }

    #[test]
    fn test_vectorize_ignores_unknown_tokens() {
        let v = vectorizer();
        let vocab = v.build_vocabulary(&sentences(&["Cat."]));

        let vector = v.vectorize("Zebra giraffe cat.", &vocab);
        assert_eq!(vector.counts, vec![1.0]);
    }

    #[test]
    fn test_stopword_sentence_is_zero() {
        let v = vectorizer();
        let doc = sentences(&["The.", "Cat on a mat."]);
        let (vocab, vectors) = v.vectorize_all(&doc);

        assert_eq!(vectors.len(), 2);
        assert!(vectors[0].is_zero());
        assert_eq!(vectors[0].len(), vocab.len());
        assert!(!vectors[1].is_zero());
    }

    #[test]
    fn test_norm_and_dot() {
        let a = SentenceVector::from_counts(vec![3.0, 4.0]);
        let b = SentenceVector::from_counts(vec![1.0, 0.0]);

        assert!((a.norm() - 5.0).abs() < 1e-10);
        assert!((a.dot(&b) - 3.0).abs() < 1e-10);
    }
}
