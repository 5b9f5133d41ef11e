//! Sentence segmentation and word tokenization
//!
//! Sentences follow Unicode (UAX #29) sentence boundaries, with two repairs:
//! a line break without terminal punctuation continues the sentence unless a
//! blank line follows, and a boundary directly after a common English
//! abbreviation ("Dr.", "e.g.") is merged back. Words follow Unicode
//! word boundaries, are lower-cased, and must be purely alphanumeric.

use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::StopwordFilter;
use crate::types::Sentence;

/// Abbreviations that end in a period without ending the sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "rev", "hon", "gen", "col", "capt",
    "lt", "sgt", "e.g", "i.e", "vs", "cf", "al", "approx", "fig", "dept",
];

const TERMINATORS: &[char] = &['.', '?', '!', '…'];

/// Closing quotes and brackets that may follow a terminator
const CLOSERS: &[char] = &['"', '\'', '”', '’', '»', ')', ']', '}'];

const APOSTROPHES: &[char] = &['\'', '’'];

/// Splits documents into sentences and sentences into normalized tokens
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: Arc<StopwordFilter>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(StopwordFilter::english())
    }
}

impl Tokenizer {
    /// Create a tokenizer using the given stopword filter
    pub fn new(stopwords: Arc<StopwordFilter>) -> Self {
        Self { stopwords }
    }

    /// Create a tokenizer that owns a custom filter
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self::new(Arc::new(stopwords))
    }

    /// The stopword filter in use
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Split text into sentences, in document order
    pub fn segment_sentences(&self, text: &str) -> Vec<Sentence> {
        let mut spans: Vec<(usize, usize)> = Vec::new();
        let mut pending: Option<usize> = None;

        for (offset, piece) in text.split_sentence_bound_indices() {
            if piece.trim().is_empty() {
                // A blank line closes any open sentence
                if piece.contains('\n') {
                    if let Some(start) = pending.take() {
                        spans.push((start, offset));
                    }
                }
                continue;
            }

            let start = pending.take().unwrap_or(offset);
            let end = offset + piece.len();
            let segment = &text[start..end];

            // Line breaks inside a paragraph and abbreviations are not sentence ends
            if !ends_with_terminator(segment) || ends_with_abbreviation(segment) {
                pending = Some(start);
                continue;
            }
            spans.push((start, end));
        }
        if let Some(start) = pending {
            spans.push((start, text.len()));
        }

        let mut sentences = Vec::with_capacity(spans.len());
        for (start, end) in spans {
            let raw = &text[start..end];
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let lead = raw.len() - raw.trim_start().len();
            let begin = start + lead;
            sentences.push(Sentence::new(
                trimmed,
                begin,
                begin + trimmed.len(),
                sentences.len(),
            ));
        }
        sentences
    }

    /// Lower-case, split into words, keep alphanumeric non-stopwords
    ///
    /// Apostrophes separate clitics, so "sarah's" yields "sarah" and "s".
    pub fn tokenize_words(&self, sentence: &str) -> Vec<String> {
        let lowered = sentence.to_lowercase();
        lowered
            .unicode_words()
            .flat_map(|word| word.split(APOSTROPHES))
            .filter(|word| !word.is_empty())
            .filter(|word| word.chars().all(char::is_alphanumeric))
            .filter(|word| !self.stopwords.is_stopword(word))
            .map(str::to_string)
            .collect()
    }
}

fn ends_with_terminator(segment: &str) -> bool {
    segment
        .trim_end()
        .trim_end_matches(CLOSERS)
        .ends_with(TERMINATORS)
}

fn ends_with_abbreviation(segment: &str) -> bool {
    let Some(body) = segment.trim_end().strip_suffix('.') else {
        return false;
    };
    let Some(last) = body.split_whitespace().last() else {
        return false;
    };
    let word = last
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    ABBREVIATIONS.contains(&word.as_str())
}
