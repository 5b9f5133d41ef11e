//! Stopword filtering
//!
//! Stopword lists are the NLTK lists shipped by the `stop-words` crate. The
//! English list is loaded once per process and shared read-only; other
//! filters are built on demand and handed to the tokenizer explicitly.

use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

static ENGLISH: OnceLock<Arc<StopwordFilter>> = OnceLock::new();

/// A set of lower-case words excluded from sentence vectors
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Build a filter for the given language code
    ///
    /// Supported: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr.
    /// Unknown codes fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            _ => LANGUAGE::English,
        };

        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// The process-wide English filter, loaded on first use
    pub fn english() -> Arc<StopwordFilter> {
        Arc::clone(ENGLISH.get_or_init(|| Arc::new(StopwordFilter::new("en"))))
    }

    /// Shared filter for a language code; English reuses the process-wide set
    pub fn shared(language: &str) -> Arc<StopwordFilter> {
        match language.to_lowercase().as_str() {
            "en" | "english" => Self::english(),
            other => Arc::new(StopwordFilter::new(other)),
        }
    }

    /// A filter that removes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a filter from a custom word list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add words to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        self.stopwords.extend(words.iter().map(|w| w.to_lowercase()));
    }

    /// Check a lower-case word against the set
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Number of words in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// True when the filter removes nothing
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("is"));
        assert!(filter.is_stopword("an"));
        assert!(!filter.is_stopword("photosynthesis"));
        assert!(!filter.is_stopword("chlorophyll"));
    }

    #[test]
    fn test_english_keeps_content_words() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("s"));
        for word in ["research", "computer", "important", "information"] {
            assert!(!filter.is_stopword(word), "{word} should be kept");
        }
    }

    #[test]
    fn test_english_is_loaded_once() {
        let a = StopwordFilter::english();
        let b = StopwordFilter::shared("English");
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!a.is_empty());
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["Custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));
        assert_eq!(filter.len(), 3);
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new("de");

        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("photosynthese"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::new("klingon");
        assert!(filter.is_stopword("the"));
    }
}
