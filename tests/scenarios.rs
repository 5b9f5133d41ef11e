use rapid_summarize::{summarize, Summarizer, SummarizeError};

const VOLCANO: &str = "My grandmother knits woolen scarves. \
    Volcanic eruptions eject ash, lava and sulfur gases. \
    Volcanic ash and lava from eruptions bury villages. \
    Penguins waddle across icy beaches.";

const RESEARCH: &str = "Penguins eat sardines daily. \
    Computer research gives important information. \
    Important computer research needs information. \
    Seals eat sardines too.";

#[test]
fn short_text_is_returned_unchanged() {
    assert_eq!(summarize("A. B. C.", 5).unwrap(), "A. B. C.");
    assert_eq!(summarize("A. B. C.", 3).unwrap(), "A. B. C.");
}

#[test]
fn short_circuit_is_idempotent() {
    let once = summarize("One idea. Another idea.", 4).unwrap();
    let twice = summarize(&once, 4).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn most_similar_sentences_are_selected() {
    let summary = summarize(VOLCANO, 2).unwrap();
    assert_eq!(
        summary,
        "Volcanic eruptions eject ash, lava and sulfur gases. \
         Volcanic ash and lava from eruptions bury villages."
    );
}

#[test]
fn content_words_drive_selection_with_english_stopwords() {
    let summary = summarize(RESEARCH, 2).unwrap();
    assert_eq!(
        summary,
        "Computer research gives important information. \
         Important computer research needs information."
    );
}

#[test]
fn wrapped_lines_do_not_split_sentences() {
    let text = "Volcanic eruptions eject ash and lava\nacross nearby villages. \
                Penguins waddle\nacross icy beaches.";

    let summary = Summarizer::new().summarize_detailed(text, 2).unwrap();
    assert!(summary.short_circuited);
    assert_eq!(summary.total_sentences, 2);
    assert_eq!(summary.text, text);
}

#[test]
fn possessives_share_terms_with_plain_words() {
    let text = "Sarah's startup thrives. \
                Penguins waddle. \
                Sarah runs the startup. \
                Penguins swim.";

    let summary = summarize(text, 1).unwrap();
    assert_eq!(summary, "Sarah's startup thrives.");
}

#[test]
fn all_stopword_text_still_yields_a_sentence() {
    let summary = Summarizer::new()
        .summarize_detailed("The. An. Is.", 1)
        .unwrap();

    assert_eq!(summary.text, "The.");
    assert_eq!(summary.total_sentences, 3);
    assert_eq!(summary.vocabulary_size, 0);
    assert!(summary.sentences.iter().all(|s| s.score == 0.0));
}

#[test]
fn empty_text_short_circuits() {
    assert_eq!(summarize("", 1).unwrap(), "");
    assert_eq!(summarize("", 7).unwrap(), "");
}

#[test]
fn zero_sentences_requested_is_an_error() {
    assert!(matches!(
        summarize(VOLCANO, 0),
        Err(SummarizeError::InvalidLengthRequest { .. })
    ));
}

#[test]
fn output_never_exceeds_requested_count() {
    let summarizer = Summarizer::new();
    for requested in 1..=3 {
        let summary = summarizer.summarize_detailed(VOLCANO, requested).unwrap();
        assert_eq!(summary.sentences.len(), requested);
    }
}

#[test]
fn summarizer_is_reentrant_across_threads() {
    let summarizer = Summarizer::new();
    let expected = summarizer.summarize(VOLCANO, 2).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| summarizer.summarize(VOLCANO, 2).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
