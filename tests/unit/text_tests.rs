/*!
 * Tests for token normalization and known-word matching
 */

use cineglot::text::{KnownWordSet, is_known, normalize};

fn vocabulary(words: &[&str]) -> KnownWordSet {
    KnownWordSet::from_words(words.iter().copied())
}

/// Test that normalization folds case, quotes and punctuation
#[test]
fn test_normalize_withSubtitleTokens_shouldProduceComparableForm() {
    assert_eq!(normalize("Don\u{2019}t,"), "don't");
    assert_eq!(normalize("\"Hello!\""), "hello");
    assert_eq!(normalize("'cause"), "cause");
    assert_eq!(normalize("rock'n'roll"), "rock'n'roll");
    assert_eq!(normalize("42"), "");
    assert_eq!(normalize("\u{2014}"), "");
}

/// Test that normalizing twice changes nothing
#[test]
fn test_normalize_appliedTwice_shouldBeStable() {
    for token in ["Don\u{2019}t,", "HELLO", "'tis", "well-known", "caf\u{00E9}"] {
        let once = normalize(token);
        assert_eq!(normalize(&once), once);
    }
}

/// Test that vocabulary text is normalized when loaded
#[test]
fn test_knownWordSet_fromText_shouldNormalizeAndSkipBlankLines() {
    let set = KnownWordSet::from_text("Go\n\n  party \n...\nHELLO\r\n");

    assert_eq!(set.len(), 3);
    assert!(set.contains("go"));
    assert!(set.contains("party"));
    assert!(set.contains("hello"));
}

/// Test that regular inflections resolve to their base form
#[test]
fn test_isKnown_withRegularInflections_shouldMatchBase() {
    let set = vocabulary(&["party", "box", "cat", "stop", "live", "run", "make", "quick", "happy", "big", "nice"]);

    assert!(is_known("Parties", &set));
    assert!(is_known("boxes", &set));
    assert!(is_known("cats.", &set));
    assert!(is_known("stopped", &set));
    assert!(is_known("lived", &set));
    assert!(is_known("running", &set));
    assert!(is_known("making", &set));
    assert!(is_known("quickly", &set));
    assert!(is_known("happily", &set));
    assert!(is_known("bigger", &set));
    assert!(is_known("nicest", &set));
}

/// Test that irregular forms go through the lookup table
#[test]
fn test_isKnown_withIrregularForms_shouldUseTable() {
    let set = vocabulary(&["go", "see", "be", "give"]);

    assert!(is_known("Went", &set));
    assert!(is_known("seen", &set));
    assert!(is_known("were", &set));
    assert!(is_known("gave,", &set));
    assert!(!is_known("ran", &set));
}

/// Test that contractions resolve through their stem
#[test]
fn test_isKnown_withContractions_shouldMatchStem() {
    let set = vocabulary(&["do", "we", "she", "will", "can"]);

    assert!(is_known("don't", &set));
    assert!(is_known("We\u{2019}ve", &set));
    assert!(is_known("she's", &set));
    assert!(is_known("won't", &set));
    assert!(is_known("can't", &set));
    assert!(!is_known("they'll", &set));
}

/// Test that tokens with nothing to learn are never flagged
#[test]
fn test_isKnown_withNonWordTokens_shouldBeKnown() {
    let set = vocabulary(&["hello"]);

    assert!(is_known("...", &set));
    assert!(is_known("2024", &set));
    assert!(is_known("\u{4F60}\u{597D}", &set));
}

/// Test that an unrelated word stays unknown
#[test]
fn test_isKnown_withUnrelatedWord_shouldBeUnknown() {
    let set = vocabulary(&["dog"]);

    assert!(!is_known("cat", &set));
    assert!(!is_known("dogma", &set));
}

/// Test that highlighting is disabled until a vocabulary is loaded
#[test]
fn test_shouldHighlight_withEmptySet_shouldNeverFlag() {
    let empty = KnownWordSet::new();
    assert!(!empty.should_highlight("anything"));

    let set = vocabulary(&["go"]);
    assert!(!set.should_highlight("going"));
    assert!(set.should_highlight("stay"));
}
