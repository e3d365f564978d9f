/*!
 * Morphological known-word matching.
 *
 * A vocabulary list stores base forms ("go", "party", "stop") while
 * subtitles contain surface forms ("went", "parties", "stopped"). The
 * matcher accepts a surface form when any of its candidate bases is in the
 * learner's known-word set, using two static irregular tables and a fixed
 * set of English suffix rules.
 */

use std::collections::{HashMap, HashSet};

use log::info;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::normalizer::normalize;

/// Irregular verb surface forms and their base form
const IRREGULAR_VERB_FORMS: &[(&str, &str)] = &[
    ("arisen", "arise"), ("arose", "arise"),
    ("ate", "eat"), ("eaten", "eat"),
    ("awoke", "awake"), ("awoken", "awake"),
    ("bad", "bad"),
    ("be", "be"), ("am", "be"), ("is", "be"), ("are", "be"),
    ("was", "be"), ("were", "be"), ("been", "be"),
    ("beat", "beat"), ("beaten", "beat"),
    ("became", "become"), ("become", "become"),
    ("began", "begin"), ("begun", "begin"),
    ("bent", "bend"),
    ("bet", "bet"),
    ("bid", "bid"),
    ("bit", "bite"), ("bitten", "bite"),
    ("blew", "blow"), ("blown", "blow"),
    ("bought", "buy"),
    ("broke", "break"), ("broken", "break"),
    ("brought", "bring"),
    ("built", "build"),
    ("burnt", "burn"), ("burned", "burn"),
    ("caught", "catch"),
    ("chose", "choose"), ("chosen", "choose"),
    ("came", "come"),
    ("cost", "cost"),
    ("cut", "cut"),
    ("dealt", "deal"),
    ("did", "do"), ("done", "do"), ("does", "do"),
    ("drew", "draw"), ("drawn", "draw"),
    ("drank", "drink"), ("drunk", "drink"),
    ("drove", "drive"), ("driven", "drive"),
    ("dug", "dig"),
    ("fell", "fall"), ("fallen", "fall"),
    ("fed", "feed"),
    ("felt", "feel"),
    ("fought", "fight"),
    ("found", "find"),
    ("flew", "fly"), ("flown", "fly"),
    ("forgot", "forget"), ("forgotten", "forget"),
    ("forgave", "forgive"), ("forgiven", "forgive"),
    ("froze", "freeze"), ("frozen", "freeze"),
    ("got", "get"), ("gotten", "get"),
    ("gave", "give"), ("given", "give"),
    ("went", "go"), ("gone", "go"),
    ("grew", "grow"), ("grown", "grow"),
    ("hung", "hang"),
    ("had", "have"), ("has", "have"),
    ("heard", "hear"),
    ("hid", "hide"), ("hidden", "hide"),
    ("hit", "hit"),
    ("held", "hold"),
    ("hurt", "hurt"),
    ("kept", "keep"),
    ("knew", "know"), ("known", "know"),
    ("laid", "lay"),
    ("led", "lead"),
    ("left", "leave"),
    ("lent", "lend"),
    ("let", "let"),
    ("lay", "lie"), ("lain", "lie"),
    ("lit", "light"),
    ("lost", "lose"),
    ("made", "make"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("put", "put"),
    ("read", "read"),
    ("rode", "ride"), ("ridden", "ride"),
    ("rang", "ring"), ("rung", "ring"),
    ("rose", "rise"), ("risen", "rise"),
    ("ran", "run"),
    ("said", "say"),
    ("saw", "see"), ("seen", "see"),
    ("sold", "sell"),
    ("sent", "send"),
    ("set", "set"),
    ("shook", "shake"), ("shaken", "shake"),
    ("shone", "shine"),
    ("shot", "shoot"),
    ("showed", "show"), ("shown", "show"),
    ("shut", "shut"),
    ("sang", "sing"), ("sung", "sing"),
    ("sank", "sink"), ("sunk", "sink"),
    ("sat", "sit"),
    ("slept", "sleep"),
    ("spoke", "speak"), ("spoken", "speak"),
    ("spent", "spend"),
    ("stood", "stand"),
    ("stole", "steal"), ("stolen", "steal"),
    ("stuck", "stick"),
    ("struck", "strike"),
    ("swore", "swear"), ("sworn", "swear"),
    ("swept", "sweep"),
    ("swam", "swim"), ("swum", "swim"),
    ("took", "take"), ("taken", "take"),
    ("taught", "teach"),
    ("tore", "tear"), ("torn", "tear"),
    ("told", "tell"),
    ("thought", "think"),
    ("threw", "throw"), ("thrown", "throw"),
    ("understood", "understand"),
    ("woke", "wake"), ("woken", "wake"),
    ("wore", "wear"), ("worn", "wear"),
    ("won", "win"),
    ("wrote", "write"), ("written", "write"),
    // modal forms
    ("would", "will"),
    ("could", "can"),
    ("should", "shall"),
    ("might", "may"),
];

/// Contractions whose stem is not recoverable by suffix stripping
const IRREGULAR_CONTRACTION_FORMS: &[(&str, &str)] = &[
    ("won't", "will"),
    ("can't", "can"),
    ("shan't", "shall"),
    ("ain't", "be"),
];

/// Enclitic suffixes stripped from contractions, in match order
const ENCLITIC_SUFFIXES: &[&str] = &["'ve", "'re", "'ll", "'d", "'m", "'s"];

static IRREGULAR_VERBS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| IRREGULAR_VERB_FORMS.iter().copied().collect());

static IRREGULAR_CONTRACTIONS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| IRREGULAR_CONTRACTION_FORMS.iter().copied().collect());

/// Look up the base form of an irregular verb surface form
pub fn irregular_base(form: &str) -> Option<&'static str> {
    IRREGULAR_VERBS.get(form).copied()
}

/// A learner's set of known base forms.
///
/// Entries are stored normalized. The set is built wholesale from a
/// vocabulary source and replaced, never merged, when a new one is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnownWordSet {
    words: HashSet<String>,
}

impl KnownWordSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a newline-delimited vocabulary text
    pub fn from_text(text: &str) -> Self {
        let set = Self::from_words(text.lines());
        info!("Loaded {} known words", set.len());
        set
    }

    /// Build from individual words, normalizing each and discarding empties
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact membership of an already-normalized base form
    pub fn contains(&self, base: &str) -> bool {
        self.words.contains(base)
    }

    /// Whether `token` is a known word or an inflection of one
    pub fn is_known(&self, token: &str) -> bool {
        is_known(token, self)
    }

    /// Whether a displayed token should be flagged as unknown.
    ///
    /// With no vocabulary loaded nothing is flagged.
    pub fn should_highlight(&self, token: &str) -> bool {
        !self.is_empty() && !self.is_known(token)
    }

    /// Iterate over the stored base forms
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for KnownWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

/// Candidate check against the known set, directly or via the irregular table
fn check_base(candidate: &str, known: &KnownWordSet) -> bool {
    if candidate.is_empty() {
        return false;
    }
    if known.contains(candidate) {
        return true;
    }
    irregular_base(candidate).is_some_and(|base| known.contains(base))
}

/// Undo a doubled final consonant ("runn" -> "run").
///
/// Only applies to stems longer than two characters.
fn undouble(stem: &str) -> Option<&str> {
    let bytes = stem.as_bytes();
    let len = bytes.len();
    if len > 2 && bytes[len - 1] == bytes[len - 2] {
        Some(&stem[..len - 1])
    } else {
        None
    }
}

fn matches_contraction(word: &str, known: &KnownWordSet) -> bool {
    if let Some(base) = IRREGULAR_CONTRACTIONS.get(word) {
        if check_base(base, known) {
            return true;
        }
    }

    if let Some(stem) = word.strip_suffix("n't") {
        if check_base(stem, known) {
            return true;
        }
    }

    ENCLITIC_SUFFIXES.iter().any(|suffix| {
        word.strip_suffix(suffix)
            .is_some_and(|stem| check_base(stem, known))
    })
}

fn matches_plural(word: &str, known: &KnownWordSet) -> bool {
    let Some(stem) = word.strip_suffix('s') else {
        return false;
    };
    if let Some(stem) = word.strip_suffix("ies") {
        if check_base(&format!("{}y", stem), known) {
            return true;
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if check_base(stem, known) {
            return true;
        }
    }
    check_base(stem, known)
}

fn matches_past(word: &str, known: &KnownWordSet) -> bool {
    let Some(stem) = word.strip_suffix("ed") else {
        return false;
    };
    if let Some(root) = word.strip_suffix("ied") {
        if check_base(&format!("{}y", root), known) {
            return true;
        }
    }
    if check_base(stem, known) {
        return true;
    }
    // lived -> live
    if check_base(&word[..word.len() - 1], known) {
        return true;
    }
    undouble(stem).is_some_and(|s| check_base(s, known))
}

fn matches_progressive(word: &str, known: &KnownWordSet) -> bool {
    let Some(stem) = word.strip_suffix("ing") else {
        return false;
    };
    check_base(stem, known)
        || check_base(&format!("{}e", stem), known)
        || undouble(stem).is_some_and(|s| check_base(s, known))
}

fn matches_adverb(word: &str, known: &KnownWordSet) -> bool {
    let Some(stem) = word.strip_suffix("ly") else {
        return false;
    };
    if check_base(stem, known) {
        return true;
    }
    word.strip_suffix("ily")
        .is_some_and(|root| check_base(&format!("{}y", root), known))
}

fn matches_degree(word: &str, known: &KnownWordSet) -> bool {
    ["er", "est"].iter().any(|suffix| {
        let Some(stem) = word.strip_suffix(suffix) else {
            return false;
        };
        check_base(stem, known)
            || check_base(&format!("{}e", stem), known)
            || undouble(stem).is_some_and(|s| check_base(s, known))
    })
}

/// Decide whether a surface token is known given a set of base forms.
///
/// Tokens that normalize to nothing (punctuation, digits, CJK text) are
/// treated as known so they never get flagged.
pub fn is_known(token: &str, known: &KnownWordSet) -> bool {
    let word = normalize(token);
    if word.is_empty() {
        return true;
    }

    if check_base(&word, known) {
        return true;
    }

    if word.contains('\'') && matches_contraction(&word, known) {
        return true;
    }

    matches_plural(&word, known)
        || matches_past(&word, known)
        || matches_progressive(&word, known)
        || matches_adverb(&word, known)
        || matches_degree(&word, known)
}
