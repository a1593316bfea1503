//! Word tokenizer and term matcher for Greek lines.
//!
//! A word is a maximal run of alphanumeric characters, `_`, combining marks,
//! or the right single quotation mark `’` used for elision (`δι’`, `ἀπ’`).
//! Everything else separates words. Splitting works on `char` boundaries so
//! multi-byte Greek letters are never cut.

use crate::types::Fold;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Elision mark kept inside words.
pub const ELISION: char = '\u{2019}';

/// `true` for characters that belong to a word.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == ELISION || is_combining_mark(c)
}

/// Iterate over the words of `line`, in order, as borrowed slices.
pub fn words(line: &str) -> impl Iterator<Item = &str> + '_ {
    word_indices(line).map(|(_, word)| word)
}

/// Like [`words`], but yields each word together with its byte offset in
/// `line`.
pub fn word_indices(line: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    let mut chars = line.char_indices().peekable();
    std::iter::from_fn(move || {
        let (start, _) = chars.find(|&(_, c)| is_word_char(c))?;
        let mut end = line.len();
        while let Some(&(i, c)) = chars.peek() {
            if !is_word_char(c) {
                end = i;
                break;
            }
            chars.next();
        }
        Some((start, &line[start..end]))
    })
}

/// Fold `s` for comparison.
///
/// [`Fold::Case`] is plain Unicode lowercasing. [`Fold::Accents`] also drops
/// every combining mark after canonical decomposition and maps final sigma
/// to medial sigma, so `Ἐν` folds to `εν` and `λόγος` to `λογοσ`.
pub fn fold(s: &str, mode: Fold) -> String {
    match mode {
        Fold::Case => s.to_lowercase(),
        Fold::Accents => {
            let bare: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();
            bare.to_lowercase().replace('ς', "σ")
        }
    }
}

/// A search term folded once and compared against many words.
#[derive(Debug, Clone)]
pub struct Matcher {
    term: String,
    folded: String,
    mode: Fold,
}

impl Matcher {
    pub fn new(term: &str, mode: Fold) -> Self {
        Self {
            term: term.to_string(),
            folded: fold(term, mode),
            mode,
        }
    }

    /// The term as the user typed it.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn mode(&self) -> Fold {
        self.mode
    }

    /// `true` when the folded term is a substring of the folded word.
    pub fn matches(&self, word: &str) -> bool {
        fold(word, self.mode).contains(&self.folded)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
