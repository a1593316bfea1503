//! Interlinear scanner: one forward pass over the lines of a document.
//!
//! Each line is classified as a heading, a verse or neither. Headings update
//! the current section and are otherwise skipped. Every other line looks one
//! line ahead and treats that line as its Greek counterpart: words in it that
//! match the term are collected, and when the current line is a verse each
//! match is recorded as an [`Occurrence`] with full context.
//!
//! Lines that fail the verse pattern still look ahead, so their Greek line
//! can add to the found-word set without producing occurrences. A Greek line
//! that itself starts with a verse number also looks ahead, at the next
//! Spanish line.

use crate::{
    classify::{classify, strip_verse_number, LineKind},
    tokenize::{words, Matcher},
    types::{Fold, Occurrence, ScanReport},
};
use std::collections::BTreeSet;

/// Scan `lines` for Greek words containing `term`, ignoring case and accents.
///
/// `lines` should already be free of blank entries. An empty `term` matches
/// every word; callers that accept user input reject it beforehand.
pub fn scan<S: AsRef<str>>(lines: &[S], term: &str) -> ScanReport {
    Scanner::new(term, Fold::default()).scan(lines)
}

/// A reusable scan configuration: the folded term and the comparison mode.
#[derive(Debug, Clone)]
pub struct Scanner {
    matcher: Matcher,
}

impl Scanner {
    pub fn new(term: &str, mode: Fold) -> Self {
        Self { matcher: Matcher::new(term, mode) }
    }

    pub fn term(&self) -> &str {
        self.matcher.term()
    }

    /// Run the scan. All state lives in this call.
    pub fn scan<S: AsRef<str>>(&self, lines: &[S]) -> ScanReport {
        let mut heading: Option<&str> = None;
        let mut found: BTreeSet<&str> = BTreeSet::new();
        let mut occurrences = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let line = line.as_ref().trim();
            let verse = match classify(line) {
                LineKind::Heading => {
                    tracing::debug!(line = i, heading = line, "heading");
                    heading = Some(line);
                    continue;
                }
                LineKind::Verse(verse) => Some(verse),
                LineKind::Other => None,
            };

            let Some(greek) = lines.get(i + 1).map(|l| l.as_ref().trim()) else {
                break;
            };

            for word in words(greek) {
                if !self.matcher.matches(word) {
                    continue;
                }
                found.insert(word);

                match verse {
                    Some(verse) => occurrences.push(Occurrence {
                        heading: heading.map(str::to_string),
                        verse: verse.number.to_string(),
                        spanish_text: verse.text.to_string(),
                        greek_text: strip_verse_number(greek, verse.number).to_string(),
                        found_word: word.to_string(),
                    }),
                    None => {
                        tracing::debug!(line = i + 1, word, "match below a non-verse line")
                    }
                }
            }
        }

        tracing::debug!(
            term = self.term(),
            mode = %self.matcher.mode(),
            lines = lines.len(),
            words = found.len(),
            occurrences = occurrences.len(),
            "scan complete"
        );

        ScanReport {
            found_words: found.into_iter().map(str::to_string).collect(),
            occurrences,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
