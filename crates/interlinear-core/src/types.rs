//! Core types for interlinear-core.
//!
//! This module defines the records produced by a scan: the per-match
//! [`Occurrence`], the aggregate [`ScanReport`], and the boundary-level
//! [`SearchOutcome`] that distinguishes "found" from "not found".

use serde::Serialize;

/// One matching Greek word together with the verse it was found in.
///
/// Produced once per matching token, so the same word appearing twice in a
/// Greek line yields two occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// Most recent section heading above the verse, or `None` when no
    /// heading has been seen yet.
    pub heading: Option<String>,
    /// Verse number exactly as written on the Spanish line.
    pub verse: String,
    /// Spanish line with its verse number removed.
    pub spanish_text: String,
    /// Greek line, with the verse number removed when it repeats the
    /// Spanish verse number.
    pub greek_text: String,
    /// Surface form of the matching word.
    pub found_word: String,
}

impl Occurrence {
    /// Heading text, falling back to `label` for verses above the first
    /// heading.
    pub fn heading_or<'a>(&'a self, label: &'a str) -> &'a str {
        self.heading.as_deref().unwrap_or(label)
    }
}

/// Result of scanning one document for one term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Distinct matching words, sorted by code point.
    pub found_words: Vec<String>,
    /// Every match with its context, in discovery order.
    pub occurrences: Vec<Occurrence>,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.found_words.is_empty()
    }
}

/// What a search session produced for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// At least one word matched.
    Found { term: String, report: ScanReport },
    /// The scan ran to completion without a single matching word.
    NotFound { term: String },
}

impl SearchOutcome {
    pub fn term(&self) -> &str {
        match self {
            SearchOutcome::Found { term, .. } | SearchOutcome::NotFound { term } => term,
        }
    }

    pub fn report(&self) -> Option<&ScanReport> {
        match self {
            SearchOutcome::Found { report, .. } => Some(report),
            SearchOutcome::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
}

/// Comparison applied to both the search term and each candidate word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fold {
    /// Ignore case and diacritics (breathings, accents, iota subscript) and
    /// treat final sigma as sigma.
    #[default]
    Accents,
    /// Ignore case only.
    Case,
}

impl std::fmt::Display for Fold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fold::Accents => write!(f, "accents"),
            Fold::Case => write!(f, "case"),
        }
    }
}
