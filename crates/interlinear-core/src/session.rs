//! Search session: the boundary between user input and the scanner.
//!
//! A [`SearchRequest`] pairs an optional loaded [`Document`] with the term
//! the user typed. [`SearchRequest::run`] validates both, decodes the
//! document, drops blank lines and hands the rest to the
//! [`Scanner`](crate::scanner::Scanner). Missing input is rejected before the
//! scanner is ever called.

use crate::{
    error::{SearchError, SearchResult},
    scanner::Scanner,
    tokenize::fold,
    types::{Fold, SearchOutcome},
};
use std::path::Path;

/// An uploaded text file: its display name and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), bytes: bytes.into() }
    }

    /// Read a document from disk. The file name becomes the display name.
    pub fn from_path(path: impl AsRef<Path>) -> SearchResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        tracing::info!(name = %name, bytes = bytes.len(), "document loaded");
        Ok(Self { name, bytes })
    }

    /// Decode the document as UTF-8, without a leading byte order mark.
    pub fn text(&self) -> SearchResult<&str> {
        let text = std::str::from_utf8(&self.bytes).map_err(|source| SearchError::Decode {
            name: self.name.clone(),
            offset: source.valid_up_to(),
            source,
        })?;
        Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
    }

    /// Decoded, trimmed, non-blank lines in file order.
    pub fn lines(&self) -> SearchResult<Vec<&str>> {
        Ok(split_lines(self.text()?)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect())
    }
}

/// `true` for every character that ends a line.
///
/// Besides `\n` and `\r` this covers vertical tab, form feed, the ASCII
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}' | '\u{2029}'
    )
}

/// Split `text` into lines on every line break, treating `\r\n` as one.
/// A trailing break does not produce an empty final line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        let current = rest;
        if current.is_empty() {
            return None;
        }
        match current.find(is_line_break) {
            Some(end) => {
                let (line, after) = current.split_at(end);
                let width = if after.starts_with("\r\n") {
                    2
                } else {
                    after.chars().next().map_or(0, char::len_utf8)
                };
                rest = &after[width..];
                Some(line)
            }
            None => {
                rest = "";
                Some(current)
            }
        }
    })
}

/// One press of the "search" button.
#[derive(Debug, Clone)]
pub struct SearchRequest<'a> {
    pub document: Option<&'a Document>,
    pub term: &'a str,
    pub fold: Fold,
}

impl<'a> SearchRequest<'a> {
    pub fn new(document: Option<&'a Document>, term: &'a str) -> Self {
        Self { document, term, fold: Fold::default() }
    }

    pub fn fold(mut self, fold: Fold) -> Self {
        self.fold = fold;
        self
    }

    /// Validate the request and run the scan.
    ///
    /// A missing document is reported before an empty term. The term is used
    /// exactly as typed; it is rejected when it is empty or folds to nothing,
    /// such as a lone combining accent.
    pub fn run(&self) -> SearchResult<SearchOutcome> {
        let Some(document) = self.document else {
            tracing::warn!("search requested without a document");
            return Err(SearchError::MissingFile);
        };
        if self.term.is_empty() {
            tracing::warn!(document = %document.name, "search requested with an empty term");
            return Err(SearchError::EmptyTerm);
        }
        if fold(self.term, self.fold).is_empty() {
            tracing::warn!(
                document = %document.name,
                term = self.term,
                fold = %self.fold,
                "search term folds to nothing"
            );
            return Err(SearchError::EmptyTerm);
        }

        let lines = document.lines()?;
        let report = Scanner::new(self.term, self.fold).scan(&lines);
        tracing::info!(
            document = %document.name,
            term = self.term,
            fold = %self.fold,
            lines = lines.len(),
            words = report.found_words.len(),
            occurrences = report.occurrences.len(),
            "search finished"
        );

        let term = self.term.to_string();
        if report.is_empty() {
            Ok(SearchOutcome::NotFound { term })
        } else {
            Ok(SearchOutcome::Found { term, report })
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
