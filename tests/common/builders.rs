//! Test builders: ergonomic constructors for interlinear documents and
//! expected occurrences.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use interlinear_core::{Document, Occurrence};

// ---------------------------------------------------------------------------
// InterlinearBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for interlinear documents.
///
/// # Example
///
/// ```rust
/// let lines = InterlinearBuilder::new()
///     .heading("Juan 1")
///     .verse("1", "En el principio", "Ἐν ἀρχῇ ἦν ὁ λόγος")
///     .lines();
/// ```
#[derive(Debug)]
pub struct InterlinearBuilder {
    lines: Vec<String>,
    line_ending: &'static str,
}

impl Default for InterlinearBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InterlinearBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new(), line_ending: "\n" }
    }

    pub fn heading(mut self, heading: &str) -> Self {
        self.lines.push(heading.to_string());
        self
    }

    /// A Spanish line and its Greek line, both starting with `number`.
    pub fn verse(mut self, number: &str, spanish: &str, greek: &str) -> Self {
        self.lines.push(format!("{number} {spanish}"));
        self.lines.push(format!("{number} {greek}"));
        self
    }

    /// Any raw line, unchanged.
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn crlf(mut self) -> Self {
        self.line_ending = "\r\n";
        self
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.clone()
    }

    pub fn text(&self) -> String {
        let mut text = self.lines.join(self.line_ending);
        text.push_str(self.line_ending);
        text
    }

    pub fn document(&self, name: &str) -> Document {
        Document::new(name, self.text())
    }
}

// ---------------------------------------------------------------------------
// OccurrenceBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for expected [`Occurrence`] values.
pub struct OccurrenceBuilder {
    occurrence: Occurrence,
}

impl OccurrenceBuilder {
    pub fn new(found_word: &str) -> Self {
        Self {
            occurrence: Occurrence {
                heading: None,
                verse: "1".to_string(),
                spanish_text: String::new(),
                greek_text: String::new(),
                found_word: found_word.to_string(),
            },
        }
    }

    pub fn heading(mut self, heading: &str) -> Self {
        self.occurrence.heading = Some(heading.to_string());
        self
    }

    pub fn verse(mut self, verse: &str) -> Self {
        self.occurrence.verse = verse.to_string();
        self
    }

    pub fn spanish(mut self, text: &str) -> Self {
        self.occurrence.spanish_text = text.to_string();
        self
    }

    pub fn greek(mut self, text: &str) -> Self {
        self.occurrence.greek_text = text.to_string();
        self
    }

    pub fn build(self) -> Occurrence {
        self.occurrence
    }
}
