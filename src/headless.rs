//! One-shot search that prints to stdout instead of drawing a TUI.
//!
//! Exit codes: `0` when at least one word was found, `1` when the search ran
//! and found nothing, `2` when the request was rejected or the file could
//! not be read.

use crate::cli::Format;
use interlinear_core::{
    render::{self, RenderOptions},
    Document, Fold, SearchError, SearchRequest,
};
use std::path::PathBuf;

pub const EXIT_FOUND: u8 = 0;
pub const EXIT_NOT_FOUND: u8 = 1;
pub const EXIT_REJECTED: u8 = 2;

/// Everything a headless run needs, resolved from the CLI and config.
#[derive(Debug, Clone)]
pub struct Headless {
    pub file: Option<PathBuf>,
    pub term: String,
    pub format: Format,
    pub fold: Fold,
    pub render: RenderOptions,
}

/// What to print and how to exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub code: u8,
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    fn rejected(err: &SearchError) -> Self {
        Self {
            code: EXIT_REJECTED,
            stdout: String::new(),
            stderr: format!("{}\n", render::render_error(err)),
        }
    }
}

impl Headless {
    pub fn run(&self) -> anyhow::Result<Output> {
        let document = match self.file.as_deref().map(Document::from_path).transpose() {
            Ok(document) => document,
            Err(err) => return Ok(Output::rejected(&err)),
        };

        let outcome = match SearchRequest::new(document.as_ref(), &self.term)
            .fold(self.fold)
            .run()
        {
            Ok(outcome) => outcome,
            Err(err) => return Ok(Output::rejected(&err)),
        };

        let stdout = match self.format {
            Format::Text => render::render_text(&outcome, &self.render),
            Format::Json => render::render_json(&outcome)? + "\n",
        };
        let code = if outcome.is_found() { EXIT_FOUND } else { EXIT_NOT_FOUND };
        tracing::debug!(code, "headless search finished");
        Ok(Output { code, stdout, stderr: String::new() })
    }
}
