//! Plain-text and JSON rendering of a [`SearchOutcome`].
//!
//! The text layout follows the order a reader works through results: the
//! count and list of distinct words first, then every occurrence with its
//! heading, verse, Spanish line, Greek line and matched word, separated by a
//! rule line.

use crate::{
    config::UiConfig,
    error::{SearchError, Severity},
    types::SearchOutcome,
};
use std::fmt::Write;

/// Text rendering options, usually taken from the `[ui]` config section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Shown in place of the heading for verses above the first heading.
    pub no_heading_label: String,
    /// Rule line printed between sections and after every occurrence.
    pub separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&UiConfig::default())
    }
}

impl From<&UiConfig> for RenderOptions {
    fn from(ui: &UiConfig) -> Self {
        Self {
            no_heading_label: ui.no_heading_label.clone(),
            separator: ui.separator.clone(),
        }
    }
}

/// Message shown when a search completes without a single match.
pub fn not_found_message(term: &str) -> String {
    format!("No se encontraron palabras que contengan '{term}' en el archivo.")
}

/// Render an outcome as human-readable text. Always ends with a newline.
pub fn render_text(outcome: &SearchOutcome, opts: &RenderOptions) -> String {
    let report = match outcome {
        SearchOutcome::NotFound { term } => return format!("{}\n", not_found_message(term)),
        SearchOutcome::Found { report, .. } => report,
    };

    let mut out = String::new();
    let _ = writeln!(out, "Palabras únicas encontradas ({}):", report.found_words.len());
    let _ = writeln!(out, "{}", report.found_words.join(", "));
    let _ = writeln!(out, "{}", opts.separator);
    let _ = writeln!(out, "Ocurrencias y su contexto:");
    for occ in &report.occurrences {
        let heading = occ.heading_or(&opts.no_heading_label);
        let _ = writeln!(out, "{heading}, {}: {}", occ.verse, occ.spanish_text);
        let _ = writeln!(out, "{}", occ.greek_text);
        let _ = writeln!(out, "Palabra encontrada: {}", occ.found_word);
        let _ = writeln!(out, "{}", opts.separator);
    }
    out
}

/// Render an outcome as pretty-printed JSON.
pub fn render_json(outcome: &SearchOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}

/// One-line user-facing description of a rejected or failed search.
pub fn render_error(err: &SearchError) -> String {
    match err.severity() {
        Severity::Warning => match err {
            SearchError::MissingFile => "aviso: por favor, sube un archivo de texto para analizar".to_string(),
            SearchError::EmptyTerm => "aviso: por favor, ingresa una secuencia de letras a buscar".to_string(),
            other => format!("aviso: {other}"),
        },
        Severity::Error => format!("error: ocurrió un error al procesar el archivo: {err}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
