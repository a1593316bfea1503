//! interlinear-core: search Greek words in a Spanish/Greek interlinear text.
//!
//! This crate holds everything except the terminal front end: the line
//! classifier, the word tokenizer, the single-pass scanner, the search
//! session that validates user input, and the renderers.
//!
//! # Pipeline
//!
//! ```text
//! Document ──► session (decode, split, drop blanks, validate term)
//!                 │
//!                 ▼
//!              scanner ──► ScanReport ──► SearchOutcome ──► render
//!            (classify + tokenize)
//! ```
//!
//! Everything is synchronous and allocated per search; nothing is shared
//! between searches.

pub mod classify;
pub mod config;
pub mod error;
pub mod render;
pub mod scanner;
pub mod session;
pub mod tokenize;
pub mod types;

pub use error::{SearchError, SearchResult, Severity};
pub use scanner::{scan, Scanner};
pub use session::{Document, SearchRequest};
pub use types::{Fold, Occurrence, ScanReport, SearchOutcome};
