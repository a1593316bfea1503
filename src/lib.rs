//! interlinear: search Greek words in a Spanish/Greek interlinear text.
//!
//! The binary has two front ends over the same core:
//!
//! ```text
//! Cli ──► headless ──► interlinear-core ──► text / JSON on stdout
//!   └───► interlinear-tui (ratatui) ──► interlinear-core
//! ```
//!
//! [`cli`] and [`headless`] are public so integration tests can drive them
//! without spawning the binary.

pub mod cli;
pub mod headless;
