//! Ratatui widgets for the interlinear TUI.

pub mod command_bar;
pub mod help;
pub mod occurrence_list;
pub mod query_bar;
pub mod status_bar;
pub mod word_list;
