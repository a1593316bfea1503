//! interlinear TUI: ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use interlinear_core::{config::Config, Document, Fold};

/// What the TUI starts with: an optional document and term, searched
/// immediately when both are present.
#[derive(Debug, Default)]
pub struct Startup {
    pub document: Option<Document>,
    pub term: Option<String>,
}

/// Start the TUI and block until the user quits.
pub fn run(config: Config, fold: Fold, startup: Startup) -> anyhow::Result<()> {
    let theme = theme::Theme::load_default();
    let mut app = App::new(config, theme, fold);

    let ready = startup.document.is_some() && startup.term.as_deref().is_some_and(|t| !t.is_empty());
    if let Some(document) = startup.document {
        app = app.with_document(document);
    }
    if let Some(term) = startup.term {
        app = app.with_term(term);
    }
    if ready {
        tracing::debug!("running startup search");
        app = app.search_now();
    }

    app.run()
}
