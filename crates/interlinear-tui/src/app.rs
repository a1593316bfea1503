//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{self, Command},
    event::{self, AppEvent, Keymap},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        occurrence_list::{OccurrenceList, OccurrenceListState},
        query_bar::{QueryBar, QueryBarState},
        status_bar::{Status, StatusBar},
        word_list::{WordList, WordListState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use interlinear_core::{
    config::Config, render, render::RenderOptions, Document, Fold, SearchOutcome, SearchRequest,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Words,
    Occurrences,
    QueryBar,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub document: Option<Document>,
    pub fold: Fold,
    pub query: QueryBarState,
    pub words: WordListState,
    pub occurrences: OccurrenceListState,
    pub status: Option<Status>,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub keymap: Keymap,
    pub render_opts: RenderOptions,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    pub fn clear_results(&mut self) {
        self.words.clear();
        self.occurrences.clear();
    }

    /// Run the current term against the loaded document and show the result.
    pub fn search(&mut self) {
        let request = SearchRequest::new(self.document.as_ref(), &self.query.query).fold(self.fold);
        match request.run() {
            Ok(SearchOutcome::Found { term, report }) => {
                self.status = Some(Status::info(format!(
                    "{} palabras, {} ocurrencias que contienen '{term}'",
                    report.found_words.len(),
                    report.occurrences.len()
                )));
                self.words.set_words(report.found_words);
                self.occurrences.set_occurrences(report.occurrences);
                self.focus = Focus::Words;
            }
            Ok(SearchOutcome::NotFound { term }) => {
                self.status = Some(Status::warning(render::not_found_message(&term)));
                self.clear_results();
            }
            Err(err) => {
                self.status = Some(Status::from(&err));
                self.clear_results();
            }
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(config: Config, theme: Theme, fold: Fold) -> Self {
        let keymap = Keymap::from_config(&config.keybindings);
        let render_opts = RenderOptions::from(&config.ui);
        let state = AppState {
            document: None,
            fold,
            query: QueryBarState::default(),
            words: WordListState::default(),
            occurrences: OccurrenceListState::default(),
            status: None,
            focus: Focus::QueryBar,
            prev_focus: Focus::QueryBar,
            theme,
            config,
            keymap,
            render_opts,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        };
        App { state }
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.state.status = Some(Status::info(format!("cargado {}", document.name)));
        self.state.document = Some(document);
        self
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.state.query = QueryBarState::with_query(term);
        self
    }

    /// Run the search once before the first frame is drawn.
    pub fn search_now(mut self) -> Self {
        self.state.search();
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(50))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = raw {
                    if key.kind != ct_event::KeyEventKind::Press {
                        continue;
                    }
                }
                // Use insert-mode mapping when a text widget is focused
                let app_event = if is_insert_mode(self.state.focus) {
                    event::to_app_event_insert(raw)
                } else {
                    event::to_app_event(raw, &self.state.keymap)
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                    self.handle(ev);
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Quit => s.quit = true,
                AppEvent::Enter => match Command::parse(&s.command_bar.input) {
                    Ok(cmd) => {
                        tracing::debug!(command = ?cmd, "executing command");
                        s.command_bar.clear();
                        s.focus = s.prev_focus;
                        commands::execute_command(s, cmd);
                    }
                    Err(msg) if msg.is_empty() => {
                        s.command_bar.clear();
                        s.focus = s.prev_focus;
                    }
                    Err(msg) => {
                        // Show the error; bar stays open
                        s.command_bar.error = Some(msg);
                    }
                },
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Char('?') if s.focus != Focus::QueryBar => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') if s.focus != Focus::QueryBar => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Escape => {
                if s.focus == Focus::QueryBar {
                    s.focus = Focus::Words;
                }
            }

            // Tab-cycle focus: Words → Occurrences → QueryBar → Words
            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Words => Focus::Occurrences,
                    Focus::Occurrences => Focus::QueryBar,
                    Focus::QueryBar | Focus::Command => Focus::Words,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            AppEvent::QueryFocus => s.focus = Focus::QueryBar,

            AppEvent::Enter if s.focus == Focus::QueryBar => s.search(),

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::QueryBar | Focus::Command)
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Words => {
            if s.words.handle(&event) {
                let filter = s.words.selected_word().map(str::to_string);
                s.occurrences.set_filter(filter);
            }
        }
        Focus::Occurrences => s.occurrences.handle(&event),
        Focus::QueryBar => s.query.handle(&event),
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line status bar | body | 3-line query bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    let pct = state.config.ui.word_pane_width_pct.min(80);
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
        .split(vert[1]);

    let document = state.document.as_ref().map(|d| d.name.as_str());
    frame.render_widget(
        StatusBar::new(document, state.status.as_ref(), &state.theme),
        vert[0],
    );
    frame.render_widget(
        WordList::new(&state.words, state.focus == Focus::Words, &state.theme),
        horiz[0],
    );
    frame.render_widget(
        OccurrenceList::new(
            &state.occurrences,
            state.focus == Focus::Occurrences,
            &state.render_opts,
            &state.theme,
        ),
        horiz[1],
    );
    let query_bar = QueryBar::new(
        &state.query,
        state.focus == Focus::QueryBar,
        state.fold,
        &state.theme,
    );
    let cursor = query_bar.cursor_position(vert[2]);
    frame.render_widget(query_bar, vert[2]);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::QueryBar {
        frame.set_cursor_position(cursor);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
