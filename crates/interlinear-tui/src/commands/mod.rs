//! `:` commands typed into the command bar.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Toggle the help popup |
//! | `open <path>`, `e <path>` | Load a text file |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `clear` | Clear the term, results and status message |

use crate::{
    app::AppState,
    theme::Theme,
    widgets::status_bar::Status,
};
use interlinear_core::Document;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Open(PathBuf),
    Theme(String),
    Clear,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" => Ok(Command::Quit),
            "help" | "h" => Ok(Command::Help),
            "clear" => Ok(Command::Clear),
            "open" | "e" | "edit" => {
                if rest.is_empty() {
                    Err("uso: open <ruta>".to_string())
                } else {
                    Ok(Command::Open(PathBuf::from(expand_home(rest))))
                }
            }
            "theme" => {
                if rest.is_empty() {
                    Err("uso: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            other => Err(format!("comando desconocido: {other}")),
        }
    }
}

/// Replace a leading `~/` with `$HOME/`.
fn expand_home(path: &str) -> String {
    match (path.strip_prefix("~/"), std::env::var("HOME")) {
        (Some(rest), Ok(home)) => format!("{home}/{rest}"),
        _ => path.to_string(),
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Open(path) => match Document::from_path(&path) {
            Ok(document) => {
                s.status = Some(Status::info(format!(
                    "cargado {} ({} bytes)",
                    document.name,
                    document.bytes.len()
                )));
                s.document = Some(document);
                s.clear_results();
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "open failed");
                s.status = Some(Status::from(&err));
            }
        },
        Command::Theme(name) => match Theme::by_name(&name) {
            Some(theme) => s.theme = theme,
            None => s.status = Some(Status::warning(format!("tema desconocido: {name}"))),
        },
        Command::Clear => {
            s.query.clear();
            s.clear_results();
            s.status = None;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
