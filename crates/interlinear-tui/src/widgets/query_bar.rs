//! Query bar widget: the search term input at the bottom of the screen.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! `Enter` is handled by the app shell, which runs the search.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use interlinear_core::Fold;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

/// Example term shown while the input is empty.
pub const PLACEHOLDER: &str = "σπ";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct QueryBarState {
    /// The term typed by the user.
    pub query: String,
    /// Byte offset of the cursor within `query`.
    pub cursor: usize,
}

impl QueryBarState {
    pub fn with_query(query: impl Into<String>) -> Self {
        let query = query.into();
        let cursor = query.len();
        Self { query, cursor }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    /// Handle a key event from the app shell. Only text-editing events are
    /// acted on.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Char(c) => {
                self.query.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(query = %self.query, cursor = self.cursor, "query: char inserted");
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_boundary(&self.query, self.cursor);
                    self.query.remove(prev);
                    self.cursor = prev;
                    tracing::debug!(query = %self.query, cursor = self.cursor, "query: backspace");
                }
            }
            AppEvent::Nav(Direction::Left) => {
                self.cursor = prev_boundary(&self.query, self.cursor);
            }
            AppEvent::Nav(Direction::Right) => {
                self.cursor = next_boundary(&self.query, self.cursor);
            }
            _ => {}
        }
    }
}

/// Byte offset of the char boundary before `cursor` (0 at the start).
pub(crate) fn prev_boundary(s: &str, cursor: usize) -> usize {
    s[..cursor].char_indices().last().map(|(i, _)| i).unwrap_or(0)
}

/// Byte offset of the char boundary after `cursor` (`s.len()` at the end).
pub(crate) fn next_boundary(s: &str, cursor: usize) -> usize {
    s[cursor..]
        .chars()
        .next()
        .map(|c| cursor + c.len_utf8())
        .unwrap_or(s.len())
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct QueryBar<'a> {
    state: &'a QueryBarState,
    focused: bool,
    fold: Fold,
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(state: &'a QueryBarState, focused: bool, fold: Fold, theme: &'a Theme) -> Self {
        Self { state, focused, fold, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.query[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        let y = area.y + 1;
        (x, y)
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title("Buscar palabras griegas que contengan")
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(18)])
            .split(inner);

        let dim = Style::default().add_modifier(Modifier::DIM);
        let query_line = if self.state.query.is_empty() {
            let hint = if self.focused {
                format!("{PLACEHOLDER}  (Enter para buscar)")
            } else {
                format!("{PLACEHOLDER}  (pulsa / para buscar)")
            };
            Line::from(Span::styled(hint, dim))
        } else {
            Line::from(self.state.query.as_str())
        };
        Paragraph::new(query_line).render(chunks[0], buf);

        let mode = match self.fold {
            Fold::Accents => "acentos: ignorados",
            Fold::Case => "acentos: estrictos",
        };
        Paragraph::new(Line::from(Span::styled(mode, dim))).render(chunks[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn typed(s: &str) -> QueryBarState {
        let mut state = QueryBarState::default();
        for c in s.chars() {
            state.handle(&AppEvent::Char(c));
        }
        state
    }

    #[test]
    fn typing_greek_advances_by_bytes() {
        let state = typed("σπ");
        assert_eq!(state.query, "σπ");
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn backspace_removes_whole_char() {
        let mut state = typed("λόγ");
        state.handle(&AppEvent::Backspace);
        assert_eq!(state.query, "λό");
        assert_eq!(state.cursor, "λό".len());
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut state = QueryBarState::default();
        state.handle(&AppEvent::Backspace);
        assert_eq!(state.query, "");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut state = typed("αχ");
        state.handle(&AppEvent::Nav(Direction::Left));
        state.handle(&AppEvent::Char('ρ'));
        assert_eq!(state.query, "αρχ");
        state.handle(&AppEvent::Nav(Direction::Right));
        state.handle(&AppEvent::Nav(Direction::Right));
        assert_eq!(state.cursor, state.query.len());
    }

    #[test]
    fn with_query_puts_cursor_at_end() {
        let state = QueryBarState::with_query("ἀρχ");
        assert_eq!(state.cursor, "ἀρχ".len());
    }

    #[test]
    fn cursor_position_counts_chars_not_bytes() {
        let state = typed("σπ");
        let theme = Theme::load_default();
        let bar = QueryBar::new(&state, true, Fold::Accents, &theme);
        let area = Rect::new(0, 10, 40, 3);
        assert_eq!(bar.cursor_position(area), (3, 11));
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let state = QueryBarState::default();
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        QueryBar::new(&state, false, Fold::Accents, &theme).render(area, &mut buf);
        let row: String = (0..area.width).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(row.contains(PLACEHOLDER), "{row}");
        assert!(row.contains("acentos: ignorados"), "{row}");
    }
}
