//! Word list widget: the distinct matching words in the left pane.
//!
//! # Navigation
//! - `↑`/`k` and `↓`/`j` move the cursor.
//! - `g` / `G` jump to the first / last word.
//! - `Enter` shows only the occurrences of the word under the cursor; a
//!   second `Enter` on the same word shows all occurrences again.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct WordListState {
    pub words: Vec<String>,
    /// Index of the highlighted word.
    pub cursor: usize,
    /// Index of the word the occurrence pane is filtered by.
    pub selected: Option<usize>,
}

impl WordListState {
    /// Replace the list with the words of a new search.
    pub fn set_words(&mut self, words: Vec<String>) {
        self.words = words;
        self.cursor = 0;
        self.selected = None;
    }

    pub fn clear(&mut self) {
        self.set_words(Vec::new());
    }

    /// The word the occurrence pane should be filtered by, if any.
    pub fn selected_word(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.words.get(i))
            .map(String::as_str)
    }

    /// Handle an [`AppEvent`]. Returns `true` when the selection changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        if self.words.is_empty() {
            return false;
        }
        let last = self.words.len() - 1;

        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                self.cursor = (self.cursor + 1).min(last);
            }
            AppEvent::ScrollToTop => self.cursor = 0,
            AppEvent::ScrollToBottom => self.cursor = last,
            AppEvent::Enter | AppEvent::Char(' ') => {
                self.selected = if self.selected == Some(self.cursor) {
                    None
                } else {
                    Some(self.cursor)
                };
                tracing::debug!(word = ?self.selected_word(), "words: selection changed");
                return true;
            }
            _ => {}
        }
        false
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct WordList<'a> {
    state: &'a WordListState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> WordList<'a> {
    pub fn new(state: &'a WordListState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for WordList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let title = format!("Palabras ({})", self.state.words.len());
        let block = Block::bordered().title(title).border_style(border_style);

        let items: Vec<ListItem> = self
            .state
            .words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let marker = if self.state.selected == Some(i) { "▸ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(word.as_str(), self.theme.found_word),
                ]))
            })
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let list = List::new(items).block(block).highlight_style(highlight);
        let mut list_state = ListState::default();
        if !self.state.words.is_empty() {
            list_state.select(Some(self.state.cursor));
        }
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state() -> WordListState {
        let mut s = WordListState::default();
        s.set_words(vec!["ἀρχή".into(), "ἀρχῇ".into(), "ἄρχων".into()]);
        s
    }

    #[test]
    fn cursor_is_clamped() {
        let mut s = state();
        s.handle(&AppEvent::Nav(Direction::Up));
        assert_eq!(s.cursor, 0);
        for _ in 0..5 {
            s.handle(&AppEvent::Nav(Direction::Down));
        }
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn jump_to_ends() {
        let mut s = state();
        s.handle(&AppEvent::ScrollToBottom);
        assert_eq!(s.cursor, 2);
        s.handle(&AppEvent::ScrollToTop);
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn enter_toggles_selection() {
        let mut s = state();
        s.handle(&AppEvent::Nav(Direction::Down));
        assert!(s.handle(&AppEvent::Enter));
        assert_eq!(s.selected_word(), Some("ἀρχῇ"));
        assert!(s.handle(&AppEvent::Enter));
        assert_eq!(s.selected_word(), None);
    }

    #[test]
    fn new_words_reset_selection() {
        let mut s = state();
        s.handle(&AppEvent::Enter);
        s.set_words(vec!["λόγος".into()]);
        assert_eq!(s.cursor, 0);
        assert_eq!(s.selected_word(), None);
    }

    #[test]
    fn empty_list_ignores_events() {
        let mut s = WordListState::default();
        assert!(!s.handle(&AppEvent::Enter));
        assert!(!s.handle(&AppEvent::Nav(Direction::Down)));
        assert_eq!(s.selected, None);
    }
}
