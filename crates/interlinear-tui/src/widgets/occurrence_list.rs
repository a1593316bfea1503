//! Occurrence pane: every match with its verse context, on the right.
//!
//! Each occurrence takes four rows:
//!
//! ```text
//! Juan 1, 1: En el principio era el Verbo
//! Ἐν ἀρχῇ ἦν ὁ λόγος          <- matched word highlighted
//! Palabra encontrada: ἀρχῇ
//! ---
//! ```
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Previous occurrence |
//! | `↓` / `j` | Next occurrence |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//! | `g` / `G` | Jump to top / bottom |
//!
//! `scroll` is the index of the first visible row, counted across all rows of
//! the visible occurrences.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use interlinear_core::{render::RenderOptions, tokenize, Occurrence};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

const ROWS_PER_OCCURRENCE: usize = 4;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct OccurrenceListState {
    pub occurrences: Vec<Occurrence>,
    /// Show only occurrences of this word.
    pub filter: Option<String>,
    /// First visible row.
    pub scroll: usize,
    /// Cached from the last render so `handle()` can page by screen height.
    last_height: Cell<usize>,
}

impl Default for OccurrenceListState {
    fn default() -> Self {
        Self {
            occurrences: Vec::new(),
            filter: None,
            scroll: 0,
            last_height: Cell::new(20),
        }
    }
}

impl OccurrenceListState {
    pub fn set_occurrences(&mut self, occurrences: Vec<Occurrence>) {
        self.occurrences = occurrences;
        self.filter = None;
        self.scroll = 0;
    }

    pub fn clear(&mut self) {
        self.set_occurrences(Vec::new());
    }

    pub fn set_filter(&mut self, filter: Option<String>) {
        self.filter = filter;
        self.scroll = 0;
    }

    /// Occurrences that pass the word filter, in discovery order.
    pub fn visible(&self) -> impl Iterator<Item = &Occurrence> + '_ {
        self.occurrences
            .iter()
            .filter(|occ| self.filter.as_deref().map_or(true, |w| occ.found_word == w))
    }

    fn total_rows(&self) -> usize {
        self.visible().count() * ROWS_PER_OCCURRENCE
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    fn max_scroll(&self) -> usize {
        self.total_rows().saturating_sub(self.height())
    }

    pub fn handle(&mut self, event: &AppEvent) {
        let max = self.max_scroll();
        self.scroll = match event {
            AppEvent::Nav(Direction::Up) => {
                // Snap to the start of the previous occurrence.
                let at = self.scroll.saturating_sub(1);
                at - at % ROWS_PER_OCCURRENCE
            }
            AppEvent::Nav(Direction::Down) => {
                let next = self.scroll - self.scroll % ROWS_PER_OCCURRENCE + ROWS_PER_OCCURRENCE;
                next.min(max)
            }
            AppEvent::ScrollUp => self.scroll.saturating_sub(self.height()),
            AppEvent::ScrollDown => (self.scroll + self.height()).min(max),
            AppEvent::ScrollToTop => 0,
            AppEvent::ScrollToBottom => max,
            _ => return,
        };
        tracing::debug!(scroll = self.scroll, max, "occurrences: scrolled");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct OccurrenceList<'a> {
    state: &'a OccurrenceListState,
    focused: bool,
    opts: &'a RenderOptions,
    theme: &'a Theme,
}

impl<'a> OccurrenceList<'a> {
    pub fn new(
        state: &'a OccurrenceListState,
        focused: bool,
        opts: &'a RenderOptions,
        theme: &'a Theme,
    ) -> Self {
        Self { state, focused, opts, theme }
    }
}

impl Widget for OccurrenceList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let count = self.state.visible().count();
        let title = match self.state.filter.as_deref() {
            Some(word) => format!("Ocurrencias de {word} ({count})"),
            None => format!("Ocurrencias ({count})"),
        };
        let block = Block::bordered().title(title).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        // Read by handle(); draw always runs first.
        self.state.last_height.set(height);

        if count == 0 {
            let hint = Line::from(Span::styled(
                "Sube un archivo de texto y busca una secuencia griega.",
                Style::default().add_modifier(Modifier::DIM),
            ));
            Paragraph::new(hint).render(inner, buf);
            return;
        }

        let scroll = self.state.scroll;
        let first = scroll / ROWS_PER_OCCURRENCE;
        let lines: Vec<Line> = self
            .state
            .visible()
            .skip(first)
            .take(height / ROWS_PER_OCCURRENCE + 2)
            .flat_map(|occ| occurrence_lines(occ, self.opts, self.theme))
            .skip(scroll % ROWS_PER_OCCURRENCE)
            .take(height)
            .collect();

        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(count * ROWS_PER_OCCURRENCE)
            .position(scroll)
            .viewport_content_length(height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Occurrence rendering
// ---------------------------------------------------------------------------

fn occurrence_lines<'a>(
    occ: &'a Occurrence,
    opts: &'a RenderOptions,
    theme: &Theme,
) -> [Line<'a>; ROWS_PER_OCCURRENCE] {
    let heading = occ.heading_or(&opts.no_heading_label);
    [
        Line::from(vec![
            Span::styled(format!("{heading}, {}: ", occ.verse), theme.heading),
            Span::styled(occ.spanish_text.as_str(), theme.spanish),
        ]),
        highlight_word(&occ.greek_text, &occ.found_word, theme),
        Line::from(vec![
            Span::raw("Palabra encontrada: "),
            Span::styled(occ.found_word.as_str(), theme.found_word),
        ]),
        Line::from(Span::styled(
            opts.separator.as_str(),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ]
}

/// Split `greek` into spans, giving every token equal to `word` the
/// highlight style.
pub fn highlight_word<'a>(greek: &'a str, word: &str, theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    let mut last = 0;
    for (at, token) in tokenize::word_indices(greek) {
        if token != word {
            continue;
        }
        if at > last {
            spans.push(Span::styled(&greek[last..at], theme.greek));
        }
        let end = at + token.len();
        spans.push(Span::styled(&greek[at..end], theme.highlight));
        last = end;
    }
    if last < greek.len() {
        spans.push(Span::styled(&greek[last..], theme.greek));
    }
    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
