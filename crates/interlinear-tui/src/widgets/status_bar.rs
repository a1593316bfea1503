//! Status bar widget: the 1-line strip at the top of the screen.
//!
//! Shows the loaded file, the latest message (search summary, warning or
//! error) and right-aligned keybinding hints.

use crate::theme::Theme;
use interlinear_core::{render, SearchError, Severity};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

impl From<Severity> for StatusKind {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => StatusKind::Warning,
            Severity::Error => StatusKind::Error,
        }
    }
}

/// A message for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Info, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }
}

impl From<&SearchError> for Status {
    fn from(err: &SearchError) -> Self {
        Self {
            kind: err.severity().into(),
            text: render::render_error(err),
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct StatusBar<'a> {
    document: Option<&'a str>,
    status: Option<&'a Status>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(document: Option<&'a str>, status: Option<&'a Status>, theme: &'a Theme) -> Self {
        Self { document, status, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().add_modifier(Modifier::DIM);
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled(" interlinear ", bold), Span::styled("│ ", dim)];
        match self.document {
            Some(name) => spans.push(Span::raw(name)),
            None => spans.push(Span::styled("ningún archivo cargado (:open <ruta>)", dim)),
        }
        if let Some(status) = self.status {
            let style = match status.kind {
                StatusKind::Info => self.theme.status_info,
                StatusKind::Warning => self.theme.status_warning,
                StatusKind::Error => self.theme.status_error,
            };
            spans.push(Span::styled(" │ ", dim));
            spans.push(Span::styled(status.text.as_str(), style));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        // Keybinding hints at the right edge
        let hint = " q:salir  ?:ayuda ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(hint_x, area.y, hint, dim);
    }
}
