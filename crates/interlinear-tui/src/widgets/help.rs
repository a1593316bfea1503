//! Help popup: centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Salir"),
    ("Tab", "Cambiar foco: palabras → ocurrencias → búsqueda"),
    ("/", "Ir a la barra de búsqueda"),
    ("Enter (búsqueda)", "Buscar palabras que contengan la secuencia"),
    ("Escape", "Salir de la barra de búsqueda"),
    ("↑ k  /  ↓ j", "Moverse por las palabras / ocurrencias"),
    ("Enter (palabras)", "Mostrar solo las ocurrencias de esta palabra"),
    ("PageUp  /  Ctrl+u", "Desplazar ocurrencias hacia arriba"),
    ("PageDown / Ctrl+d", "Desplazar ocurrencias hacia abajo"),
    ("g  /  G", "Ir al principio / al final"),
    (":open <ruta>", "Cargar un archivo de texto"),
    (":theme <name>", "Cambiar tema (default, gruvbox)"),
    (":clear", "Borrar la búsqueda y los resultados"),
    ("?", "Mostrar u ocultar esta ayuda"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(78, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" interlinear: atajos de teclado (? para cerrar) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<22}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
