//! Header and footer strips.
//!
//! [`StatusBar`] is the top row: the `Todos` title on the left and the
//! current load status on the right. [`KeyHints`] is the bottom row listing
//! the bound keys.

use crate::app::LoadStatus;
use crate::event::Keymap;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    text: &'a str,
    status: &'a LoadStatus,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(text: &'a str, status: &'a LoadStatus, theme: &'a Theme) -> Self {
        Self { text, status, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = " Todos ";
        buf.set_string(
            area.x,
            area.y,
            title,
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        // Status is right-aligned; on narrow terminals it is truncated from
        // the left edge of the remaining space rather than overwriting the title.
        let room = area.width.saturating_sub(title.len() as u16 + 1);
        let width = (self.text.chars().count() as u16 + 1).min(room);
        let x = area.right().saturating_sub(width);
        buf.set_stringn(
            x,
            area.y,
            self.text,
            width as usize,
            self.theme.status_style(self.status),
        );
    }
}

pub struct KeyHints<'a> {
    keys: &'a Keymap,
}

impl<'a> KeyHints<'a> {
    pub fn new(keys: &'a Keymap) -> Self {
        Self { keys }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().add_modifier(Modifier::DIM);
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let hints = [
            (self.keys.refresh.to_string(), "refresh"),
            (self.keys.quit.to_string(), "quit"),
            (self.keys.help.to_string(), "help"),
            (":".to_string(), "command"),
        ];

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in hints {
            spans.push(Span::styled(key, bold));
            spans.push(Span::styled(format!(":{label}  "), dim));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
