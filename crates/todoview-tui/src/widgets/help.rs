//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use super::centered_rect;
use crate::event::Keymap;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct HelpPopup<'a> {
    keys: &'a Keymap,
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(keys: &'a Keymap, theme: &'a Theme) -> Self {
        Self { keys, theme }
    }

    fn bindings(&self) -> Vec<(String, &'static str)> {
        let k = self.keys;
        vec![
            (format!("{}  /  Ctrl+c", k.quit), "Quit"),
            (format!("{}  /  F5", k.refresh), "Refresh the todo list"),
            ("↑ k  /  ↓ j".to_string(), "Move selection"),
            ("PageUp  /  Ctrl+u".to_string(), "Page up"),
            ("PageDown / Ctrl+d".to_string(), "Page down"),
            (format!("{}  /  Home", k.scroll_to_top), "First todo"),
            (format!("{}  /  End", k.scroll_to_bottom), "Last todo"),
            (":".to_string(), "Command bar (refresh, theme, help, q)"),
            ("Enter  /  Escape".to_string(), "Dismiss error popup"),
            (k.help.to_string(), "Toggle this help popup"),
        ]
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bindings = self.bindings();
        let popup = centered_rect(64, bindings.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(format!(" todoview — keybindings ({} to close) ", self.keys.help))
            .border_style(self.theme.border_focused.add_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = bindings
            .into_iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<22}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
