//! Error popup — modal dialog showing the message of a failed refresh.
//!
//! Rendered on top of everything else while `AppState::error` is set;
//! `Enter` or `Escape` dismisses it.

use super::centered_rect;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

const MAX_WIDTH: u16 = 72;

pub struct ErrorPopup<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> ErrorPopup<'a> {
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for ErrorPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = MAX_WIDTH.min(area.width.saturating_sub(4)).max(20);
        let text_width = width.saturating_sub(4).max(1) as usize;
        // Rough wrapped height: message lines + blank + hint + borders.
        let message_lines = self
            .message
            .lines()
            .map(|l| l.chars().count().max(1).div_ceil(text_width))
            .sum::<usize>()
            .max(1);
        let height = message_lines as u16 + 4;

        let popup = centered_rect(width, height, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" Error ")
            .border_style(self.theme.border_error);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines: Vec<Line> = self
            .message
            .lines()
            .map(|l| Line::from(format!(" {l}")))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " Enter / Esc to dismiss",
            Style::default().add_modifier(Modifier::DIM),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
