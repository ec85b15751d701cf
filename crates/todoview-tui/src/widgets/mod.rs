//! Ratatui widgets for the todoview TUI.

pub mod command_bar;
pub mod error_popup;
pub mod help;
pub mod status_bar;
pub mod todo_table;

use ratatui::layout::Rect;

/// A `width` × `height` rectangle centred in `area`, clipped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
