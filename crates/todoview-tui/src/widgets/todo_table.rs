//! Todo table widget — the three-column body of the screen.
//!
//! # Navigation
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Move up one page |
//! | `PageDown` / `Ctrl+d` | Move down one page |
//! | `g` / `G` | Jump to first / last row |
//!
//! The scroll offset is owned by ratatui's [`TableState`] during render and
//! cached here so the selected row stays in place between frames.

use std::cell::Cell;

use crate::app::LoadStatus;
use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{
        Block, Cell as TableCell, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, StatefulWidget, Table, TableState, Widget,
    },
};
use todoview_core::Todo;

const PAGE_STEP: usize = 10;
const ID_WIDTH_MIN: u16 = 2;
const ID_WIDTH_MAX: u16 = 24;
const COMPLETED_WIDTH: u16 = 9;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct TodoTableState {
    pub todos: Vec<Todo>,
    /// Index into `todos` of the highlighted row.
    pub cursor: usize,
    /// First visible row, written back after each render.
    offset: Cell<usize>,
}

impl TodoTableState {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            ..Self::default()
        }
    }

    /// Swap in a freshly fetched list. The cursor is clamped to the new
    /// length; the previous rows are discarded entirely.
    pub fn replace(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        self.cursor = self.cursor.min(self.todos.len().saturating_sub(1));
        if self.offset.get() > self.cursor {
            self.offset.set(self.cursor);
        }
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.todos.len();
        if total == 0 {
            return;
        }
        let last = total - 1;

        self.cursor = match event {
            AppEvent::Nav(Direction::Up) => self.cursor.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => (self.cursor + 1).min(last),
            AppEvent::ScrollUp => self.cursor.saturating_sub(PAGE_STEP),
            AppEvent::ScrollDown => (self.cursor + PAGE_STEP).min(last),
            AppEvent::ScrollToTop => 0,
            AppEvent::ScrollToBottom => last,
            _ => return,
        };
        tracing::debug!(cursor = self.cursor, total, "table: cursor moved");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct TodoTable<'a> {
    state: &'a TodoTableState,
    status: &'a LoadStatus,
    theme: &'a Theme,
}

impl<'a> TodoTable<'a> {
    pub fn new(state: &'a TodoTableState, status: &'a LoadStatus, theme: &'a Theme) -> Self {
        Self { state, status, theme }
    }

    fn title(&self) -> String {
        let total = self.state.todos.len();
        if total == 0 {
            " Todos ".to_string()
        } else {
            format!(" Todos — {}/{} done ", self.state.completed_count(), total)
        }
    }
}

impl Widget for TodoTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(self.title())
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let todos = &self.state.todos;
        if todos.is_empty() {
            let placeholder = match self.status {
                LoadStatus::Idle | LoadStatus::Loading => "Loading…",
                LoadStatus::Loaded { .. } => "No todos",
                LoadStatus::Failed => "Nothing loaded — press r to retry",
            };
            Paragraph::new(Line::from(placeholder))
                .style(Style::default().add_modifier(Modifier::DIM))
                .centered()
                .render(inner, buf);
            return;
        }

        let id_width = todos
            .iter()
            .map(|t| t.id.chars().count() as u16)
            .max()
            .unwrap_or(0)
            .clamp(ID_WIDTH_MIN, ID_WIDTH_MAX);

        let header = Row::new(["ID", "Task", "Completed"]).style(self.theme.table_header);

        let rows: Vec<Row> = todos
            .iter()
            .enumerate()
            .map(|(i, todo)| {
                let id_style = if todo.has_missing_id() {
                    self.theme.id_column.add_modifier(Modifier::DIM)
                } else {
                    self.theme.id_column
                };
                Row::new(vec![
                    TableCell::from(todo.id.clone()).style(id_style),
                    TableCell::from(todo.task.clone()),
                    TableCell::from(todo.completed_label()),
                ])
                .style(self.theme.row_style(todo, i))
            })
            .collect();

        let widths = [
            Constraint::Length(id_width),
            Constraint::Fill(1),
            Constraint::Length(COMPLETED_WIDTH),
        ];

        // Leave a 1-column strip on the right for the scrollbar.
        let table_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        let mut table_state = TableState::default()
            .with_offset(self.state.offset.get())
            .with_selected(Some(self.state.cursor));

        StatefulWidget::render(
            Table::new(rows, widths)
                .header(header)
                .column_spacing(2)
                .row_highlight_style(self.theme.row_selected),
            table_area,
            buf,
            &mut table_state,
        );
        self.state.offset.set(table_state.offset());

        // Header row takes one line of the inner area.
        let viewport = inner.height.saturating_sub(1) as usize;
        if todos.len() > viewport {
            let mut sb_state = ScrollbarState::new(todos.len())
                .position(self.state.cursor)
                .viewport_content_length(viewport);
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
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
