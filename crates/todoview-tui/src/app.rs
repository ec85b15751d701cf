//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. All state transitions
//! live on [`AppState`] so they can be exercised without a terminal.
//!
//! # Refresh lifecycle
//!
//! ```text
//! Idle ──► Loading ──► Loaded { count, at }
//!              │
//!              └─────► Failed (error popup shown, previous rows kept)
//! ```
//!
//! While `Loading`, further refresh requests are ignored.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Keymap},
    refresh::{RefreshOutcome, Refresher},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        error_popup::ErrorPopup,
        help::HelpPopup,
        status_bar::{KeyHints, StatusBar},
        todo_table::{TodoTable, TodoTableState},
    },
};
use chrono::{DateTime, Local};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use todoview_core::config::Config;

// ---------------------------------------------------------------------------
// Focus + status types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    /// Vim-style `:` command line is active.
    Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing fetched yet.
    Idle,
    Loading,
    Loaded { count: usize, at: DateTime<Local> },
    Failed,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub table: TodoTableState,
    pub status: LoadStatus,
    pub source_url: String,
    /// Message of the last failed refresh; shown as a modal until dismissed.
    pub error: Option<String>,
    pub focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub keymap: Keymap,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    /// Set by key handling; the event loop starts the fetch.
    pub refresh_requested: bool,
    pub quit: bool,
    /// When the automatic first refresh is due; cleared once it fires.
    initial_refresh_at: Option<Instant>,
}

impl AppState {
    pub fn new(config: Config, theme: Theme, source_url: impl Into<String>) -> Self {
        let keymap = Keymap::from_config(&config.keybindings);
        let initial_refresh_at = Some(Instant::now() + config.ui.initial_refresh_delay());
        Self {
            table: TodoTableState::default(),
            status: LoadStatus::Idle,
            source_url: source_url.into(),
            error: None,
            focus: Focus::Table,
            theme,
            config,
            keymap,
            show_help: false,
            command_bar: CommandBarState::default(),
            refresh_requested: false,
            quit: false,
            initial_refresh_at,
        }
    }

    /// Per-frame housekeeping. Requests the automatic first refresh once its
    /// deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.initial_refresh_at.is_some_and(|at| now >= at) {
            tracing::debug!("initial refresh due");
            self.initial_refresh_at = None;
            self.refresh_requested = true;
        }
    }

    /// Text for the right-hand side of the header.
    pub fn status_text(&self) -> String {
        match &self.status {
            LoadStatus::Idle => format!("Source: {}", self.source_url),
            LoadStatus::Loading => "Loading…".to_string(),
            LoadStatus::Loaded { count, at } => format!(
                "Loaded {count} item(s) at {} • Source: {}",
                at.format("%H:%M:%S"),
                self.source_url
            ),
            LoadStatus::Failed => "Failed to load todos".to_string(),
        }
    }

    /// Enter the loading state. Returns `false` (and changes nothing) when a
    /// request is already in flight.
    pub fn begin_refresh(&mut self) -> bool {
        if self.status == LoadStatus::Loading {
            tracing::debug!("refresh ignored: request already in flight");
            return false;
        }
        tracing::debug!(url = %self.source_url, "refresh started");
        self.status = LoadStatus::Loading;
        true
    }

    /// Apply a finished refresh. Success replaces every row; failure keeps
    /// the previous rows and raises the error popup.
    pub fn apply_outcome(&mut self, outcome: RefreshOutcome) {
        match outcome {
            Ok(todos) => {
                let count = todos.len();
                self.table.replace(todos);
                self.status = LoadStatus::Loaded { count, at: Local::now() };
                self.error = None;
                tracing::debug!(count, "table updated");
            }
            Err(e) => {
                tracing::debug!(kind = e.kind(), error = %e, "showing refresh error");
                self.status = LoadStatus::Failed;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn handle(&mut self, event: AppEvent) {
        // The error popup is modal: only dismiss keys (and quit) get through.
        if self.error.is_some() {
            match event {
                AppEvent::Enter | AppEvent::Escape => {
                    tracing::debug!("error popup dismissed");
                    self.error = None;
                }
                AppEvent::Quit => self.quit = true,
                _ => {}
            }
            return;
        }

        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            match event {
                AppEvent::Help | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if self.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    self.command_bar.clear();
                    self.focus = Focus::Table;
                }
                AppEvent::Quit => self.quit = true,
                AppEvent::Enter => {
                    let input = self.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            self.command_bar.clear();
                            self.focus = Focus::Table;
                            execute_command(self, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input — just close
                            self.command_bar.clear();
                            self.focus = Focus::Table;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            self.command_bar.error = Some(msg);
                        }
                    }
                }
                other => self.command_bar.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }
            AppEvent::Refresh => {
                self.refresh_requested = true;
            }
            AppEvent::Help => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            AppEvent::CommandMode => {
                tracing::debug!("entering command mode");
                self.command_bar.clear();
                self.focus = Focus::Command;
            }
            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}
            other => self.table.handle(&other),
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    refresher: Refresher,
}

impl App {
    pub fn new(config: Config, theme: Theme, refresher: Refresher) -> Self {
        let state = AppState::new(config, theme, refresher.url());
        App { state, refresher }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            self.state.tick(Instant::now());

            while let Some(outcome) = self.refresher.try_next() {
                self.state.apply_outcome(outcome);
            }

            if std::mem::take(&mut self.state.refresh_requested) && self.state.begin_refresh() {
                self.refresher.spawn();
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        let app_event = if self.state.focus == Focus::Command {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw, &self.state.keymap)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.state.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other, &self.state.keymap) {
                            self.state.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line header | table | 1-line key hints
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    let status_text = state.status_text();
    frame.render_widget(StatusBar::new(&status_text, &state.status, &state.theme), vert[0]);
    frame.render_widget(TodoTable::new(&state.table, &state.status, &state.theme), vert[1]);
    frame.render_widget(KeyHints::new(&state.keymap), vert[2]);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.keymap, &state.theme), area);
    }

    if let Some(message) = &state.error {
        frame.render_widget(ErrorPopup::new(message, &state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
