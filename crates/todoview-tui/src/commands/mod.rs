//! Commands typed into the `:` bar.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `r`, `refresh` | Refresh the todo list |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `top`, `bottom` | Jump to the first / last row |

use crate::{app::AppState, event::AppEvent, theme::Theme};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Refresh,
    Help,
    // Validated against the built-in theme names at parse time
    Theme(String),
    Top,
    Bottom,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" | "quit!" => Ok(Command::Quit),
            "r" | "refresh" => Ok(Command::Refresh),
            "help" => Ok(Command::Help),
            "top" => Ok(Command::Top),
            "bottom" => Ok(Command::Bottom),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else if Theme::by_name(rest).is_none() {
                    Err(format!("unknown theme: {rest}"))
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Refresh => {
            s.refresh_requested = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name).unwrap_or_else(Theme::load_default);
        }
        Command::Top => s.table.handle(&AppEvent::ScrollToTop),
        Command::Bottom => s.table.handle(&AppEvent::ScrollToBottom),
    }
}
