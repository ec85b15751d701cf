//! Semantic application events — crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! In the main event loop, call [`to_app_event`] on every [`crossterm::event::Event`]
//! and match on the returned [`AppEvent`] instead of crossterm types.
//!
//! # Keybindings
//!
//! The single-character actions (refresh, quit, help, top, bottom) come from
//! the `[keybindings]` config section via [`Keymap`]; the rest are fixed.
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `r`, `F5`               | `Refresh`                  |
//! | `?`                     | `Help`                     |
//! | `:`                     | `CommandMode`              |
//! | `PageUp`, `Ctrl+u`      | `ScrollUp`                 |
//! | `PageDown`, `Ctrl+d`    | `ScrollDown`               |
//! | `g`, `Home`             | `ScrollToTop`              |
//! | `G`, `End`              | `ScrollToBottom`           |
//! | `↑` / `k`               | `Nav(Up)`                  |
//! | `↓` / `j`               | `Nav(Down)`                |
//! | `←` / `→`               | `Nav(Left)` / `Nav(Right)` |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | `Esc`                   | `Escape`                   |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! While the command bar is open the event loop calls [`to_app_event_insert`]
//! instead. Every printable character is forwarded as `Char`; only `Ctrl+c`,
//! `Escape`, `Enter`, `Backspace` and the arrow keys keep their bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use todoview_core::config::KeybindingsConfig;

/// Cardinal direction for table navigation and text-cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Fetch the todo list again.
    Refresh,
    /// Toggle the help popup.
    Help,
    /// Open the `:` command bar.
    CommandMode,
    /// Move the table cursor up one page.
    ScrollUp,
    /// Move the table cursor down one page.
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    /// Arrow / vim-style navigation.
    Nav(Direction),
    /// A printable character forwarded to the command bar.
    Char(char),
    Backspace,
    /// Confirm the command bar or dismiss the error popup.
    Enter,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
    /// Dismiss the active modal (error popup, help popup, command bar).
    Escape,
}

/// The configurable single-key bindings, resolved to characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    pub refresh: char,
    pub quit: char,
    pub help: char,
    pub scroll_to_top: char,
    pub scroll_to_bottom: char,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeybindingsConfig::default())
    }
}

impl Keymap {
    /// Take the first character of each configured binding. Empty strings
    /// fall back to the built-in key.
    pub fn from_config(cfg: &KeybindingsConfig) -> Self {
        let first = |s: &str, fallback: char| s.chars().next().unwrap_or(fallback);
        Self {
            refresh: first(&cfg.refresh, 'r'),
            quit: first(&cfg.quit, 'q'),
            help: first(&cfg.help, '?'),
            scroll_to_top: first(&cfg.scroll_to_top, 'g'),
            scroll_to_bottom: first(&cfg.scroll_to_bottom, 'G'),
        }
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (normal / navigation mode).
///
/// Returns `None` for events that carry no semantic meaning for the
/// application (mouse events, focus changes, unbound keys).
pub fn to_app_event(event: Event, keys: &Keymap) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key, keys),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for the command bar.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent, keys: &Keymap) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    // Uppercase bindings may or may not arrive with SHIFT set depending on
    // the terminal, so configured characters accept both.
    let plain = key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        // Configured single-key actions take precedence over the fixed set
        Char(c) if plain && c == keys.quit => Some(AppEvent::Quit),
        Char(c) if plain && c == keys.refresh => Some(AppEvent::Refresh),
        Char(c) if plain && c == keys.help => Some(AppEvent::Help),
        Char(c) if plain && c == keys.scroll_to_top => Some(AppEvent::ScrollToTop),
        Char(c) if plain && c == keys.scroll_to_bottom => Some(AppEvent::ScrollToBottom),

        F(5) => Some(AppEvent::Refresh),
        Char(':') if plain => Some(AppEvent::CommandMode),

        PageUp => Some(AppEvent::ScrollUp),
        PageDown => Some(AppEvent::ScrollDown),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollUp),
        Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollDown),
        Home => Some(AppEvent::ScrollToTop),
        End => Some(AppEvent::ScrollToBottom),

        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Left if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Left)),
        Right if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Right)),

        Char(c) if plain => Some(AppEvent::Char(c)),

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

/// Key mapping for the command bar: every printable character is text.
fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> Event {
        key(code, KeyModifiers::CONTROL)
    }

    fn map(event: Event) -> Option<AppEvent> {
        to_app_event(event, &Keymap::default())
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map(press(KeyCode::Char('q'))), Some(AppEvent::Quit));
        assert_eq!(map(ctrl(KeyCode::Char('c'))), Some(AppEvent::Quit));
    }

    #[test]
    fn refresh_keys() {
        assert_eq!(map(press(KeyCode::Char('r'))), Some(AppEvent::Refresh));
        assert_eq!(map(press(KeyCode::F(5))), Some(AppEvent::Refresh));
    }

    #[test]
    fn help_and_command_mode() {
        assert_eq!(map(press(KeyCode::Char('?'))), Some(AppEvent::Help));
        assert_eq!(
            map(key(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            Some(AppEvent::Help)
        );
        assert_eq!(map(press(KeyCode::Char(':'))), Some(AppEvent::CommandMode));
    }

    #[test]
    fn top_and_bottom() {
        assert_eq!(map(press(KeyCode::Char('g'))), Some(AppEvent::ScrollToTop));
        assert_eq!(map(press(KeyCode::Char('G'))), Some(AppEvent::ScrollToBottom));
        assert_eq!(
            map(key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(AppEvent::ScrollToBottom)
        );
        assert_eq!(map(press(KeyCode::Home)), Some(AppEvent::ScrollToTop));
        assert_eq!(map(press(KeyCode::End)), Some(AppEvent::ScrollToBottom));
    }

    #[test]
    fn nav_arrows_and_vim_keys() {
        assert_eq!(map(press(KeyCode::Up)), Some(AppEvent::Nav(Direction::Up)));
        assert_eq!(map(press(KeyCode::Char('k'))), Some(AppEvent::Nav(Direction::Up)));
        assert_eq!(map(press(KeyCode::Down)), Some(AppEvent::Nav(Direction::Down)));
        assert_eq!(map(press(KeyCode::Char('j'))), Some(AppEvent::Nav(Direction::Down)));
    }

    #[test]
    fn page_keys() {
        assert_eq!(map(press(KeyCode::PageUp)), Some(AppEvent::ScrollUp));
        assert_eq!(map(press(KeyCode::PageDown)), Some(AppEvent::ScrollDown));
        assert_eq!(map(ctrl(KeyCode::Char('u'))), Some(AppEvent::ScrollUp));
        assert_eq!(map(ctrl(KeyCode::Char('d'))), Some(AppEvent::ScrollDown));
    }

    #[test]
    fn enter_escape_resize() {
        assert_eq!(map(press(KeyCode::Enter)), Some(AppEvent::Enter));
        assert_eq!(map(press(KeyCode::Esc)), Some(AppEvent::Escape));
        assert_eq!(map(Event::Resize(120, 40)), Some(AppEvent::Resize(120, 40)));
    }

    #[test]
    fn unbound_key_returns_none() {
        assert_eq!(map(press(KeyCode::F(7))), None);
        assert_eq!(map(ctrl(KeyCode::Char('x'))), None);
    }

    #[test]
    fn custom_keymap_rebinds_refresh() {
        let cfg = KeybindingsConfig {
            refresh: "R".to_string(),
            ..KeybindingsConfig::default()
        };
        let keys = Keymap::from_config(&cfg);
        assert_eq!(
            to_app_event(key(KeyCode::Char('R'), KeyModifiers::SHIFT), &keys),
            Some(AppEvent::Refresh)
        );
        // The old binding is now a plain character
        assert_eq!(
            to_app_event(press(KeyCode::Char('r')), &keys),
            Some(AppEvent::Char('r'))
        );
    }

    #[test]
    fn empty_binding_falls_back() {
        let cfg = KeybindingsConfig {
            quit: String::new(),
            ..KeybindingsConfig::default()
        };
        assert_eq!(Keymap::from_config(&cfg).quit, 'q');
    }

    // ── Insert mode ────────────────────────────────────────────────────────

    #[test]
    fn insert_mode_bound_letters_are_chars() {
        for ch in ['q', 'r', 'g', 'G', 'j', 'k', '?', ':'] {
            assert_eq!(
                to_app_event_insert(press(KeyCode::Char(ch))),
                Some(AppEvent::Char(ch)),
                "insert mode: '{ch}' should produce Char"
            );
        }
    }

    #[test]
    fn insert_mode_arrows_and_ctrl_c() {
        assert_eq!(
            to_app_event_insert(press(KeyCode::Left)),
            Some(AppEvent::Nav(Direction::Left))
        );
        assert_eq!(
            to_app_event_insert(ctrl(KeyCode::Char('c'))),
            Some(AppEvent::Quit)
        );
    }
}
