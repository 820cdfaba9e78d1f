//! Keystroke input handling using crossterm.
//!
//! Maps raw key events onto the two flow events: confirm and the seven
//! rating keys. Everything else is ignored except the quit keys.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use familex_core::flow::Event;
use familex_core::model::Rating;

/// Handles participant input from the terminal.
pub struct InputHandler {
    /// Timeout for poll operations
    poll_timeout: Duration,
}

impl InputHandler {
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Enable raw mode for terminal input
    pub fn enable_raw_mode() -> std::io::Result<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Disable raw mode and restore the terminal
    pub fn disable_raw_mode() -> std::io::Result<()> {
        crossterm::terminal::disable_raw_mode()
    }

    /// Poll for a key press with timeout; `None` on timeout.
    fn read_key(&self) -> Result<Option<KeyEvent>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Block until the participant confirms (Enter/Space) or quits.
    pub fn await_confirm(&self) -> Result<Option<Event>> {
        loop {
            let Some(key) = self.read_key()? else { continue };
            if Self::is_exit(&key) {
                return Ok(None);
            }
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                return Ok(Some(Event::Confirm));
            }
        }
    }

    /// Block until the participant presses one of the seven rating keys
    /// or quits. Digits outside the scale are ignored.
    pub fn await_rating(&self) -> Result<Option<Event>> {
        loop {
            let Some(key) = self.read_key()? else { continue };
            if Self::is_exit(&key) {
                return Ok(None);
            }
            if let KeyCode::Char(c) = key.code {
                if let Some(value) = c.to_digit(10) {
                    if let Ok(rating) = Rating::new(value as u8) {
                        return Ok(Some(Event::Rate(rating)));
                    }
                }
            }
        }
    }

    /// Check if a key event is an exit signal (Ctrl+C, Esc, or q).
    fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc | KeyCode::Char('q') => true,
            _ => false,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
