//! Terminal front end: crossterm rendering and input handling.
//!
//! Implements the core `Frontend` seam. The flow controller stays blind to
//! the terminal; everything screen-shaped lives here.

mod input;
mod screen;

use anyhow::Result;

use familex_core::flow::{Event, Frontend, View};

use input::InputHandler;
use screen::Screen;

/// Crossterm implementation of the rendering collaborator.
pub struct TerminalFrontend {
    screen: Screen,
    input: InputHandler,
    raw: bool,
}

impl TerminalFrontend {
    /// Enter raw mode and take over the screen.
    pub fn new() -> Result<Self> {
        InputHandler::enable_raw_mode()?;
        Ok(TerminalFrontend {
            screen: Screen::new(),
            input: InputHandler::new(),
            raw: true,
        })
    }

    /// Leave raw mode so normal printing works again. Safe to call twice.
    pub fn restore(&mut self) -> Result<()> {
        if self.raw {
            InputHandler::disable_raw_mode()?;
            self.raw = false;
        }
        Ok(())
    }
}

impl Frontend for TerminalFrontend {
    fn present(&mut self, view: &View) -> Result<Option<Event>> {
        match view {
            View::Instructions { name, instructions } => {
                self.screen.show_instructions(name, instructions)?;
                self.input.await_confirm()
            }
            View::Survey {
                word,
                position,
                total,
                progress,
            } => {
                self.screen.show_word(word, *position, *total, *progress)?;
                self.input.await_rating()
            }
            View::Complete { artifact } => {
                // Terminal page: render the acknowledgment, collect nothing.
                self.screen.show_completion(artifact.records().len())?;
                Ok(None)
            }
        }
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.restore();
    }
}
