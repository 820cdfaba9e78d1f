//! Terminal screen rendering.
//!
//! One function per page. Each render clears the screen and redraws in
//! full, so the display always matches the session state.

use std::io::{stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor, execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};

use familex_core::model::Rating;

/// Terminal screen manager.
pub struct Screen;

impl Screen {
    pub fn new() -> Self {
        Screen
    }

    fn clear(&self) -> Result<()> {
        execute!(
            stdout(),
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    /// Instructions page: title, survey text, confirm hint.
    pub fn show_instructions(&self, name: &str, instructions: &str) -> Result<()> {
        self.clear()?;
        let mut out = stdout();

        execute!(
            out,
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::Cyan),
            Print(name),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print("\r\n\r\n")
        )?;
        for line in instructions.lines() {
            execute!(out, Print(line), Print("\r\n"))?;
        }
        execute!(
            out,
            Print("\r\n"),
            SetForegroundColor(Color::DarkGrey),
            Print("Press ENTER to begin  |  Esc to quit\r\n"),
            ResetColor
        )?;
        out.flush()?;
        Ok(())
    }

    /// Survey page: progress line, the word, the seven rating keys.
    pub fn show_word(&self, word: &str, position: usize, total: usize, progress: f64) -> Result<()> {
        self.clear()?;
        let mut out = stdout();

        execute!(
            out,
            cursor::MoveTo(0, 1),
            SetForegroundColor(Color::Magenta),
            Print("Progress: "),
            ResetColor,
            Print(format!("{position} / {total}  ")),
            Print(progress_bar(progress, 30)),
            Print("\r\n")
        )?;
        execute!(
            out,
            cursor::MoveTo(0, 3),
            Print("How familiar is this word to you?\r\n")
        )?;
        execute!(
            out,
            cursor::MoveTo(0, 5),
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::Blue),
            Print(format!("    {word}")),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print("\r\n")
        )?;
        execute!(
            out,
            cursor::MoveTo(0, 7),
            Print("1 = not at all familiar        7 = extremely familiar\r\n"),
            cursor::MoveTo(0, 8),
            SetForegroundColor(Color::Yellow),
            Print(format!("  {}\r\n", rating_row())),
            ResetColor
        )?;
        execute!(
            out,
            cursor::MoveTo(0, 10),
            SetForegroundColor(Color::DarkGrey),
            Print("Press a digit to rate  |  Esc to quit\r\n"),
            ResetColor
        )?;
        out.flush()?;
        Ok(())
    }

    /// Thank-you page banner. The export offerings print after raw mode
    /// ends, from the run command.
    pub fn show_completion(&self, total: usize) -> Result<()> {
        self.clear()?;
        let mut out = stdout();

        execute!(
            out,
            cursor::MoveTo(0, 1),
            SetForegroundColor(Color::Green),
            Print(format!(
                "All {total} ratings collected. Thank you for participating!"
            )),
            ResetColor,
            Print("\r\n\r\n")
        )?;
        out.flush()?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-width bar for the survey progress fraction.
fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// The seven rating affordances, in fixed scale order.
fn rating_row() -> String {
    Rating::ALL
        .iter()
        .map(|r| format!("[{r}]"))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_is_fixed_width() {
        for (fraction, expect_filled) in [(0.0, 0), (0.5, 15), (1.0, 30)] {
            let bar = progress_bar(fraction, 30);
            assert_eq!(bar.len(), 32);
            assert_eq!(bar.matches('#').count(), expect_filled);
        }
    }

    #[test]
    fn progress_bar_clamps_out_of_range() {
        assert_eq!(progress_bar(2.0, 10).matches('#').count(), 10);
        assert_eq!(progress_bar(-1.0, 10).matches('#').count(), 0);
    }

    #[test]
    fn rating_row_shows_all_seven_keys() {
        assert_eq!(rating_row(), "[1]  [2]  [3]  [4]  [5]  [6]  [7]");
    }
}
