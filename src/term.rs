use crate::draw::{Canvas, Rgb};
use crate::{Coords, GridInt};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{bail, Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

// "Snake"
const WINDOW_TITLE: &str = "Змейка";
const CELL_WIDTH: u16 = 2;

/// Terminal backend. Each grid cell takes two columns and one row.
pub struct TermManager {
    stdout: Stdout,
    board_size: (GridInt, GridInt),
    origin: (u16, u16),
    blank_row: String,
}

impl TermManager {
    /// Checks the terminal can fit a `width` x `height` board and centers it.
    pub fn new(width: GridInt, height: GridInt) -> Result<Self> {
        let (cols, rows) = terminal::size().context("Error reading terminal size")?;
        let needed = (width as u32 * CELL_WIDTH as u32, height as u32);

        if (cols as u32) < needed.0 || (rows as u32) < needed.1 {
            bail!(
                "Terminal is {}x{} but the board needs {}x{}",
                cols, rows, needed.0, needed.1
            );
        }

        let origin = ((cols - needed.0 as u16) / 2, (rows - needed.1 as u16) / 2);
        let blank_row = " ".repeat(needed.0 as usize);

        Ok(TermManager { stdout: stdout(), board_size: (width, height), origin, blank_row })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, terminal::SetTitle(WINDOW_TITLE))
            .context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error setting raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
            .context("Error hiding cursor")?;
        execute!(self.stdout, terminal::Clear(terminal::ClearType::All))
            .context("Error clearing")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error unsetting raw mode")?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("Error leaving alt screen")?;
        Ok(())
    }

    /// Drains whatever key presses arrived since the last call, without blocking.
    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0)).context("Error polling events")? {
            if let Event::Key(ev) = read().context("Error reading event")? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    fn screen_pos(&self, pos: Coords) -> (u16, u16) {
        (self.origin.0 + pos.0 * CELL_WIDTH, self.origin.1 + pos.1)
    }
}

impl Canvas for TermManager {
    fn fill(&mut self, color: Rgb) -> Result<()> {
        queue!(self.stdout, style::SetBackgroundColor(to_color(color))).context("Error filling")?;
        let blank_row = self.blank_row.clone();

        for y in 0..self.board_size.1 {
            let (x, y) = self.screen_pos((0, y));
            queue!(self.stdout, cursor::MoveTo(x, y), style::Print(&blank_row))
                .context("Error filling")?;
        }

        Ok(())
    }

    fn fill_cell(&mut self, pos: Coords, body: Rgb, border: Rgb) -> Result<()> {
        let (x, y) = self.screen_pos(pos);
        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            style::SetBackgroundColor(to_color(body)),
            style::SetForegroundColor(to_color(border)),
            style::Print("[]")
        ).context("Error drawing cell")?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        queue!(self.stdout, style::ResetColor).context("Error resetting colors")?;
        self.stdout.flush().context("Error flushing")?;
        Ok(())
    }
}

fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}
