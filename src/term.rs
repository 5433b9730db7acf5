use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal};

use crate::error::{Result, SnakeError};
use crate::grid::{self, Cell};
use crate::TermInt;

/// Terminal columns per board cell, so cells look roughly square.
const CELL_COLUMNS: TermInt = 2;
/// Row holding the score line; the board border starts below it.
const STATUS_ROW: TermInt = 0;
const BOARD_TOP: TermInt = 1;

const BOARD_COLUMNS: TermInt = grid::cols() as TermInt * CELL_COLUMNS;
const BOARD_ROWS: TermInt = grid::rows() as TermInt;

/// Screen space needed: border, board, status and hint lines.
pub const MIN_WIDTH: TermInt = BOARD_COLUMNS + 2;
pub const MIN_HEIGHT: TermInt = BOARD_ROWS + 4;

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;

        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(SnakeError::TerminalTooSmall {
                need_width: MIN_WIDTH,
                need_height: MIN_HEIGHT,
                width,
                height,
            });
        }

        Ok(TermManager { width, height, stdout: stdout() })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Drains every pending key press without blocking.
    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::ZERO)? {
            if let Event::Key(ev) = read()? {
                if ev.kind == KeyEventKind::Press {
                    events.push(ev);
                }
            }
        }

        Ok(events)
    }

    pub fn get_terminal_size(&self) -> (TermInt, TermInt) {
        (self.width, self.height)
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, ResetColor, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    pub fn draw_borders(&mut self) -> Result<()> {
        let end_x = BOARD_COLUMNS + 1;
        let end_y = BOARD_TOP + BOARD_ROWS + 1;

        for x in 0..=end_x {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.print_at((x, BOARD_TOP), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in BOARD_TOP + 1..end_y {
            self.print_at((0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        Ok(())
    }

    /// Blanks the inside of the board.
    pub fn clear_board(&mut self) -> Result<()> {
        let blank = " ".repeat(BOARD_COLUMNS as usize);

        for row in 0..BOARD_ROWS {
            queue!(self.stdout, cursor::MoveTo(1, BOARD_TOP + 1 + row), Print(&blank))?;
        }

        Ok(())
    }

    /// Draws a two-column glyph on a board cell. Off-board cells are skipped.
    pub fn draw_cell(&mut self, cell: Cell, glyph: &str, color: Color) -> Result<()> {
        if let Some(pos) = screen_pos(cell) {
            queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), SetForegroundColor(color), Print(glyph), ResetColor)?;
        }

        Ok(())
    }

    /// Writes text on the status line, right-aligned to the board edge.
    pub fn print_status(&mut self, text: &str) -> Result<()> {
        let line = format!("{text: >width$}", text = text, width = MIN_WIDTH as usize);
        self.print_text((0, STATUS_ROW), &line)
    }

    /// Writes text on the line under the board.
    pub fn print_hint(&mut self, text: &str) -> Result<()> {
        self.print_text((1, BOARD_TOP + BOARD_ROWS + 2), text)
    }

    pub fn print_text(&mut self, pos: (TermInt, TermInt), text: &str) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), Print(text))?;
        Ok(())
    }

    /// Shows a box of centred lines in the middle of the board.
    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let center = (1 + BOARD_COLUMNS / 2, BOARD_TOP + 1 + BOARD_ROWS / 2);
        let top_left = (center.0.saturating_sub(msg_width / 2), center.1.saturating_sub(msg_height / 2));
        let blank = " ".repeat(msg_width as usize);

        // Print the top and bottom empty lines
        for y in [top_left.1, top_left.1 + msg_height - 1] {
            self.print_text((top_left.0, y), &blank)?;
        }

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            self.print_text((top_left.0, top_left.1 + i as TermInt + 1), &padded_line)?;
        }

        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, pos: (TermInt, TermInt), ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), Print(ch))?;
        Ok(())
    }
}

/// Screen position of the left column of a board cell, if it is on the board.
fn screen_pos(cell: Cell) -> Option<(TermInt, TermInt)> {
    if !grid::in_bounds(cell) {
        return None;
    }

    let x = 1 + cell.col() as TermInt * CELL_COLUMNS;
    let y = BOARD_TOP + 1 + cell.row() as TermInt;
    Some((x, y))
}
