//! Crossterm output for composed [`Frame`]s.
//!
//! Each grid cell is one terminal cell painted by background colour. The
//! bottom line is a status bar.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::frame::{Frame, Shade};

/// Maps a [`Shade`] to a terminal colour.
fn to_ct_color(shade: Shade) -> CtColor {
    match shade {
        Shade::Empty => CtColor::White,
        Shade::Wall => CtColor::Black,
        Shade::Open => CtColor::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        Shade::Closed => CtColor::Grey,
        Shade::Path => CtColor::Blue,
        Shade::Source => CtColor::Green,
        Shade::Target => CtColor::Red,
    }
}

/// What the user asked for since the last poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    None,
    Quit,
    Restart,
}

/// Owns the terminal for the lifetime of the demo; restores it on drop.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    /// Switch to the alternate screen in raw mode.
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    /// Current terminal size as (columns, rows).
    pub fn size() -> Option<(u16, u16)> {
        terminal::size().ok()
    }

    /// Paint every cell of `frame` followed by the `status` line.
    pub fn draw(&mut self, frame: &Frame, status: &str) -> io::Result<()> {
        for (y, row) in frame.rows().enumerate() {
            queue!(self.out, cursor::MoveTo(0, y as u16))?;
            let mut current = None;
            for &shade in row {
                if current != Some(shade) {
                    queue!(self.out, SetBackgroundColor(to_ct_color(shade)))?;
                    current = Some(shade);
                }
                queue!(self.out, Print(' '))?;
            }
        }
        queue!(
            self.out,
            ResetColor,
            cursor::MoveTo(0, frame.height as u16),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(CtColor::Reset),
            Print(status),
        )?;
        self.out.flush()
    }

    /// Wait up to `timeout` for a key press.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Input> {
        if !event::poll(timeout)? {
            return Ok(Input::None);
        }
        let input = match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
                KeyCode::Char('r') => Input::Restart,
                _ => Input::None,
            },
            _ => Input::None,
        };
        Ok(input)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
