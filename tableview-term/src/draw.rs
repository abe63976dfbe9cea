//! Putting grid lines on a real terminal.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::KeyCode,
    execute, queue,
    style::{
        Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal,
};
use gridstyle::Rgb;

use crate::grid::GridKey;
use crate::line::StyledLine;

/// Raw-mode alternate screen, restored on drop.
pub struct Screen {
    stdout: Stdout,
}

impl Screen {
    pub fn enter() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn draw(&mut self, lines: &[StyledLine]) -> io::Result<()> {
        queue!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        for (y, line) in lines.iter().enumerate() {
            let Ok(y) = u16::try_from(y) else { break };
            queue!(self.stdout, cursor::MoveTo(0, y))?;
            for span in &line.spans {
                if let Some(fg) = span.fg {
                    queue!(self.stdout, SetForegroundColor(to_crossterm(fg)))?;
                }
                if let Some(bg) = span.bg {
                    queue!(self.stdout, SetBackgroundColor(to_crossterm(bg)))?;
                }
                if span.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                queue!(
                    self.stdout,
                    Print(&span.text),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?;
            }
        }

        self.stdout.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Key bindings of the viewer.
pub fn key_for(code: KeyCode) -> Option<GridKey> {
    match code {
        KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => Some(GridKey::NextPage),
        KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => Some(GridKey::PrevPage),
        KeyCode::Char('s') => Some(GridKey::CyclePageSize),
        KeyCode::Char('j') | KeyCode::Down => Some(GridKey::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(GridKey::Up),
        KeyCode::Char('h') | KeyCode::BackTab => Some(GridKey::HeaderLeft),
        KeyCode::Char('l') | KeyCode::Tab => Some(GridKey::HeaderRight),
        KeyCode::Char(' ') => Some(GridKey::Toggle),
        KeyCode::Enter => Some(GridKey::Activate),
        _ => None,
    }
}
