use std::io::{self, Stdout, Write};

use anyhow::Context;
use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use shared::render::Frame;
use shared::viewport::Size;

/// Rows the status line needs below the world.
const STATUS_ROWS: usize = 1;

/// Raw-mode alternate screen, restored when dropped.
pub struct Terminal<W: Write = Stdout> {
    out: W,
    size: Size,
}

impl Terminal {
    /// Switches stdout to raw mode on the alternate screen. `size` is the
    /// terminal size already queried by the caller.
    pub fn enter(size: Size) -> anyhow::Result<Self> {
        install_panic_hook();
        terminal::enable_raw_mode().context("enabling raw mode")?;
        Terminal::setup(io::stdout(), size)
    }
}

impl<W: Write> Terminal<W> {
    /// Takes ownership of `out` first so that a failure in the remaining
    /// setup still restores the terminal on drop.
    fn setup(out: W, size: Size) -> anyhow::Result<Self> {
        let mut terminal = Terminal { out, size };
        execute!(terminal.out, EnterAlternateScreen, cursor::Hide, DisableLineWrap)
            .context("entering alternate screen")?;
        Ok(terminal)
    }

    pub fn draw(&mut self, frame: &Frame, status: &str) -> io::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate, Clear(ClearType::All))?;

        for (y, row) in frame.rows.iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, y as u16))?;
            match frame.cursor.filter(|cursor| cursor.y == y && cursor.x < row.len()) {
                Some(cursor) => {
                    let before: String = row[..cursor.x].iter().collect();
                    let after: String = row[cursor.x + 1..].iter().collect();
                    queue!(
                        self.out,
                        Print(before),
                        SetAttribute(Attribute::Reverse),
                        Print(row[cursor.x]),
                        SetAttribute(Attribute::NoReverse),
                        Print(after)
                    )?;
                }
                None => queue!(self.out, Print(row.iter().collect::<String>()))?,
            }
        }

        let status: String = status.chars().take(self.size.width).collect();
        queue!(
            self.out,
            cursor::MoveTo(0, self.size.height.saturating_sub(STATUS_ROWS) as u16),
            Clear(ClearType::CurrentLine),
            Print(status),
            EndSynchronizedUpdate
        )?;
        self.out.flush()
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        restore(&mut self.out);
    }
}

/// Queries the terminal without touching its mode.
pub fn terminal_size() -> anyhow::Result<Size> {
    let (columns, rows) = terminal::size().context("querying terminal size")?;
    Ok(Size::new(usize::from(columns), usize::from(rows)))
}

/// Characters available for the world, one row kept for the status line.
pub fn screen_below_status(terminal: Size) -> anyhow::Result<Size> {
    if terminal.width == 0 || terminal.height <= STATUS_ROWS {
        anyhow::bail!(
            "terminal is {}x{}, need at least one column and {} rows",
            terminal.width,
            terminal.height,
            STATUS_ROWS + 1
        );
    }
    Ok(Size::new(terminal.width, terminal.height - STATUS_ROWS))
}

fn restore(out: &mut impl Write) {
    let _ = execute!(out, SetAttribute(Attribute::Reset), EnableLineWrap, cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Leaves the alternate screen before the panic message is printed.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore(&mut io::stdout());
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records everything written and fails the first flush.
    struct BrokenOnce {
        written: Rc<RefCell<Vec<u8>>>,
        flushed: bool,
    }

    impl Write for BrokenOnce {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.flushed {
                return Ok(());
            }
            self.flushed = true;
            Err(io::Error::other("terminal went away"))
        }
    }

    #[test]
    fn status_line_takes_the_last_row() {
        assert_eq!(screen_below_status(Size::new(80, 24)).unwrap(), Size::new(80, 23));
        assert_eq!(screen_below_status(Size::new(1, 2)).unwrap(), Size::new(1, 1));
    }

    #[test]
    fn too_small_terminals_are_rejected() {
        assert!(screen_below_status(Size::new(80, 1)).is_err());
        assert!(screen_below_status(Size::new(80, 0)).is_err());
        assert!(screen_below_status(Size::new(0, 24)).is_err());
    }

    #[test]
    fn failed_setup_still_leaves_the_alternate_screen() {
        let written = Rc::new(RefCell::new(Vec::new()));
        let out = BrokenOnce {
            written: Rc::clone(&written),
            flushed: false,
        };

        let result = Terminal::setup(out, Size::new(80, 24));
        assert!(result.is_err());

        let written = String::from_utf8_lossy(&written.borrow()).into_owned();
        let entered = written.find("\x1b[?1049h").expect("entered alternate screen");
        let left = written.find("\x1b[?1049l").expect("left alternate screen");
        assert!(left > entered);
        assert!(written.contains("\x1b[?25h"), "cursor shown again");
    }

    #[test]
    fn draw_highlights_the_cursor_and_writes_status_last() {
        let written = Rc::new(RefCell::new(Vec::new()));
        let out = BrokenOnce {
            written: Rc::clone(&written),
            flushed: true,
        };
        let mut terminal = Terminal::setup(out, Size::new(4, 3)).unwrap();
        let frame = Frame {
            rows: vec![vec!['#', ' ', ' ', ' '], vec![' ', '#', ' ', ' ']],
            cursor: Some(shared::viewport::Point::new(1, 1)),
        };
        terminal.draw(&frame, "status too long").unwrap();

        let written = String::from_utf8_lossy(&written.borrow()).into_owned();
        assert!(written.contains("\x1b[7m#\x1b[27m"), "cursor cell reversed");
        assert!(written.contains("stat"));
        assert!(!written.contains("status"), "status truncated to the width");
    }
}
