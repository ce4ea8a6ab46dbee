use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};

/// Terminal operations the menu core needs. Implemented by [`Term`] for a
/// real console; tests drive the core with an in-memory double instead.
pub trait Screen {
    /// Clears the terminal and moves the cursor home.
    ///
    /// # Errors
    /// Returns an error if the clear sequence cannot be written.
    fn clear(&mut self) -> io::Result<()>;

    /// Writes text without a trailing newline and flushes it.
    ///
    /// # Errors
    /// Returns an error if the write or flush fails.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Writes one line of text.
    ///
    /// # Errors
    /// Returns an error if the write fails.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Blocks until one key is pressed and returns its character value.
    /// The keystroke is unbuffered and not echoed.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be read.
    fn read_key(&mut self) -> io::Result<char>;
}

/// The process console, accessed through crossterm.
#[derive(Debug)]
pub struct Term {
    out: io::Stdout,
}

impl Term {
    #[must_use]
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for Term {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for Term {
    fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    fn read_key(&mut self) -> io::Result<char> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(key_char(key.code));
            }
        }
    }
}

/// Restores cooked mode when dropped, so an error or panic during the
/// blocking read cannot leave the terminal raw.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Character value of a pressed key. Keys that carry no character
/// (arrows, function keys) map to NUL, which never matches an entry.
const fn key_char(code: KeyCode) -> char {
    match code {
        KeyCode::Char(c) => c,
        KeyCode::Enter => '\r',
        KeyCode::Tab => '\t',
        KeyCode::Esc => '\x1b',
        _ => '\0',
    }
}
