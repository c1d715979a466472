//! A console that mirrors the session to a record file.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::Path;

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use tracing::warn;

use crate::console::Console;

/// Default location of the record file.
pub const DEFAULT_RECORD_PATH: &str = "./blackjack_record.txt";

/// Shown on screen between computer turns, never recorded.
const PAUSE_PROMPT: &str = "\nEnter to Continue.";

/// Writes everything to the screen and appends it, along with everything
/// typed, to a record.
///
/// A record that fails to write is reported once and then dropped; the game
/// carries on screen-only.
pub struct Transcript<R, W, F> {
    input: R,
    screen: W,
    record: Option<F>,
}

impl Transcript<StdinLock<'static>, Stdout, File> {
    /// Reads from stdin, writes to stdout and appends to the file at `path`.
    ///
    /// If the file cannot be opened the error is shown and play continues
    /// without a record.
    #[must_use]
    pub fn stdio(path: &Path) -> Self {
        let record = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(file),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot open record file");
                println!("Stream Writer Error! {err}");
                None
            }
        };
        Self::new(io::stdin().lock(), io::stdout(), record)
    }

    /// Reads from stdin and writes to stdout without a record.
    #[must_use]
    pub fn stdio_only() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), None)
    }
}

impl<R: BufRead, W: Write, F: Write> Transcript<R, W, F> {
    /// Creates a transcript over arbitrary streams.
    pub const fn new(input: R, screen: W, record: Option<F>) -> Self {
        Self {
            input,
            screen,
            record,
        }
    }

    /// Splits the transcript into its screen and record.
    pub fn into_parts(self) -> (W, Option<F>) {
        (self.screen, self.record)
    }

    fn show(&mut self, text: &str) {
        let _ = self.screen.write_all(text.as_bytes());
    }

    /// Reads one line. Bytes that are not UTF-8 are replaced rather than
    /// refused, so a garbled answer is simply asked again.
    fn read_answer(&mut self) -> Option<String> {
        let mut bytes = Vec::new();
        match self.input.read_until(b'\n', &mut bytes) {
            Ok(0) => None,
            Ok(_) => Some(
                String::from_utf8_lossy(&bytes)
                    .trim_end_matches(['\r', '\n'])
                    .to_string(),
            ),
            Err(err) => {
                warn!(error = %err, "cannot read input");
                None
            }
        }
    }

    fn append(&mut self, text: &str) {
        let Some(record) = self.record.as_mut() else {
            return;
        };

        if let Err(err) = record
            .write_all(text.as_bytes())
            .and_then(|()| record.flush())
        {
            warn!(error = %err, "record write failed, continuing without a record");
            self.record = None;
            let _ = writeln!(self.screen, "Stream Writer Error! {err}");
        }
    }
}

impl<R: BufRead, W: Write, F: Write> Console for Transcript<R, W, F> {
    fn emit(&mut self, text: &str) {
        self.show(text);
        self.append(text);
    }

    fn prompt(&mut self, question: &str) -> Option<String> {
        self.emit(question);
        let _ = self.screen.flush();

        let answer = self.read_answer()?;
        self.append(&answer);
        self.append("\n");
        Some(answer)
    }

    fn pause(&mut self) {
        self.show(PAUSE_PROMPT);
        let _ = self.screen.flush();
        let _ = self.read_answer();

        // Clear the prompt and the blank line above it.
        let _ = queue!(
            self.screen,
            MoveUp(2),
            MoveToColumn(0),
            Clear(ClearType::FromCursorDown)
        );
        let _ = self.screen.flush();
    }
}
