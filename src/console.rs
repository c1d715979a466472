//! The display sink and decision source a table talks to.

use std::collections::VecDeque;

/// Where a round writes its narration and reads the human's answers.
pub trait Console {
    /// Shows text as-is. Callers include their own newlines.
    fn emit(&mut self, text: &str);

    /// Shows `question` and reads one line of input, without the newline.
    ///
    /// Returns `None` once input is closed.
    fn prompt(&mut self, question: &str) -> Option<String>;

    /// Gives the human a moment to read after a computer player's turn.
    fn pause(&mut self) {}

    /// Shows text followed by a newline.
    fn line(&mut self, text: &str) {
        self.emit(text);
        self.emit("\n");
    }
}

/// A console that replays canned answers and records everything shown.
///
/// ```
/// use twentyone::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["y"]);
/// assert_eq!(console.prompt("Play? ").as_deref(), Some("y"));
/// assert_eq!(console.prompt("Again? "), None);
/// assert_eq!(console.output(), "Play? y\nAgain? ");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    output: String,
    pauses: usize,
}

impl ScriptedConsole {
    /// Creates a console that answers prompts in order.
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            output: String::new(),
            pauses: 0,
        }
    }

    /// Everything shown so far, answers echoed after their prompts.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Number of pauses requested.
    #[must_use]
    pub const fn pauses(&self) -> usize {
        self.pauses
    }
}

impl Console for ScriptedConsole {
    fn emit(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn prompt(&mut self, question: &str) -> Option<String> {
        self.output.push_str(question);
        let answer = self.answers.pop_front()?;
        self.output.push_str(&answer);
        self.output.push('\n');
        Some(answer)
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }
}
