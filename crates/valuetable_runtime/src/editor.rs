//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`] so tests can script input while the
//! binary uses rustyline with history and command completion.

use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use valuetable_foundation::{Error, ErrorKind, Result};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set the words offered for completion.
    fn set_completions(&mut self, words: Vec<String>);
}

/// Words completed at the start of a line.
pub const COMMAND_WORDS: &[&str] = &[
    "value", "v", "top", "filter", "compare", "recent", "help", "quit", "exit",
];

/// Words completed after `top` or inside a filter.
pub const ARGUMENT_WORDS: &[&str] = &[
    "demand", "value", "rate_of_change", "and", "or", "not", "vs",
];

#[derive(Helper, Completer, Hinter, Validator)]
struct ValuetableHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for ValuetableHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }
}

/// Completes command verbs at the start of a line, argument words after.
struct WordCompleter {
    commands: Vec<String>,
    arguments: Vec<String>,
}

impl WordCompleter {
    fn new() -> Self {
        Self {
            commands: COMMAND_WORDS.iter().map(ToString::to_string).collect(),
            arguments: ARGUMENT_WORDS.iter().map(ToString::to_string).collect(),
        }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = line[..pos]
            .char_indices()
            .rev()
            .find(|&(_, c)| c.is_whitespace() || "()!".contains(c))
            .map_or(0, |(i, c)| i + c.len_utf8());
        let word = &line[start..pos];
        let prefix = &line[..start];
        let at_verb = prefix.trim().is_empty() || prefix.trim() == "!";
        let words = if at_verb { &self.commands } else { &self.arguments };

        let candidates = words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();
        (start, candidates)
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<ValuetableHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(internal)?
            .build();

        let helper = ValuetableHelper {
            completer: WordCompleter::new(),
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config).map_err(internal)?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

fn internal(e: ReadlineError) -> Error {
    Error::new(ErrorKind::Internal(e.to_string()))
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(internal(e)),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_completions(&mut self, words: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.arguments = words;
        }
    }
}
