//! The interactive prompt and the non-interactive batch loop.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use tracing::debug;
use valuetable_engine::{Engine, Response};
use valuetable_foundation::{Error, ErrorKind, Result};

use crate::config::OutputFormat;
use crate::editor::{ARGUMENT_WORDS, LineEditor, ReadResult, RustylineEditor};
use crate::render::{render, render_error};

/// Words that end an interactive session.
const EXIT_WORDS: &[&str] = &["quit", "exit", ":q"];

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Answers commands.
    engine: Engine,

    /// How responses are printed.
    format: OutputFormat,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(engine: Engine) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, engine))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, engine: Engine) -> Self {
        editor.set_completions(completion_words(&engine));
        Self {
            editor,
            engine,
            format: OutputFormat::Text,
            show_banner: true,
            prompt: "vt> ".to_string(),
        }
    }

    /// Sets the response format.
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the engine.
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Runs the REPL loop until EOF or an exit word.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        if EXIT_WORDS.contains(&trimmed) {
            return Ok(false);
        }

        self.editor.add_history(trimmed);

        match self.eval(trimmed).and_then(|r| render(&r, self.format)) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("\x1b[31m{}\x1b[0m", render_error(&e, self.format)),
        }

        Ok(true)
    }

    /// Parses and executes one command.
    ///
    /// # Errors
    ///
    /// Returns the command's error.
    pub fn eval(&self, input: &str) -> Result<Response> {
        self.engine.run(input)
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mValuetable v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!(
            "{} items loaded. Type `help` for commands, `quit` or Ctrl+D to exit.\n",
            self.engine.store().count()
        );
        let _ = io::stdout().flush();
    }
}

/// Argument words plus every word of every item name.
fn completion_words(engine: &Engine) -> Vec<String> {
    let mut words: BTreeSet<String> = ARGUMENT_WORDS.iter().map(ToString::to_string).collect();
    for record in engine.store().iter() {
        words.extend(record.name.split_whitespace().map(str::to_string));
    }
    words.into_iter().collect()
}

/// Outcome counts of a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Commands answered.
    pub answered: usize,
    /// Commands that failed.
    pub failed: usize,
}

/// Answers one command per input line, writing responses to `output` and
/// errors to `errors`. Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns an `Internal` error if reading or writing fails. Command errors
/// are reported to `errors` and counted, not returned.
pub fn run_batch<R, W, X>(
    engine: &Engine,
    format: OutputFormat,
    input: R,
    mut output: W,
    mut errors: X,
) -> Result<BatchSummary>
where
    R: BufRead,
    W: Write,
    X: Write,
{
    let mut summary = BatchSummary::default();
    for (number, line) in input.lines().enumerate() {
        let line = line.map_err(io_error)?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        debug!(line = number + 1, command = line, "batch command");
        match engine.run(line).and_then(|r| render(&r, format)) {
            Ok(text) => {
                summary.answered += 1;
                writeln!(output, "{text}").map_err(io_error)?;
            }
            Err(e) => {
                summary.failed += 1;
                writeln!(errors, "{}", render_error(&e, format)).map_err(io_error)?;
            }
        }
    }
    Ok(summary)
}

fn io_error(e: io::Error) -> Error {
    Error::new(ErrorKind::Internal(format!("i/o error: {e}")))
}
