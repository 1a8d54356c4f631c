//! Command parsing.
//!
//! Turns one line of chat or REPL input into a [`Command`]. A line is a verb
//! followed by free-form arguments; a leading `!` is accepted and ignored.

use std::fmt;

use tracing::debug;
use valuetable_foundation::{Error, Result};

/// Count used by `top` and `recent` when none is given.
pub const DEFAULT_COUNT: usize = 5;

/// Criterion used by `top` when none is given.
pub const DEFAULT_CRITERION: &str = "demand";

/// Word separating the two items of an item comparison.
const VERSUS: &str = "vs";

/// A parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "command", rename_all = "snake_case"))]
pub enum Command {
    /// Look up one item by name.
    Lookup {
        /// Raw query text.
        query: String,
    },
    /// Rank items by a criterion.
    Top {
        /// Number of rows to return.
        count: usize,
        /// Criterion name, validated by the engine.
        criterion: String,
    },
    /// Select items matching a boolean expression.
    Filter {
        /// Expression source.
        expression: String,
    },
    /// Compare two items side by side.
    CompareItems {
        /// Raw left query.
        left: String,
        /// Raw right query.
        right: String,
    },
    /// Value a two-sided trade.
    CompareTrade {
        /// Raw trade expression, separator included.
        expression: String,
    },
    /// Rank items by rate of change.
    Recent {
        /// Number of rows to return.
        count: usize,
    },
    /// List the available commands.
    Help,
}

impl Command {
    /// Parses one line of input.
    ///
    /// `separator` is the trade separator; `compare` arguments containing it
    /// are a trade, otherwise `left vs right` is an item comparison.
    ///
    /// # Errors
    /// Returns `InvalidCommand` for an empty line, an unknown verb, a missing
    /// required argument, or a count that is not a positive integer.
    pub fn parse(input: &str, separator: &str) -> Result<Self> {
        let line = input.trim();
        let line = line.strip_prefix('!').unwrap_or(line).trim_start();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        if verb.is_empty() {
            return Err(Error::invalid_command("empty command: try `help`"));
        }

        let command = match verb.to_ascii_lowercase().as_str() {
            "value" | "v" => Self::Lookup {
                query: required(rest, "value <item name>")?,
            },
            "top" => parse_top(rest)?,
            "filter" => Self::Filter {
                expression: required(rest, "filter <expression>")?,
            },
            "compare" => parse_compare(rest, separator)?,
            "recent" => Self::Recent {
                count: match rest.split_whitespace().next() {
                    Some(word) => parse_count(word)?,
                    None => DEFAULT_COUNT,
                },
            },
            "help" => Self::Help,
            other => {
                return Err(Error::invalid_command(format!(
                    "unknown command '{other}': try `help`"
                )));
            }
        };
        debug!(?command, "parsed command");
        Ok(command)
    }

    /// Returns the canonical verb.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Lookup { .. } => "value",
            Self::Top { .. } => "top",
            Self::Filter { .. } => "filter",
            Self::CompareItems { .. } | Self::CompareTrade { .. } => "compare",
            Self::Recent { .. } => "recent",
            Self::Help => "help",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookup { query } => write!(f, "value {query}"),
            Self::Top { count, criterion } => write!(f, "top {count} {criterion}"),
            Self::Filter { expression } => write!(f, "filter {expression}"),
            Self::CompareItems { left, right } => write!(f, "compare {left} {VERSUS} {right}"),
            Self::CompareTrade { expression } => write!(f, "compare {expression}"),
            Self::Recent { count } => write!(f, "recent {count}"),
            Self::Help => f.write_str("help"),
        }
    }
}

fn required(rest: &str, usage: &str) -> Result<String> {
    if rest.is_empty() {
        Err(Error::invalid_command(format!("missing argument: usage is `{usage}`")))
    } else {
        Ok(rest.to_string())
    }
}

fn parse_count(word: &str) -> Result<usize> {
    match word.parse::<usize>() {
        Ok(0) | Err(_) => Err(Error::invalid_command(format!(
            "'{word}' is not a positive whole number"
        ))),
        Ok(n) => Ok(n),
    }
}

/// `top [count] [criterion]`, either part optional.
fn parse_top(rest: &str) -> Result<Command> {
    let mut words = rest.split_whitespace().peekable();
    let count = match words.peek() {
        Some(&word) if word.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') => {
            let count = parse_count(word)?;
            words.next();
            count
        }
        _ => DEFAULT_COUNT,
    };
    let criterion = words.collect::<Vec<_>>().join(" ");
    Ok(Command::Top {
        count,
        criterion: if criterion.is_empty() {
            DEFAULT_CRITERION.to_string()
        } else {
            criterion
        },
    })
}

fn parse_compare(rest: &str, separator: &str) -> Result<Command> {
    let rest = required(rest, "compare <item> vs <item>` or `compare <trade>")?;
    if !separator.is_empty() && rest.contains(separator) {
        return Ok(Command::CompareTrade { expression: rest });
    }
    if let Some((left, right)) = split_versus(&rest) {
        return Ok(Command::CompareItems { left, right });
    }
    Ok(Command::CompareTrade { expression: rest })
}

/// Splits at the first standalone `vs` word, both sides non-empty.
fn split_versus(text: &str) -> Option<(String, String)> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let at = words
        .iter()
        .position(|w| w.eq_ignore_ascii_case(VERSUS))?;
    let (left, right) = (words[..at].join(" "), words[at + 1..].join(" "));
    if left.is_empty() || right.is_empty() {
        None
    } else {
        Some((left, right))
    }
}
