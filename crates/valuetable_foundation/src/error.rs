//! Error types for the Valuetable system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Load errors are fatal and only occur at startup; every other kind is a
//! per-request failure that the transport turns into a user-visible message.

use std::fmt;

use thiserror::Error;

/// The main error type for Valuetable operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a dataset load error.
    #[must_use]
    pub fn load(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Load(message.into()))
    }

    /// Creates a missing required columns error.
    #[must_use]
    pub fn missing_columns(missing: Vec<String>) -> Self {
        Self::new(ErrorKind::MissingColumns(missing))
    }

    /// Creates an invalid ranking criterion error.
    #[must_use]
    pub fn invalid_criterion(criterion: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCriterion(criterion.into()))
    }

    /// Creates an invalid filter expression error.
    ///
    /// The offending expression is kept so it can be echoed back to the caller.
    #[must_use]
    pub fn invalid_filter(
        expression: impl Into<String>,
        message: impl Into<String>,
        offset: usize,
    ) -> Self {
        Self::new(ErrorKind::InvalidFilterExpression {
            expression: expression.into(),
            message: message.into(),
            offset,
        })
    }

    /// Creates a missing trade separator error.
    #[must_use]
    pub fn missing_separator(separator: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingSeparator(separator.into()))
    }

    /// Creates a repeated trade separator error.
    #[must_use]
    pub fn repeated_separator(separator: impl Into<String>) -> Self {
        Self::new(ErrorKind::RepeatedSeparator(separator.into()))
    }

    /// Creates an item not found error.
    #[must_use]
    pub fn item_not_found(query: impl Into<String>) -> Self {
        Self::new(ErrorKind::ItemNotFound(query.into()))
    }

    /// Creates an invalid command error.
    #[must_use]
    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCommand(message.into()))
    }

    /// Returns true if the process must not serve commands after this error.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ErrorKind {
    /// The dataset source could not be read or is malformed.
    #[error("failed to load dataset: {0}")]
    Load(String),

    /// The dataset source lacks one or more required headers.
    #[error("dataset is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Ranking criterion was not one of the recognized names.
    #[error("invalid criterion '{0}': use `demand` or `value`")]
    InvalidCriterion(String),

    /// Filter expression could not be parsed or evaluated.
    #[error("invalid filter expression `{expression}`: {message} (at offset {offset})")]
    InvalidFilterExpression {
        /// The expression as supplied by the caller.
        expression: String,
        /// Description of the problem.
        message: String,
        /// Byte offset into the expression where the problem was detected.
        offset: usize,
    },

    /// Trade expression did not contain the side separator.
    #[error("trade is missing the separator {0}")]
    MissingSeparator(String),

    /// Trade expression contained the side separator more than once.
    #[error("trade contains the separator {0} more than once")]
    RepeatedSeparator(String),

    /// No dataset row matched the query.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Command text could not be understood.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Internal or transport error (should not reach users in normal operation).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Returns true for errors that abort startup.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Load(_) | Self::MissingColumns(_))
    }

    /// Returns a stable machine-readable code for this kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Load(_) => "load_error",
            Self::MissingColumns(_) => "missing_columns",
            Self::InvalidCriterion(_) => "invalid_criterion",
            Self::InvalidFilterExpression { .. } => "invalid_filter_expression",
            Self::MissingSeparator(_) => "missing_separator",
            Self::RepeatedSeparator(_) => "repeated_separator",
            Self::ItemNotFound(_) => "item_not_found",
            Self::InvalidCommand(_) => "invalid_command",
            Self::Internal(_) => "internal",
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Dataset path or other source description.
    pub source: Option<String>,
    /// 1-based data row number (header excluded).
    pub row: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source description.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the row number.
    #[must_use]
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.row) {
            (Some(source), Some(row)) => write!(f, "at {source}, row {row}"),
            (Some(source), None) => write!(f, "at {source}"),
            (None, Some(row)) => write!(f, "at row {row}"),
            (None, None) => Ok(()),
        }
    }
}
