//! Tabular sources.
//!
//! A [`TabularSource`] produces a header row and data rows as raw text. The
//! store does all typing and trimming, so sources stay thin I/O wrappers.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use valuetable_foundation::{Error, ErrorContext, Result};

/// Raw tabular data: a header row followed by data rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    /// Header row, untrimmed.
    pub headers: Vec<String>,
    /// Data rows, untrimmed. Rows may be shorter or longer than the header.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given headers and no rows.
    #[must_use]
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a data row.
    #[must_use]
    pub fn with_row<S: Into<String>>(mut self, row: impl IntoIterator<Item = S>) -> Self {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }
}

/// A source of tabular item data.
pub trait TabularSource {
    /// Describes the source for logs and error context (e.g. a file path).
    fn describe(&self) -> String;

    /// Reads the whole table.
    ///
    /// # Errors
    ///
    /// Returns a `Load` error if the source is unreadable or malformed.
    fn read_table(self) -> Result<Table>
    where
        Self: Sized;
}

impl TabularSource for Table {
    fn describe(&self) -> String {
        "in-memory table".to_string()
    }

    fn read_table(self) -> Result<Table> {
        Ok(self)
    }
}

/// A CSV file or stream with a header row.
pub struct CsvSource<R> {
    reader: csv::Reader<R>,
    description: String,
}

impl CsvSource<File> {
    /// Opens a CSV file.
    ///
    /// # Errors
    ///
    /// Returns a `Load` error if the file cannot be opened.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let description = path.display().to_string();
        let reader = builder().from_path(path).map_err(|e| {
            Error::load(format!("cannot open dataset: {e}"))
                .with_context(ErrorContext::new().with_source(description.clone()))
        })?;
        Ok(Self {
            reader,
            description,
        })
    }
}

impl<R: Read> CsvSource<R> {
    /// Wraps any reader producing CSV text.
    #[must_use]
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: builder().from_reader(reader),
            description: "csv stream".to_string(),
        }
    }

    /// Overrides the description used in logs and errors.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl<R: Read> TabularSource for CsvSource<R> {
    fn describe(&self) -> String {
        self.description.clone()
    }

    fn read_table(mut self) -> Result<Table> {
        let context = || ErrorContext::new().with_source(self.description.clone());

        let headers: Vec<String> = self
            .reader
            .headers()
            .map_err(|e| Error::load(format!("cannot read header row: {e}")).with_context(context()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for (index, record) in self.reader.records().enumerate() {
            let record = record.map_err(|e| {
                Error::load(format!("malformed row: {e}")).with_context(context().with_row(index + 1))
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Table { headers, rows })
    }
}

fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true).trim(csv::Trim::None);
    builder
}
