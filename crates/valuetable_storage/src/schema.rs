//! Dataset schema.
//!
//! Header text is trimmed exactly once, here, when the schema is built. Column
//! positions are resolved up front so row normalization never re-reads headers.

use valuetable_foundation::{Column, Error, Result};

/// Positions of the required columns within a source's header row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetSchema {
    /// Trimmed header row as read from the source.
    headers: Vec<String>,
    /// Index of each column in `Column::ALL` order.
    positions: [usize; 4],
}

impl DatasetSchema {
    /// Builds a schema from a raw header row.
    ///
    /// When a header appears twice the first occurrence is used.
    ///
    /// # Errors
    ///
    /// Returns a `MissingColumns` error naming every required header that is
    /// absent after trimming.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let headers: Vec<String> = headers
            .iter()
            .map(|h| h.as_ref().trim().to_string())
            .collect();

        let mut positions = [0usize; 4];
        let mut missing = Vec::new();
        for (slot, column) in Column::ALL.into_iter().enumerate() {
            match headers.iter().position(|h| h == column.header()) {
                Some(index) => positions[slot] = index,
                None => missing.push(column.header().to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(Error::missing_columns(missing));
        }

        Ok(Self { headers, positions })
    }

    /// Returns the trimmed header row.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the index of a column in each source row.
    #[must_use]
    pub fn position(&self, column: Column) -> usize {
        let slot = Column::ALL
            .iter()
            .position(|c| *c == column)
            .unwrap_or_default();
        self.positions[slot]
    }

    /// Returns the cell for a column, or an empty string when the row is short.
    #[must_use]
    pub fn cell<'a, S: AsRef<str>>(&self, row: &'a [S], column: Column) -> &'a str {
        row.get(self.position(column)).map_or("", AsRef::as_ref)
    }
}
