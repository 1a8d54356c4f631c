//! The dataset store.
//!
//! A [`DatasetStore`] is produced exactly once by [`normalize`], a pure
//! transform from a raw [`Table`], and is never mutated afterwards. Clones
//! share structure, so concurrent readers need no synchronization.

use std::collections::BTreeMap;

use im::Vector;
use tracing::{info, warn};
use valuetable_foundation::{Column, Error, ErrorContext, Result, parse_numeric};

use crate::record::ItemRecord;
use crate::schema::DatasetSchema;
use crate::source::{Table, TabularSource};

/// Summary of a dataset load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Data rows read from the source.
    pub rows_read: usize,
    /// Records kept in the store.
    pub records_kept: usize,
    /// 1-based row numbers dropped because their name was empty.
    pub skipped_rows: Vec<usize>,
    /// Number of absent (non-numeric) cells per numeric column.
    pub absent_cells: BTreeMap<Column, usize>,
}

/// Immutable, ordered collection of item records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DatasetStore {
    records: Vector<ItemRecord>,
}

impl DatasetStore {
    /// Loads a store from a tabular source.
    ///
    /// # Errors
    ///
    /// Returns a fatal error if the source is unreadable, malformed, or lacks a
    /// required column.
    pub fn load<S: TabularSource>(source: S) -> Result<Self> {
        Self::load_with_report(source).map(|(store, _)| store)
    }

    /// Loads a store and returns the load summary alongside it.
    ///
    /// # Errors
    ///
    /// Returns a fatal error if the source is unreadable, malformed, or lacks a
    /// required column.
    pub fn load_with_report<S: TabularSource>(source: S) -> Result<(Self, LoadReport)> {
        let description = source.describe();
        let table = source.read_table()?;
        let (records, report) = normalize(&table).map_err(|e| {
            if e.context.is_some() {
                e
            } else {
                e.with_context(ErrorContext::new().with_source(description.clone()))
            }
        })?;

        info!(
            source = %description,
            rows = report.rows_read,
            records = report.records_kept,
            skipped = report.skipped_rows.len(),
            "dataset loaded"
        );

        Ok((
            Self {
                records: records.into_iter().collect(),
            },
            report,
        ))
    }

    /// Builds a store directly from records.
    ///
    /// Names are trimmed and non-finite numbers become absent, matching what
    /// [`load`](Self::load) produces from CSV cells.
    ///
    /// # Errors
    ///
    /// Returns a `Load` error if any record has an empty name after trimming.
    pub fn from_records(records: impl IntoIterator<Item = ItemRecord>) -> Result<Self> {
        let mut out = Vector::new();
        for (index, mut record) in records.into_iter().enumerate() {
            record.name = record.name.trim().to_string();
            record.demand = record.demand.filter(|v| v.is_finite());
            record.value = record.value.filter(|v| v.is_finite());
            record.rate_of_change = record.rate_of_change.filter(|v| v.is_finite());
            if record.name.is_empty() {
                return Err(Error::load("item name must not be empty")
                    .with_context(ErrorContext::new().with_row(index + 1)));
            }
            out.push_back(record);
        }
        Ok(Self { records: out })
    }

    /// Returns every record in load order.
    #[must_use]
    pub fn all_records(&self) -> &Vector<ItemRecord> {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at a load-order index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ItemRecord> {
        self.records.get(index)
    }

    /// Iterates records in load order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemRecord> + '_ {
        self.records.iter()
    }
}

/// Normalizes a raw table into item records.
///
/// Trims headers and names, coerces numeric cells (non-numeric cells become
/// absent), and drops rows whose name is empty.
///
/// # Errors
///
/// Returns a `MissingColumns` error if a required header is absent.
pub fn normalize(table: &Table) -> Result<(Vec<ItemRecord>, LoadReport)> {
    let schema = DatasetSchema::from_headers(&table.headers)?;

    let mut report = LoadReport {
        rows_read: table.rows.len(),
        ..LoadReport::default()
    };
    for column in Column::NUMERIC {
        report.absent_cells.insert(column, 0);
    }

    let mut records = Vec::with_capacity(table.rows.len());
    for (index, row) in table.rows.iter().enumerate() {
        let name = schema.cell(row, Column::Name).trim();
        if name.is_empty() {
            warn!(row = index + 1, "skipping row with empty item name");
            report.skipped_rows.push(index + 1);
            continue;
        }

        let mut coerce = |column: Column| {
            let parsed = parse_numeric(schema.cell(row, column));
            if parsed.is_none() {
                *report.absent_cells.entry(column).or_default() += 1;
            }
            parsed
        };

        records.push(ItemRecord {
            name: name.to_string(),
            demand: coerce(Column::Demand),
            value: coerce(Column::Value),
            rate_of_change: coerce(Column::RateOfChange),
        });
    }

    report.records_kept = records.len();
    Ok((records, report))
}
