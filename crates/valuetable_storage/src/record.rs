//! Item records.

use valuetable_foundation::Column;

/// One row of the item dataset.
///
/// Numeric fields are `None` when the source cell did not hold a number.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRecord {
    /// Display name and lookup key, trimmed. Not guaranteed unique.
    pub name: String,
    /// Demand score out of 10.
    pub demand: Option<f64>,
    /// Trade value.
    pub value: Option<f64>,
    /// Rate of change of the value.
    pub rate_of_change: Option<f64>,
}

impl ItemRecord {
    /// Creates a record with the given name and no numeric data.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            demand: None,
            value: None,
            rate_of_change: None,
        }
    }

    /// Sets the demand score.
    #[must_use]
    pub fn with_demand(mut self, demand: f64) -> Self {
        self.demand = Some(demand);
        self
    }

    /// Sets the value.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the rate of change.
    #[must_use]
    pub fn with_rate_of_change(mut self, rate: f64) -> Self {
        self.rate_of_change = Some(rate);
        self
    }

    /// Returns the numeric cell for a column, or `None` for absent cells and
    /// for the name column.
    #[must_use]
    pub fn get(&self, column: Column) -> Option<f64> {
        match column {
            Column::Name => None,
            Column::Demand => self.demand,
            Column::Value => self.value,
            Column::RateOfChange => self.rate_of_change,
        }
    }
}
