//! Filter evaluation.
//!
//! A comparison that reads an absent cell is neither true nor false but
//! [`Truth::Unknown`]. Unknown propagates through the logical operators with
//! Kleene semantics, and only rows that evaluate to [`Truth::True`] match, so
//! absent cells exclude a row instead of failing the filter.

use valuetable_foundation::Result;
use valuetable_storage::ItemRecord;

use crate::ast::{Expr, Operand};
use crate::parser::parse;

/// Three-valued truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Truth {
    /// Definitely true.
    True,
    /// Definitely false.
    False,
    /// Depends on an absent cell.
    Unknown,
}

impl Truth {
    /// Kleene conjunction.
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::False, _) | (_, Self::False) => Self::False,
            (Self::True, Self::True) => Self::True,
            _ => Self::Unknown,
        }
    }

    /// Kleene disjunction.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::True, _) | (_, Self::True) => Self::True,
            (Self::False, Self::False) => Self::False,
            _ => Self::Unknown,
        }
    }

    /// Kleene negation.
    #[must_use]
    pub const fn not(self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::Unknown => Self::Unknown,
        }
    }
}

impl From<bool> for Truth {
    fn from(b: bool) -> Self {
        if b { Self::True } else { Self::False }
    }
}

impl Expr {
    /// Evaluates this expression against one record.
    #[must_use]
    pub fn evaluate(&self, record: &ItemRecord) -> Truth {
        match self {
            Self::Compare { lhs, op, rhs, .. } => {
                match (resolve(*lhs, record), resolve(*rhs, record)) {
                    (Some(a), Some(b)) => op.apply(a, b).into(),
                    _ => Truth::Unknown,
                }
            }
            Self::And(a, b) => a.evaluate(record).and(b.evaluate(record)),
            Self::Or(a, b) => a.evaluate(record).or(b.evaluate(record)),
            Self::Not(inner) => inner.evaluate(record).not(),
        }
    }
}

fn resolve(operand: Operand, record: &ItemRecord) -> Option<f64> {
    match operand {
        Operand::Field(column) => record.get(column),
        Operand::Number(n) => Some(n),
    }
}

/// A compiled filter expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    source: String,
    expr: Expr,
}

impl Filter {
    /// Compiles filter source.
    ///
    /// # Errors
    /// Returns an `InvalidFilterExpression` error echoing the source if it
    /// cannot be parsed.
    pub fn compile(source: &str) -> Result<Self> {
        let expr = parse(source)?;
        Ok(Self {
            source: source.to_string(),
            expr,
        })
    }

    /// Returns the source text as supplied.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the parsed expression.
    #[must_use]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Returns true if the record definitely satisfies the expression.
    #[must_use]
    pub fn matches(&self, record: &ItemRecord) -> bool {
        self.expr.evaluate(record) == Truth::True
    }

    /// Returns matching records, preserving input order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a ItemRecord>
    where
        I: IntoIterator<Item = &'a ItemRecord>,
    {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}
