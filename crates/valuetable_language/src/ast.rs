//! Abstract syntax tree for filter expressions.

use std::collections::BTreeSet;
use std::fmt;

use valuetable_foundation::Column;

use crate::span::Span;

/// One side of a comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    /// A numeric column of the current record.
    Field(Column),
    /// A numeric literal.
    Number(f64),
}

/// A comparison operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOp {
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `==`
    Eq,
    /// `!=`
    Ne,
}

impl CompareOp {
    /// Applies the operator to two numbers.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn apply(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Gt => lhs > rhs,
            Self::Lt => lhs < rhs,
            Self::Ge => lhs >= rhs,
            Self::Le => lhs <= rhs,
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
        }
    }

    /// Returns the operator's source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Eq => "==",
            Self::Ne => "!=",
        }
    }
}

/// A filter expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// `lhs op rhs`
    Compare {
        /// Left operand.
        lhs: Operand,
        /// Operator.
        op: CompareOp,
        /// Right operand.
        rhs: Operand,
        /// Source span of the whole comparison.
        span: Span,
    },
    /// Conjunction.
    And(Box<Expr>, Box<Expr>),
    /// Disjunction.
    Or(Box<Expr>, Box<Expr>),
    /// Negation.
    Not(Box<Expr>),
}

impl Expr {
    /// Returns the set of columns this expression reads.
    #[must_use]
    pub fn columns(&self) -> BTreeSet<Column> {
        let mut out = BTreeSet::new();
        self.collect_columns(&mut out);
        out
    }

    fn collect_columns(&self, out: &mut BTreeSet<Column>) {
        match self {
            Self::Compare { lhs, rhs, .. } => {
                for operand in [lhs, rhs] {
                    if let Operand::Field(column) = operand {
                        out.insert(*column);
                    }
                }
            }
            Self::And(a, b) | Self::Or(a, b) => {
                a.collect_columns(out);
                b.collect_columns(out);
            }
            Self::Not(inner) => inner.collect_columns(out),
        }
    }

    /// Binding strength used to parenthesize when printing.
    const fn precedence(&self) -> u8 {
        match self {
            Self::Or(..) => 1,
            Self::And(..) => 2,
            Self::Not(_) => 3,
            Self::Compare { .. } => 4,
        }
    }

    fn fmt_child(&self, child: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if child.precedence() < self.precedence() {
            write!(f, "({child})")
        } else {
            write!(f, "{child}")
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(column) => match column.alias() {
                Some(alias) => f.write_str(alias),
                None => write!(f, "`{}`", column.header()),
            },
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare { lhs, op, rhs, .. } => write!(f, "{lhs} {} {rhs}", op.symbol()),
            Self::And(a, b) => {
                self.fmt_child(a, f)?;
                f.write_str(" and ")?;
                self.fmt_child(b, f)
            }
            Self::Or(a, b) => {
                self.fmt_child(a, f)?;
                f.write_str(" or ")?;
                self.fmt_child(b, f)
            }
            Self::Not(inner) => {
                f.write_str("not ")?;
                self.fmt_child(inner, f)
            }
        }
    }
}
