//! Lexer, parser, and evaluator for Valuetable filter expressions.
//!
//! Filter expressions are small boolean formulas over the numeric columns:
//!
//! ```text
//! demand >= 8 and (value > 100 or rate_of_change > 0.5)
//! ```
//!
//! Column aliases are recognized by the lexer as whole identifier tokens, so
//! an alias can never be rewritten inside another word or a literal.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of filter source
//! - [`Parser`] - Parsing tokens into an [`Expr`]
//! - [`Filter`] - A compiled expression that evaluates against item records

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;

pub use ast::{CompareOp, Expr, Operand};
pub use eval::{Filter, Truth};
pub use lexer::Lexer;
pub use parser::{Parser, parse};
pub use span::Span;
pub use token::{Token, TokenKind};
