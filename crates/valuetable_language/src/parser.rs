//! Parser for filter expressions.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expr       := and_expr ( OR and_expr )*
//! and_expr   := not_expr ( AND not_expr )*
//! not_expr   := NOT not_expr | primary
//! primary    := '(' expr ')' | comparison
//! comparison := operand ( '>' | '<' | '>=' | '<=' | '==' | '!=' ) operand
//! operand    := column | number
//! ```

use valuetable_foundation::{Column, Error, Result};

use crate::ast::{CompareOp, Expr, Operand};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Maximum nesting of parentheses and `not`.
const MAX_DEPTH: usize = 64;

/// Maximum number of comparisons in one expression.
const MAX_TERMS: usize = 256;

/// Parser for filter source.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Source text (echoed back in errors).
    source: &'src str,
    /// Current nesting depth.
    depth: usize,
    /// Comparisons parsed so far.
    terms: usize,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            source,
            depth: 0,
            terms: 0,
        }
    }

    /// Parses a complete expression, requiring all input to be consumed.
    ///
    /// # Errors
    /// Returns an `InvalidFilterExpression` error carrying the source text.
    pub fn parse(&mut self) -> Result<Expr> {
        if self.current.kind == TokenKind::Eof {
            return Err(self.error("empty filter expression"));
        }
        let expr = self.parse_or()?;
        if self.current.kind != TokenKind::Eof {
            return Err(self.unexpected("end of expression"));
        }
        Ok(expr)
    }

    fn parse_or(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_and()?;
        while self.current.kind == TokenKind::Or {
            self.advance();
            let rhs = self.parse_and()?;
            lhs = Expr::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_not()?;
        while self.current.kind == TokenKind::And {
            self.advance();
            let rhs = self.parse_not()?;
            lhs = Expr::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_not(&mut self) -> Result<Expr> {
        if self.current.kind == TokenKind::Not {
            self.advance();
            self.enter()?;
            let inner = self.parse_not();
            self.depth -= 1;
            return Ok(Expr::Not(Box::new(inner?)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        if self.current.kind == TokenKind::LParen {
            let open = self.current.span;
            self.advance();
            self.enter()?;
            let inner = self.parse_or();
            self.depth -= 1;
            let inner = inner?;
            if self.current.kind != TokenKind::RParen {
                return Err(self.error_at(open, "unbalanced '(': missing ')'"));
            }
            self.advance();
            return Ok(inner);
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Expr> {
        if self.terms >= MAX_TERMS {
            return Err(self.error("expression has too many terms"));
        }
        self.terms += 1;
        let start = self.current.span;
        let lhs = self.parse_operand()?;

        let op = match self.current.kind {
            TokenKind::Gt => CompareOp::Gt,
            TokenKind::Lt => CompareOp::Lt,
            TokenKind::Ge => CompareOp::Ge,
            TokenKind::Le => CompareOp::Le,
            TokenKind::EqEq => CompareOp::Eq,
            TokenKind::NotEq => CompareOp::Ne,
            _ => return Err(self.unexpected("a comparison operator")),
        };
        self.advance();

        let end = self.current.span;
        let rhs = self.parse_operand()?;

        Ok(Expr::Compare {
            lhs,
            op,
            rhs,
            span: start.to(end),
        })
    }

    fn parse_operand(&mut self) -> Result<Operand> {
        let operand = match &self.current.kind {
            TokenKind::Number(n) => Operand::Number(*n),
            TokenKind::Field(Column::Name) => {
                return Err(self.error("the item name column cannot be compared numerically"));
            }
            TokenKind::Field(column) => Operand::Field(*column),
            TokenKind::Ident(name) => {
                let message = format!(
                    "unknown column '{name}': use demand, value, or rate_of_change"
                );
                return Err(self.error(&message));
            }
            TokenKind::Error(message) => {
                let message = message.clone();
                return Err(self.error(&message));
            }
            _ => return Err(self.unexpected("a column or number")),
        };
        self.advance();
        Ok(operand)
    }

    /// Tracks nesting so adversarial input cannot exhaust the stack.
    fn enter(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("expression is nested too deeply"));
        }
        self.depth += 1;
        Ok(())
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Creates an error for an unexpected current token.
    fn unexpected(&self, expected: &str) -> Error {
        let found = match &self.current.kind {
            TokenKind::Error(message) => message.clone(),
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.current.text(self.source)),
        };
        self.error(&format!("expected {expected}, found {found}"))
    }

    /// Creates an error at the current token.
    fn error(&self, message: &str) -> Error {
        self.error_at(self.current.span, message)
    }

    /// Creates an error at a specific span.
    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::invalid_filter(self.source, message, span.start)
    }
}

/// Parses filter source into an expression.
///
/// # Errors
/// Returns an `InvalidFilterExpression` error if the source cannot be parsed.
pub fn parse(source: &str) -> Result<Expr> {
    Parser::new(source).parse()
}
