//! Token types for filter expressions.
//!
//! Tokens are the output of the lexer and input to the parser.

use valuetable_foundation::Column;

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

/// Token types for filter expressions.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,

    // Comparison operators
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,

    // Logical operators
    /// `and`, `&`, or `&&`
    And,
    /// `or`, `|`, or `||`
    Or,
    /// `not`, `~`, or `!`
    Not,

    // Operands
    /// Numeric literal like `8` or `-0.5`
    Number(f64),
    /// A column, written as an alias (`value`) or a back-quoted header
    Field(Column),
    /// An identifier that names no column
    Ident(String),

    // Meta
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true if this token is a comparison operator.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Gt | Self::Lt | Self::Ge | Self::Le | Self::EqEq | Self::NotEq
        )
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Gt => "'>'",
            Self::Lt => "'<'",
            Self::Ge => "'>='",
            Self::Le => "'<='",
            Self::EqEq => "'=='",
            Self::NotEq => "'!='",
            Self::And => "'and'",
            Self::Or => "'or'",
            Self::Not => "'not'",
            Self::Number(_) => "number",
            Self::Field(_) => "column",
            Self::Ident(_) => "identifier",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
