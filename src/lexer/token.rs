//! Token types produced by the lexer

use std::fmt;

/// Classification of a lexed token
///
/// The set is closed: every character sequence of an input line maps to exactly one
/// of these kinds, with [`TokenKind::Illegal`] catching anything the grammar does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `!`
    Bang,
    /// `*` or `&`
    And,
    /// `+` or `|`
    Or,
    /// `->`
    Implication,
    /// `<->`
    Bicondition,
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `1` or `true`
    True,
    /// `0` or `false`
    False,
    /// A propositional variable name
    Ident,
    /// The `table` keyword
    Table,
    /// The `simplify` keyword
    Simplify,
    /// The `introduce` keyword (reserved, no statement uses it yet)
    Introduce,
    /// Any character sequence the lexer does not recognise
    Illegal,
}

impl TokenKind {
    /// Look up the keyword kind for an identifier run, if it is reserved
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "table" => Some(TokenKind::Table),
            "simplify" => Some(TokenKind::Simplify),
            "introduce" => Some(TokenKind::Introduce),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::Bang => "bang",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Implication => "implication",
            TokenKind::Bicondition => "bicondition",
            TokenKind::Eq => "eq",
            TokenKind::Neq => "neq",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Ident => "ident",
            TokenKind::Table => "table",
            TokenKind::Simplify => "simplify",
            TokenKind::Introduce => "introduce",
            TokenKind::Illegal => "illegal",
        };
        f.write_str(name)
    }
}

/// A single classified token
///
/// `start` and `length` count characters, not bytes, so positions line up with what
/// a user sees on screen even for non-ASCII identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Classification of the token
    pub kind: TokenKind,
    /// The source text the token was built from
    pub literal: String,
    /// Character offset of the first character
    pub start: usize,
    /// Number of characters covered
    pub length: usize,
}

impl Token {
    pub(crate) fn new(
        kind: TokenKind,
        literal: impl Into<String>,
        start: usize,
        length: usize,
    ) -> Self {
        Token {
            kind,
            literal: literal.into(),
            start,
            length,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` at {}", self.kind, self.literal, self.start)
    }
}
