//! Error types for lexing, parsing and executing statements
//!
//! Evaluation and simplification are total over well-formed trees, so every failure a
//! caller can see originates from reading the input line, or from the session refusing
//! a truth table that would be too large.

use std::io;
use thiserror::Error;

/// Errors raised while scanning a line into tokens
///
/// By default illegal characters are deferred to the parser; this error only appears
/// when the lexer runs in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character sequence that is not part of the grammar
    #[error("illegal character {literal:?} at position {position}")]
    IllegalCharacter {
        /// The offending text
        literal: String,
        /// Character offset in the line
        position: usize,
    },
}

/// Aggregate of every error collected during one parse attempt
///
/// The parser keeps going after locally recoverable problems, so a single line can
/// produce several messages. They are kept in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parsing failed, encountered the following errors:\n{}", .errors.join("\n"))]
pub struct ParseError {
    errors: Vec<String>,
}

impl ParseError {
    pub(crate) fn new(errors: Vec<String>) -> Self {
        ParseError { errors }
    }

    /// Build an aggregate error, or `None` when nothing went wrong
    pub fn from_messages(errors: Vec<String>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(ParseError { errors })
        }
    }

    /// The individual messages, in the order they were recorded
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// The main error type of the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Lexing failed (strict mode only)
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Parsing failed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A truth table was requested for more variables than the session allows
    #[error("truth table over {count} variables exceeds the limit of {limit}")]
    TooManyVariables {
        /// Distinct identifiers in the expression
        count: usize,
        /// The configured ceiling
        limit: usize,
    },
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_lists_every_message() {
        let err = ParseError::from_messages(vec![
            "unexpected EOF".to_string(),
            "no prefix parse function for $".to_string(),
        ])
        .unwrap();
        let msg = err.to_string();
        assert!(msg.starts_with("parsing failed"));
        assert!(msg.contains("\nunexpected EOF"));
        assert!(msg.ends_with("no prefix parse function for $"));
        assert_eq!(err.errors().len(), 2);
    }

    #[test]
    fn test_empty_parse_error_is_none() {
        assert!(ParseError::from_messages(Vec::new()).is_none());
    }

    #[test]
    fn test_lex_error_display() {
        let err = LexError::IllegalCharacter {
            literal: "$".to_string(),
            position: 3,
        };
        assert_eq!(err.to_string(), "illegal character \"$\" at position 3");
    }

    #[test]
    fn test_error_to_io_error() {
        let err = Error::TooManyVariables { count: 20, limit: 12 };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
        assert!(io_err.to_string().contains("limit of 12"));
    }

    #[test]
    fn test_transparent_variants() {
        let parse = ParseError::from_messages(vec!["unexpected token x".to_string()]).unwrap();
        let err: Error = parse.clone().into();
        assert_eq!(err.to_string(), parse.to_string());
    }
}
