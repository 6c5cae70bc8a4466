//! Line-at-a-time statement execution
//!
//! A [`Session`] turns one line of text into an [`Outcome`]: the truth table of a
//! `table` statement or the simplified form of a `simplify` statement. It owns the
//! [`Config`] and a [`Simplifier`] built once, so a REPL can feed it line after line.
//!
//! # Examples
//!
//! ```
//! use proposition::{Config, Outcome, Session};
//!
//! let session = Session::new(Config::default());
//!
//! let outcome = session.execute("simplify a -> a").unwrap();
//! assert_eq!(outcome.to_string(), "1");
//!
//! let outcome = session.execute("table p * q").unwrap();
//! assert!(matches!(outcome, Outcome::Table(ref t) if t.rows().len() == 4));
//! ```

use crate::config::Config;
use crate::error::{Error, Result};
use crate::expression::{Expression, Statement};
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::simplify::Simplifier;
use crate::table::TruthTable;
use std::fmt;

/// Result of executing one statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The truth table of a `table` statement
    Table(TruthTable),
    /// The rewritten expression of a `simplify` statement
    Simplified(Expression),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Table(table) => write!(f, "{}", table),
            Outcome::Simplified(expression) => write!(f, "{}", expression),
        }
    }
}

/// Executes statements under one configuration
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    simplifier: Simplifier,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Session {
    /// Create a session with the default rule set
    pub fn new(config: Config) -> Self {
        Session {
            config,
            simplifier: Simplifier::new(),
        }
    }

    /// The configuration this session runs under
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lex, parse and run a single line
    ///
    /// # Errors
    ///
    /// - [`Error::Lex`] for an illegal character when the session is strict
    /// - [`Error::Parse`] when the line is not a well-formed statement
    /// - [`Error::TooManyVariables`] when a table would exceed
    ///   [`Config::max_table_variables`]
    pub fn execute(&self, line: &str) -> Result<Outcome> {
        let mut lexer = Lexer::new(line).strict(self.config.strict);
        lexer.tokenize()?;
        let statement = Parser::new(&lexer).parse()?;

        let outcome = match statement {
            Statement::Table(expression) => {
                let count = expression.identifiers().len();
                let limit = self.config.max_table_variables;
                if count > limit {
                    return Err(Error::TooManyVariables { count, limit });
                }
                Outcome::Table(TruthTable::generate(&expression))
            }
            Statement::Simplify(expression) => {
                Outcome::Simplified(self.simplifier.simplify(&expression))
            }
        };

        log::debug!("executed {:?}", line);
        Ok(outcome)
    }

    /// Render an outcome for display, colouring tables when configured to
    pub fn render(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Table(table) => table.render(self.config.colour),
            Outcome::Simplified(expression) => expression.literal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Action;

    fn plain() -> Session {
        Session::new(Config {
            colour: false,
            ..Default::default()
        })
    }

    #[test]
    fn test_simplify_outcome() {
        let outcome = plain().execute("simplify !(a * b)").unwrap();
        let expected = Expression::binary(
            Action::Or,
            Expression::not(Expression::identifier("a")),
            Expression::not(Expression::identifier("b")),
        );
        assert_eq!(outcome, Outcome::Simplified(expected));
        assert_eq!(outcome.to_string(), "(!a + !b)");
    }

    #[test]
    fn test_table_outcome() {
        let session = plain();
        let outcome = session.execute("table a -> b").unwrap();
        match &outcome {
            Outcome::Table(table) => {
                assert_eq!(table.variables(), ["a", "b"]);
                let results: Vec<bool> = table.rows().iter().map(|r| r.result()).collect();
                assert_eq!(results, vec![true, false, true, true]);
            }
            other => panic!("expected a table, got {:?}", other),
        }
        assert_eq!(session.render(&outcome), outcome.to_string());
    }

    #[test]
    fn test_variable_ceiling() {
        let session = Session::new(Config {
            max_table_variables: 2,
            ..Default::default()
        });
        assert!(session.execute("table a + b").is_ok());

        let err = session.execute("table a + b + c").unwrap_err();
        assert!(matches!(err, Error::TooManyVariables { count: 3, limit: 2 }));

        // Repeated identifiers count once, and simplify is never limited
        assert!(session.execute("table a + b + a * b").is_ok());
        assert!(session.execute("simplify a + b + c + d").is_ok());
    }

    #[test]
    fn test_parse_errors_pass_through() {
        let err = plain().execute("table a +").unwrap_err();
        match err {
            Error::Parse(parse) => assert_eq!(parse.errors(), ["unexpected EOF"]),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_session_rejects_illegal_characters() {
        let lenient = plain().execute("table a $ b").unwrap_err();
        assert!(matches!(lenient, Error::Parse(_)));

        let strict = Session::new(Config {
            strict: true,
            ..Default::default()
        });
        let err = strict.execute("table a $ b").unwrap_err();
        assert!(matches!(err, Error::Lex(_)));
        assert_eq!(err.to_string(), "illegal character \"$\" at position 8");
    }

    #[test]
    fn test_render_honours_colour() {
        let coloured = Session::default();
        let outcome = coloured.execute("table a").unwrap();
        assert!(coloured.render(&outcome).contains('\x1b'));
        assert!(!plain().render(&outcome).contains('\x1b'));
    }

    #[test]
    fn test_session_is_reusable_after_errors() {
        let session = plain();
        assert!(session.execute("nonsense").is_err());
        assert_eq!(session.execute("simplify !!x").unwrap().to_string(), "x");
    }
}
