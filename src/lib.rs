//! # Proposition
//!
//! A small interpreter for propositional logic. Each input line is one statement:
//!
//! - `table <expr>` prints the truth table of the expression
//! - `simplify <expr>` rewrites the expression with algebraic identities until nothing
//!   more changes
//!
//! ## Overview
//!
//! Text flows through a fixed pipeline:
//!
//! 1. [`lexer`] splits the line into classified tokens
//! 2. [`parser`] builds a [`Statement`] holding an [`Expression`] tree
//! 3. [`TruthTable`] enumerates every assignment of the free identifiers, or
//!    [`Simplifier`] rewrites the tree bottom-up to a fixpoint
//!
//! [`Session`] ties the steps together for one line, and [`repl`] runs a session over
//! any line source.
//!
//! ## Syntax
//!
//! | Syntax            | Meaning                  |
//! |-------------------|--------------------------|
//! | `a`, `foo_1`      | identifier               |
//! | `1`, `0`          | true, false              |
//! | `!a`              | negation                 |
//! | `a + b`, `a \| b` | disjunction              |
//! | `a * b`, `a & b`  | conjunction              |
//! | `a -> b`          | implication              |
//! | `a <-> b`         | biconditional            |
//! | `( ... )`         | grouping                 |
//!
//! All binary connectives share one precedence level and associate to the left, so
//! `a + b * c` reads as `(a + b) * c`. Use parentheses to group differently.
//!
//! ## Truth Tables
//!
//! ```
//! use proposition::{parse_statement, TruthTable};
//!
//! # fn main() -> proposition::Result<()> {
//! let stmt = parse_statement("table a -> b")?;
//! let table = TruthTable::generate(stmt.expression());
//!
//! let results: Vec<bool> = table.rows().iter().map(|row| row.result()).collect();
//! assert_eq!(results, [true, false, true, true]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Simplification
//!
//! ```
//! use proposition::{parse_statement, Simplifier};
//!
//! # fn main() -> proposition::Result<()> {
//! let simplifier = Simplifier::new();
//!
//! let stmt = parse_statement("simplify !(a * b)")?;
//! assert_eq!(simplifier.simplify(stmt.expression()).literal(), "(!a + !b)");
//!
//! let stmt = parse_statement("simplify a -> a")?;
//! assert_eq!(simplifier.simplify(stmt.expression()).literal(), "1");
//! # Ok(())
//! # }
//! ```
//!
//! ## Sessions
//!
//! ```
//! use proposition::{Config, Error, Session};
//!
//! let session = Session::new(Config {
//!     max_table_variables: 2,
//!     ..Default::default()
//! });
//!
//! assert_eq!(session.execute("simplify a + !a").unwrap().to_string(), "1");
//! assert!(matches!(
//!     session.execute("table a + b + c"),
//!     Err(Error::TooManyVariables { count: 3, limit: 2 })
//! ));
//! ```
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade: rule firings at `trace`, pass counts
//! and session activity at `debug`. Nothing is printed unless the application installs
//! a logger; the `proposition` binary uses `env_logger`.

// Public modules
pub mod config;
pub mod error;
pub mod expression;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod session;
pub mod simplify;
pub mod table;

// Re-export high-level public API
pub use config::Config;
pub use error::{Error, LexError, ParseError, Result};
pub use expression::{evaluate, Action, Expression, PrefixOperator, Statement};
pub use parser::{parse_statement, Parser};
pub use session::{Outcome, Session};
pub use simplify::{simplify, Rule, Simplifier};
pub use table::{TruthTable, TruthTableRow};
