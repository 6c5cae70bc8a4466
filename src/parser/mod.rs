//! Precedence-climbing parser for propositional logic statements
//!
//! Every line is one statement, `table <expr>` or `simplify <expr>`. Expressions are
//! parsed Pratt-style: each [`TokenKind`] may have a prefix handler (how to start an
//! operand) and an infix handler (how to extend one), looked up in per-parser
//! registries that callers can extend with [`Parser::register_prefix`] and
//! [`Parser::register_infix`].
//!
//! # Precedence
//!
//! All four binary connectives share one binding power, so chains associate strictly
//! to the left and there is no implicit AND-over-OR grouping:
//!
//! ```
//! use proposition::parse_statement;
//!
//! let stmt = parse_statement("table a + b * c").unwrap();
//! assert_eq!(stmt.to_string(), "table ((a + b) * c)");
//!
//! // Negation binds tighter than any connective
//! let stmt = parse_statement("simplify !a + b").unwrap();
//! assert_eq!(stmt.to_string(), "simplify (!a + b)");
//! ```
//!
//! # Errors
//!
//! Errors are collected rather than raised at the first problem; [`Parser::parse`]
//! returns them together as one [`ParseError`].

use crate::error::{self, ParseError};
use crate::expression::{Action, Expression, PrefixOperator, Statement};
use crate::lexer::{Lexer, Token, TokenKind};
use std::collections::HashMap;

/// Builds the left operand of an expression from the current token
pub type PrefixParseFn = fn(&mut Parser<'_>) -> Option<Expression>;

/// Extends an already parsed left operand; the current token is the operator
pub type InfixParseFn = fn(&mut Parser<'_>, Expression) -> Option<Expression>;

/// Binding power of a token
///
/// Only the ordering matters. `Infix` sits below `Prefix` so that a negation's operand
/// stops before the next connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Binds nothing; also the level a whole statement expression is parsed at
    Lowest,
    /// Shared by every binary connective
    Infix,
    /// Operand level of `!`
    Prefix,
}

impl Precedence {
    /// Default binding power of a token kind
    pub fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Or | TokenKind::Implication | TokenKind::And | TokenKind::Bicondition => {
                Precedence::Infix
            }
            TokenKind::Bang => Precedence::Prefix,
            _ => Precedence::Lowest,
        }
    }
}

/// Lex and parse one line with the default grammar
///
/// # Examples
///
/// ```
/// use proposition::{parse_statement, Statement};
///
/// let stmt = parse_statement("table (a + b)").unwrap();
/// assert!(matches!(stmt, Statement::Table(_)));
/// assert_eq!(stmt.expression().literal(), "(a + b)");
///
/// assert!(parse_statement("a + b").is_err());
/// ```
pub fn parse_statement(text: &str) -> error::Result<Statement> {
    let mut lexer = Lexer::new(text);
    lexer.tokenize()?;
    let statement = Parser::new(&lexer).parse()?;
    Ok(statement)
}

/// Parser over the tokens of one lexed line
pub struct Parser<'a> {
    lexer: &'a Lexer,
    /// Index of the current token, `None` before the first advance
    position: Option<usize>,
    prefix_fns: HashMap<TokenKind, PrefixParseFn>,
    infix_fns: HashMap<TokenKind, InfixParseFn>,
    precedences: HashMap<TokenKind, Precedence>,
    errors: Vec<String>,
}

impl<'a> Parser<'a> {
    /// Create a parser with the default grammar registered
    ///
    /// The lexer must already be tokenized; otherwise [`parse`](Parser::parse) fails.
    pub fn new(lexer: &'a Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            position: None,
            prefix_fns: HashMap::new(),
            infix_fns: HashMap::new(),
            precedences: HashMap::new(),
            errors: Vec::new(),
        };

        parser.register_prefix(TokenKind::Ident, parse_identifier);
        parser.register_prefix(TokenKind::True, parse_boolean);
        parser.register_prefix(TokenKind::False, parse_boolean);
        parser.register_prefix(TokenKind::Bang, parse_prefix_expression);
        parser.register_prefix(TokenKind::LParen, parse_group_expression);

        for kind in [
            TokenKind::Or,
            TokenKind::Implication,
            TokenKind::Bicondition,
            TokenKind::And,
        ] {
            parser.register_infix(kind, Precedence::of(kind), parse_infix_expression);
        }

        parser
    }

    /// Register (or replace) the prefix handler for a token kind
    pub fn register_prefix(&mut self, kind: TokenKind, f: PrefixParseFn) {
        self.prefix_fns.insert(kind, f);
    }

    /// Register (or replace) the infix handler and binding power for a token kind
    pub fn register_infix(&mut self, kind: TokenKind, precedence: Precedence, f: InfixParseFn) {
        self.infix_fns.insert(kind, f);
        self.precedences.insert(kind, precedence);
    }

    /// Parse the single statement of the line
    pub fn parse(&mut self) -> Result<Statement, ParseError> {
        if !self.lexer.is_tokenized() {
            self.error("tokenizer must be tokenized before parsing");
            return Err(self.take_errors());
        }

        self.advance();
        let statement = match self.current() {
            None => {
                self.error("unexpected EOF");
                None
            }
            Some(token) => match token.kind {
                TokenKind::Table => self.parse_statement_expression().map(Statement::Table),
                TokenKind::Simplify => self.parse_statement_expression().map(Statement::Simplify),
                _ => {
                    self.error(format!("unexpected token {}", token.literal));
                    None
                }
            },
        };

        match statement {
            Some(statement) if self.errors.is_empty() => Ok(statement),
            _ => Err(self.take_errors()),
        }
    }

    /// Parse an expression whose operators bind tighter than `precedence`
    ///
    /// On entry the current token is the first token of the expression. On success the
    /// current token is the last token consumed.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(token) = self.current() else {
            self.error("unexpected EOF");
            return None;
        };

        let Some(prefix) = self.prefix_fns.get(&token.kind).copied() else {
            self.error(format!("no prefix parse function for {}", token.literal));
            return None;
        };

        let mut left = prefix(self)?;

        while let Some(next) = self.peek() {
            if precedence >= self.precedence(next.kind) {
                break;
            }
            let Some(infix) = self.infix_fns.get(&next.kind).copied() else {
                break;
            };
            self.advance();
            left = infix(self, left)?;
        }

        Some(left)
    }

    /// The token being parsed
    pub fn current(&self) -> Option<&'a Token> {
        let lexer: &'a Lexer = self.lexer;
        self.position.and_then(|i| lexer.tokens().get(i))
    }

    /// The token after the current one
    pub fn peek(&self) -> Option<&'a Token> {
        let lexer: &'a Lexer = self.lexer;
        let next = self.position.map_or(0, |i| i + 1);
        lexer.tokens().get(next)
    }

    /// Move to the next token
    pub fn advance(&mut self) {
        self.position = Some(self.position.map_or(0, |i| i + 1));
    }

    /// Record an error message; parsing continues
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn precedence(&self, kind: TokenKind) -> Precedence {
        self.precedences
            .get(&kind)
            .copied()
            .unwrap_or_else(|| Precedence::of(kind))
    }

    fn take_errors(&mut self) -> ParseError {
        let errors = std::mem::take(&mut self.errors);
        ParseError::from_messages(errors)
            .unwrap_or_else(|| ParseError::new(vec!["unexpected EOF".to_string()]))
    }

    fn parse_statement_expression(&mut self) -> Option<Expression> {
        if self.peek().is_none() {
            self.error("unexpected EOF");
            return None;
        }
        self.advance();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_end();
        Some(expression)
    }

    /// A statement is one expression; anything after it is reported
    fn expect_end(&mut self) {
        let Some(token) = self.peek() else {
            return;
        };
        if token.kind != TokenKind::RParen && !self.infix_fns.contains_key(&token.kind) {
            self.error(format!("no infix parse function for {}", token.literal));
        } else {
            self.error(format!("unexpected token {}", token.literal));
        }
    }
}

fn parse_identifier(parser: &mut Parser<'_>) -> Option<Expression> {
    let token = parser.current()?;
    Some(Expression::Identifier(token.literal.clone()))
}

fn parse_boolean(parser: &mut Parser<'_>) -> Option<Expression> {
    let token = parser.current()?;
    Some(Expression::Boolean(token.kind == TokenKind::True))
}

fn parse_prefix_expression(parser: &mut Parser<'_>) -> Option<Expression> {
    let token = parser.current()?;
    let Some(operator) = PrefixOperator::from_operator(&token.literal) else {
        parser.error(format!("no operator for prefix {}", token.literal));
        return None;
    };

    parser.advance();
    let operand = parser.parse_expression(Precedence::Prefix)?;
    Some(Expression::Prefix {
        operator,
        operand: Box::new(operand),
    })
}

fn parse_group_expression(parser: &mut Parser<'_>) -> Option<Expression> {
    parser.advance();
    let expression = parser.parse_expression(Precedence::Lowest)?;

    match parser.peek() {
        Some(token) if token.kind == TokenKind::RParen => {
            parser.advance();
            Some(expression)
        }
        Some(token) => {
            parser.error(format!("expected ')', found {}", token.literal));
            None
        }
        None => {
            parser.error("expected ')', found EOF");
            None
        }
    }
}

fn parse_infix_expression(parser: &mut Parser<'_>, left: Expression) -> Option<Expression> {
    let token = parser.current()?;
    let Some(action) = Action::from_operator(&token.literal) else {
        parser.error(format!("no action for infix operator {}", token.literal));
        return None;
    };

    let precedence = parser.precedence(token.kind);
    parser.advance();
    let right = parser.parse_expression(precedence)?;

    Some(Expression::Infix {
        operator: token.literal.clone(),
        action,
        left: Box::new(left),
        right: Box::new(right),
    })
}
