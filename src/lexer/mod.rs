//! Lexical analysis for propositional logic statements
//!
//! The lexer makes a single forward pass over the characters of one input line with
//! at most one character of lookahead. It never backtracks.
//!
//! Unknown characters do not stop lexing: they become [`TokenKind::Illegal`] tokens and
//! are reported later by the parser, which has no prefix rule for them. A lexer built
//! with [`Lexer::strict`] reports them eagerly as a [`LexError`] instead.
//!
//! # Examples
//!
//! ```
//! use proposition::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("table a -> b").unwrap();
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![TokenKind::Table, TokenKind::Ident, TokenKind::Implication, TokenKind::Ident]
//! );
//! ```

mod token;

pub use token::{Token, TokenKind};

use crate::error::LexError;

/// Tokenize a whole line in one call
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(text);
    lexer.tokenize()?;
    Ok(lexer.into_tokens())
}

/// Character-level scanner holding the tokens of one input line
#[derive(Debug, Clone)]
pub struct Lexer {
    chars: Vec<char>,
    cursor: usize,
    tokens: Vec<Token>,
    tokenized: bool,
    strict: bool,
}

impl Lexer {
    /// Create a lexer for the given source text. Nothing is scanned until
    /// [`tokenize`](Lexer::tokenize) is called.
    pub fn new(source: &str) -> Self {
        Lexer {
            chars: source.chars().collect(),
            cursor: 0,
            tokens: Vec::new(),
            tokenized: false,
            strict: false,
        }
    }

    /// Reject illegal characters at lex time instead of deferring them to the parser
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether [`tokenize`](Lexer::tokenize) has completed successfully
    pub fn is_tokenized(&self) -> bool {
        self.tokenized
    }

    /// The tokens scanned so far
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consume the lexer, keeping only its tokens
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Scan the whole source into tokens
    ///
    /// Calling this twice is a no-op the second time.
    pub fn tokenize(&mut self) -> Result<(), LexError> {
        if self.tokenized {
            return Ok(());
        }

        while let Some(token) = self.next_token() {
            if self.strict && token.kind == TokenKind::Illegal {
                return Err(LexError::IllegalCharacter {
                    literal: token.literal,
                    position: token.start,
                });
            }
            self.tokens.push(token);
        }

        log::trace!("lexed {} tokens", self.tokens.len());
        self.tokenized = true;
        Ok(())
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.cursor).copied()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.cursor + 1).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(' ' | '\t' | '\n' | '\r')) {
            self.cursor += 1;
        }
    }

    /// Build a token of `length` characters starting at the cursor and move past it
    fn emit(&mut self, kind: TokenKind, length: usize) -> Token {
        let start = self.cursor;
        let literal: String = self.chars[start..start + length].iter().collect();
        self.cursor += length;
        Token::new(kind, literal, start, length)
    }

    fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        let c = self.current()?;

        let token = match c {
            '(' => self.emit(TokenKind::LParen, 1),
            ')' => self.emit(TokenKind::RParen, 1),
            '&' | '|' if self.peek() == Some(c) => {
                let kind = if c == '&' { TokenKind::And } else { TokenKind::Or };
                self.emit(kind, 2)
            }
            '&' | '*' => self.emit(TokenKind::And, 1),
            '|' | '+' => self.emit(TokenKind::Or, 1),
            '0' => self.emit(TokenKind::False, 1),
            '1' => self.emit(TokenKind::True, 1),
            '!' => match self.peek() {
                Some('=') => self.emit(TokenKind::Neq, 2),
                _ => self.emit(TokenKind::Bang, 1),
            },
            '=' => match self.peek() {
                Some('=') => self.emit(TokenKind::Eq, 2),
                _ => self.emit(TokenKind::Illegal, 1),
            },
            '-' => match self.peek() {
                Some('>') => self.emit(TokenKind::Implication, 2),
                _ => self.emit(TokenKind::Illegal, 1),
            },
            '<' => match (self.peek(), self.chars.get(self.cursor + 2).copied()) {
                (Some('-'), Some('>')) => self.emit(TokenKind::Bicondition, 3),
                (Some('-'), _) => self.emit(TokenKind::Illegal, 2),
                _ => self.emit(TokenKind::Illegal, 1),
            },
            c if is_identifier_start(c) => self.identifier(),
            _ => self.emit(TokenKind::Illegal, 1),
        };

        Some(token)
    }

    fn identifier(&mut self) -> Token {
        let start = self.cursor;
        while self.current().is_some_and(is_identifier_continue) {
            self.cursor += 1;
        }

        let literal: String = self.chars[start..self.cursor].iter().collect();
        let kind = TokenKind::keyword(&literal).unwrap_or(TokenKind::Ident);
        Token::new(kind, literal, start, self.cursor - start)
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}
