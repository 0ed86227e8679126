//! Pratt expression parser.
//!
//! The parser pulls tokens on demand through a two-token window (`current`
//! plus one lookahead) and never buffers more than that. Parse rules return
//! `Option` instead of threading sentinel error nodes through the tree;
//! failures are recorded in the [`Source`]'s error list and parsing resumes
//! at the next statement boundary.

mod expr;
mod stmt;

use std::mem;
use std::ops::Range;

use monkey_source::{Source, SyntaxError};

use crate::ast::Root;
use crate::lexer::Lexer;
use crate::token::{Precedence, Token};

pub const ERR_EXPECTED_IDENTIFIER: &str = "expected identifier after let";
pub const ERR_EXPECTED_ASSIGNMENT: &str = "expected assignment after identifier";

/// Pull interface for token producers: one operation, "give me the next
/// token", called exactly once per token.
pub trait TokenStream {
    /// Produce the next token and advance past it.
    fn next_token(&mut self) -> Token;

    /// Byte range of the most recently produced token, when known.
    fn span(&self) -> Range<usize> {
        0..0
    }
}

pub struct Parser<'a, T: TokenStream = Lexer<'a>> {
    stream: T,
    /// Token under examination.
    current: Token,
    /// One token lookahead.
    peek: Token,
    /// Source code.
    source: &'a Source<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser over a fresh lexer for `source`.
    pub fn new(source: &'a Source<'a>) -> Self {
        Self::with_stream(Lexer::new(source.content), source)
    }
}

impl<'a, T: TokenStream> Parser<'a, T> {
    /// Create a parser over an arbitrary token stream. Pulls exactly two
    /// tokens to fill the `current` + lookahead window.
    pub fn with_stream(mut stream: T, source: &'a Source<'a>) -> Self {
        let current = stream.next_token();
        let peek = stream.next_token();
        Self {
            stream,
            current,
            peek,
            source,
        }
    }

    /// Parses the whole token stream into a [`Root`].
    ///
    /// Malformed statements are omitted rather than aborting the parse, so
    /// the result is the largest valid partial tree. Callers must check the
    /// source's error list to decide whether the tree is trustworthy.
    pub fn parse_program(&mut self) -> Root {
        let mut statements = Vec::new();

        while self.current != Token::Eof {
            match self.parse_stmt() {
                Some(stmt) => {
                    statements.push(stmt);
                    self.next();
                }
                None => {
                    self.synchronize();
                    if self.current == Token::RBrace {
                        // A stray `}` at the top level; skip it.
                        self.next();
                    }
                }
            }
        }

        Root { statements }
    }
}

/// Parse utilities
impl<'a, T: TokenStream> Parser<'a, T> {
    /// Shifts the two-token window by one.
    fn next(&mut self) {
        self.current = mem::replace(&mut self.peek, self.stream.next_token());
    }

    /// Predicate that tests whether the lookahead token has the same discriminant as `token`.
    fn peek_is(&self, token: &Token) -> bool {
        mem::discriminant(&self.peek) == mem::discriminant(token)
    }

    /// Advances onto the lookahead token if it matches `token`, otherwise
    /// records an error and leaves the window untouched.
    fn expect_peek(&mut self, token: Token) -> bool {
        if self.peek_is(&token) {
            self.next();
            true
        } else {
            self.error(format!("expected `{}`, found `{}`", token, self.peek));
            false
        }
    }

    /// Records a syntax error at the last lexed position.
    fn error(&self, message: impl ToString) {
        self.source
            .errors
            .add_error(SyntaxError::new(message, self.stream.span()));
    }

    /// Skips to the next statement boundary (`;`, `}` or end of input) after
    /// a malformed statement, so one mistake is reported once instead of
    /// cascading into follow-up errors.
    fn synchronize(&mut self) {
        loop {
            match self.current {
                Token::Semicolon => {
                    self.next();
                    break;
                }
                Token::RBrace | Token::Eof => break,
                _ => self.next(),
            }
        }
    }
}
