//! Hand-written single-pass lexer.
//!
//! The lexer walks the source text one byte at a time with a one-character
//! lookahead and classifies every character exactly once. It knows nothing
//! about the grammar; it only produces [`Token`]s on demand.

use std::ops::Range;

use crate::parser::TokenStream;
use crate::token::Token;

/// Converts a string of Monkey code into tokens.
pub struct Lexer<'a> {
    /// Program text to tokenize.
    code: &'a str,
    /// Byte index of `ch` in `code`.
    cursor: usize,
    /// Current character under examination. `0` once the end of `code` is reached.
    ch: u8,
    /// Byte range of the most recently produced token.
    span: Range<usize>,
}

impl<'a> Lexer<'a> {
    /// Create a new `Lexer` for the given code.
    pub fn new(code: &'a str) -> Self {
        Self {
            code,
            cursor: 0,
            ch: code.as_bytes().first().copied().unwrap_or(0),
            span: 0..0,
        }
    }

    /// Advance the cursor to the next character.
    fn advance(&mut self) {
        self.cursor += 1;
        self.ch = self.code.as_bytes().get(self.cursor).copied().unwrap_or(0);
    }

    /// Returns the next character without advancing the cursor.
    fn peek_char(&self) -> u8 {
        self.code.as_bytes().get(self.cursor + 1).copied().unwrap_or(0)
    }

    /// Skips over whitespace characters. Whitespace is never emitted as a token.
    fn skip_whitespace(&mut self) {
        while is_whitespace(self.ch) {
            self.advance();
        }
    }

    /// Reads a maximal run of letters/underscores and resolves it against the
    /// keyword table. Unmatched lexemes become identifiers.
    fn read_identifier(&mut self) -> Token {
        let start = self.cursor;
        while is_letter(self.ch) {
            self.advance();
        }

        match &self.code[start..self.cursor] {
            "fn" => Token::Function,
            "let" => Token::Let,
            "true" => Token::True,
            "false" => Token::False,
            "if" => Token::If,
            "else" => Token::Else,
            "return" => Token::Return,
            literal => Token::Ident(literal.to_string()),
        }
    }

    /// Reads a maximal run of ASCII digits as raw literal text.
    fn read_number(&mut self) -> Token {
        let start = self.cursor;
        while is_digit(self.ch) {
            self.advance();
        }

        Token::Int(self.code[start..self.cursor].to_string())
    }

    /// Returns the next token and advances past it. No backtracking: once a
    /// character has been classified the cursor never moves back. At the end
    /// of input this returns [`Token::Eof`], repeatedly.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.cursor;
        let token = match self.ch {
            0 => {
                self.span = start..start;
                return Token::Eof;
            }
            b'=' => {
                if self.peek_char() == b'=' {
                    self.advance();
                    Token::Eq
                } else {
                    Token::Assign
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.advance();
                    Token::NotEq
                } else {
                    Token::Bang
                }
            }
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' => Token::Asterisk,
            b'/' => Token::Slash,
            b'<' => Token::Lt,
            b'>' => Token::Gt,
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b'{' => Token::LBrace,
            b'}' => Token::RBrace,
            b',' => Token::Comma,
            b';' => Token::Semicolon,
            ch if is_letter(ch) => {
                let token = self.read_identifier();
                self.span = start..self.cursor;
                return token;
            }
            ch if is_digit(ch) => {
                let token = self.read_number();
                self.span = start..self.cursor;
                return token;
            }
            ch => Token::Illegal(ch as char),
        };

        self.advance();
        self.span = start..self.cursor;
        token
    }

    /// Tokenizes the entire input, including the terminal [`Token::Eof`].
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }
}

impl<'a> TokenStream for Lexer<'a> {
    fn next_token(&mut self) -> Token {
        Lexer::next_token(self)
    }

    fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

fn is_whitespace(ch: u8) -> bool {
    ch == b' ' || ch == b'\t' || ch == b'\n' || ch == b'\r'
}

/// Letters and underscore are the valid identifier characters in Monkey.
fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}
