//! Token definitions and operator binding powers.

use std::fmt;

/// A lexed unit of Monkey source code.
///
/// The variant is the token kind; variable-length kinds carry their raw
/// literal text. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A byte that matches no lexing rule. Carries the offending character.
    Illegal(char),
    /// End of input. The lexer keeps returning this once the input is exhausted.
    Eof,

    // identifiers + literals
    Ident(String),
    /// An integer literal, as raw digit text. Conversion to a numeric value
    /// happens in the parser so overflow can be reported as a syntax error.
    Int(String),

    // operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,

    // comparisons
    Lt,
    Gt,
    Eq,
    NotEq,

    // delimiters
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

/// Operator binding power, lowest to highest.
///
/// The derived ordering is the single source of truth for parse-time
/// precedence decisions. Ties resolve left-to-right because the parser only
/// keeps going when the lookahead binds *strictly* tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Unary `-` and `!`
    Prefix,
    /// Function call parentheses.
    Call,
}

impl Token {
    /// Returns the binding power of this token when it continues an
    /// expression, or [`Precedence::Lowest`] for tokens with no infix rule.
    pub fn precedence(&self) -> Precedence {
        match self {
            Token::Eq | Token::NotEq => Precedence::Equals,
            Token::Lt | Token::Gt => Precedence::LessGreater,
            Token::Plus | Token::Minus => Precedence::Sum,
            Token::Asterisk | Token::Slash => Precedence::Product,
            Token::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

impl fmt::Display for Token {
    /// Writes the canonical lexeme of the token.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lexeme = match self {
            Token::Illegal(ch) => return write!(f, "{}", ch),
            Token::Eof => "<eof>",
            Token::Ident(name) => name,
            Token::Int(literal) => literal,
            Token::Assign => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Bang => "!",
            Token::Asterisk => "*",
            Token::Slash => "/",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::Eq => "==",
            Token::NotEq => "!=",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::Function => "fn",
            Token::Let => "let",
            Token::True => "true",
            Token::False => "false",
            Token::If => "if",
            Token::Else => "else",
            Token::Return => "return",
        };
        write!(f, "{}", lexeme)
    }
}
