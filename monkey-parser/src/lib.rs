//! Front end for the Monkey programming language: a hand-written lexer and
//! a Pratt expression parser.
//!
//! Data flows one way: text → tokens → AST. The lexer knows nothing about
//! the grammar; the parser pulls tokens on demand and never looks more than
//! two tokens ahead.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;
