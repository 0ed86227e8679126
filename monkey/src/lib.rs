pub mod repl;

use monkey_parser::ast::Root;
use monkey_parser::parser::Parser;
use monkey_source::Source;

/// Parses `code` into a program plus the ordered list of syntax error
/// messages. The program may be partial; an empty error list means the tree
/// is trustworthy.
pub fn parse(code: &str) -> (Root, Vec<String>) {
    let source = Source::new(code);
    let root = Parser::new(&source).parse_program();
    let messages = source.errors.messages();

    (root, messages)
}
