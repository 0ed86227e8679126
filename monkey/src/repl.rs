//! Interactive read-parse-print loop.

use std::io::{self, BufRead, Write};

use monkey_parser::parser::Parser;
use monkey_source::Source;

const PROMPT: &str = ">> ";

/// Reads lines from `input` until end of input, parsing each one as a whole
/// program. Prints the accumulated errors for the line if there are any,
/// otherwise the canonical rendering of the parsed program.
pub fn run(input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let source = Source::new(&line);
        let root = Parser::new(&source).parse_program();

        if source.has_no_errors() {
            writeln!(output, "{}", root)?;
        } else {
            write!(output, "{}", source.errors)?;
        }
    }

    Ok(())
}
