#![allow(clippy::module_inception)]

use std::{io::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Source line and file name an error is attributed to.
/// Line `0` means no line could be blamed.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub usize, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

/// Returns the text of the 1-based `line` of `source`, without its line ending.
pub fn get_line_at_position(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.trim_end_matches('\r'))
}

/// Runs source text through the scanner, parser and interpreter, writing
/// printed values to `out`. Stops at the first error of any stage.
pub fn run<W: Write>(source: &str, file: Option<String>, out: W) -> Result<W, Error> {
    let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("shell")));

    let tokens = lexer::lexer::tokenize(String::from(source), file)?;
    let statements = parser::parser::parse(tokens, Rc::clone(&file_name))?;

    interpreter::interpreter::interpret(&statements, file_name, out)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\r\nsecond\n\n    Testing { }\n";

        assert_eq!(super::get_line_at_position(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line_at_position(source, 2), Some("second"));
        assert_eq!(super::get_line_at_position(source, 3), Some(""));
        assert_eq!(super::get_line_at_position(source, 4), Some("    Testing { }"));
        assert_eq!(super::get_line_at_position(source, 0), None);
        assert_eq!(super::get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_display_error() {
        let error = super::run("print 1;\nprint 1 + \"a\";", Some("test.lox".to_string()), Vec::new())
            .err()
            .unwrap();

        let mut rendered = Vec::new();
        super::display_error(&error, "print 1;\nprint 1 + \"a\";", &mut rendered).unwrap();
        let rendered = String::from_utf8(rendered).unwrap();

        assert_eq!(
            rendered,
            "Error: RuntimeError: OperandsMustBeNumbersOrStrings (operands must be two numbers or two strings)\n\
             -> test.lox\n  |\n2 | print 1 + \"a\";\n  |\n"
        );
    }

    #[test]
    fn test_display_error_without_line() {
        let error = super::errors::errors::Error::new(
            super::errors::errors::ErrorImpl::OutputFailed {
                message: "closed".to_string(),
            },
            super::Position::null(),
        );

        let mut rendered = Vec::new();
        super::display_error(&error, "", &mut rendered).unwrap();

        assert_eq!(
            String::from_utf8(rendered).unwrap(),
            "Error: RuntimeError: OutputFailed (failed to write output: closed)\n-> <null>\n"
        );
    }
}

pub fn display_error<W: Write>(error: &Error, source: &str, out: &mut W) -> std::io::Result<()> {
    /*
        Error: RuntimeError: OperandsMustBeNumbers (Operator `-` received non-number `a`)
        -> script.lox
           |
        20 | print "a" - 1;
           |
    */

    let position = error.get_position();

    match error.get_tip() {
        ErrorTip::None => writeln!(
            out,
            "Error: {}: {} ({})",
            error.get_error_kind(),
            error.get_error_name(),
            error.get_internal_error()
        )?,
        tip => writeln!(
            out,
            "Error: {}: {} ({}; {})",
            error.get_error_kind(),
            error.get_error_name(),
            error.get_internal_error(),
            tip
        )?,
    }
    writeln!(out, "-> {}", position.1)?;

    if let Some(line_text) = get_line_at_position(source, position.0) {
        let line_string = position.0.to_string();
        let padding = line_string.len() + 2;

        writeln!(out, "{:>padding$}", "|")?;
        writeln!(out, "{} | {}", line_string, line_text.trim())?;
        writeln!(out, "{:>padding$}", "|")?;
    }

    Ok(())
}
