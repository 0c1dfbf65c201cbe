use std::io::Write;

use crate::{
    ast::statements::Stmt,
    errors::errors::{Error, ErrorImpl},
};

use super::interpreter::Interpreter;

/// Executes a single statement for its side effects.
pub fn execute_statement<W: Write>(
    interpreter: &mut Interpreter<W>,
    statement: &Stmt,
) -> Result<(), Error> {
    match statement {
        Stmt::Expression { expression } => {
            interpreter.evaluate(expression)?;
        }
        Stmt::Print { expression } => {
            let value = interpreter.evaluate(expression)?;

            writeln!(interpreter.out, "{}", value).map_err(|error| {
                Error::new(
                    ErrorImpl::OutputFailed {
                        message: error.to_string(),
                    },
                    interpreter.get_file_position(),
                )
            })?;
        }
    }

    Ok(())
}
