//! Main interpreter module.
//!
//! This module contains the Interpreter structure, which walks the AST
//! statement by statement. It owns nothing between statements except the
//! output sink that `print` writes to.

use std::{io::Write, rc::Rc};

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::Token,
    Position,
};

use super::{expr::evaluate_expression, stmt::execute_statement, value::Value};

/// Tree-walking evaluator.
///
/// # Type Parameters
///
/// * `W` - Sink for the output of `print` statements
pub struct Interpreter<W: Write> {
    /// Where `print` writes its values, one per line
    pub out: W,
    /// The name of the source file, used in error positions
    file: Rc<String>,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W, file: Rc<String>) -> Self {
        Interpreter { out, file }
    }

    /// Executes statements in order, stopping at the first error.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), Error> {
        for statement in statements {
            self.execute(statement)?;
        }

        Ok(())
    }

    pub fn execute(&mut self, statement: &Stmt) -> Result<(), Error> {
        execute_statement(self, statement)
    }

    pub fn evaluate(&self, expression: &Expr) -> Result<Value, Error> {
        evaluate_expression(self, expression)
    }

    /// Position of an error raised by `token`.
    pub fn get_position(&self, token: &Token) -> Position {
        Position(token.line, Rc::clone(&self.file))
    }

    /// Position of an error that no token can be blamed for.
    pub fn get_file_position(&self) -> Position {
        Position(0, Rc::clone(&self.file))
    }

    /// Consumes the interpreter and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

/// Runs `statements` against a fresh interpreter writing to `out`.
pub fn interpret<W: Write>(statements: &[Stmt], file: Rc<String>, out: W) -> Result<W, Error> {
    let mut interpreter = Interpreter::new(out, file);
    interpreter.interpret(statements)?;

    Ok(interpreter.into_output())
}
