use std::io::Write;

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{interpreter::Interpreter, value::Value};

/// Evaluates the given expression to a runtime value.
pub fn evaluate_expression<W: Write>(
    interpreter: &Interpreter<W>,
    expression: &Expr,
) -> Result<Value, Error> {
    match expression {
        Expr::Literal { value } => Ok(Value::from(value)),
        Expr::Grouping { expression } => evaluate_expression(interpreter, expression),
        Expr::Unary { operator, right } => {
            let right = evaluate_expression(interpreter, right)?;
            evaluate_unary(interpreter, operator, right)
        }
        Expr::Binary {
            left,
            operator,
            right,
        } => {
            // Both sides are evaluated before any operand check.
            let left = evaluate_expression(interpreter, left)?;
            let right = evaluate_expression(interpreter, right)?;
            evaluate_binary(interpreter, operator, left, right)
        }
    }
}

fn evaluate_unary<W: Write>(
    interpreter: &Interpreter<W>,
    operator: &Token,
    right: Value,
) -> Result<Value, Error> {
    match operator.kind {
        TokenKind::Dash => match right {
            Value::Number(number) => Ok(Value::Number(-number)),
            Value::String(_) | Value::Bool(_) | Value::Nil => Err(Error::new(
                ErrorImpl::OperandMustBeNumber {
                    operator: operator.clone(),
                    operand: right.to_string(),
                },
                interpreter.get_position(operator),
            )),
        },
        TokenKind::Not => Ok(Value::Bool(!right.is_truthy())),
        _ => Err(unsupported_operator(interpreter, operator)),
    }
}

fn evaluate_binary<W: Write>(
    interpreter: &Interpreter<W>,
    operator: &Token,
    left: Value,
    right: Value,
) -> Result<Value, Error> {
    match operator.kind {
        TokenKind::Plus => match (left, right) {
            (Value::Number(left), Value::Number(right)) => Ok(Value::Number(left + right)),
            (Value::String(left), Value::String(right)) => Ok(Value::String(left + &right)),
            _ => Err(Error::new(
                ErrorImpl::OperandsMustBeNumbersOrStrings {
                    operator: operator.clone(),
                },
                interpreter.get_position(operator),
            )),
        },
        TokenKind::Dash => {
            let (left, right) = number_operands(interpreter, operator, &left, &right)?;
            Ok(Value::Number(left - right))
        }
        TokenKind::Star => {
            let (left, right) = number_operands(interpreter, operator, &left, &right)?;
            Ok(Value::Number(left * right))
        }
        TokenKind::Slash => {
            let (left, right) = number_operands(interpreter, operator, &left, &right)?;
            Ok(Value::Number(left / right))
        }
        TokenKind::Greater => {
            let (left, right) = number_operands(interpreter, operator, &left, &right)?;
            Ok(Value::Bool(left > right))
        }
        TokenKind::GreaterEquals => {
            let (left, right) = number_operands(interpreter, operator, &left, &right)?;
            Ok(Value::Bool(left >= right))
        }
        TokenKind::Less => {
            let (left, right) = number_operands(interpreter, operator, &left, &right)?;
            Ok(Value::Bool(left < right))
        }
        TokenKind::LessEquals => {
            let (left, right) = number_operands(interpreter, operator, &left, &right)?;
            Ok(Value::Bool(left <= right))
        }
        TokenKind::Equals => Ok(Value::Bool(left == right)),
        TokenKind::NotEquals => Ok(Value::Bool(left != right)),
        _ => Err(unsupported_operator(interpreter, operator)),
    }
}

/// Unwraps both operands as numbers, naming the first one that is not.
fn number_operands<W: Write>(
    interpreter: &Interpreter<W>,
    operator: &Token,
    left: &Value,
    right: &Value,
) -> Result<(f64, f64), Error> {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => Ok((*left, *right)),
        (Value::Number(_), operand) | (operand, _) => Err(Error::new(
            ErrorImpl::OperandsMustBeNumbers {
                operator: operator.clone(),
                operand: operand.to_string(),
            },
            interpreter.get_position(operator),
        )),
    }
}

fn unsupported_operator<W: Write>(interpreter: &Interpreter<W>, operator: &Token) -> Error {
    Error::new(
        ErrorImpl::UnsupportedOperator {
            operator: operator.clone(),
        },
        interpreter.get_position(operator),
    )
}
