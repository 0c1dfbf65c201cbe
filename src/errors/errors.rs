use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

/// The stage that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
    Runtime,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lex => write!(f, "LexError"),
            ErrorKind::Parse => write!(f, "ParseError"),
            ErrorKind::Runtime => write!(f, "RuntimeError"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::NumberParseError { .. } => ErrorKind::Lex,
            ErrorImpl::ExpectedToken { .. } | ErrorImpl::ExpectedExpression { .. } => {
                ErrorKind::Parse
            }
            ErrorImpl::OperandMustBeNumber { .. }
            | ErrorImpl::OperandsMustBeNumbers { .. }
            | ErrorImpl::OperandsMustBeNumbersOrStrings { .. }
            | ErrorImpl::UnsupportedOperator { .. }
            | ErrorImpl::OutputFailed { .. } => ErrorKind::Runtime,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::OperandMustBeNumber { .. } => "OperandMustBeNumber",
            ErrorImpl::OperandsMustBeNumbers { .. } => "OperandsMustBeNumbers",
            ErrorImpl::OperandsMustBeNumbersOrStrings { .. } => "OperandsMustBeNumbersOrStrings",
            ErrorImpl::UnsupportedOperator { .. } => "UnsupportedOperator",
            ErrorImpl::OutputFailed { .. } => "OutputFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character } => {
                ErrorTip::Suggestion(format!("Character `{}` is not part of the language", character))
            }
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String is missing its closing `\"`"))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::ExpectedToken { message, token } => {
                ErrorTip::Suggestion(format!("Found `{}`, {}", token, message))
            }
            ErrorImpl::ExpectedExpression { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected a literal or `(`",
                token
            )),
            ErrorImpl::OperandMustBeNumber { operator, operand } => ErrorTip::Suggestion(format!(
                "Operator `{}` cannot be applied to `{}`",
                operator.lexeme, operand
            )),
            ErrorImpl::OperandsMustBeNumbers { operator, operand } => ErrorTip::Suggestion(
                format!("Operator `{}` received non-number `{}`", operator.lexeme, operand),
            ),
            ErrorImpl::OperandsMustBeNumbersOrStrings { .. } => ErrorTip::None,
            ErrorImpl::UnsupportedOperator { operator } => ErrorTip::Suggestion(format!(
                "`{}` is not an operator in this position",
                operator.lexeme
            )),
            ErrorImpl::OutputFailed { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (line {}): {}",
            self.get_error_kind(),
            self.position.0,
            self.internal_error
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unexpected character {character:?}")]
    UnexpectedCharacter { character: char },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("{message}")]
    ExpectedToken { message: String, token: String },
    #[error("expected expression")]
    ExpectedExpression { token: String },
    #[error("operand must be a number")]
    OperandMustBeNumber { operator: Token, operand: String },
    #[error("{operand} operand must be a number")]
    OperandsMustBeNumbers { operator: Token, operand: String },
    #[error("operands must be two numbers or two strings")]
    OperandsMustBeNumbersOrStrings { operator: Token },
    #[error("unsupported operator {}", .operator.lexeme)]
    UnsupportedOperator { operator: Token },
    #[error("failed to write output: {message}")]
    OutputFailed { message: String },
}
