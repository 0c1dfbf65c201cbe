use std::fmt::Display;

use crate::lexer::tokens::Token;

/// Value stored in a literal node.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    String(String),
    Bool(bool),
    Nil,
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Number(number) => write!(f, "{}", number),
            LiteralValue::String(string) => write!(f, "{:?}", string),
            LiteralValue::Bool(boolean) => write!(f, "{}", boolean),
            LiteralValue::Nil => write!(f, "nil"),
        }
    }
}

/// Expression Types
///
/// Discriminant of an [`Expr`] node, without its payload.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Literal,
    Unary,
    Binary,
    Grouping,
}

/// Expression node.
///
/// Every composite node owns its children; the tree is never mutated
/// after the parser builds it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal {
        value: LiteralValue,
    },
    Unary {
        operator: Token,
        right: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Grouping {
        expression: Box<Expr>,
    },
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Literal { .. } => ExprType::Literal,
            Expr::Unary { .. } => ExprType::Unary,
            Expr::Binary { .. } => ExprType::Binary,
            Expr::Grouping { .. } => ExprType::Grouping,
        }
    }
}

/// Renders the tree in a fully parenthesised prefix form,
/// e.g. `(* (group (+ 1 2)) 3)`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal { value } => write!(f, "{}", value),
            Expr::Unary { operator, right } => write!(f, "({} {})", operator.lexeme, right),
            Expr::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", operator.lexeme, left, right),
            Expr::Grouping { expression } => write!(f, "(group {})", expression),
        }
    }
}
