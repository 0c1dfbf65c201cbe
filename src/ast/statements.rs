use std::fmt::Display;

use super::expressions::Expr;

/// Statement Types
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum StmtType {
    ExpressionStmt,
    PrintStmt,
}

/// Statement node. Owns its expression exclusively.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression { expression: Expr },
    Print { expression: Expr },
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Expression { .. } => StmtType::ExpressionStmt,
            Stmt::Print { .. } => StmtType::PrintStmt,
        }
    }

    pub fn get_expression(&self) -> &Expr {
        match self {
            Stmt::Expression { expression } | Stmt::Print { expression } => expression,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Expression { expression } => write!(f, "(expr {})", expression),
            Stmt::Print { expression } => write!(f, "(print {})", expression),
        }
    }
}
