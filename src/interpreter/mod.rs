//! Tree-walking interpreter module.
//!
//! This module evaluates the AST produced by the parser. It handles:
//!
//! - Evaluation of literal, grouping, unary and binary expressions
//! - Dynamic operand checks for every operator
//! - Execution of print and expression statements
//!
//! Evaluation is fail-fast: the first runtime error stops the run.

pub mod expr;
pub mod interpreter;
pub mod stmt;
pub mod value;
