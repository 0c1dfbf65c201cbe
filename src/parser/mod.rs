//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree. It handles:
//!
//! - Statement parsing (print and expression statements)
//! - Expression parsing with a fixed precedence chain
//! - Error reporting with the offending line
//!
//! Each binary precedence level reads its operator set from a lookup
//! table keyed by binding power; prefix forms and statements are
//! dispatched through token lookup tables.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
