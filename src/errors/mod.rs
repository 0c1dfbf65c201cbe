//! Error types and error handling for the interpreter.
//!
//! This module defines the error types used by every stage of the
//! pipeline. It includes:
//!
//! - Error structures with source line information
//! - Specific error variants for lexing, parsing and evaluation
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
