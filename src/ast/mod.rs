/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Expression nodes and literal values
/// - statements: Statement nodes
pub mod expressions;
pub mod statements;
