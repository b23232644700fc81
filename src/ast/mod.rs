/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Node kinds and a borrowed view over every node for uniform traversal
/// - expressions: Definitions for the expression types
/// - statements: Definitions for assignments, declarations and the program root
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
