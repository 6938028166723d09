/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - declarations: top-level declarations and the compilation unit
/// - expressions: Definitions for various expression types
/// - types: Definitions for type representations in the AST
pub mod declarations;
pub mod expressions;
pub mod types;
