/// AST (Abstract Syntax Tree) module
/// Contains the node shapes handed to downstream consumers
///
/// Submodules:
/// - ast: Constant, Link and Expression nodes plus the literal values they carry
pub mod ast;

#[cfg(test)]
mod tests;
