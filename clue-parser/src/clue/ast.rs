//! AST definitions and utilities for the Clue language
//!
//! ## Modules
//!
//! - `nodes` - Node type definitions, one struct per grammar nonterminal
//! - `node_ref` - Borrowed view over any node, with the [AstNode] trait
//! - `position` - Byte offset to line/column conversion
//! - `lookup` - Traversal and position-based node lookup

pub mod lookup;
pub mod node_ref;
pub mod nodes;
pub mod position;

pub use lookup::find_node_at;
pub use node_ref::{AstNode, NodeRef};
pub use nodes::{
    Block, CatchBlock, ElseBlock, ElseIfBlock, Expr, Identifier, IfBlock, IfStmt, LocalDecl,
    MatchBlock, MatchCase, MatchExpr, MatchStmt, Number, Program, TryBlock, TryStmt,
};
pub use position::{SourceLocation, SourcePosition};
