//! Clue front end: source text → tokens → AST.
//!
//!     The lexer and the parser are the core. The lexer is lazy: the parser pulls one token at a
//!     time and may peek ahead, but every production of the grammar is decided by its first
//!     token, so nothing is ever re-parsed.
//!
//!     Everything else (formats, diagnostics, testing helpers) consumes the AST produced here.

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;
