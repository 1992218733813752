//! # clue-parser
//!
//! Lexer and recursive-descent parser for the Clue scripting language.
//!
//! File Layout
//!
//! Everything lives under the [clue] module, split by pipeline stage:
//!
//! src/clue
//!   ├── token        Token kinds (logos) and positioned tokens
//!   ├── lexing       Lazy lexer with lookahead and checkpoints
//!   ├── parsing      Recursive-descent parser and its configuration
//!   ├── ast          Node definitions, positions, traversal
//!   ├── formats      Output formats (tag, treeviz, json, yaml, source, tokens)
//!   ├── error        Lex and parse errors
//!   ├── diagnostics  Human-readable error rendering
//!   └── testing      Fluent assertions over parsed trees
//!
//! The one-call entry point is [`parse`]:
//!
//! ```text
//! let program = clue_parser::parse("local x = 5")?;
//! ```
//!
//! For comprehensive testing helpers, see the [testing module](clue::testing).

pub mod clue;

pub use clue::ast::Program;
pub use clue::error::{ClueError, LexError, ParseError};
pub use clue::lexing::tokenize;
pub use clue::parsing::{parse, parse_with, Parser, ParserConfig};
