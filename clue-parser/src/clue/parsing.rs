//! Parsing
//!
//!     Recursive descent over the Clue grammar, one function per nonterminal:
//!
//!         program      := exprlist?
//!         expr         := block | NUMBER | local_decl | if_stmt | match_stmt | try_stmt
//!         exprlist     := expr+
//!         block        := "{" exprlist? "}"
//!         local_decl   := "local" IDENTIFIER "=" expr
//!         if_stmt      := if_block elseif_block* else_block?
//!         if_block     := "if" expr block
//!         elseif_block := "elseif" expr block
//!         else_block   := "else" block
//!         match_stmt   := "match" expr "{" match_case+ "}"
//!         match_case   := match_expr "=>" block
//!         match_expr   := "default" | expr
//!         try_stmt     := try_block catch_block?
//!         try_block    := "try" expr block
//!         catch_block  := "catch" IDENTIFIER? block
//!
//!     Every production is selected by its first token, so one token of lookahead is enough and
//!     the parser never backtracks. The first error ends the parse.

pub mod config;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod trace;

pub use config::ParserConfig;
pub use parser::Parser;
pub use trace::TraceEvent;

use super::ast::Program;
use super::error::ClueError;

/// Parse a complete Clue source with the default configuration
pub fn parse(source: &str) -> Result<Program, ClueError> {
    Parser::new(source).parse_program()
}

/// Parse a complete Clue source with an explicit configuration
pub fn parse_with(source: &str, config: &ParserConfig) -> Result<Program, ClueError> {
    Parser::with_config(source, config.clone()).parse_program()
}
