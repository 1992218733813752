//! Testing utilities for AST assertions
//!
//! A fluent API for asserting on parsed trees, so parser tests read like the structure they
//! expect instead of chains of `match` and `unwrap`.
//!
//! # Example
//!
//! ```rust,ignore
//! use clue_parser::clue::testing::assert_ast;
//!
//! let program = parse("local x = {1 2}").unwrap();
//!
//! assert_ast(&program)
//!     .item_count(1)
//!     .item(0, |item| {
//!         item.assert_local()
//!             .name("x")
//!             .init(|init| {
//!                 init.assert_block().expr_count(2);
//!             });
//!     });
//! ```

mod assertions;
mod matchers;

pub use assertions::{
    assert_ast, BlockAssertion, BranchAssertion, CaseAssertion, ExprAssertion, IfAssertion,
    LocalAssertion, MatchAssertion, NumberAssertion, ProgramAssertion, TryAssertion,
};
pub use matchers::TextMatch;
