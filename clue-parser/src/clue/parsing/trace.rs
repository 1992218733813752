//! Parse tracing
//!
//! With [ParserConfig::trace](super::ParserConfig) enabled the parser records one event per
//! production it enters. Nothing is printed here; callers decide where the trace goes.

use serde::Serialize;
use std::fmt;

use crate::clue::ast::position::SourcePosition;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEvent {
    /// Expression nesting depth when the production was entered
    pub depth: usize,
    /// Grammar nonterminal name, e.g. `if_stmt`
    pub production: &'static str,
    /// Position of the lookahead token
    pub position: SourcePosition,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} @ {}",
            "  ".repeat(self.depth),
            self.production,
            self.position
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_indents_by_depth() {
        let event = TraceEvent {
            depth: 2,
            production: "block",
            position: SourcePosition::new(4, 1, 5),
        };
        assert_eq!(event.to_string(), "    block @ 1:5");
    }
}
