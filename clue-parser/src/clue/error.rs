//! Error types for lexing and parsing
//!
//!     Both kinds are fatal: the first error ends the parse and is returned to the caller. There is
//!     no recovery mode and no partial tree.

use std::ops::Range;

use super::ast::position::SourcePosition;

/// The current position matches no token rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected character '{character}' at {position}")]
pub struct LexError {
    pub character: char,
    pub position: SourcePosition,
    pub span: Range<usize>,
}

/// A token was present but is not allowed by the grammar at this point
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {position}")]
pub struct ParseError {
    pub message: String,
    pub position: SourcePosition,
    pub span: Range<usize>,
    /// Optional follow-up hint shown under the diagnostic
    pub help: Option<String>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: SourcePosition, span: Range<usize>) -> Self {
        Self {
            message: message.into(),
            position,
            span,
            help: None,
        }
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Any error produced by the Clue front end
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClueError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl ClueError {
    pub fn position(&self) -> SourcePosition {
        match self {
            ClueError::Lex(e) => e.position,
            ClueError::Parse(e) => e.position,
        }
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            ClueError::Lex(e) => e.span.clone(),
            ClueError::Parse(e) => e.span.clone(),
        }
    }

    /// The message without the position suffix
    pub fn message(&self) -> String {
        match self {
            ClueError::Lex(e) => format!("unexpected character '{}'", e.character),
            ClueError::Parse(e) => e.message.clone(),
        }
    }

    pub fn help(&self) -> Option<&str> {
        match self {
            ClueError::Lex(_) => None,
            ClueError::Parse(e) => e.help.as_deref(),
        }
    }

    /// Stable short code used in rendered diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            ClueError::Lex(_) => "E_LEX",
            ClueError::Parse(_) => "E_PARSE",
        }
    }

    pub fn is_lex(&self) -> bool {
        matches!(self, ClueError::Lex(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, ClueError::Parse(_))
    }
}
