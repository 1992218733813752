//! Token definitions for the Clue language
//!
//!     Token kinds are produced by a logos lexer. Keywords are declared as exact `#[token]`
//!     literals next to the identifier regex: logos always takes the longest match, and on a tie
//!     a literal wins over the regex, so `if` is a keyword while `iffy` and `if_` stay identifiers.
//!
//!     Whitespace (newlines included) carries no meaning and is skipped by the lexer itself.
//!
//!     [TokenKind::Eof] is never produced by logos. The [lexing](crate::clue::lexing) layer
//!     synthesizes it once the input is exhausted.

use logos::Logos;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

use super::ast::position::SourcePosition;

/// All token kinds of the Clue grammar
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // Keywords
    #[token("local")]
    Local,
    #[token("if")]
    If,
    #[token("elseif")]
    ElseIf,
    #[token("else")]
    Else,
    #[token("match")]
    Match,
    #[token("default")]
    Default,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,

    // Punctuation
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("=")]
    Equals,
    #[token("=>")]
    Arrow,

    // Literals
    /// Dot-separated digit groups: `1`, `1.5`, `1.2.3`
    #[regex(r"[0-9]+(\.[0-9]+)*")]
    Number,
    #[regex(r"[a-zA-Z_][a-zA-Z_0-9]*")]
    Identifier,

    /// End of input (synthetic)
    Eof,
}

impl TokenKind {
    /// Fixed spelling for keywords and punctuation, `None` for literals and EOF
    pub fn fixed_text(&self) -> Option<&'static str> {
        Some(match self {
            TokenKind::Local => "local",
            TokenKind::If => "if",
            TokenKind::ElseIf => "elseif",
            TokenKind::Else => "else",
            TokenKind::Match => "match",
            TokenKind::Default => "default",
            TokenKind::Try => "try",
            TokenKind::Catch => "catch",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::Equals => "=",
            TokenKind::Arrow => "=>",
            TokenKind::Number | TokenKind::Identifier | TokenKind::Eof => return None,
        })
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Local
                | TokenKind::If
                | TokenKind::ElseIf
                | TokenKind::Else
                | TokenKind::Match
                | TokenKind::Default
                | TokenKind::Try
                | TokenKind::Catch
        )
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            TokenKind::OpenBrace | TokenKind::CloseBrace | TokenKind::Equals | TokenKind::Arrow
        )
    }

    /// Whether a token of this kind can begin an `expr` production
    pub fn starts_expr(&self) -> bool {
        matches!(
            self,
            TokenKind::OpenBrace
                | TokenKind::Number
                | TokenKind::Local
                | TokenKind::If
                | TokenKind::Match
                | TokenKind::Try
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Eof => write!(f, "end of input"),
            kind if kind.is_keyword() => write!(f, "keyword `{}`", kind.fixed_text().unwrap_or("")),
            kind => write!(f, "`{}`", kind.fixed_text().unwrap_or("")),
        }
    }
}

/// A positioned token: kind, literal text and where it sits in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal source text. Empty for [TokenKind::Eof].
    pub text: String,
    /// Byte range in the source
    pub span: Range<usize>,
    /// Start of the token (offset/line/column)
    pub position: SourcePosition,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        span: Range<usize>,
        position: SourcePosition,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            position,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Short description used in error messages: the kind plus the literal when it adds anything
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Number | TokenKind::Identifier => format!("{} `{}`", self.kind, self.text),
            _ => self.kind.to_string(),
        }
    }
}
