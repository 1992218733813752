//! Output formats
//!
//!     Renderers for a parsed [Program] and for the raw token stream. Each format has a stable
//!     name used by the CLI and the configuration file:
//!
//!     - `ast-tag`      XML-like tags mirroring the tree ([tag])
//!     - `ast-treeviz`  Box-drawing tree of node types and labels ([treeviz])
//!     - `ast-json`     serde_json serialization of the AST
//!     - `ast-yaml`     serde_yaml serialization of the AST
//!     - `source`       Canonical Clue source ([source]); re-parsing it yields the same tree
//!     - `token-json`   JSON array of tokens
//!     - `token-simple` Canonical token text ([detokenizer])
//!
//!     AST formats run the full parse; token formats only run the lexer.

pub mod detokenizer;
pub mod source;
pub mod tag;
pub mod treeviz;

pub use detokenizer::detokenize;
pub use source::to_clue_source;
pub use tag::serialize_ast_tag;
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_width};

use std::fmt;
use std::str::FromStr;

use super::ast::Program;
use super::error::ClueError;
use super::lexing::tokenize;
use super::parsing::{parse_with, ParserConfig};

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error(transparent)]
    Clue(#[from] ClueError),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unknown format '{0}' (available: {names})", names = Format::names().join(", "))]
    UnknownFormat(String),
    #[error("format '{0}' renders tokens and needs the source text")]
    NeedsSource(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    AstTag,
    AstTreeviz,
    AstJson,
    AstYaml,
    Source,
    TokenJson,
    TokenSimple,
}

impl Format {
    pub fn all() -> &'static [Format] {
        &[
            Format::AstTag,
            Format::AstTreeviz,
            Format::AstJson,
            Format::AstYaml,
            Format::Source,
            Format::TokenJson,
            Format::TokenSimple,
        ]
    }

    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(Format::name).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::AstTag => "ast-tag",
            Format::AstTreeviz => "ast-treeviz",
            Format::AstJson => "ast-json",
            Format::AstYaml => "ast-yaml",
            Format::Source => "source",
            Format::TokenJson => "token-json",
            Format::TokenSimple => "token-simple",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Format::AstTag => "XML-like tag serialization of the AST",
            Format::AstTreeviz => "Tree visualization of node types and labels",
            Format::AstJson => "AST as JSON",
            Format::AstYaml => "AST as YAML",
            Format::Source => "Canonical Clue source rebuilt from the AST",
            Format::TokenJson => "Token stream as JSON",
            Format::TokenSimple => "Token stream as canonical text",
        }
    }

    /// Whether this format needs a full parse or only the token stream
    pub fn needs_ast(&self) -> bool {
        !matches!(self, Format::TokenJson | Format::TokenSimple)
    }

    /// Lex or parse `source` and render it in this format
    pub fn render(&self, source: &str, options: &RenderOptions) -> Result<String, FormatError> {
        if !self.needs_ast() {
            let tokens = tokenize(source).map_err(ClueError::from)?;
            return match self {
                Format::TokenJson => Ok(serde_json::to_string_pretty(&tokens)?),
                _ => Ok(detokenize(&tokens)),
            };
        }

        let program = parse_with(source, &options.parser)?;
        self.render_program(&program, options)
    }

    /// Render an already parsed program. Token formats are rejected, a tree has no tokens.
    pub fn render_program(
        &self,
        program: &Program,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        Ok(match self {
            Format::AstTag => serialize_ast_tag(program),
            Format::AstTreeviz => to_treeviz_str_with_width(program, options.treeviz_label_width),
            Format::AstJson => serde_json::to_string_pretty(program)?,
            Format::AstYaml => serde_yaml::to_string(program)?,
            Format::Source => to_clue_source(program),
            Format::TokenJson | Format::TokenSimple => {
                return Err(FormatError::NeedsSource(self.name()))
            }
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

/// Settings shared by all renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub parser: ParserConfig,
    /// Maximum characters of a label shown by `ast-treeviz`
    pub treeviz_label_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            treeviz_label_width: treeviz::DEFAULT_LABEL_WIDTH,
        }
    }
}
