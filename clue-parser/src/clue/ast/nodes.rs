//! Node definitions
//!
//!     One struct per grammar nonterminal. Every node owns its children (no sharing, no cycles)
//!     and records the byte span it was parsed from. Nodes are never mutated after the parser
//!     builds them.
//!
//!     The shapes encode the grammar's arity rules: an `if` chain has exactly one [IfBlock], a
//!     `try` at most one [CatchBlock], and so on. The one rule the types cannot express, a
//!     [MatchBlock] never being empty, is upheld by the parser.

use serde::Serialize;
use std::ops::Range;

/// Root of a parsed source: the top-level expression list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub body: Vec<Expr>,
    pub span: Range<usize>,
}

/// Any `expr` production
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expr {
    Block(Block),
    Number(Number),
    LocalDecl(LocalDecl),
    If(IfStmt),
    Match(MatchStmt),
    Try(TryStmt),
}

impl Expr {
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Block(n) => n.span.clone(),
            Expr::Number(n) => n.span.clone(),
            Expr::LocalDecl(n) => n.span.clone(),
            Expr::If(n) => n.span.clone(),
            Expr::Match(n) => n.span.clone(),
            Expr::Try(n) => n.span.clone(),
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Expr::Block(block) => Some(block),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Expr::Number(number) => Some(number),
            _ => None,
        }
    }
}

/// `{ exprlist? }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub exprs: Vec<Expr>,
    pub span: Range<usize>,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

/// A numeric literal, kept verbatim. `1.2.3` is a valid literal, so no numeric value is derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Number {
    pub literal: String,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    pub name: String,
    pub span: Range<usize>,
}

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// `local name = expr`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalDecl {
    pub name: Identifier,
    pub init: Box<Expr>,
    pub span: Range<usize>,
}

/// `if_block elseif_block* else_block?`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStmt {
    pub if_block: IfBlock,
    pub elseif_blocks: Vec<ElseIfBlock>,
    pub else_block: Option<ElseBlock>,
    pub span: Range<usize>,
}

/// `if expr block`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfBlock {
    pub condition: Box<Expr>,
    pub body: Block,
    pub span: Range<usize>,
}

/// `elseif expr block`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElseIfBlock {
    pub condition: Box<Expr>,
    pub body: Block,
    pub span: Range<usize>,
}

/// `else block`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElseBlock {
    pub body: Block,
    pub span: Range<usize>,
}

/// `match expr match_block`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchStmt {
    pub scrutinee: Box<Expr>,
    pub block: MatchBlock,
    pub span: Range<usize>,
}

/// `{ match_case+ }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchBlock {
    pub cases: Vec<MatchCase>,
    pub span: Range<usize>,
}

/// `match_expr => block`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCase {
    pub pattern: MatchExpr,
    pub body: Block,
    pub span: Range<usize>,
}

/// The left side of a match arm: the `default` marker or any expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchExpr {
    Default { span: Range<usize> },
    Expr(Box<Expr>),
}

impl MatchExpr {
    pub fn is_default(&self) -> bool {
        matches!(self, MatchExpr::Default { .. })
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            MatchExpr::Default { span } => span.clone(),
            MatchExpr::Expr(expr) => expr.span(),
        }
    }
}

/// `try_block catch_block?`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TryStmt {
    pub try_block: TryBlock,
    pub catch_block: Option<CatchBlock>,
    pub span: Range<usize>,
}

/// `try expr block`: the guarded expression and its recovery block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TryBlock {
    pub guarded: Box<Expr>,
    pub recovery: Block,
    pub span: Range<usize>,
}

/// `catch identifier? block`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatchBlock {
    pub binding: Option<Identifier>,
    pub body: Block,
    pub span: Range<usize>,
}
