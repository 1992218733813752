//! AST traits and borrowed node views
//!
//!     [NodeRef] gives every node kind, expressions and structural sub-forms alike, one uniform
//!     shape: a type name, a short label, a span and an ordered list of children. Formatters and
//!     lookups walk the tree through it instead of matching on each struct.

use std::ops::Range;

use super::nodes::{
    Block, CatchBlock, ElseBlock, ElseIfBlock, Expr, IfBlock, IfStmt, LocalDecl, MatchBlock,
    MatchCase, MatchExpr, MatchStmt, Number, Program, TryBlock, TryStmt,
};

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
    fn span(&self) -> Range<usize>;
}

/// A borrowed reference to any node in the tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    Block(&'a Block),
    Number(&'a Number),
    LocalDecl(&'a LocalDecl),
    IfStmt(&'a IfStmt),
    IfBlock(&'a IfBlock),
    ElseIfBlock(&'a ElseIfBlock),
    ElseBlock(&'a ElseBlock),
    MatchStmt(&'a MatchStmt),
    MatchBlock(&'a MatchBlock),
    MatchCase(&'a MatchCase),
    MatchExpr(&'a MatchExpr),
    TryStmt(&'a TryStmt),
    TryBlock(&'a TryBlock),
    CatchBlock(&'a CatchBlock),
}

impl<'a> From<&'a Expr> for NodeRef<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Block(n) => NodeRef::Block(n),
            Expr::Number(n) => NodeRef::Number(n),
            Expr::LocalDecl(n) => NodeRef::LocalDecl(n),
            Expr::If(n) => NodeRef::IfStmt(n),
            Expr::Match(n) => NodeRef::MatchStmt(n),
            Expr::Try(n) => NodeRef::TryStmt(n),
        }
    }
}

impl<'a> From<&'a Program> for NodeRef<'a> {
    fn from(program: &'a Program) -> Self {
        NodeRef::Program(program)
    }
}

fn count_label(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {}", one)
    } else {
        format!("{} {}", count, many)
    }
}

impl<'a> NodeRef<'a> {
    /// Direct children in source order
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match *self {
            NodeRef::Program(p) => p.body.iter().map(NodeRef::from).collect(),
            NodeRef::Block(b) => b.exprs.iter().map(NodeRef::from).collect(),
            NodeRef::Number(_) => Vec::new(),
            NodeRef::LocalDecl(d) => vec![NodeRef::from(d.init.as_ref())],
            NodeRef::IfStmt(s) => {
                let mut children = vec![NodeRef::IfBlock(&s.if_block)];
                children.extend(s.elseif_blocks.iter().map(NodeRef::ElseIfBlock));
                children.extend(s.else_block.as_ref().map(NodeRef::ElseBlock));
                children
            }
            NodeRef::IfBlock(b) => vec![NodeRef::from(b.condition.as_ref()), NodeRef::Block(&b.body)],
            NodeRef::ElseIfBlock(b) => {
                vec![NodeRef::from(b.condition.as_ref()), NodeRef::Block(&b.body)]
            }
            NodeRef::ElseBlock(b) => vec![NodeRef::Block(&b.body)],
            NodeRef::MatchStmt(s) => vec![
                NodeRef::from(s.scrutinee.as_ref()),
                NodeRef::MatchBlock(&s.block),
            ],
            NodeRef::MatchBlock(b) => b.cases.iter().map(NodeRef::MatchCase).collect(),
            NodeRef::MatchCase(c) => vec![NodeRef::MatchExpr(&c.pattern), NodeRef::Block(&c.body)],
            NodeRef::MatchExpr(MatchExpr::Default { .. }) => Vec::new(),
            NodeRef::MatchExpr(MatchExpr::Expr(expr)) => vec![NodeRef::from(expr.as_ref())],
            NodeRef::TryStmt(s) => {
                let mut children = vec![NodeRef::TryBlock(&s.try_block)];
                children.extend(s.catch_block.as_ref().map(NodeRef::CatchBlock));
                children
            }
            NodeRef::TryBlock(b) => vec![
                NodeRef::from(b.guarded.as_ref()),
                NodeRef::Block(&b.recovery),
            ],
            NodeRef::CatchBlock(b) => vec![NodeRef::Block(&b.body)],
        }
    }
}

impl AstNode for NodeRef<'_> {
    fn node_type(&self) -> &'static str {
        match self {
            NodeRef::Program(_) => "program",
            NodeRef::Block(_) => "block",
            NodeRef::Number(_) => "number",
            NodeRef::LocalDecl(_) => "local_decl",
            NodeRef::IfStmt(_) => "if_stmt",
            NodeRef::IfBlock(_) => "if_block",
            NodeRef::ElseIfBlock(_) => "elseif_block",
            NodeRef::ElseBlock(_) => "else_block",
            NodeRef::MatchStmt(_) => "match_stmt",
            NodeRef::MatchBlock(_) => "match_block",
            NodeRef::MatchCase(_) => "match_case",
            NodeRef::MatchExpr(_) => "match_expr",
            NodeRef::TryStmt(_) => "try_stmt",
            NodeRef::TryBlock(_) => "try_block",
            NodeRef::CatchBlock(_) => "catch_block",
        }
    }

    fn display_label(&self) -> String {
        match self {
            NodeRef::Program(p) => count_label(p.body.len(), "expression", "expressions"),
            NodeRef::Block(b) => count_label(b.exprs.len(), "expression", "expressions"),
            NodeRef::Number(n) => n.literal.clone(),
            NodeRef::LocalDecl(d) => d.name.name.clone(),
            NodeRef::IfStmt(s) => count_label(
                1 + s.elseif_blocks.len() + usize::from(s.else_block.is_some()),
                "branch",
                "branches",
            ),
            NodeRef::MatchBlock(b) => count_label(b.cases.len(), "case", "cases"),
            NodeRef::MatchExpr(MatchExpr::Default { .. }) => "default".to_string(),
            NodeRef::CatchBlock(b) => b
                .binding
                .as_ref()
                .map(|ident| ident.name.clone())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn span(&self) -> Range<usize> {
        match self {
            NodeRef::Program(n) => n.span.clone(),
            NodeRef::Block(n) => n.span.clone(),
            NodeRef::Number(n) => n.span.clone(),
            NodeRef::LocalDecl(n) => n.span.clone(),
            NodeRef::IfStmt(n) => n.span.clone(),
            NodeRef::IfBlock(n) => n.span.clone(),
            NodeRef::ElseIfBlock(n) => n.span.clone(),
            NodeRef::ElseBlock(n) => n.span.clone(),
            NodeRef::MatchStmt(n) => n.span.clone(),
            NodeRef::MatchBlock(n) => n.span.clone(),
            NodeRef::MatchCase(n) => n.span.clone(),
            NodeRef::MatchExpr(n) => n.span(),
            NodeRef::TryStmt(n) => n.span.clone(),
            NodeRef::TryBlock(n) => n.span.clone(),
            NodeRef::CatchBlock(n) => n.span.clone(),
        }
    }
}

impl AstNode for Expr {
    fn node_type(&self) -> &'static str {
        NodeRef::from(self).node_type()
    }

    fn display_label(&self) -> String {
        NodeRef::from(self).display_label()
    }

    fn span(&self) -> Range<usize> {
        Expr::span(self)
    }
}

impl AstNode for Program {
    fn node_type(&self) -> &'static str {
        "program"
    }

    fn display_label(&self) -> String {
        NodeRef::Program(self).display_label()
    }

    fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}
