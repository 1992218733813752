//! Canonical Clue source
//!
//! Renders a [Program] back to Clue text: one top-level expression per line, non-empty blocks
//! broken over lines and indented by four spaces, empty blocks as `{}`. The grammar ignores
//! whitespace, so parsing the output gives back a tree of the same shape.

use crate::clue::ast::{Block, Expr, MatchExpr, Program};

const INDENT: &str = "    ";

pub fn to_clue_source(program: &Program) -> String {
    let mut out = String::new();
    for expr in &program.body {
        write_expr(&mut out, expr, 0);
        out.push('\n');
    }
    out
}

fn write_expr(out: &mut String, expr: &Expr, level: usize) {
    match expr {
        Expr::Block(block) => write_block(out, block, level),
        Expr::Number(number) => out.push_str(&number.literal),
        Expr::LocalDecl(decl) => {
            out.push_str("local ");
            out.push_str(decl.name.as_str());
            out.push_str(" = ");
            write_expr(out, &decl.init, level);
        }
        Expr::If(stmt) => {
            out.push_str("if ");
            write_expr(out, &stmt.if_block.condition, level);
            out.push(' ');
            write_block(out, &stmt.if_block.body, level);
            for elseif in &stmt.elseif_blocks {
                out.push_str(" elseif ");
                write_expr(out, &elseif.condition, level);
                out.push(' ');
                write_block(out, &elseif.body, level);
            }
            if let Some(else_block) = &stmt.else_block {
                out.push_str(" else ");
                write_block(out, &else_block.body, level);
            }
        }
        Expr::Match(stmt) => {
            out.push_str("match ");
            write_expr(out, &stmt.scrutinee, level);
            out.push_str(" {\n");
            for case in &stmt.block.cases {
                out.push_str(&INDENT.repeat(level + 1));
                match &case.pattern {
                    MatchExpr::Default { .. } => out.push_str("default"),
                    MatchExpr::Expr(pattern) => write_expr(out, pattern, level + 1),
                }
                out.push_str(" => ");
                write_block(out, &case.body, level + 1);
                out.push('\n');
            }
            out.push_str(&INDENT.repeat(level));
            out.push('}');
        }
        Expr::Try(stmt) => {
            out.push_str("try ");
            write_expr(out, &stmt.try_block.guarded, level);
            out.push(' ');
            write_block(out, &stmt.try_block.recovery, level);
            if let Some(catch) = &stmt.catch_block {
                out.push_str(" catch ");
                if let Some(binding) = &catch.binding {
                    out.push_str(binding.as_str());
                    out.push(' ');
                }
                write_block(out, &catch.body, level);
            }
        }
    }
}

fn write_block(out: &mut String, block: &Block, level: usize) {
    if block.exprs.is_empty() {
        out.push_str("{}");
        return;
    }

    out.push_str("{\n");
    for expr in &block.exprs {
        out.push_str(&INDENT.repeat(level + 1));
        write_expr(out, expr, level + 1);
        out.push('\n');
    }
    out.push_str(&INDENT.repeat(level));
    out.push('}');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue::parsing::parse;

    fn canonical(source: &str) -> String {
        to_clue_source(&parse(source).unwrap())
    }

    #[test]
    fn test_flat_expressions() {
        assert_eq!(canonical("1   2.5\n{}"), "1\n2.5\n{}\n");
        assert_eq!(canonical("local  x=5"), "local x = 5\n");
    }

    #[test]
    fn test_nested_blocks_indent() {
        assert_eq!(canonical("{1 {2}}"), "{\n    1\n    {\n        2\n    }\n}\n");
    }

    #[test]
    fn test_if_chain() {
        assert_eq!(
            canonical("if 1 {} elseif 2 {} else {3}"),
            "if 1 {} elseif 2 {} else {\n    3\n}\n"
        );
    }

    #[test]
    fn test_match_and_try() {
        assert_eq!(
            canonical("match 1 { default => {} 2 => {3} }"),
            "match 1 {\n    default => {}\n    2 => {\n        3\n    }\n}\n"
        );
        assert_eq!(canonical("try 1 {} catch e {}"), "try 1 {} catch e {}\n");
        assert_eq!(canonical("try 1 {} catch {}"), "try 1 {} catch {}\n");
    }

    #[test]
    fn test_output_is_a_fixed_point() {
        let source = "match {1} { if 1 {} => { try 2 {} } default => {} }";
        let once = canonical(source);
        assert_eq!(canonical(&once), once);
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(canonical(""), "");
    }
}
