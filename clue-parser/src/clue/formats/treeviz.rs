//! Treeviz formatter for AST nodes
//!
//! One line per node, `type: label`, drawn with box connectors. The program root is implied and
//! not printed; its expressions are the top-level entries.

use crate::clue::ast::{AstNode, NodeRef, Program};

/// Labels longer than this many characters are cut and suffixed with `...`
pub const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(program: &Program) -> String {
    to_treeviz_str_with_width(program, DEFAULT_LABEL_WIDTH)
}

pub fn to_treeviz_str_with_width(program: &Program, label_width: usize) -> String {
    let mut result = String::new();
    append_children(
        &mut result,
        &NodeRef::Program(program).children(),
        "",
        label_width,
    );
    result
}

fn append_node(result: &mut String, node: NodeRef<'_>, prefix: &str, is_last: bool, width: usize) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = node.display_label();

    if label.is_empty() {
        result.push_str(&format!("{}{} {}\n", prefix, connector, node.node_type()));
    } else {
        result.push_str(&format!(
            "{}{} {}: {}\n",
            prefix,
            connector,
            node.node_type(),
            truncate(&label, width)
        ));
    }

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &node.children(), &new_prefix, width);
}

fn append_children(result: &mut String, children: &[NodeRef<'_>], prefix: &str, width: usize) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, *child, prefix, is_last, width);
    }
}
