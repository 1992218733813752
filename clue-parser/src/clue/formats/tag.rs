//! XML-like AST tag serialization
//!
//! Serializes the tree to tags that mirror it one to one.
//!
//! ## Format
//!
//! - Node type → tag name
//! - Display label (literal, name, counts) → text content
//! - Children → nested in a `<children>` tag
//!
//! ## Example
//!
//! ```text
//! <program>1 expression<children>
//!   <local_decl>x<children>
//!     <number>5</number>
//!   </children></local_decl>
//! </children></program>
//! ```

use crate::clue::ast::{AstNode, NodeRef, Program};

/// Serialize a program to AST tag format
pub fn serialize_ast_tag(program: &Program) -> String {
    let mut output = String::new();
    serialize_node(NodeRef::Program(program), 0, &mut output);
    output
}

fn serialize_node(node: NodeRef<'_>, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    let tag = node.node_type();
    let children = node.children();

    output.push_str(&format!("{}<{}>", indent, tag));
    output.push_str(&escape_xml(&node.display_label()));

    if children.is_empty() {
        output.push_str(&format!("</{}>\n", tag));
    } else {
        output.push_str("<children>\n");
        for child in children {
            serialize_node(child, indent_level + 1, output);
        }
        output.push_str(&format!("{}</children></{}>\n", indent, tag));
    }
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
