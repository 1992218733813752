//! Traversal and position-based node lookup

use super::node_ref::{AstNode, NodeRef};
use super::nodes::Program;

impl Program {
    /// Depth-first pre-order walk over every node, the program itself included at depth 0
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(NodeRef<'a>, usize),
    {
        let mut stack = vec![(NodeRef::Program(self), 0usize)];
        while let Some((node, depth)) = stack.pop() {
            visit(node, depth);
            for child in node.children().into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    /// Total number of nodes in the tree, the program included
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _| count += 1);
        count
    }
}

/// The innermost node whose span contains `offset`
pub fn find_node_at(program: &Program, offset: usize) -> Option<NodeRef<'_>> {
    let contains = |node: &NodeRef<'_>| {
        let span = node.span();
        span.start <= offset && offset < span.end
    };

    let mut current = NodeRef::Program(program);
    if !contains(&current) {
        return None;
    }

    while let Some(child) = current.children().into_iter().find(|c| contains(c)) {
        current = child;
    }
    Some(current)
}
