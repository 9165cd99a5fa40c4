//! Read-only and mutating tree visitors.
//!
//! Traversal is deterministic left-to-right depth-first preorder and skips
//! absent child slots silently. The read-only walk is iterative so that
//! pathologically deep trees cannot overflow the stack; the mutating walk is
//! recursive because it threads the owning slot, and guards against deep
//! recursion with an explicit depth limit.

use crate::token::Token;
use crate::tree::{Node, Symbol};

/// Trees deeper than this abort the mutating walk instead of risking a
/// stack overflow. Parser output never comes close; only adversarial or
/// corrupted input would.
pub const MAX_MUTATING_DEPTH: usize = 256;

/// Read-only preorder visitor.
pub trait TreeVisitor {
    fn visit_leaf(&mut self, leaf: &Token);
    fn visit_node(&mut self, node: &Node);
}

/// Visits `symbol` and all of its descendants in preorder.
pub fn accept(symbol: &Symbol, visitor: &mut dyn TreeVisitor) {
    let mut stack: Vec<&Symbol> = vec![symbol];
    while let Some(current) = stack.pop() {
        match current {
            Symbol::Leaf(token) => visitor.visit_leaf(token),
            Symbol::Node(node) => {
                visitor.visit_node(node);
                for child in node.children().iter().rev().flatten() {
                    stack.push(child);
                }
            }
        }
    }
}

/// Mutating preorder visitor. The callback receives the owning slot so it
/// may replace or null out the subtree; the walk then descends into
/// whatever the slot holds afterwards.
pub trait MutatingTreeVisitor {
    fn visit(&mut self, slot: &mut Option<Symbol>);
}

/// Visits every non-null subtree under `slot` exactly once, handing each
/// visit the owning slot.
pub fn accept_mut(slot: &mut Option<Symbol>, visitor: &mut dyn MutatingTreeVisitor) {
    accept_mut_at_depth(slot, visitor, 0);
}

fn accept_mut_at_depth(
    slot: &mut Option<Symbol>,
    visitor: &mut dyn MutatingTreeVisitor,
    depth: usize,
) {
    assert!(
        depth <= MAX_MUTATING_DEPTH,
        "syntax tree deeper than {MAX_MUTATING_DEPTH} levels"
    );
    if slot.is_none() {
        return;
    }
    visitor.visit(slot);
    if let Some(Symbol::Node(node)) = slot {
        for child in node.children_mut() {
            accept_mut_at_depth(child, visitor, depth + 1);
        }
    }
}
