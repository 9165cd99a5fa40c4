//! Context-aware traversal: the ancestor chain every path-dependent rule
//! and column scanner relies on.

use crate::tree::{Node, NodeKind, Symbol};

/// The ordered list of ancestor nodes from the root down to (but not
/// including) the symbol currently being visited.
#[derive(Debug, Default, Clone)]
pub struct SyntaxTreeContext<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> SyntaxTreeContext<'a> {
    pub fn new() -> Self {
        SyntaxTreeContext { stack: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The innermost ancestor, if any.
    pub fn top(&self) -> Option<&'a Node> {
        self.stack.last().copied()
    }

    /// True if the immediate parent has the given kind.
    pub fn direct_parent_is(&self, kind: NodeKind) -> bool {
        self.top().map_or(false, |node| node.tag() == kind)
    }

    /// True if the innermost ancestors match `kinds`, most-recent first.
    pub fn direct_parents_are(&self, kinds: &[NodeKind]) -> bool {
        if kinds.len() > self.stack.len() {
            return false;
        }
        self.stack
            .iter()
            .rev()
            .zip(kinds.iter())
            .all(|(node, kind)| node.tag() == *kind)
    }

    /// True if any ancestor has the given kind.
    pub fn is_inside(&self, kind: NodeKind) -> bool {
        self.stack.iter().any(|node| node.tag() == kind)
    }

    /// Scans ancestors innermost-first; the nearest one whose kind is in
    /// either set must be in `trigger_set` for this to succeed.
    pub fn is_inside_first(&self, stop_set: &[NodeKind], trigger_set: &[NodeKind]) -> bool {
        for node in self.stack.iter().rev() {
            let kind = node.tag();
            if trigger_set.contains(&kind) {
                return true;
            }
            if stop_set.contains(&kind) {
                return false;
            }
        }
        false
    }

    /// The nearest ancestor satisfying `predicate`, innermost-first.
    pub fn nearest_parent_matching<F>(&self, predicate: F) -> Option<&'a Node>
    where
        F: Fn(&Node) -> bool,
    {
        self.stack.iter().rev().copied().find(|node| predicate(node))
    }

    /// Snapshot of the ancestor kinds, outermost-first.
    pub fn kinds(&self) -> Vec<NodeKind> {
        self.stack.iter().map(|node| node.tag()).collect()
    }

    fn push(&mut self, node: &'a Node) {
        self.stack.push(node);
    }

    fn pop(&mut self) {
        self.stack.pop();
    }
}

/// Walks the tree in preorder, handing every symbol (leaves included) to
/// `visit` together with its ancestor context. The callback returns `false`
/// to cancel the walk; the function then returns `false` with partial
/// effects discarded by the caller.
///
/// The walk is iterative, so context traversal has no recursion limit.
pub fn walk_with_context<'a, F>(root: &'a Symbol, visit: &mut F) -> bool
where
    F: FnMut(&'a Symbol, &SyntaxTreeContext<'a>) -> bool,
{
    enum Step<'a> {
        Enter(&'a Symbol),
        Exit,
    }

    let mut context = SyntaxTreeContext::new();
    let mut stack = vec![Step::Enter(root)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(symbol) => {
                if !visit(symbol, &context) {
                    return false;
                }
                if let Symbol::Node(node) = symbol {
                    stack.push(Step::Exit);
                    for child in node.children().iter().rev().flatten() {
                        stack.push(Step::Enter(child));
                    }
                    context.push(node);
                }
            }
            Step::Exit => context.pop(),
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{leaf, node};
    use crate::tree::SymbolKind;

    #[test]
    fn context_reflects_ancestor_chain() {
        let tree = node(1, vec![Some(node(2, vec![Some(leaf(30))]))]);
        let mut seen_leaf_context = Vec::new();
        walk_with_context(&tree, &mut |symbol, context| {
            if symbol.kind() == SymbolKind::Leaf {
                seen_leaf_context = context.kinds();
                assert!(context.direct_parent_is(NodeKind(2)));
                assert!(context.direct_parents_are(&[NodeKind(2), NodeKind(1)]));
                assert!(context.is_inside(NodeKind(1)));
                assert!(!context.is_inside(NodeKind(9)));
                let nearest = context.nearest_parent_matching(|node| node.tag() == NodeKind(1));
                assert_eq!(nearest.map(|node| node.tag()), Some(NodeKind(1)));
            }
            true
        });
        assert_eq!(seen_leaf_context, vec![NodeKind(1), NodeKind(2)]);
    }

    #[test]
    fn is_inside_first_honors_stop_set() {
        let tree = node(1, vec![Some(node(2, vec![Some(leaf(30))]))]);
        walk_with_context(&tree, &mut |symbol, context| {
            if symbol.kind() == SymbolKind::Leaf {
                // Nearest listed ancestor is 2, which is a trigger.
                assert!(context.is_inside_first(&[NodeKind(1)], &[NodeKind(2)]));
                // Nearest listed ancestor is 2, which here is a stop.
                assert!(!context.is_inside_first(&[NodeKind(2)], &[NodeKind(1)]));
            }
            true
        });
    }

    #[test]
    fn cancelled_walk_stops_early() {
        let tree = node(1, vec![Some(leaf(10)), Some(leaf(11))]);
        let mut visited = 0;
        let completed = walk_with_context(&tree, &mut |_, _| {
            visited += 1;
            visited < 2
        });
        assert!(!completed);
        assert_eq!(visited, 2);
    }
}
