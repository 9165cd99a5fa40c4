//! The token-partition tree.

use crate::unwrapped_line::UnwrappedLine;

/// Nested tree of unwrapped lines. Leaves span contiguous, disjoint token
/// ranges; a parent's token range equals the concatenation of its
/// children's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPartitionTree {
    pub value: UnwrappedLine,
    pub children: Vec<TokenPartitionTree>,
}

impl TokenPartitionTree {
    pub fn leaf(value: UnwrappedLine) -> Self {
        TokenPartitionTree {
            value,
            children: Vec::new(),
        }
    }

    pub fn with_children(value: UnwrappedLine, children: Vec<TokenPartitionTree>) -> Self {
        TokenPartitionTree { value, children }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Collects the tree's leaves (concrete lines) in order.
    pub fn leaves(&self) -> Vec<&UnwrappedLine> {
        let mut lines = Vec::new();
        self.collect_leaves(&mut lines);
        lines
    }

    fn collect_leaves<'a>(&'a self, lines: &mut Vec<&'a UnwrappedLine>) {
        if self.is_leaf() {
            lines.push(&self.value);
        } else {
            for child in &self.children {
                child.collect_leaves(lines);
            }
        }
    }

    /// Checks the parent-covers-children invariant for this node.
    pub fn range_is_consistent(&self) -> bool {
        if self.is_leaf() {
            return true;
        }
        let first = self.children.first().map(|c| c.value.tokens.start);
        let last = self.children.last().map(|c| c.value.tokens.end);
        let contiguous = self
            .children
            .windows(2)
            .all(|pair| pair[0].value.tokens.end == pair[1].value.tokens.start);
        contiguous
            && first == Some(self.value.tokens.start)
            && last == Some(self.value.tokens.end)
            && self.children.iter().all(TokenPartitionTree::range_is_consistent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unwrapped_line::PartitionPolicy;

    fn line(range: std::ops::Range<usize>) -> UnwrappedLine {
        UnwrappedLine::new(0, range, PartitionPolicy::FitOnLineElseExpand)
    }

    #[test]
    fn leaves_come_back_in_order() {
        let tree = TokenPartitionTree::with_children(
            line(0..4),
            vec![
                TokenPartitionTree::leaf(line(0..2)),
                TokenPartitionTree::leaf(line(2..4)),
            ],
        );
        assert!(tree.range_is_consistent());
        let ranges: Vec<_> = tree.leaves().iter().map(|l| l.tokens.clone()).collect();
        assert_eq!(ranges, vec![0..2, 2..4]);
    }

    #[test]
    fn gap_between_children_is_inconsistent() {
        let tree = TokenPartitionTree::with_children(
            line(0..4),
            vec![
                TokenPartitionTree::leaf(line(0..1)),
                TokenPartitionTree::leaf(line(2..4)),
            ],
        );
        assert!(!tree.range_is_consistent());
    }
}
