//! Whole-tree matcher search.

use crate::context::{walk_with_context, SyntaxTreeContext};
use crate::matcher::{BoundSymbolManager, Matcher};
use crate::tree::{NodeKind, Symbol};

/// One search hit: the matched symbol plus a snapshot of its ancestor
/// kinds, outermost-first.
#[derive(Debug, Clone)]
pub struct TreeSearchMatch<'a> {
    pub symbol: &'a Symbol,
    pub context: Vec<NodeKind>,
}

/// Collects every symbol under `root` (root included) that the matcher
/// accepts, in deterministic preorder.
pub fn search_syntax_tree<'a>(root: &'a Symbol, matcher: &Matcher) -> Vec<TreeSearchMatch<'a>> {
    search_syntax_tree_filtered(root, matcher, |_| true)
}

/// Like [`search_syntax_tree`], with an additional context predicate that
/// further qualifies the matches of interest.
pub fn search_syntax_tree_filtered<'a, F>(
    root: &'a Symbol,
    matcher: &Matcher,
    context_predicate: F,
) -> Vec<TreeSearchMatch<'a>>
where
    F: Fn(&SyntaxTreeContext<'a>) -> bool,
{
    let mut matches = Vec::new();
    walk_with_context(root, &mut |symbol, context| {
        let mut manager = BoundSymbolManager::new();
        if matcher.matches(symbol, &mut manager) && context_predicate(context) {
            matches.push(TreeSearchMatch {
                symbol,
                context: context.kinds(),
            });
        }
        true
    });
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::tag_matcher;
    use crate::testing::{leaf, node};
    use crate::tree::{node_tag, NodeKind};

    #[test]
    fn search_finds_all_matches_in_preorder() {
        let tree = node(
            1,
            vec![
                Some(node(2, vec![Some(leaf(7))])),
                Some(node(2, vec![])),
            ],
        );
        let matcher = tag_matcher(node_tag(NodeKind(2)), vec![]).matcher();
        let matches = search_syntax_tree(&tree, &matcher);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].context, vec![NodeKind(1)]);
    }

    #[test]
    fn context_predicate_filters_matches() {
        let tree = node(1, vec![Some(node(2, vec![Some(node(2, vec![]))]))]);
        let matcher = tag_matcher(node_tag(NodeKind(2)), vec![]).matcher();
        let matches = search_syntax_tree_filtered(&tree, &matcher, |context| {
            context.direct_parent_is(NodeKind(2))
        });
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].context, vec![NodeKind(1), NodeKind(2)]);
    }
}
