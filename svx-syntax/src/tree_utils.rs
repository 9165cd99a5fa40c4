//! Search and surgery utilities over concrete syntax trees.

use std::ops::Range;

use crate::token::Token;
use crate::tree::{Symbol, SymbolKind};

/// First leaf in depth-first order, skipping absent slots.
pub fn leftmost_leaf(symbol: &Symbol) -> Option<&Token> {
    match symbol {
        Symbol::Leaf(token) => Some(token),
        Symbol::Node(node) => node
            .children()
            .iter()
            .flatten()
            .find_map(leftmost_leaf),
    }
}

/// Last leaf in depth-first order, skipping absent slots.
pub fn rightmost_leaf(symbol: &Symbol) -> Option<&Token> {
    match symbol {
        Symbol::Leaf(token) => Some(token),
        Symbol::Node(node) => node
            .children()
            .iter()
            .rev()
            .flatten()
            .find_map(rightmost_leaf),
    }
}

/// The half-open source byte range spanned by the leftmost and rightmost
/// leaves, or `None` for a leafless tree.
pub fn string_span_of(symbol: &Symbol) -> Option<Range<usize>> {
    let left = leftmost_leaf(symbol)?;
    let right = rightmost_leaf(symbol)?;
    Some(left.span.start..right.span.end)
}

/// Descends while the node has exactly one non-null child.
pub fn descend_through_singletons(symbol: &Symbol) -> &Symbol {
    let mut current = symbol;
    while let Symbol::Node(node) = current {
        if node.len() == 1 {
            if let Some(only) = node.child(0) {
                current = only;
                continue;
            }
        }
        break;
    }
    current
}

/// First symbol (in-order depth-first) satisfying `predicate`. Once a
/// symbol matches, its subtree is not searched further.
pub fn find_first_subtree<'a, F>(symbol: &'a Symbol, predicate: &F) -> Option<&'a Symbol>
where
    F: Fn(&Symbol) -> bool,
{
    if predicate(symbol) {
        return Some(symbol);
    }
    if let Symbol::Node(node) = symbol {
        for child in node.children().iter().flatten() {
            if let Some(found) = find_first_subtree(child, predicate) {
                return Some(found);
            }
        }
    }
    None
}

/// Last symbol (in-order depth-first) satisfying `predicate`.
pub fn find_last_subtree<'a, F>(symbol: &'a Symbol, predicate: &F) -> Option<&'a Symbol>
where
    F: Fn(&Symbol) -> bool,
{
    let mut result = None;
    find_last_impl(symbol, predicate, &mut result);
    result
}

fn find_last_impl<'a, F>(symbol: &'a Symbol, predicate: &F, result: &mut Option<&'a Symbol>)
where
    F: Fn(&Symbol) -> bool,
{
    if predicate(symbol) {
        *result = Some(symbol);
    }
    if let Symbol::Node(node) = symbol {
        for child in node.children().iter().flatten() {
            find_last_impl(child, predicate, result);
        }
    }
}

/// Replaces the tree with the shallowest subtree fully contained in
/// `range`, or `None` if no subtree fits.
///
/// Mirrors the zoom operation: find the first subtree whose leftmost leaf
/// starts at or after `range.start`, then keep taking the leftmost child
/// while the subtree's rightmost leaf ends past `range.end`.
pub fn trim_tree_to_range(tree: &mut Option<Symbol>, range: Range<usize>) {
    let taken = tree.take();
    *tree = taken.and_then(|symbol| zoom(symbol, &range));
}

fn zoom(symbol: Symbol, range: &Range<usize>) -> Option<Symbol> {
    let mut current = first_subtree_starting_at(symbol, range.start)?;
    loop {
        let end = rightmost_leaf(&current).map(|token| token.span.end);
        match end {
            Some(end) if end > range.end => {
                current = match current {
                    Symbol::Leaf(_) => return None,
                    Symbol::Node(node) => node.into_children().into_iter().flatten().next()?,
                };
            }
            _ => return Some(current),
        }
    }
}

fn first_subtree_starting_at(symbol: Symbol, offset: usize) -> Option<Symbol> {
    let starts_in_range = leftmost_leaf(&symbol).map_or(false, |token| token.span.start >= offset);
    if starts_in_range {
        return Some(symbol);
    }
    match symbol {
        Symbol::Leaf(_) => None,
        Symbol::Node(node) => {
            for child in node.into_children().into_iter().flatten() {
                if let Some(found) = first_subtree_starting_at(child, offset) {
                    return Some(found);
                }
            }
            None
        }
    }
}

/// Drops every leaf whose text begins strictly after `offset`, bubbling up
/// parents that become empty.
pub fn prune_tree_after_offset(tree: &mut Option<Symbol>, offset: usize) {
    if let Some(symbol) = tree {
        if prune_from_right(symbol, offset) {
            *tree = None;
        }
    }
}

// Returns true if the symbol itself should be deleted by its parent.
fn prune_from_right(symbol: &mut Symbol, offset: usize) -> bool {
    match symbol {
        Symbol::Leaf(token) => token.span.start > offset,
        Symbol::Node(node) => {
            let mut prune_count = 0;
            for child in node.children_mut().iter_mut().rev() {
                match child {
                    None => prune_count += 1,
                    Some(subtree) => {
                        if prune_from_right(subtree, offset) {
                            prune_count += 1;
                        } else {
                            // Token locations are monotonic, so the first
                            // kept child ends the scan.
                            break;
                        }
                    }
                }
            }
            for _ in 0..prune_count {
                node.pop_back();
            }
            node.is_empty()
        }
    }
}
