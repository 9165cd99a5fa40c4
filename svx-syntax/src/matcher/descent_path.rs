//! Path-directed descent used by path matchers.

use crate::tree::{Symbol, SymbolTag};

/// Returns every subtree reachable by following `path` tag-by-tag starting
/// from `symbol`'s children, branching at each level. The final path
/// element's tag must match the reported symbol.
///
/// The path must have at least one element.
pub fn descendants_along_path<'a>(symbol: &'a Symbol, path: &[SymbolTag]) -> Vec<&'a Symbol> {
    assert!(!path.is_empty(), "descent path must have at least one element");
    let mut found = Vec::new();
    if let Symbol::Node(node) = symbol {
        for child in node.children().iter().flatten() {
            aggregate_descendants(child, path, &mut found);
        }
    }
    found
}

fn aggregate_descendants<'a>(symbol: &'a Symbol, path: &[SymbolTag], found: &mut Vec<&'a Symbol>) {
    let (first, rest) = match path.split_first() {
        Some(split) => split,
        None => return,
    };
    if rest.is_empty() {
        if symbol.tag() == *first {
            found.push(symbol);
        }
        return;
    }
    // Intermediate path elements must be nodes with the expected tag.
    let node = match symbol {
        Symbol::Node(node) => node,
        Symbol::Leaf(_) => return,
    };
    if symbol.tag() != *first {
        return;
    }
    for child in node.children().iter().flatten() {
        aggregate_descendants(child, rest, found);
    }
}
