//! Tree-building helpers for tests.
//!
//! Matcher and traversal tests care about tags and shapes, not about real
//! grammar kinds, so these constructors take bare integers and default to
//! empty spans unless a test needs real offsets.

use std::ops::Range;

use crate::token::{Token, TokenKind};
use crate::tree::{Node, NodeKind, Symbol};

/// A leaf with the given tag and an empty span.
pub fn leaf(tag: u16) -> Symbol {
    Symbol::Leaf(Token::new(TokenKind(tag), 0..0))
}

/// A leaf with the given tag spanning `span`.
pub fn spanned_leaf(tag: u16, span: Range<usize>) -> Symbol {
    Symbol::Leaf(Token::new(TokenKind(tag), span))
}

/// A node with the given tag and child slots.
pub fn node(tag: u16, children: Vec<Option<Symbol>>) -> Symbol {
    Symbol::Node(Node::new(NodeKind(tag), children))
}
