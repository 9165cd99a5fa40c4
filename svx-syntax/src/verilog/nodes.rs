//! Accessors into SystemVerilog CST shapes.
//!
//! These are deliberately tolerant: partial trees with error-recovery
//! nodes are common, so every accessor returns `Option` instead of
//! assuming the grammar position it was written against.

use super::{node_kinds as nk, token_kinds as tk};
use crate::token::Token;
use crate::tree::{NodeKind, Symbol};
use crate::tree_utils::find_first_subtree;

/// First identifier leaf under `symbol` in preorder.
pub fn first_identifier_leaf(symbol: &Symbol) -> Option<&Token> {
    find_first_subtree(symbol, &|s: &Symbol| {
        s.as_leaf().map_or(false, |t| t.kind == tk::SYMBOL_IDENTIFIER)
    })
    .and_then(Symbol::as_leaf)
}

fn named_declaration(symbol: &Symbol, kind: NodeKind) -> Option<&Token> {
    if !symbol.is_node_kind(kind) {
        return None;
    }
    first_identifier_leaf(symbol)
}

/// Name of a module declaration, e.g. "foo" in `module foo; endmodule`.
pub fn module_name(symbol: &Symbol) -> Option<&Token> {
    named_declaration(symbol, nk::MODULE_DECLARATION)
}

/// Name of a package declaration.
pub fn package_name(symbol: &Symbol) -> Option<&Token> {
    named_declaration(symbol, nk::PACKAGE_DECLARATION)
}

/// Name of a class declaration.
pub fn class_name(symbol: &Symbol) -> Option<&Token> {
    named_declaration(symbol, nk::CLASS_DECLARATION)
}

/// Name of a function declaration.
pub fn function_name(symbol: &Symbol) -> Option<&Token> {
    named_declaration(symbol, nk::FUNCTION_DECLARATION)
}

/// Name of a task declaration.
pub fn task_name(symbol: &Symbol) -> Option<&Token> {
    named_declaration(symbol, nk::TASK_DECLARATION)
}

/// Label of a labeled begin block (`begin : label`), if present.
pub fn begin_label(symbol: &Symbol) -> Option<&Token> {
    if !symbol.is_node_kind(nk::SEQ_BLOCK) && !symbol.is_node_kind(nk::GENERATE_BLOCK) {
        return None;
    }
    first_identifier_leaf(symbol)
}

/// Declared name of a register variable or gate instance.
pub fn instance_name(symbol: &Symbol) -> Option<&Token> {
    if !symbol.is_node_kind(nk::REGISTER_VARIABLE) && !symbol.is_node_kind(nk::GATE_INSTANCE) {
        return None;
    }
    first_identifier_leaf(symbol)
}
