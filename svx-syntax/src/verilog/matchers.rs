//! Matchers for the SystemVerilog constructs the lint rules inspect.

use super::{node_kinds as nk, token_kinds as tk};
use crate::matcher::{path_matcher, tag_matcher, BindableMatcher, Matcher};
use crate::tree::{leaf_tag, node_tag};

/// Matches a number node, e.g. the whole of `32'h0`.
pub fn node_number(inner_matchers: Vec<Matcher>) -> BindableMatcher {
    tag_matcher(node_tag(nk::NUMBER), inner_matchers)
}

/// Matches the constant width of a sized number, e.g. "32" in `32'h0`.
pub fn number_has_constant_width() -> BindableMatcher {
    path_matcher(vec![leaf_tag(tk::DEC_NUMBER)], vec![])
}

/// Matches the `'BASE DIGITS` part of a sized number, e.g. "'b1111" in
/// `4'b1111`.
pub fn number_has_based_literal() -> BindableMatcher {
    path_matcher(vec![node_tag(nk::BASE_DIGITS)], vec![])
}

/// Matches a case statement node.
pub fn node_case_statement(inner_matchers: Vec<Matcher>) -> BindableMatcher {
    tag_matcher(node_tag(nk::CASE_STATEMENT), inner_matchers)
}

/// Matches when a case statement carries the `unique` qualifier.
pub fn has_unique_qualifier() -> BindableMatcher {
    path_matcher(vec![leaf_tag(tk::KW_UNIQUE)], vec![])
}

/// Matches when a case statement's item list contains a default item.
pub fn has_default_case() -> BindableMatcher {
    path_matcher(
        vec![node_tag(nk::CASE_ITEM_LIST), node_tag(nk::DEFAULT_ITEM)],
        vec![],
    )
}

/// Matches a string literal node.
pub fn node_string_literal(inner_matchers: Vec<Matcher>) -> BindableMatcher {
    tag_matcher(node_tag(nk::STRING_LITERAL), inner_matchers)
}
