//! Tree-pattern matcher combinators.
//!
//! A matcher gates on a predicate at the current symbol, optionally
//! transforms the symbol into a set of descendants, and then runs inner
//! matchers under one of four combination strategies (all/any/each/unless).
//! Successful matches may bind the matched symbol to a capture id in a
//! [`BoundSymbolManager`]; failed attempts must leave the manager exactly
//! as they found it.

mod bound_symbols;
mod builders;
mod combinators;
mod core;
mod descent_path;

pub use bound_symbols::BoundSymbolManager;
pub use builders::{path_matcher, tag_matcher, BindableMatcher};
pub use combinators::{all_of, any_of, each_of, unless};
pub use core::{InnerMatchHandler, Matcher, SymbolPredicate, SymbolTransformer};
pub use descent_path::descendants_along_path;
