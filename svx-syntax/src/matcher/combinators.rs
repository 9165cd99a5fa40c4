//! Core combinators over matchers.
//!
//! These hold any number of inner matchers and derive all behavior from
//! them; their own predicate is always true and no transformation occurs.
//! None of them is bindable: a combinator match may correspond to multiple
//! symbols, so there is nothing well-defined to bind.

use super::core::{InnerMatchHandler, Matcher, Predicate, Transformer};

fn combinator(handler: InnerMatchHandler, inner_matchers: Vec<Matcher>) -> Matcher {
    Matcher::new(
        Predicate::Always,
        Transformer::Identity,
        handler,
        inner_matchers,
    )
}

/// Matches iff every inner matcher matches; bindings are kept only when all
/// succeed. Inner matchers are fully commutative.
pub fn all_of(inner_matchers: Vec<Matcher>) -> Matcher {
    assert!(!inner_matchers.is_empty(), "all_of requires at least one inner matcher");
    combinator(InnerMatchHandler::All, inner_matchers)
}

/// Matches iff at least one inner matcher matches; only the first match
/// binds symbols.
pub fn any_of(inner_matchers: Vec<Matcher>) -> Matcher {
    assert!(!inner_matchers.is_empty(), "any_of requires at least one inner matcher");
    combinator(InnerMatchHandler::Any, inner_matchers)
}

/// Matches iff at least one inner matcher matches; every matching inner
/// matcher binds symbols.
pub fn each_of(inner_matchers: Vec<Matcher>) -> Matcher {
    assert!(!inner_matchers.is_empty(), "each_of requires at least one inner matcher");
    combinator(InnerMatchHandler::Each, inner_matchers)
}

/// Logical negation of a single matcher; never binds anything.
pub fn unless(inner_matcher: Matcher) -> Matcher {
    combinator(InnerMatchHandler::Unless, vec![inner_matcher])
}
