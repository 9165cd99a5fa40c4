//! Builders for the bindable matcher flavours.

use std::borrow::Cow;

use super::core::{InnerMatchHandler, Matcher, Predicate, Transformer};
use crate::tree::SymbolTag;

/// A matcher that is allowed to bind its matched symbol to a capture id.
///
/// Only tag matchers and path matchers are bindable; the combinators are
/// not, because a combinator match may correspond to multiple symbols. The
/// type system enforces that restriction: `.bind()` exists only here.
#[derive(Debug, Clone)]
pub struct BindableMatcher {
    matcher: Matcher,
}

impl BindableMatcher {
    pub(super) fn new(matcher: Matcher) -> Self {
        BindableMatcher { matcher }
    }

    /// Binds the matched symbol to `id` and returns the finished matcher.
    pub fn bind(mut self, id: impl Into<Cow<'static, str>>) -> Matcher {
        self.matcher.bind_id = Some(id.into());
        self.matcher
    }

    /// Finishes the matcher without binding.
    pub fn matcher(self) -> Matcher {
        self.matcher
    }
}

impl From<BindableMatcher> for Matcher {
    fn from(bindable: BindableMatcher) -> Matcher {
        bindable.matcher
    }
}

/// Matches symbols whose tag equals `tag` and that satisfy every inner
/// matcher. The tag is stored by value; construction allocates nothing
/// beyond the inner matcher list.
pub fn tag_matcher(tag: SymbolTag, inner_matchers: Vec<Matcher>) -> BindableMatcher {
    BindableMatcher::new(Matcher::new(
        Predicate::TagEquals(tag),
        Transformer::Identity,
        InnerMatchHandler::All,
        inner_matchers,
    ))
}

/// Matches when at least one descendant found along `path` (starting from
/// the examined symbol's children) satisfies every inner matcher. The bound
/// symbols are the descendants found along the path.
pub fn path_matcher(path: Vec<SymbolTag>, inner_matchers: Vec<Matcher>) -> BindableMatcher {
    assert!(!path.is_empty(), "path matcher requires a non-empty path");
    BindableMatcher::new(Matcher::new(
        Predicate::Always,
        Transformer::DescendPath(path),
        InnerMatchHandler::All,
        inner_matchers,
    ))
}
