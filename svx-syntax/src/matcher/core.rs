//! The matcher object and its inner-match strategies.

use std::borrow::Cow;

use super::bound_symbols::BoundSymbolManager;
use super::descent_path::descendants_along_path;
use crate::tree::{Symbol, SymbolTag};

/// Predicate gating a match at the current symbol.
pub type SymbolPredicate = fn(&Symbol) -> bool;

/// Transformation applied to a matched symbol before inner matchers run.
/// Each returned descendant is matched separately.
pub type SymbolTransformer = fn(&Symbol) -> Vec<&Symbol>;

#[derive(Debug, Clone)]
pub(super) enum Predicate {
    /// Always gates true; behavior comes from the inner matchers.
    Always,
    /// Matches symbols whose tag equals the target, stored by value.
    TagEquals(SymbolTag),
    Custom(SymbolPredicate),
}

impl Predicate {
    fn test(&self, symbol: &Symbol) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::TagEquals(tag) => symbol.tag() == *tag,
            Predicate::Custom(predicate) => predicate(symbol),
        }
    }
}

#[derive(Debug, Clone)]
pub(super) enum Transformer {
    /// Forwards the symbol itself.
    Identity,
    /// Forwards every descendant along the tag path.
    DescendPath(Vec<SymbolTag>),
    Custom(SymbolTransformer),
}

impl Transformer {
    fn apply<'a>(&self, symbol: &'a Symbol) -> Vec<&'a Symbol> {
        match self {
            Transformer::Identity => vec![symbol],
            Transformer::DescendPath(path) => descendants_along_path(symbol, path),
            Transformer::Custom(transformer) => transformer(symbol),
        }
    }
}

/// Strategy for combining inner matcher results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InnerMatchHandler {
    /// Every inner matcher must match; bindings kept only on full success.
    All,
    /// First matching inner matcher wins and commits its bindings.
    Any,
    /// Every matching inner matcher binds; at least one must match.
    Each,
    /// Single inner matcher, negated; never binds.
    Unless,
}

impl InnerMatchHandler {
    fn run<'a>(
        &self,
        symbol: &'a Symbol,
        inner_matchers: &[Matcher],
        manager: &mut BoundSymbolManager<'a>,
    ) -> bool {
        match self {
            InnerMatchHandler::All => {
                let checkpoint = manager.clone();
                for matcher in inner_matchers {
                    if !matcher.matches(symbol, manager) {
                        *manager = checkpoint;
                        return false;
                    }
                }
                true
            }
            InnerMatchHandler::Any => {
                for matcher in inner_matchers {
                    let mut lookahead = manager.clone();
                    if matcher.matches(symbol, &mut lookahead) {
                        *manager = lookahead;
                        return true;
                    }
                }
                false
            }
            InnerMatchHandler::Each => {
                let mut some_matched = false;
                for matcher in inner_matchers {
                    let backup = manager.clone();
                    if matcher.matches(symbol, manager) {
                        some_matched = true;
                    } else {
                        *manager = backup;
                    }
                }
                some_matched
            }
            InnerMatchHandler::Unless => {
                assert_eq!(inner_matchers.len(), 1, "unless takes exactly one matcher");
                let mut throwaway = BoundSymbolManager::new();
                !inner_matchers[0].matches(symbol, &mut throwaway)
            }
        }
    }
}

/// A nested tree-pattern matcher.
#[derive(Debug, Clone)]
pub struct Matcher {
    pub(super) predicate: Predicate,
    pub(super) transformer: Transformer,
    pub(super) handler: InnerMatchHandler,
    pub(super) inner_matchers: Vec<Matcher>,
    pub(super) bind_id: Option<Cow<'static, str>>,
}

impl Matcher {
    pub(super) fn new(
        predicate: Predicate,
        transformer: Transformer,
        handler: InnerMatchHandler,
        inner_matchers: Vec<Matcher>,
    ) -> Self {
        Matcher {
            predicate,
            transformer,
            handler,
            inner_matchers,
            bind_id: None,
        }
    }

    /// Matcher from a custom predicate, matching with the given strategy.
    pub fn from_predicate(
        predicate: SymbolPredicate,
        handler: InnerMatchHandler,
        inner_matchers: Vec<Matcher>,
    ) -> Self {
        Matcher::new(
            Predicate::Custom(predicate),
            Transformer::Identity,
            handler,
            inner_matchers,
        )
    }

    /// Returns true if this matcher and its inner matchers match `symbol`.
    ///
    /// On success, bindings from the match (including this matcher's own
    /// `bind_id`, if set) are added to `manager`; on failure the manager is
    /// left exactly as it was.
    pub fn matches<'a>(&self, symbol: &'a Symbol, manager: &mut BoundSymbolManager<'a>) -> bool {
        if !self.predicate.test(symbol) {
            return false;
        }
        let targets = self.transformer.apply(symbol);
        if targets.is_empty() {
            return false;
        }
        let mut any_target_matches = false;
        for target in targets {
            let inner_result = self.handler.run(target, &self.inner_matchers, manager);
            if inner_result {
                if let Some(id) = &self.bind_id {
                    manager.bind(id.clone(), target);
                }
            }
            any_target_matches |= inner_result;
        }
        any_target_matches
    }
}
