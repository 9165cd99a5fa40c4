//! Process-wide rule registry.
//!
//! The mapping from rule name to factory is built once on first use and
//! read-only afterwards.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::rule::AnyLintRule;
use crate::rules::{
    CaseMissingDefaultRule, ForbidLineContinuationsRule, NoTrailingSpacesRule,
    UndersizedBinaryLiteralRule,
};

pub type RuleFactory = fn() -> AnyLintRule;

static REGISTRY: Lazy<BTreeMap<&'static str, RuleFactory>> = Lazy::new(|| {
    let mut registry: BTreeMap<&'static str, RuleFactory> = BTreeMap::new();
    registry.insert("undersized-binary-literal", || {
        AnyLintRule::SyntaxTree(Box::new(UndersizedBinaryLiteralRule::default()))
    });
    registry.insert("case-missing-default", || {
        AnyLintRule::SyntaxTree(Box::new(CaseMissingDefaultRule::default()))
    });
    registry.insert("forbid-line-continuations", || {
        AnyLintRule::TokenStream(Box::new(ForbidLineContinuationsRule::default()))
    });
    registry.insert("no-trailing-spaces", || {
        AnyLintRule::Line(Box::new(NoTrailingSpacesRule::default()))
    });
    registry
});

/// Instantiates a fresh rule by name.
pub fn create_rule(name: &str) -> Option<AnyLintRule> {
    REGISTRY.get(name).map(|factory| factory())
}

/// All registered rule names, sorted.
pub fn all_rule_names() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_knows_every_shipped_rule() {
        let names = all_rule_names();
        assert!(names.contains(&"undersized-binary-literal"));
        assert!(names.contains(&"case-missing-default"));
        assert!(names.contains(&"forbid-line-continuations"));
        assert!(names.contains(&"no-trailing-spaces"));
        // Sorted output.
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn created_rules_report_their_own_descriptor() {
        let rule = create_rule("case-missing-default").unwrap();
        assert_eq!(rule.descriptor().name, "case-missing-default");
        assert!(create_rule("no-such-rule").is_none());
    }
}
