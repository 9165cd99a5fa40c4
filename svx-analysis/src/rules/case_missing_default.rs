//! Requires a default item in case statements without a `unique`
//! qualifier.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

use svx_syntax::context::SyntaxTreeContext;
use svx_syntax::matcher::{BoundSymbolManager, Matcher};
use svx_syntax::tree::Symbol;
use svx_syntax::tree_utils::leftmost_leaf;
use svx_syntax::verilog::matchers::{
    has_default_case, has_unique_qualifier, node_case_statement,
};
use svx_syntax::verilog::node_kinds as nk;

use crate::config_utils::parse_name_values;
use crate::rule::{
    LintRule, LintRuleDescriptor, LintRuleStatus, RuleConfigError, SyntaxTreeLintRule,
};
use crate::violation::LintViolation;

static DESCRIPTOR: LintRuleDescriptor = LintRuleDescriptor {
    name: "case-missing-default",
    topic: "case-statements",
    desc: "Checks that a default case-item is always defined unless the case \
           statement has the `unique` qualifier.",
    params: &[],
};

static MESSAGE: &str = "Explicitly define a default case for every case statement \
                        or add `unique` qualifier to the case statement.";

static UNIQUE_CASE_MATCHER: Lazy<Matcher> =
    Lazy::new(|| node_case_statement(vec![has_unique_qualifier().into()]).matcher());

static DEFAULT_CASE_MATCHER: Lazy<Matcher> =
    Lazy::new(|| node_case_statement(vec![has_default_case().into()]).matcher());

#[derive(Default)]
pub struct CaseMissingDefaultRule {
    violations: BTreeSet<LintViolation>,
}

impl LintRule for CaseMissingDefaultRule {
    fn descriptor(&self) -> &'static LintRuleDescriptor {
        &DESCRIPTOR
    }

    fn configure(&mut self, configuration: &str) -> Result<(), RuleConfigError> {
        parse_name_values(configuration, &mut [])
    }

    fn report(&mut self) -> LintRuleStatus {
        LintRuleStatus {
            descriptor: &DESCRIPTOR,
            violations: std::mem::take(&mut self.violations),
        }
    }
}

impl SyntaxTreeLintRule for CaseMissingDefaultRule {
    fn handle_symbol(&mut self, symbol: &Symbol, context: &SyntaxTreeContext, _source: &str) {
        if !symbol.is_node_kind(nk::CASE_STATEMENT) {
            return;
        }
        let mut manager = BoundSymbolManager::new();
        if UNIQUE_CASE_MATCHER.matches(symbol, &mut manager)
            || DEFAULT_CASE_MATCHER.matches(symbol, &mut manager)
        {
            return;
        }
        if let Some(token) = leftmost_leaf(symbol) {
            self.violations
                .insert(LintViolation::new(token.clone(), MESSAGE, context.kinds()));
        }
    }
}
