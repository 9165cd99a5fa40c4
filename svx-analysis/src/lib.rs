//! Lint-rule framework of the svx toolchain.
//!
//! Rules come in three flavours: syntax-tree rules see every CST symbol
//! together with its ancestor context, token-stream rules see the flat
//! token array, and line rules see raw source lines. A process-wide
//! registry maps rule names to factories; the linter driver instantiates
//! the selected rules, walks the inputs once and collects one
//! [`LintRuleStatus`] per rule, with violations deduplicated and sorted.

pub mod config_utils;
pub mod linter;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod violation;

pub use linter::{Linter, LintError};
pub use registry::{all_rule_names, create_rule};
pub use rule::{
    AnyLintRule, LineLintRule, LintParam, LintRule, LintRuleDescriptor, LintRuleStatus,
    RuleConfigError, SyntaxTreeLintRule, TokenStreamLintRule,
};
pub use violation::{AutoFix, Edit, LintViolation};
