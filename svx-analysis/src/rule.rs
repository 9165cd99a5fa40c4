//! Rule traits, descriptors and per-rule results.

use std::collections::BTreeSet;
use std::fmt;

use svx_syntax::context::SyntaxTreeContext;
use svx_syntax::token::Token;
use svx_syntax::tree::Symbol;

use crate::violation::LintViolation;

/// One configurable parameter of a rule.
#[derive(Debug, Clone, Copy)]
pub struct LintParam {
    pub key: &'static str,
    pub default: &'static str,
    pub desc: &'static str,
}

/// Static description of a rule: name, documentation topic, help text and
/// configurable parameters.
#[derive(Debug, Clone, Copy)]
pub struct LintRuleDescriptor {
    pub name: &'static str,
    pub topic: &'static str,
    pub desc: &'static str,
    pub params: &'static [LintParam],
}

/// A rule's end-of-analysis result.
#[derive(Debug, Clone)]
pub struct LintRuleStatus {
    pub descriptor: &'static LintRuleDescriptor,
    pub violations: BTreeSet<LintViolation>,
}

/// Error surfaced when a rule's configuration string is rejected; the rule
/// is then skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfigError {
    pub message: String,
}

impl RuleConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        RuleConfigError {
            message: message.into(),
        }
    }
}

impl fmt::Display for RuleConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule configuration error: {}", self.message)
    }
}

impl std::error::Error for RuleConfigError {}

/// Behaviour common to every rule flavour.
pub trait LintRule {
    fn descriptor(&self) -> &'static LintRuleDescriptor;

    /// Parses a `key=value,...` configuration string. The empty string
    /// selects the defaults; unknown keys are an error.
    fn configure(&mut self, configuration: &str) -> Result<(), RuleConfigError>;

    /// Returns the accumulated violations.
    fn report(&mut self) -> LintRuleStatus;
}

/// Rules invoked for every symbol of a context-aware preorder traversal.
pub trait SyntaxTreeLintRule: LintRule {
    fn handle_symbol(&mut self, symbol: &Symbol, context: &SyntaxTreeContext, source: &str);
}

/// Rules invoked for every token of the flat token array.
pub trait TokenStreamLintRule: LintRule {
    fn handle_token(&mut self, token: &Token, source: &str);
}

/// Rules invoked for every raw source line.
pub trait LineLintRule: LintRule {
    fn handle_line(&mut self, line: &str, line_number: usize, byte_offset: usize);
}

/// A rule of any flavour, as stored by the registry and the driver.
pub enum AnyLintRule {
    SyntaxTree(Box<dyn SyntaxTreeLintRule + Send>),
    TokenStream(Box<dyn TokenStreamLintRule + Send>),
    Line(Box<dyn LineLintRule + Send>),
}

impl AnyLintRule {
    pub fn descriptor(&self) -> &'static LintRuleDescriptor {
        match self {
            AnyLintRule::SyntaxTree(rule) => rule.descriptor(),
            AnyLintRule::TokenStream(rule) => rule.descriptor(),
            AnyLintRule::Line(rule) => rule.descriptor(),
        }
    }

    pub fn configure(&mut self, configuration: &str) -> Result<(), RuleConfigError> {
        match self {
            AnyLintRule::SyntaxTree(rule) => rule.configure(configuration),
            AnyLintRule::TokenStream(rule) => rule.configure(configuration),
            AnyLintRule::Line(rule) => rule.configure(configuration),
        }
    }

    pub fn report(&mut self) -> LintRuleStatus {
        match self {
            AnyLintRule::SyntaxTree(rule) => rule.report(),
            AnyLintRule::TokenStream(rule) => rule.report(),
            AnyLintRule::Line(rule) => rule.report(),
        }
    }
}
