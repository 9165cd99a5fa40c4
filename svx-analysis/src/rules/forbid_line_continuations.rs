//! Forbids `\` line continuations inside string literals.

use std::collections::BTreeSet;

use svx_syntax::token::Token;
use svx_syntax::verilog::token_kinds as tk;

use crate::config_utils::parse_name_values;
use crate::rule::{
    LintRule, LintRuleDescriptor, LintRuleStatus, RuleConfigError, TokenStreamLintRule,
};
use crate::violation::LintViolation;

static DESCRIPTOR: LintRuleDescriptor = LintRuleDescriptor {
    name: "forbid-line-continuations",
    topic: "forbid-line-continuations",
    desc: "Checks that there are no occurrences of `\\` when breaking a string \
           literal line. Use the concatenation operator with braces instead.",
    params: &[],
};

static MESSAGE: &str =
    "The lines can't be continued with '\\', use concatenation operator with braces";

#[derive(Default)]
pub struct ForbidLineContinuationsRule {
    violations: BTreeSet<LintViolation>,
}

impl LintRule for ForbidLineContinuationsRule {
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

impl TokenStreamLintRule for ForbidLineContinuationsRule {
    fn handle_token(&mut self, token: &Token, source: &str) {
        if token.kind != tk::STRING_LITERAL {
            return;
        }
        let text = token.text(source);
        if text.contains("\\\n") || text.contains("\\\r") {
            self.violations
                .insert(LintViolation::new(token.clone(), MESSAGE, Vec::new()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svx_syntax::token::Token;

    fn check(source: &str) -> usize {
        let mut rule = ForbidLineContinuationsRule::default();
        let token = Token::new(tk::STRING_LITERAL, 0..source.len());
        rule.handle_token(&token, source);
        rule.report().violations.len()
    }

    #[test]
    fn continued_string_literal_is_flagged() {
        assert_eq!(check("\"first \\\nsecond\""), 1);
    }

    #[test]
    fn plain_string_literal_passes() {
        assert_eq!(check("\"all on one line\""), 0);
    }

    #[test]
    fn non_string_tokens_are_ignored() {
        let mut rule = ForbidLineContinuationsRule::default();
        let source = "abc\\\ndef";
        let token = Token::new(tk::SYMBOL_IDENTIFIER, 0..source.len());
        rule.handle_token(&token, source);
        assert!(rule.report().violations.is_empty());
    }
}
