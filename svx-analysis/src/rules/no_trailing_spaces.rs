//! Flags trailing whitespace on source lines.

use std::collections::BTreeSet;

use svx_syntax::token::{Token, TokenKind};

use crate::config_utils::parse_name_values;
use crate::rule::{LineLintRule, LintRule, LintRuleDescriptor, LintRuleStatus, RuleConfigError};
use crate::violation::{AutoFix, Edit, LintViolation};

static DESCRIPTOR: LintRuleDescriptor = LintRuleDescriptor {
    name: "no-trailing-spaces",
    topic: "trailing-spaces",
    desc: "Checks that there are no trailing spaces on any line.",
    params: &[],
};

static MESSAGE: &str = "Remove trailing spaces.";

#[derive(Default)]
pub struct NoTrailingSpacesRule {
    violations: BTreeSet<LintViolation>,
}

impl LintRule for NoTrailingSpacesRule {
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

impl LineLintRule for NoTrailingSpacesRule {
    fn handle_line(&mut self, line: &str, _line_number: usize, byte_offset: usize) {
        let trimmed = line.trim_end_matches([' ', '\t']);
        if trimmed.len() == line.len() {
            return;
        }
        let start = byte_offset + trimmed.len();
        let end = byte_offset + line.len();
        let token = Token::new(TokenKind(0), start..end);
        let autofixes = AutoFix::new("Remove trailing whitespace", vec![Edit::new(start, end, "")])
            .into_iter()
            .collect();
        self.violations.insert(
            LintViolation::new(token, MESSAGE, Vec::new()).with_autofixes(autofixes),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_spaces_are_flagged_with_a_fix() {
        let mut rule = NoTrailingSpacesRule::default();
        rule.handle_line("wire x;  ", 0, 0);
        let status = rule.report();
        assert_eq!(status.violations.len(), 1);
        let violation = status.violations.iter().next().unwrap();
        assert_eq!(violation.token.span, 7..9);
        assert_eq!(violation.autofixes[0].apply("wire x;  "), "wire x;");
    }

    #[test]
    fn clean_lines_pass() {
        let mut rule = NoTrailingSpacesRule::default();
        rule.handle_line("wire x;", 0, 0);
        assert!(rule.report().violations.is_empty());
    }
}
