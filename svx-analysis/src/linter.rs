//! Linter driver: instantiates rules, walks the inputs once and collects
//! per-rule statuses.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::json;
use tracing::debug;

use svx_syntax::context::walk_with_context;
use svx_syntax::line_column::LineColumnMap;
use svx_syntax::token::Token;
use svx_syntax::tree::Symbol;

use crate::registry::create_rule;
use crate::rule::{AnyLintRule, LintRuleStatus, RuleConfigError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintError {
    /// The cancellation flag was raised; partial results were discarded.
    Cancelled,
    UnknownRule(String),
    Config(RuleConfigError),
}

impl fmt::Display for LintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintError::Cancelled => write!(f, "lint cancelled"),
            LintError::UnknownRule(name) => write!(f, "unknown lint rule: {name}"),
            LintError::Config(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for LintError {}

impl From<RuleConfigError> for LintError {
    fn from(error: RuleConfigError) -> Self {
        LintError::Config(error)
    }
}

/// Runs a set of rules over one analyzed file.
#[derive(Default)]
pub struct Linter {
    rules: Vec<AnyLintRule>,
}

impl Linter {
    pub fn new() -> Self {
        Linter::default()
    }

    pub fn add_rule(&mut self, rule: AnyLintRule) {
        self.rules.push(rule);
    }

    /// Instantiates and configures a registered rule. A configuration
    /// error skips the rule and is surfaced to the caller.
    pub fn add_rule_by_name(&mut self, name: &str, configuration: &str) -> Result<(), LintError> {
        let mut rule =
            create_rule(name).ok_or_else(|| LintError::UnknownRule(name.to_string()))?;
        rule.configure(configuration)?;
        self.rules.push(rule);
        Ok(())
    }

    /// Feeds every rule, then collects statuses sorted by rule name.
    /// Syntax-tree rules see each symbol with its context; token-stream
    /// rules see the flat token array; line rules see raw lines.
    pub fn lint(
        &mut self,
        source: &str,
        tokens: &[Token],
        tree: Option<&Symbol>,
        cancel: Option<&AtomicBool>,
    ) -> Result<Vec<LintRuleStatus>, LintError> {
        let is_cancelled =
            || cancel.map_or(false, |flag| flag.load(Ordering::Relaxed));

        if let Some(root) = tree {
            let rules = &mut self.rules;
            let completed = walk_with_context(root, &mut |symbol, context| {
                if is_cancelled() {
                    return false;
                }
                for rule in rules.iter_mut() {
                    if let AnyLintRule::SyntaxTree(rule) = rule {
                        rule.handle_symbol(symbol, context, source);
                    }
                }
                true
            });
            if !completed {
                return Err(LintError::Cancelled);
            }
        }

        for token in tokens {
            if is_cancelled() {
                return Err(LintError::Cancelled);
            }
            for rule in self.rules.iter_mut() {
                if let AnyLintRule::TokenStream(rule) = rule {
                    rule.handle_token(token, source);
                }
            }
        }

        let mut offset = 0usize;
        for (line_number, line) in source.split('\n').enumerate() {
            for rule in self.rules.iter_mut() {
                if let AnyLintRule::Line(rule) = rule {
                    rule.handle_line(line, line_number, offset);
                }
            }
            offset += line.len() + 1;
        }

        let mut statuses: Vec<LintRuleStatus> =
            self.rules.iter_mut().map(AnyLintRule::report).collect();
        statuses.sort_by_key(|status| status.descriptor.name);
        debug!(
            rules = statuses.len(),
            findings = statuses.iter().map(|s| s.violations.len()).sum::<usize>(),
            "lint pass finished"
        );
        Ok(statuses)
    }
}

/// Serializes statuses as `{rule, violations: [...]}` records with
/// one-based line/column positions. Violations are grouped by rule and
/// sorted within each rule.
pub fn statuses_to_json(
    statuses: &[LintRuleStatus],
    file: &str,
    source: &str,
) -> serde_json::Value {
    let map = LineColumnMap::new(source);
    let position = |offset: usize| {
        let position = map.position(offset);
        json!({ "line": position.line + 1, "col": position.column + 1 })
    };
    json!(statuses
        .iter()
        .map(|status| {
            json!({
                "rule": status.descriptor.name,
                "violations": status
                    .violations
                    .iter()
                    .map(|violation| {
                        json!({
                            "file": file,
                            "start": position(violation.token.span.start),
                            "end": position(violation.token.span.end),
                            "message": violation.message,
                            "autofixes": violation
                                .autofixes
                                .iter()
                                .map(|fix| {
                                    json!({
                                        "description": fix.description,
                                        "edits": fix
                                            .edits()
                                            .iter()
                                            .map(|edit| {
                                                json!({
                                                    "start": edit.start,
                                                    "end": edit.end,
                                                    "replacement": edit.replacement,
                                                })
                                            })
                                            .collect::<Vec<_>>(),
                                    })
                                })
                                .collect::<Vec<_>>(),
                        })
                    })
                    .collect::<Vec<_>>(),
            })
        })
        .collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use svx_syntax::token::Token;
    use svx_syntax::tree::{Node, Symbol};
    use svx_syntax::verilog::{node_kinds as nk, token_kinds as tk};

    // "wire [31:0] x = 32'hAB;  " with a number subtree for 32'hAB.
    fn fixture() -> (&'static str, Vec<Token>, Symbol) {
        let source = "wire [31:0] x = 32'hAB;  ";
        let width = Token::new(tk::DEC_NUMBER, 16..18);
        let base = Token::new(tk::HEX_BASE, 18..20);
        let digits = Token::new(tk::HEX_DIGITS, 20..22);
        let tokens = vec![
            Token::new(tk::KW_WIRE, 0..4),
            Token::new(tk::SYMBOL_IDENTIFIER, 12..13),
            Token::new(tk::EQUALS, 14..15),
            width.clone(),
            base.clone(),
            digits.clone(),
            Token::new(tk::SEMICOLON, 22..23),
        ];
        let tree = Symbol::Node(Node::new(
            nk::DATA_DECLARATION,
            vec![Some(Symbol::Node(Node::new(
                nk::NUMBER,
                vec![
                    Some(Symbol::Leaf(width)),
                    Some(Symbol::Node(Node::new(
                        nk::BASE_DIGITS,
                        vec![Some(Symbol::Leaf(base)), Some(Symbol::Leaf(digits))],
                    ))),
                ],
            )))],
        ));
        (source, tokens, tree)
    }

    #[test]
    fn drives_all_rule_flavours_in_one_pass() {
        let (source, tokens, tree) = fixture();
        let mut linter = Linter::new();
        linter
            .add_rule_by_name("undersized-binary-literal", "hex=true")
            .unwrap();
        linter.add_rule_by_name("no-trailing-spaces", "").unwrap();
        linter
            .add_rule_by_name("forbid-line-continuations", "")
            .unwrap();

        let statuses = linter.lint(source, &tokens, Some(&tree), None).unwrap();
        assert_eq!(statuses.len(), 3);
        // Sorted by rule name.
        let names: Vec<_> = statuses.iter().map(|s| s.descriptor.name).collect();
        assert_eq!(
            names,
            vec![
                "forbid-line-continuations",
                "no-trailing-spaces",
                "undersized-binary-literal"
            ]
        );
        assert_eq!(statuses[0].violations.len(), 0);
        assert_eq!(statuses[1].violations.len(), 1);
        assert_eq!(statuses[2].violations.len(), 1);
    }

    #[test]
    fn lint_is_deterministic_across_runs() {
        let (source, tokens, tree) = fixture();
        let run = || {
            let mut linter = Linter::new();
            linter
                .add_rule_by_name("undersized-binary-literal", "hex=true")
                .unwrap();
            linter.add_rule_by_name("no-trailing-spaces", "").unwrap();
            let statuses = linter.lint(source, &tokens, Some(&tree), None).unwrap();
            statuses
                .iter()
                .flat_map(|status| {
                    status
                        .violations
                        .iter()
                        .map(|v| (v.token.span.clone(), v.message.clone()))
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn configuration_errors_surface_and_skip_the_rule() {
        let mut linter = Linter::new();
        let error = linter
            .add_rule_by_name("undersized-binary-literal", "bogus=1")
            .unwrap_err();
        assert!(matches!(error, LintError::Config(_)));
        assert!(matches!(
            linter.add_rule_by_name("no-such-rule", ""),
            Err(LintError::UnknownRule(_))
        ));
    }

    #[test]
    fn cancellation_discards_partial_results() {
        let (source, tokens, tree) = fixture();
        let mut linter = Linter::new();
        linter
            .add_rule_by_name("undersized-binary-literal", "hex=true")
            .unwrap();
        let cancel = AtomicBool::new(true);
        assert!(matches!(
            linter.lint(source, &tokens, Some(&tree), Some(&cancel)),
            Err(LintError::Cancelled)
        ));
    }

    #[test]
    fn json_report_carries_positions_and_fixes() {
        let (source, tokens, tree) = fixture();
        let mut linter = Linter::new();
        linter
            .add_rule_by_name("undersized-binary-literal", "hex=true")
            .unwrap();
        let statuses = linter.lint(source, &tokens, Some(&tree), None).unwrap();
        let report = statuses_to_json(&statuses, "top.sv", source);
        let violations = &report[0]["violations"];
        assert_eq!(violations[0]["file"], "top.sv");
        assert_eq!(violations[0]["start"]["line"], 1);
        assert_eq!(violations[0]["start"]["col"], 21);
        assert!(violations[0]["message"]
            .as_str()
            .unwrap()
            .contains("32 bits"));
        assert!(!violations[0]["autofixes"].as_array().unwrap().is_empty());
    }
}
