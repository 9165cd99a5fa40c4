//! Checks that based literals carry enough digits for their declared
//! width.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

use svx_syntax::context::SyntaxTreeContext;
use svx_syntax::matcher::{all_of, BoundSymbolManager, Matcher};
use svx_syntax::tree::Symbol;
use svx_syntax::verilog::matchers::{
    node_number, number_has_based_literal, number_has_constant_width,
};
use svx_syntax::verilog::numbers::BasedNumber;

use crate::config_utils::{parse_name_values, Setting};
use crate::rule::{
    LintParam, LintRule, LintRuleDescriptor, LintRuleStatus, RuleConfigError, SyntaxTreeLintRule,
};
use crate::violation::{AutoFix, Edit, LintViolation};

static DESCRIPTOR: LintRuleDescriptor = LintRuleDescriptor {
    name: "undersized-binary-literal",
    topic: "number-literals",
    desc: "Checks that the digits of binary literals for the configured bases \
           match their declared width, i.e. have enough padding prefix zeros.",
    params: &[
        LintParam {
            key: "bin",
            default: "true",
            desc: "Check binary 'b literals.",
        },
        LintParam {
            key: "oct",
            default: "false",
            desc: "Check octal 'o literals.",
        },
        LintParam {
            key: "hex",
            default: "false",
            desc: "Check hexadecimal 'h literals.",
        },
        LintParam {
            key: "lint_zero",
            default: "false",
            desc: "Also warn for value zero such as 32'h0; suggested fixes \
                   are to zero-expand or untype to '0.",
        },
        LintParam {
            key: "autofix",
            default: "true",
            desc: "Provide autofix suggestions, e.g. 32'hAB suggests 32'h000000AB.",
        },
    ],
};

// Matches number nodes that carry both a constant width and a based
// literal.
static NUMBER_MATCHER: Lazy<Matcher> = Lazy::new(|| {
    node_number(vec![all_of(vec![
        number_has_constant_width().bind("width"),
        number_has_based_literal().bind("literal"),
    ])])
    .matcher()
});

pub struct UndersizedBinaryLiteralRule {
    check_bin: bool,
    check_oct: bool,
    check_hex: bool,
    lint_zero: bool,
    autofix: bool,
    violations: BTreeSet<LintViolation>,
}

impl Default for UndersizedBinaryLiteralRule {
    fn default() -> Self {
        UndersizedBinaryLiteralRule {
            check_bin: true,
            check_oct: false,
            check_hex: false,
            lint_zero: false,
            autofix: true,
            violations: BTreeSet::new(),
        }
    }
}

impl UndersizedBinaryLiteralRule {
    fn format_reason(width: &str, base_text: &str, base: char, digits: &str) -> String {
        let base_describe = match base {
            'b' => "Binary",
            'o' => "Octal",
            'h' => "Hex",
            _ => unreachable!("decimal literals are filtered out earlier"),
        };
        format!(
            "{base_describe} literal {width}{base_text}{digits} has less digits than expected for {width} bits."
        )
    }
}

impl LintRule for UndersizedBinaryLiteralRule {
    fn descriptor(&self) -> &'static LintRuleDescriptor {
        &DESCRIPTOR
    }

    fn configure(&mut self, configuration: &str) -> Result<(), RuleConfigError> {
        parse_name_values(
            configuration,
            &mut [
                ("bin", Setting::Bool(&mut self.check_bin)),
                ("oct", Setting::Bool(&mut self.check_oct)),
                ("hex", Setting::Bool(&mut self.check_hex)),
                ("lint_zero", Setting::Bool(&mut self.lint_zero)),
                ("autofix", Setting::Bool(&mut self.autofix)),
            ],
        )
    }

    fn report(&mut self) -> LintRuleStatus {
        LintRuleStatus {
            descriptor: &DESCRIPTOR,
            violations: std::mem::take(&mut self.violations),
        }
    }
}

impl SyntaxTreeLintRule for UndersizedBinaryLiteralRule {
    fn handle_symbol(&mut self, symbol: &Symbol, context: &SyntaxTreeContext, source: &str) {
        let mut manager = BoundSymbolManager::new();
        if !NUMBER_MATCHER.matches(symbol, &mut manager) {
            return;
        }
        let width_leaf = match manager.as_leaf("width") {
            Some(leaf) => leaf,
            None => return,
        };
        let literal_node = match manager.as_node("literal") {
            Some(node) => node,
            None => return,
        };

        let width_text = width_leaf.text(source);
        let width: usize = match width_text.parse() {
            Ok(width) => width,
            Err(_) => return,
        };

        let (base_leaf, digits_leaf) = match (
            literal_node.child(0).and_then(Symbol::as_leaf),
            literal_node.child(1).and_then(Symbol::as_leaf),
        ) {
            (Some(base), Some(digits)) => (base, digits),
            _ => return,
        };
        let base_text = base_leaf.text(source);
        let digits_text = digits_leaf.text(source);

        let number = BasedNumber::parse(base_text, digits_text);
        if !number.ok {
            return;
        }
        let bits_per_digit = match number.base {
            'd' => return, // decimal values have no digit width
            'b' if self.check_bin => 1,
            'o' if self.check_oct => 3,
            'h' if self.check_hex => 4,
            _ => return,
        };

        let inferred_size = number.literal.len() * bits_per_digit;
        if inferred_size >= width {
            return;
        }
        let missing_bits = width - inferred_size;
        if (!self.lint_zero && number.literal == "0") || number.literal == "?" {
            return;
        }

        let mut autofixes = Vec::new();
        if self.autofix {
            // Value zero without a sign: the unsized '0 form.
            if number.literal == "0" && !number.signed {
                autofixes.extend(AutoFix::new(
                    "Replace with unsized `0",
                    vec![
                        Edit::new(width_leaf.span.start, width_leaf.span.end, ""),
                        Edit::new(base_leaf.span.start, base_leaf.span.start + 2, "'"),
                    ],
                ));
            }

            // Regular fix: prefix with leading zeroes.
            let leading_zeros = (missing_bits + bits_per_digit - 1) / bits_per_digit;
            autofixes.extend(AutoFix::new(
                "Left-expand leading zeroes",
                vec![Edit::insert_at(
                    digits_leaf.span.start,
                    "0".repeat(leading_zeros),
                )],
            ));

            // Single-digit values often read better as decimal.
            if number.literal.len() == 1
                && number.literal.chars().next().is_some_and(|c| c.is_ascii_digit())
            {
                let (cut, replacement) = if number.signed {
                    (3, "'sd")
                } else {
                    (2, "'d")
                };
                autofixes.extend(AutoFix::new(
                    "Replace with decimal",
                    vec![Edit::new(
                        base_leaf.span.start,
                        base_leaf.span.start + cut,
                        replacement,
                    )],
                ));
            }

            autofixes.extend(AutoFix::new(
                "Adjust width to inferred width",
                vec![Edit::new(
                    width_leaf.span.start,
                    width_leaf.span.end,
                    inferred_size.to_string(),
                )],
            ));
        }

        self.violations.insert(
            LintViolation::new(
                digits_leaf.clone(),
                Self::format_reason(width_text, base_text, number.base, digits_text),
                context.kinds(),
            )
            .with_autofixes(autofixes),
        );
    }
}
