//! Decomposition of based number literals.

use std::fmt;

/// Subdivides the information in a based-number literal pair of tokens.
///
/// A based literal has the form `'[sS]?<base>` followed by digits, e.g.
/// `'b111` is (binary, unsigned, "111") and `'sh aaaa_5555` is
/// (hex, signed, "aaaa5555").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasedNumber {
    /// Numeric base, one of `b`, `d`, `o`, `h` (lowercased).
    pub base: char,
    /// True if the literal was annotated as signed.
    pub signed: bool,
    /// Digit text with underscores removed.
    pub literal: String,
    /// False if the base token did not parse as a based literal.
    pub ok: bool,
}

impl BasedNumber {
    /// Parses the lexer's base token (e.g. `'b`, `'sh`) plus digits token.
    pub fn parse(base_sign: &str, digits: &str) -> Self {
        let failed = BasedNumber {
            base: '?',
            signed: false,
            literal: String::new(),
            ok: false,
        };
        let mut chars = base_sign.chars();
        if chars.next() != Some('\'') {
            return failed;
        }
        let mut next = match chars.next() {
            Some(c) => c,
            None => return failed,
        };
        let signed = next == 's' || next == 'S';
        if signed {
            next = match chars.next() {
                Some(c) => c,
                None => return failed,
            };
        }
        let base = next.to_ascii_lowercase();
        if !matches!(base, 'b' | 'd' | 'o' | 'h') || chars.next().is_some() {
            return failed;
        }
        BasedNumber {
            base,
            signed,
            literal: digits.chars().filter(|c| *c != '_').collect(),
            ok: true,
        }
    }
}

impl fmt::Display for BasedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base:{} signed:{} literal:{}",
            self.base, self.signed, self.literal
        )
    }
}
