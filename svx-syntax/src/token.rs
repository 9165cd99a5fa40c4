//! Tokens as produced by the external tokenizer.
//!
//! A token is a kind plus a byte range into the immutable source buffer.
//! Tokens are never owned by the syntax tree; the parsed unit keeps them in
//! a flat array and the tree's leaves copy the (cheap) kind/range pair.

use std::fmt;
use std::ops::Range;

/// Token kind drawn from the generated SystemVerilog token enumeration.
///
/// Values are stable within a build and compared for equality only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenKind(pub u16);

/// A lexed token: kind plus the half-open byte range it spans in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Token { kind, span }
    }

    /// The token's text, resolved against the source buffer it was lexed from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }

    /// Rendered width in columns. Tokens are byte-per-column for the
    /// purposes of layout; multi-byte content is the tokenizer's concern.
    pub fn width(&self) -> usize {
        self.span.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}..{})",
            self.kind.0, self.span.start, self.span.end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_text_resolves_span() {
        let source = "wire [31:0] x;";
        let token = Token::new(TokenKind(7), 0..4);
        assert_eq!(token.text(source), "wire");
        assert_eq!(token.width(), 4);
    }
}
