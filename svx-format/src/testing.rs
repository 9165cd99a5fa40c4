//! Fixture helpers for formatter tests.

use svx_syntax::token::{Token, TokenKind};

use crate::format_token::{PreFormatToken, SpacingOptions};
use crate::partition::TokenPartitionTree;
use crate::unwrapped_line::{PartitionPolicy, UnwrappedLine};

/// Builds a source buffer from `words` joined by single spaces and the
/// matching pre-format token array (one token per word, one required
/// space before each).
pub fn make_format_tokens(words: &[&str]) -> (String, Vec<PreFormatToken>) {
    let mut source = String::new();
    let mut ftokens = Vec::with_capacity(words.len());
    for word in words {
        if !source.is_empty() {
            source.push(' ');
        }
        let start = source.len();
        source.push_str(word);
        ftokens.push(PreFormatToken::new(Token::new(
            TokenKind(0),
            start..source.len(),
        )));
    }
    (source, ftokens)
}

/// Marks the given token as requiring a wrap before it.
pub fn set_must_wrap(ftokens: &mut [PreFormatToken], index: usize) {
    ftokens[index].break_decision = SpacingOptions::MustWrap;
}

/// A leaf partition over the token range with the given policy.
pub fn leaf_partition(
    tokens: std::ops::Range<usize>,
    policy: PartitionPolicy,
) -> TokenPartitionTree {
    TokenPartitionTree::leaf(UnwrappedLine::new(0, tokens, policy))
}
