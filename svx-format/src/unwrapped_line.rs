//! Unwrapped lines: the partition tree's building block.

use std::ops::Range;

use svx_syntax::tree::NodeKind;

use crate::format_token::PreFormatToken;

/// How a token partition may be reshaped by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionPolicy {
    /// Every child starts its own line.
    AlwaysExpand,
    /// Join on one line when it fits, otherwise expand.
    FitOnLineElseExpand,
    /// Full layout optimization (header/arguments shapes).
    OptimalLayout,
    /// Candidate for the column-alignment pass.
    TabularAlignment,
    /// Merged into the surrounding partition.
    Inline,
    /// Original formatting is kept.
    Preserve,
}

/// A contiguous range of pre-format tokens intended for one visual line,
/// subject to further wrapping decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrappedLine {
    pub indentation_spaces: usize,
    /// Indices into the parsed unit's pre-format token array.
    pub tokens: Range<usize>,
    pub policy: PartitionPolicy,
    /// Grammar kind of the syntax node this line was unwrapped from, used
    /// by the alignment pass to pick a column schema.
    pub origin: Option<NodeKind>,
}

impl UnwrappedLine {
    pub fn new(indentation_spaces: usize, tokens: Range<usize>, policy: PartitionPolicy) -> Self {
        UnwrappedLine {
            indentation_spaces,
            tokens,
            policy,
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: NodeKind) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Extends this line to end at `token_end`.
    pub fn span_up_to(&mut self, token_end: usize) {
        debug_assert!(token_end >= self.tokens.end);
        self.tokens.end = token_end;
    }

    /// Rendered length when joined on one line, excluding indentation.
    /// The first token's required spaces do not count; they are subsumed
    /// by the indentation.
    pub fn length(&self, ftokens: &[PreFormatToken]) -> usize {
        let tokens = &ftokens[self.tokens.clone()];
        let mut length = 0;
        for token in tokens {
            length += token.spaces_required + token.width();
        }
        if let Some(first) = tokens.first() {
            length -= first.spaces_required;
        }
        length
    }

    /// Column at which this line ends when rendered at its indentation.
    pub fn final_column(&self, ftokens: &[PreFormatToken]) -> usize {
        self.indentation_spaces + self.length(ftokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_format_tokens;

    #[test]
    fn length_joins_with_required_spaces() {
        // "foo bar_x;" = 3 + 1 + 6 = 10
        let (_, ftokens) = make_format_tokens(&["foo", "bar_x;"]);
        let line = UnwrappedLine::new(4, 0..2, PartitionPolicy::FitOnLineElseExpand);
        assert_eq!(line.length(&ftokens), 10);
        assert_eq!(line.final_column(&ftokens), 14);
    }

    #[test]
    fn empty_line_has_zero_length() {
        let (_, ftokens) = make_format_tokens(&["x"]);
        let line = UnwrappedLine::new(2, 0..0, PartitionPolicy::AlwaysExpand);
        assert_eq!(line.length(&ftokens), 0);
    }
}
