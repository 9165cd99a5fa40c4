//! Violations and machine-applicable fixes.

use std::cmp::Ordering;

use svx_syntax::token::Token;
use svx_syntax::tree::NodeKind;

/// One replacement of a byte range with new text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

impl Edit {
    pub fn new(start: usize, end: usize, replacement: impl Into<String>) -> Self {
        Edit {
            start,
            end,
            replacement: replacement.into(),
        }
    }

    pub fn insert_at(offset: usize, replacement: impl Into<String>) -> Self {
        Edit::new(offset, offset, replacement)
    }
}

impl Ord for Edit {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.start, self.end, &self.replacement).cmp(&(other.start, other.end, &other.replacement))
    }
}

impl PartialOrd for Edit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A set of non-overlapping edits offered as one remediation alternative.
/// Multiple fixes on a violation are alternatives, not compositions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AutoFix {
    pub description: String,
    edits: Vec<Edit>,
}

impl AutoFix {
    /// Builds a fix, or `None` when the edits overlap (the fix is dropped;
    /// the violation still reports).
    pub fn new(description: impl Into<String>, mut edits: Vec<Edit>) -> Option<Self> {
        edits.sort();
        let overlapping = edits
            .windows(2)
            .any(|pair| pair[1].start < pair[0].end);
        if overlapping || edits.is_empty() {
            return None;
        }
        Some(AutoFix {
            description: description.into(),
            edits,
        })
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Applies the fix to `base`.
    pub fn apply(&self, base: &str) -> String {
        let mut result = base.to_string();
        for edit in self.edits.iter().rev() {
            result.replace_range(edit.start..edit.end, &edit.replacement);
        }
        result
    }
}

/// A single finding of one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintViolation {
    /// The offending token (or a synthesized span for line findings).
    pub token: Token,
    pub message: String,
    /// Ancestor node kinds at the finding, outermost-first.
    pub context: Vec<NodeKind>,
    /// Alternative machine-applicable remediations.
    pub autofixes: Vec<AutoFix>,
}

impl LintViolation {
    pub fn new(token: Token, message: impl Into<String>, context: Vec<NodeKind>) -> Self {
        LintViolation {
            token,
            message: message.into(),
            context,
            autofixes: Vec::new(),
        }
    }

    pub fn with_autofixes(mut self, autofixes: Vec<AutoFix>) -> Self {
        self.autofixes = autofixes;
        self
    }
}

// Violations deduplicate by (token, message); ordering is by source
// position first so reports come out sorted.
impl Ord for LintViolation {
    fn cmp(&self, other: &Self) -> Ordering {
        (
            self.token.span.start,
            self.token.span.end,
            self.token.kind,
            &self.message,
        )
            .cmp(&(
                other.token.span.start,
                other.token.span.end,
                other.token.kind,
                &other.message,
            ))
    }
}

impl PartialOrd for LintViolation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
