//! Rendering of formatted partition trees and edit computation.
//!
//! Output is either the new source buffer (joining each unwrapped line's
//! tokens with their spacing annotations and a newline between lines) or a
//! sequence of byte-offset edits obtained by diffing the original against
//! the formatted text.

use similar::{Algorithm, ChangeTag, TextDiff};

use crate::format_token::PreFormatToken;
use crate::partition::TokenPartitionTree;
use crate::unwrapped_line::{PartitionPolicy, UnwrappedLine};

/// Text edit expressed as byte offsets over the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEditSpan {
    pub start: usize,
    pub end: usize,
    pub new_text: String,
}

/// Renders one unwrapped line (without trailing newline).
pub fn render_line(line: &UnwrappedLine, ftokens: &[PreFormatToken], source: &str) -> String {
    if line.policy == PartitionPolicy::Preserve {
        // Original text between the first and last token, indentation and
        // inner whitespace included.
        let tokens = &ftokens[line.tokens.clone()];
        if let (Some(first), Some(last)) = (tokens.first(), tokens.last()) {
            return format!(
                "{}{}",
                " ".repeat(line.indentation_spaces),
                &source[first.token.span.start..last.token.span.end]
            );
        }
        return String::new();
    }

    let mut rendered = " ".repeat(line.indentation_spaces);
    for (i, ftoken) in ftokens[line.tokens.clone()].iter().enumerate() {
        if i > 0 {
            rendered.push_str(&" ".repeat(ftoken.spaces_required));
        }
        rendered.push_str(ftoken.token.text(source));
    }
    rendered
}

/// Renders the formatted buffer for a partition tree: one output line per
/// leaf, each terminated by a newline.
pub fn render_partition_tree(
    tree: &TokenPartitionTree,
    ftokens: &[PreFormatToken],
    source: &str,
) -> String {
    let mut output = String::new();
    for line in tree.leaves() {
        if line.is_empty() {
            continue;
        }
        output.push_str(&render_line(line, ftokens, source));
        output.push('\n');
    }
    output
}

/// Produces edits that transform `original` into `formatted`.
pub fn compute_edits(original: &str, formatted: &str) -> Vec<TextEditSpan> {
    if original == formatted {
        return Vec::new();
    }

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(original, formatted);

    let line_offsets = compute_line_offsets(original);
    let mut edits = Vec::new();
    let mut builder: Option<EditBuilder> = None;
    let mut cursor = 0usize;

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Equal => {
                cursor += 1;
                flush_builder(&mut builder, &mut edits);
            }
            ChangeTag::Delete => {
                let line = cursor;
                cursor += 1;
                let start = offset_for_line(line, &line_offsets, original.len());
                let end = offset_for_line(line + 1, &line_offsets, original.len());
                extend_delete(&mut builder, &mut edits, start, end);
            }
            ChangeTag::Insert => {
                let offset = offset_for_line(cursor, &line_offsets, original.len());
                let text = change.value().to_string();
                if !text.is_empty() {
                    extend_insert(&mut builder, &mut edits, offset, text);
                }
            }
        }
    }

    flush_builder(&mut builder, &mut edits);
    edits
}

/// Applies edits (non-overlapping, any order) to `base`.
pub fn apply_edits(base: &str, edits: &[TextEditSpan]) -> String {
    let mut sorted = edits.to_vec();
    sorted.sort_by_key(|edit| edit.start);
    let mut result = base.to_string();
    for edit in sorted.into_iter().rev() {
        result.replace_range(edit.start..edit.end, &edit.new_text);
    }
    result
}

fn extend_delete(
    builder: &mut Option<EditBuilder>,
    edits: &mut Vec<TextEditSpan>,
    start: usize,
    end: usize,
) {
    match builder {
        Some(current) => {
            if start > current.end {
                flush_builder(builder, edits);
                *builder = Some(EditBuilder::new(start, end));
            } else if end > current.end {
                current.end = end;
            }
        }
        None => {
            *builder = Some(EditBuilder::new(start, end));
        }
    }
}

fn extend_insert(
    builder: &mut Option<EditBuilder>,
    edits: &mut Vec<TextEditSpan>,
    offset: usize,
    text: String,
) {
    match builder {
        Some(current) => {
            if offset < current.start || offset > current.end {
                flush_builder(builder, edits);
                *builder = Some(EditBuilder::at(offset));
            }
            if let Some(edit) = builder.as_mut() {
                if offset > edit.end {
                    edit.end = offset;
                }
                edit.new_text.push_str(&text);
            }
        }
        None => {
            let mut edit = EditBuilder::at(offset);
            edit.new_text.push_str(&text);
            *builder = Some(edit);
        }
    }
}

fn flush_builder(builder: &mut Option<EditBuilder>, edits: &mut Vec<TextEditSpan>) {
    if let Some(edit) = builder.take() {
        edits.push(edit.into_span());
    }
}

fn compute_line_offsets(text: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            offsets.push(idx + ch.len_utf8());
        }
    }
    offsets
}

fn offset_for_line(line: usize, offsets: &[usize], text_len: usize) -> usize {
    offsets.get(line).copied().unwrap_or(text_len)
}

struct EditBuilder {
    start: usize,
    end: usize,
    new_text: String,
}

impl EditBuilder {
    fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            new_text: String::new(),
        }
    }

    fn at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    fn into_span(self) -> TextEditSpan {
        TextEditSpan {
            start: self.start,
            end: self.end,
            new_text: self.new_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_format_tokens;

    #[test]
    fn renders_lines_with_required_spacing() {
        let (source, mut ftokens) = make_format_tokens(&["wire", "x", ";"]);
        ftokens[2].spaces_required = 0;
        let line = UnwrappedLine::new(2, 0..3, PartitionPolicy::FitOnLineElseExpand);
        assert_eq!(render_line(&line, &ftokens, &source), "  wire x;");
    }

    #[test]
    fn edits_round_trip_through_apply() {
        let original = "wire  a;\nwire b;\nwire   c;\n";
        let formatted = "wire a;\nwire b;\nwire c;\n";
        let edits = compute_edits(original, formatted);
        assert!(!edits.is_empty());
        assert_eq!(apply_edits(original, &edits), formatted);
    }

    #[test]
    fn identical_text_produces_no_edits() {
        assert!(compute_edits("wire a;\n", "wire a;\n").is_empty());
    }
}
