//! Tabular alignment of partition row groups.
//!
//! Rows of an alignable group (declarations, port lists, case items, ...)
//! are split into cells by a column schema scanner specific to the list
//! kind. The per-row schemas are merged by path union, column widths are
//! the maxima of the rendered cell widths, and cells are padded to their
//! columns by rewriting the leading `spaces_required` of each cell's first
//! token. Trailing end-of-line comments form a final column of their own.
//!
//! Alignment of a group is abandoned (and the rows left untouched) when
//! any padded row would overflow the column limit.

use std::collections::BTreeMap;

use tracing::debug;

use svx_syntax::tree::NodeKind;
use svx_syntax::verilog::classification;
use svx_syntax::verilog::{node_kinds as nk, token_kinds as tk};

use crate::format_token::{PreFormatToken, SpacingOptions};
use crate::partition::TokenPartitionTree;
use crate::style::{AlignmentPolicy, FormatStyle};
use crate::unwrapped_line::{PartitionPolicy, UnwrappedLine};

/// Path component reserved for the trailing-comment column; orders after
/// every scanner-produced column.
const TRAILING_COMMENT_PATH: u16 = u16::MAX;

/// Spaces between adjacent columns.
const COLUMN_GAP: usize = 1;

/// How one column's cells sit within the column's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnProperties {
    /// Cells start at the column's left edge; otherwise they are padded
    /// to end at its right edge.
    pub flush_left: bool,
    /// Column holds a delimiter token (`=`, `:`, `(`), kept tight.
    pub contains_delimiter: bool,
}

impl ColumnProperties {
    pub const fn flush_left() -> Self {
        ColumnProperties {
            flush_left: true,
            contains_delimiter: false,
        }
    }

    pub const fn delimiter() -> Self {
        ColumnProperties {
            flush_left: true,
            contains_delimiter: true,
        }
    }
}

/// One cell boundary produced by a scanner: the hierarchical column path,
/// the index of the cell's first token and the column's properties.
#[derive(Debug, Clone)]
pub struct ColumnPositionEntry {
    pub path: Vec<u16>,
    pub first_token: usize,
    pub properties: ColumnProperties,
}

impl ColumnPositionEntry {
    pub fn new(path: Vec<u16>, first_token: usize, properties: ColumnProperties) -> Self {
        ColumnPositionEntry {
            path,
            first_token,
            properties,
        }
    }
}

/// Splits one row into column cells. Implementations exist per alignable
/// list kind; entries must be ordered by token position and the first
/// entry must sit on the row's first token.
pub trait ColumnSchemaScanner {
    fn scan_row(
        &self,
        row: &UnwrappedLine,
        ftokens: &[PreFormatToken],
        source: &str,
    ) -> Vec<ColumnPositionEntry>;
}

/// Aligns all alignable row subgroups under `partition`. Rows are the
/// partition's leaf children; spacing is rewritten in `ftokens`.
pub fn tabular_align_token_partitions(
    partition: &TokenPartitionTree,
    ftokens: &mut [PreFormatToken],
    source: &str,
    style: &FormatStyle,
) {
    let origin = match partition.value.origin {
        Some(origin) => origin,
        None => return,
    };
    let explicit = partition.value.policy == PartitionPolicy::TabularAlignment;
    let (scanner, policy) = match alignment_handler(origin, style) {
        Some(handler) => handler,
        None if explicit => (
            Box::new(DeclarationColumnsScanner) as Box<dyn ColumnSchemaScanner>,
            AlignmentPolicy::Align,
        ),
        None => return,
    };
    if policy == AlignmentPolicy::Preserve {
        return;
    }

    let rows: Vec<&UnwrappedLine> = partition
        .children
        .iter()
        .filter(|child| child.is_leaf())
        .map(|child| &child.value)
        .collect();

    for group in split_on_blank_lines(&rows, ftokens, source) {
        align_row_group(&group, &*scanner, policy, ftokens, source, style);
    }
}

fn alignment_handler(
    origin: NodeKind,
    style: &FormatStyle,
) -> Option<(Box<dyn ColumnSchemaScanner>, AlignmentPolicy)> {
    let handler: (Box<dyn ColumnSchemaScanner>, AlignmentPolicy) = match origin {
        nk::PORT_DECLARATION_LIST | nk::PORT_LIST => (
            Box::new(DeclarationColumnsScanner),
            style.port_declarations_alignment,
        ),
        nk::FORMAL_PARAMETER_LIST => (
            Box::new(DeclarationColumnsScanner),
            style.formal_parameters_alignment,
        ),
        nk::STRUCT_UNION_MEMBER_LIST => (
            Box::new(DeclarationColumnsScanner),
            style.struct_union_members_alignment,
        ),
        nk::MODULE_ITEM_LIST | nk::CLASS_ITEMS => (
            Box::new(DeclarationColumnsScanner),
            style.module_items_alignment,
        ),
        nk::PORT_ACTUAL_LIST => (
            Box::new(NamedPortColumnsScanner),
            style.named_port_alignment,
        ),
        nk::ACTUAL_PARAMETER_BY_NAME_LIST => (
            Box::new(NamedPortColumnsScanner),
            style.named_parameter_alignment,
        ),
        nk::CASE_ITEM_LIST => (
            Box::new(CaseItemColumnsScanner),
            style.case_items_alignment,
        ),
        nk::ENUM_NAME_LIST => (
            Box::new(AssignmentColumnsScanner::equals_only()),
            style.enum_assignment_statement_alignment,
        ),
        nk::DISTRIBUTION_ITEM_LIST => (
            Box::new(AssignmentColumnsScanner::distribution()),
            style.distribution_items_alignment,
        ),
        nk::STATEMENT_LIST | nk::BLOCK_ITEM_STATEMENT_LIST => (
            Box::new(AssignmentColumnsScanner::statements()),
            style.assignment_statement_alignment,
        ),
        _ => return None,
    };
    Some(handler)
}

/// Splits the rows into subgroups separated by blank source lines.
fn split_on_blank_lines<'a>(
    rows: &[&'a UnwrappedLine],
    ftokens: &[PreFormatToken],
    source: &str,
) -> Vec<Vec<&'a UnwrappedLine>> {
    let mut groups: Vec<Vec<&UnwrappedLine>> = Vec::new();
    let mut current: Vec<&UnwrappedLine> = Vec::new();
    let mut previous_end: Option<usize> = None;

    for &row in rows {
        if row.is_empty() {
            continue;
        }
        let row_start = ftokens[row.tokens.start].token.span.start;
        if let Some(end) = previous_end {
            let gap = &source[end.min(row_start)..row_start];
            if gap.matches('\n').count() >= 2 && !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        }
        previous_end = Some(ftokens[row.tokens.end - 1].token.span.end);
        current.push(row);
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// A row's cells, resolved against the merged schema.
struct RowCells<'a> {
    row: &'a UnwrappedLine,
    /// (entry, cell token range end) pairs in token order.
    cells: Vec<(ColumnPositionEntry, usize)>,
}

fn align_row_group(
    rows: &[&UnwrappedLine],
    scanner: &dyn ColumnSchemaScanner,
    policy: AlignmentPolicy,
    ftokens: &mut [PreFormatToken],
    source: &str,
    style: &FormatStyle,
) {
    let candidates: Vec<&UnwrappedLine> = rows
        .iter()
        .copied()
        .filter(|row| !ignore_row(row, ftokens))
        .collect();
    if candidates.len() < 2 {
        return;
    }

    // Scan every remaining row into column cells.
    let mut scanned: Vec<RowCells> = Vec::new();
    for row in candidates {
        let (content, comment) = split_trailing_comment(row, ftokens);
        let mut entries = scanner.scan_row(&content, ftokens, source);
        if entries.is_empty() {
            continue;
        }
        debug_assert_eq!(entries[0].first_token, row.tokens.start);
        if let Some(comment_index) = comment {
            entries.push(ColumnPositionEntry::new(
                vec![TRAILING_COMMENT_PATH],
                comment_index,
                ColumnProperties::flush_left(),
            ));
        }
        let mut cells = Vec::with_capacity(entries.len());
        for i in 0..entries.len() {
            let end = entries
                .get(i + 1)
                .map(|next| next.first_token)
                .unwrap_or(row.tokens.end);
            cells.push((entries[i].clone(), end));
        }
        scanned.push(RowCells { row, cells });
    }
    if scanned.len() < 2 {
        return;
    }

    // Merge the row schemas by path union and compute column widths.
    let mut schema: BTreeMap<Vec<u16>, (ColumnProperties, usize)> = BTreeMap::new();
    for row_cells in &scanned {
        for (entry, end) in &row_cells.cells {
            let width = cell_width(entry.first_token, *end, ftokens);
            let slot = schema
                .entry(entry.path.clone())
                .or_insert((entry.properties, 0));
            slot.1 = slot.1.max(width);
        }
    }

    let policy = match policy {
        AlignmentPolicy::Infer => infer_policy(&scanned, &schema, ftokens, style),
        other => other,
    };

    match policy {
        AlignmentPolicy::Align => apply_alignment(&scanned, &schema, ftokens, style),
        AlignmentPolicy::FlushLeft => apply_flush_left(&scanned, ftokens),
        AlignmentPolicy::Preserve | AlignmentPolicy::Infer => {}
    }
}

/// Rows that never participate: comment-only rows, preprocessor rows and
/// rows with a forced break in their middle.
fn ignore_row(row: &UnwrappedLine, ftokens: &[PreFormatToken]) -> bool {
    if row.is_empty() {
        return true;
    }
    let first = &ftokens[row.tokens.start];
    if classification::is_comment(first.token.kind)
        || classification::is_preprocessor_directive(first.token.kind)
    {
        return true;
    }
    ftokens[row.tokens.clone()]
        .iter()
        .skip(1)
        .any(|token| token.break_decision == SpacingOptions::MustWrap)
}

/// Splits off a trailing end-of-line comment, returning the content line
/// and the comment's token index.
fn split_trailing_comment(
    row: &UnwrappedLine,
    ftokens: &[PreFormatToken],
) -> (UnwrappedLine, Option<usize>) {
    let last = row.tokens.end - 1;
    if row.tokens.len() > 1 && ftokens[last].token.kind == tk::EOL_COMMENT {
        let mut content = row.clone();
        content.tokens.end = last;
        (content, Some(last))
    } else {
        (row.clone(), None)
    }
}

/// Rendered width of a cell, not counting the cell's own leading spaces.
fn cell_width(first_token: usize, end: usize, ftokens: &[PreFormatToken]) -> usize {
    let mut width = 0;
    for (i, token) in ftokens[first_token..end].iter().enumerate() {
        if i > 0 {
            width += token.spaces_required;
        }
        width += token.width();
    }
    width
}

/// Estimated ragged-right badness: total spread between the widest and
/// narrowest cell of each column.
fn infer_policy(
    scanned: &[RowCells],
    schema: &BTreeMap<Vec<u16>, (ColumnProperties, usize)>,
    ftokens: &[PreFormatToken],
    style: &FormatStyle,
) -> AlignmentPolicy {
    let mut badness = 0usize;
    for (path, (_, max_width)) in schema {
        let mut min_width = usize::MAX;
        for row_cells in scanned {
            for (entry, end) in &row_cells.cells {
                if &entry.path == path {
                    min_width = min_width.min(cell_width(entry.first_token, *end, ftokens));
                }
            }
        }
        if min_width != usize::MAX {
            badness += max_width - min_width;
        }
    }
    if badness > style.infer_alignment_max_ragged as usize {
        AlignmentPolicy::Align
    } else {
        AlignmentPolicy::FlushLeft
    }
}

fn apply_alignment(
    scanned: &[RowCells],
    schema: &BTreeMap<Vec<u16>, (ColumnProperties, usize)>,
    ftokens: &mut [PreFormatToken],
    style: &FormatStyle,
) {
    // Absolute start offset of each column, relative to the line start.
    let mut column_starts: BTreeMap<&Vec<u16>, usize> = BTreeMap::new();
    let mut offset = 0usize;
    for (index, (path, (_, width))) in schema.iter().enumerate() {
        if index > 0 {
            offset += COLUMN_GAP;
        }
        column_starts.insert(path, offset);
        offset += width;
    }

    // Compute all spacing updates first; commit only if every row fits.
    let mut updates: Vec<(usize, usize)> = Vec::new();
    for row_cells in scanned {
        let mut rendered_end = 0usize;
        for (cell_index, (entry, end)) in row_cells.cells.iter().enumerate() {
            let width = cell_width(entry.first_token, *end, ftokens);
            let (properties, column_width) = schema[&entry.path];
            let column_start = column_starts[&entry.path];
            let cell_start = if properties.flush_left {
                column_start
            } else {
                column_start + column_width - width
            };
            if cell_index > 0 {
                let spaces = cell_start.saturating_sub(rendered_end).max(1);
                updates.push((entry.first_token, spaces));
                rendered_end += spaces;
            }
            rendered_end += width;
        }
        let final_column = row_cells.row.indentation_spaces + rendered_end;
        if final_column > style.column_limit as usize {
            debug!(final_column, "alignment abandoned: row would overflow");
            return;
        }
    }

    for (token_index, spaces) in updates {
        ftokens[token_index].spaces_required = spaces;
    }
}

fn apply_flush_left(scanned: &[RowCells], ftokens: &mut [PreFormatToken]) {
    for row_cells in scanned {
        for (entry, _) in row_cells.cells.iter().skip(1) {
            ftokens[entry.first_token].spaces_required = 1;
        }
    }
}

// ---------------------------------------------------------------------
// Column schema scanners
// ---------------------------------------------------------------------

/// Declarations: `<type/qualifiers> <name> <rest>`.
pub struct DeclarationColumnsScanner;

impl ColumnSchemaScanner for DeclarationColumnsScanner {
    fn scan_row(
        &self,
        row: &UnwrappedLine,
        ftokens: &[PreFormatToken],
        _source: &str,
    ) -> Vec<ColumnPositionEntry> {
        let range = row.tokens.clone();
        if range.is_empty() {
            return Vec::new();
        }
        // The declared name is the last identifier before an initializer
        // or the row's end.
        let stop = ftokens[range.clone()]
            .iter()
            .position(|t| t.token.kind == tk::EQUALS)
            .map(|i| range.start + i)
            .unwrap_or(range.end);
        let name = ftokens[range.start..stop]
            .iter()
            .rposition(|t| t.token.kind == tk::SYMBOL_IDENTIFIER)
            .map(|i| range.start + i);

        let mut entries = vec![ColumnPositionEntry::new(
            vec![0],
            range.start,
            ColumnProperties::flush_left(),
        )];
        if let Some(name_index) = name {
            if name_index > range.start {
                entries.push(ColumnPositionEntry::new(
                    vec![1],
                    name_index,
                    ColumnProperties::flush_left(),
                ));
                if name_index + 1 < range.end {
                    entries.push(ColumnPositionEntry::new(
                        vec![2],
                        name_index + 1,
                        ColumnProperties::flush_left(),
                    ));
                }
            }
        }
        entries
    }
}

/// Assignment-like statements: `<lhs> <op> <rhs>`, with the operator set
/// depending on the host list.
pub struct AssignmentColumnsScanner {
    operators: Vec<svx_syntax::token::TokenKind>,
}

impl AssignmentColumnsScanner {
    pub fn equals_only() -> Self {
        AssignmentColumnsScanner {
            operators: vec![tk::EQUALS],
        }
    }

    pub fn statements() -> Self {
        AssignmentColumnsScanner {
            operators: vec![tk::EQUALS, tk::NON_BLOCKING_ASSIGN],
        }
    }

    pub fn distribution() -> Self {
        AssignmentColumnsScanner {
            operators: vec![tk::DIST_WEIGHT, tk::DIST_RANGE_WEIGHT],
        }
    }
}

impl ColumnSchemaScanner for AssignmentColumnsScanner {
    fn scan_row(
        &self,
        row: &UnwrappedLine,
        ftokens: &[PreFormatToken],
        _source: &str,
    ) -> Vec<ColumnPositionEntry> {
        let range = row.tokens.clone();
        if range.is_empty() {
            return Vec::new();
        }
        let mut entries = vec![ColumnPositionEntry::new(
            vec![0],
            range.start,
            ColumnProperties::flush_left(),
        )];
        let operator = ftokens[range.clone()]
            .iter()
            .position(|t| self.operators.contains(&t.token.kind))
            .map(|i| range.start + i);
        if let Some(operator_index) = operator {
            if operator_index > range.start {
                entries.push(ColumnPositionEntry::new(
                    vec![1],
                    operator_index,
                    ColumnProperties::delimiter(),
                ));
            }
            if operator_index + 1 < range.end {
                entries.push(ColumnPositionEntry::new(
                    vec![2],
                    operator_index + 1,
                    ColumnProperties::flush_left(),
                ));
            }
        }
        entries
    }
}

/// Case items: `<label> : <statement>`.
pub struct CaseItemColumnsScanner;

impl ColumnSchemaScanner for CaseItemColumnsScanner {
    fn scan_row(
        &self,
        row: &UnwrappedLine,
        ftokens: &[PreFormatToken],
        _source: &str,
    ) -> Vec<ColumnPositionEntry> {
        let range = row.tokens.clone();
        if range.is_empty() {
            return Vec::new();
        }
        let mut entries = vec![ColumnPositionEntry::new(
            vec![0],
            range.start,
            ColumnProperties::flush_left(),
        )];
        let colon = ftokens[range.clone()]
            .iter()
            .position(|t| t.token.kind == tk::COLON)
            .map(|i| range.start + i);
        if let Some(colon_index) = colon {
            if colon_index > range.start {
                entries.push(ColumnPositionEntry::new(
                    vec![1],
                    colon_index,
                    ColumnProperties::delimiter(),
                ));
            }
            if colon_index + 1 < range.end {
                entries.push(ColumnPositionEntry::new(
                    vec![2],
                    colon_index + 1,
                    ColumnProperties::flush_left(),
                ));
            }
        }
        entries
    }
}

/// Named port/parameter connections: `.name ( expr )`.
pub struct NamedPortColumnsScanner;

impl ColumnSchemaScanner for NamedPortColumnsScanner {
    fn scan_row(
        &self,
        row: &UnwrappedLine,
        ftokens: &[PreFormatToken],
        _source: &str,
    ) -> Vec<ColumnPositionEntry> {
        let range = row.tokens.clone();
        if range.is_empty() {
            return Vec::new();
        }
        let mut entries = vec![ColumnPositionEntry::new(
            vec![0],
            range.start,
            ColumnProperties::flush_left(),
        )];
        let lparen = ftokens[range.clone()]
            .iter()
            .position(|t| t.token.kind == tk::LPAREN)
            .map(|i| range.start + i);
        if let Some(lparen_index) = lparen {
            if lparen_index > range.start && lparen_index < range.end {
                entries.push(ColumnPositionEntry::new(
                    vec![1],
                    lparen_index,
                    ColumnProperties::delimiter(),
                ));
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svx_syntax::token::{Token, TokenKind};

    // Builds rows of real-ish tokens over a synthetic source. Each spec is
    // (text, kind); rows are separated by the given number of newlines.
    fn build_rows(
        row_specs: &[&[(&str, TokenKind)]],
        blank_between: &[usize],
    ) -> (String, Vec<PreFormatToken>, Vec<UnwrappedLine>) {
        let mut source = String::new();
        let mut ftokens = Vec::new();
        let mut rows = Vec::new();
        for (row_index, specs) in row_specs.iter().enumerate() {
            if row_index > 0 {
                let newlines = blank_between
                    .get(row_index - 1)
                    .copied()
                    .unwrap_or(1);
                for _ in 0..newlines {
                    source.push('\n');
                }
            }
            let start_token = ftokens.len();
            for (i, (text, kind)) in specs.iter().enumerate() {
                if i > 0 {
                    source.push(' ');
                }
                let start = source.len();
                source.push_str(text);
                ftokens.push(PreFormatToken::new(Token::new(*kind, start..source.len())));
            }
            rows.push(UnwrappedLine::new(
                0,
                start_token..ftokens.len(),
                PartitionPolicy::FitOnLineElseExpand,
            ));
        }
        (source, ftokens, rows)
    }

    fn declaration_rows() -> (String, Vec<PreFormatToken>, Vec<UnwrappedLine>) {
        build_rows(
            &[
                &[
                    ("wire", tk::KW_WIRE),
                    ("a", tk::SYMBOL_IDENTIFIER),
                    (";", tk::SEMICOLON),
                ],
                &[
                    ("logic", tk::KW_LOGIC),
                    ("abcdef", tk::SYMBOL_IDENTIFIER),
                    (";", tk::SEMICOLON),
                ],
            ],
            &[1],
        )
    }

    fn partition_of(rows: &[UnwrappedLine], origin: NodeKind) -> TokenPartitionTree {
        let value = UnwrappedLine::new(
            0,
            rows.first().unwrap().tokens.start..rows.last().unwrap().tokens.end,
            PartitionPolicy::TabularAlignment,
        )
        .with_origin(origin);
        TokenPartitionTree::with_children(
            value,
            rows.iter().cloned().map(TokenPartitionTree::leaf).collect(),
        )
    }

    #[test]
    fn declarations_align_names_into_a_column() {
        let (source, mut ftokens, rows) = declaration_rows();
        let partition = partition_of(&rows, nk::PORT_DECLARATION_LIST);
        let style = FormatStyle::default();
        tabular_align_token_partitions(&partition, &mut ftokens, &source, &style);

        // Type column width is max("wire", "logic") = 5; names start at 6.
        assert_eq!(ftokens[1].spaces_required, 2); // "wire" + 2 spaces
        assert_eq!(ftokens[4].spaces_required, 1); // "logic" + 1 space
        // Semicolon column starts after the name column (width 6).
        assert_eq!(ftokens[2].spaces_required, 6); // "a" padded to "abcdef"
        assert_eq!(ftokens[5].spaces_required, 1);
    }

    #[test]
    fn alignment_is_idempotent() {
        let (source, mut ftokens, rows) = declaration_rows();
        let partition = partition_of(&rows, nk::PORT_DECLARATION_LIST);
        let style = FormatStyle::default();
        tabular_align_token_partitions(&partition, &mut ftokens, &source, &style);
        let after_first = ftokens.clone();
        tabular_align_token_partitions(&partition, &mut ftokens, &source, &style);
        assert_eq!(ftokens, after_first);
    }

    #[test]
    fn blank_line_splits_alignment_groups() {
        // Two pairs separated by a blank line; widths differ per pair.
        let (source, mut ftokens, rows) = build_rows(
            &[
                &[("wire", tk::KW_WIRE), ("a", tk::SYMBOL_IDENTIFIER)],
                &[("logic", tk::KW_LOGIC), ("b", tk::SYMBOL_IDENTIFIER)],
                &[("wire", tk::KW_WIRE), ("c", tk::SYMBOL_IDENTIFIER)],
                &[("bit", tk::KW_REG), ("d", tk::SYMBOL_IDENTIFIER)],
            ],
            &[1, 2, 1],
        );
        let partition = partition_of(&rows, nk::PORT_DECLARATION_LIST);
        let style = FormatStyle::default();
        tabular_align_token_partitions(&partition, &mut ftokens, &source, &style);
        // First group aligns to "logic" (5); second to "wire" (4).
        assert_eq!(ftokens[1].spaces_required, 2);
        assert_eq!(ftokens[3].spaces_required, 1);
        assert_eq!(ftokens[5].spaces_required, 1);
        assert_eq!(ftokens[7].spaces_required, 2);
    }

    #[test]
    fn overflowing_rows_abandon_alignment() {
        let (source, mut ftokens, rows) = declaration_rows();
        let partition = partition_of(&rows, nk::PORT_DECLARATION_LIST);
        let style = FormatStyle {
            column_limit: 10,
            ..FormatStyle::default()
        };
        let before = ftokens.clone();
        tabular_align_token_partitions(&partition, &mut ftokens, &source, &style);
        assert_eq!(ftokens, before);
    }

    #[test]
    fn comment_rows_are_skipped() {
        let (source, mut ftokens, rows) = build_rows(
            &[
                &[("wire", tk::KW_WIRE), ("a", tk::SYMBOL_IDENTIFIER)],
                &[("// note", tk::EOL_COMMENT)],
                &[("logic", tk::KW_LOGIC), ("b", tk::SYMBOL_IDENTIFIER)],
            ],
            &[1, 1],
        );
        let partition = partition_of(&rows, nk::PORT_DECLARATION_LIST);
        let style = FormatStyle::default();
        tabular_align_token_partitions(&partition, &mut ftokens, &source, &style);
        // The comment row's spacing is untouched; the other two align.
        assert_eq!(ftokens[1].spaces_required, 2);
        assert_eq!(ftokens[4].spaces_required, 1);
    }

    #[test]
    fn infer_flushes_left_when_rows_are_already_tight() {
        let (source, mut ftokens, rows) = build_rows(
            &[
                &[
                    ("x", tk::SYMBOL_IDENTIFIER),
                    ("=", tk::EQUALS),
                    ("1;", tk::DEC_NUMBER),
                ],
                &[
                    ("y", tk::SYMBOL_IDENTIFIER),
                    ("=", tk::EQUALS),
                    ("2;", tk::DEC_NUMBER),
                ],
            ],
            &[1],
        );
        // Pre-existing extra spacing gets normalized away by FlushLeft.
        ftokens[4].spaces_required = 3;
        let partition = partition_of(&rows, nk::STATEMENT_LIST);
        let style = FormatStyle::default();
        tabular_align_token_partitions(&partition, &mut ftokens, &source, &style);
        assert_eq!(ftokens[1].spaces_required, 1);
        assert_eq!(ftokens[4].spaces_required, 1);
    }

    #[test]
    fn trailing_comments_form_their_own_column() {
        let (source, mut ftokens, rows) = build_rows(
            &[
                &[
                    ("wire", tk::KW_WIRE),
                    ("a;", tk::SYMBOL_IDENTIFIER),
                    ("// first", tk::EOL_COMMENT),
                ],
                &[
                    ("logic", tk::KW_LOGIC),
                    ("bb;", tk::SYMBOL_IDENTIFIER),
                    ("// second", tk::EOL_COMMENT),
                ],
            ],
            &[1],
        );
        let partition = partition_of(&rows, nk::PORT_DECLARATION_LIST);
        let style = FormatStyle::default();
        tabular_align_token_partitions(&partition, &mut ftokens, &source, &style);
        // Comments align at column 10: type(5) + gap + name(3) + gap.
        assert_eq!(ftokens[2].spaces_required, 2); // "a;" ends at column 8
        assert_eq!(ftokens[5].spaces_required, 1); // "bb;" ends at column 9
    }
}
