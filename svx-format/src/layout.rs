//! Layout trees and piecewise-linear layout cost functions.
//!
//! A layout function maps a starting column to the cheapest cost of
//! rendering a (sub)layout beginning at that column. It is represented as
//! a non-empty sequence of segments in strictly ascending column order;
//! each segment carries the layout tree that realizes its cost. All
//! combinators sweep segment knots left to right and emit one output
//! segment per knot.

use crate::format_token::{PreFormatToken, SpacingOptions};
use crate::style::FormatStyle;
use crate::unwrapped_line::{PartitionPolicy, UnwrappedLine};

/// Shape of one layout node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutType {
    /// A concrete unwrapped line.
    Line,
    /// Horizontal concatenation of children.
    Juxtaposition,
    /// Vertical concatenation of children; each child starts a new line.
    Stack,
}

/// One node of a layout tree. Indentation is metadata on any item rather
/// than a distinct node kind.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutItem {
    layout_type: LayoutType,
    indentation: usize,
    spaces_before: usize,
    break_decision: SpacingOptions,
    line: Option<UnwrappedLine>,
}

impl LayoutItem {
    /// Layout item holding a concrete line. Spacing is taken from the
    /// line's first token.
    pub fn from_line(line: UnwrappedLine, ftokens: &[PreFormatToken]) -> Self {
        let (spaces_before, break_decision) = match ftokens.get(line.tokens.start) {
            Some(first) if !line.is_empty() => (first.spaces_required, first.break_decision),
            _ => (0, SpacingOptions::Undecided),
        };
        LayoutItem {
            layout_type: LayoutType::Line,
            indentation: 0,
            spaces_before,
            break_decision,
            line: Some(line),
        }
    }

    /// Composite (juxtaposition or stack) layout item.
    pub fn composite(
        layout_type: LayoutType,
        spaces_before: usize,
        break_decision: SpacingOptions,
    ) -> Self {
        debug_assert!(layout_type != LayoutType::Line);
        LayoutItem {
            layout_type,
            indentation: 0,
            spaces_before,
            break_decision,
            line: None,
        }
    }

    pub fn layout_type(&self) -> LayoutType {
        self.layout_type
    }

    pub fn indentation(&self) -> usize {
        self.indentation
    }

    pub fn add_indentation(&mut self, indent: usize) {
        self.indentation += indent;
    }

    pub fn spaces_before(&self) -> usize {
        self.spaces_before
    }

    pub fn break_decision(&self) -> SpacingOptions {
        self.break_decision
    }

    pub fn must_wrap(&self) -> bool {
        self.break_decision == SpacingOptions::MustWrap
    }

    /// The concrete line of a `Line` item.
    pub fn line(&self) -> &UnwrappedLine {
        self.line.as_ref().expect("only Line items carry a line")
    }

    /// Rendered width of a `Line` item, excluding leading spaces.
    pub fn length(&self, ftokens: &[PreFormatToken]) -> usize {
        self.line().length(ftokens)
    }

    /// The line of a `Line` item, marked as fully expanded.
    pub fn to_unwrapped_line(&self) -> UnwrappedLine {
        let mut line = self.line().clone();
        line.policy = PartitionPolicy::AlwaysExpand;
        line
    }
}

/// Tree of layout items; the solution attached to a layout function
/// segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTree {
    pub value: LayoutItem,
    pub children: Vec<LayoutTree>,
}

impl LayoutTree {
    pub fn new(value: LayoutItem) -> Self {
        LayoutTree {
            value,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Adopts `source` into `destination`, splicing its children in directly
/// when both have the same type and the source has no extra indentation.
/// The flattening is only valid when the adopter's spacing agrees with the
/// first spliced child; that invariant is asserted.
fn adopt_layout_and_flatten_if_same_type(source: &LayoutTree, destination: &mut LayoutTree) {
    let src_item = &source.value;
    let dst_item = &destination.value;
    if !source.is_leaf()
        && src_item.layout_type() == dst_item.layout_type()
        && src_item.indentation() == 0
    {
        let first_subitem = &source.children[0].value;
        assert_eq!(src_item.break_decision(), first_subitem.break_decision());
        assert_eq!(src_item.spaces_before(), first_subitem.spaces_before());
        destination.children.extend(source.children.iter().cloned());
    } else {
        destination.children.push(source.clone());
    }
}

/// One linear piece of a layout function: cost
/// `intercept + gradient * (x - column)` for starting columns
/// `x ∈ [column, next.column)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutFunctionSegment {
    /// Start column (knot) of this segment.
    pub column: i32,
    /// Layout realizing this segment's cost.
    pub layout: LayoutTree,
    /// Width of the layout's last line, relative to its start column.
    pub span: i32,
    /// Cost at `column`.
    pub intercept: f32,
    /// Cost per column to the right of `column`.
    pub gradient: i32,
}

impl LayoutFunctionSegment {
    pub fn cost_at(&self, column: i32) -> f32 {
        debug_assert!(column >= self.column);
        self.intercept + (self.gradient * (column - self.column)) as f32
    }
}

/// Piecewise-linear cost function of the starting column: a non-empty
/// sequence of segments in strictly ascending column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutFunction {
    pub segments: Vec<LayoutFunctionSegment>,
}

impl LayoutFunction {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    fn push(&mut self, segment: LayoutFunctionSegment) {
        debug_assert!(
            self.segments
                .last()
                .map_or(true, |last| last.column < segment.column),
            "segments must be strictly ascending in column"
        );
        self.segments.push(segment);
    }

    /// Index of the segment whose interval contains `column` (the last
    /// segment whose knot is at or to the left of it), or `None` when
    /// empty. Columns left of the first knot map to the first segment.
    pub fn at_or_to_the_left_of(&self, column: i32) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let mut index = 0;
        while index + 1 < self.segments.len() && self.segments[index + 1].column <= column {
            index += 1;
        }
        Some(index)
    }

    /// Cost of the function at `column`.
    pub fn cost_at(&self, column: i32) -> f32 {
        let index = self
            .at_or_to_the_left_of(column)
            .expect("layout function must not be empty");
        let segment = &self.segments[index];
        segment.cost_at(column.max(segment.column))
    }

    /// True if this layout must start on a fresh line.
    pub fn must_wrap(&self) -> bool {
        self.segments
            .first()
            .map_or(false, |segment| segment.layout.value.must_wrap())
    }
}

/// Combinator factory for layout functions, parameterized by style and the
/// pre-format token array the lines index into.
pub struct LayoutFunctionFactory<'a> {
    style: &'a FormatStyle,
    ftokens: &'a [PreFormatToken],
}

impl<'a> LayoutFunctionFactory<'a> {
    pub fn new(style: &'a FormatStyle, ftokens: &'a [PreFormatToken]) -> Self {
        LayoutFunctionFactory { style, ftokens }
    }

    pub fn style(&self) -> &FormatStyle {
        self.style
    }

    /// Layout function of a single concrete line.
    pub fn line(&self, uwline: UnwrappedLine) -> LayoutFunction {
        let item = LayoutItem::from_line(uwline, self.ftokens);
        let span = item.length(self.ftokens) as i32;
        let layout = LayoutTree::new(item);
        let limit = self.style.column_limit;
        let over = self.style.over_column_limit_penalty;

        let mut result = LayoutFunction::default();
        if span < limit {
            result.push(LayoutFunctionSegment {
                column: 0,
                layout: layout.clone(),
                span,
                intercept: 0.0,
                gradient: 0,
            });
            result.push(LayoutFunctionSegment {
                column: limit - span,
                layout,
                span,
                intercept: 0.0,
                gradient: over,
            });
        } else {
            result.push(LayoutFunctionSegment {
                column: 0,
                layout,
                span,
                intercept: ((span - limit) * over) as f32,
                gradient: over,
            });
        }
        result
    }

    /// Vertical merge: every input starts a new output line; only the last
    /// line stays available for further horizontal composition.
    pub fn stack(&self, lfs: &[LayoutFunction]) -> LayoutFunction {
        if lfs.is_empty() {
            return LayoutFunction::default();
        }
        if lfs.len() == 1 {
            return lfs[0].clone();
        }

        // New layouts take the first line's spacing and the last line's
        // span; intermediate lines cannot be composed upon any further.
        let first_item = &lfs[0].segments[0].layout.value;
        let spaces_before = first_item.spaces_before();
        let break_decision = first_item.break_decision();
        let span = lfs.last().unwrap().segments[0].span;
        let line_breaks_penalty = (lfs.len() - 1) as f32 * self.style.line_break_penalty as f32;

        let mut result = LayoutFunction::default();
        let mut current_column: i32 = 0;
        loop {
            let mut new_segment = LayoutFunctionSegment {
                column: current_column,
                layout: LayoutTree::new(LayoutItem::composite(
                    LayoutType::Stack,
                    spaces_before,
                    break_decision,
                )),
                span,
                intercept: line_breaks_penalty,
                gradient: 0,
            };
            for lf in lfs {
                let index = lf
                    .at_or_to_the_left_of(current_column)
                    .expect("stacked layout functions must not be empty");
                let segment = &lf.segments[index];
                new_segment.intercept += segment.cost_at(current_column);
                new_segment.gradient += segment.gradient;
                adopt_layout_and_flatten_if_same_type(&segment.layout, &mut new_segment.layout);
            }
            result.push(new_segment);

            let mut next_column = i32::MAX;
            for lf in lfs {
                let index = lf.at_or_to_the_left_of(current_column).unwrap();
                if index + 1 >= lf.segments.len() {
                    continue;
                }
                let column = lf.segments[index + 1].column;
                debug_assert!(column >= 0);
                if column > current_column && column < next_column {
                    next_column = column;
                }
            }
            if next_column == i32::MAX {
                break;
            }
            current_column = next_column;
        }
        result
    }

    /// Horizontal merge, left-folded over the inputs.
    pub fn juxtaposition(&self, lfs: &[LayoutFunction]) -> LayoutFunction {
        let mut iter = lfs.iter();
        let mut incremental = match iter.next() {
            Some(first) => first.clone(),
            None => return LayoutFunction::default(),
        };
        for lf in iter {
            incremental = self.juxtaposition_pair(&incremental, lf);
        }
        incremental
    }

    fn juxtaposition_pair(&self, left: &LayoutFunction, right: &LayoutFunction) -> LayoutFunction {
        let limit = self.style.column_limit;
        let over = self.style.over_column_limit_penalty;
        let right_spaces = right.segments[0].layout.value.spaces_before() as i32;

        let mut result = LayoutFunction::default();
        let mut index_l = 0;
        let mut column_l: i32 = 0;
        let mut column_r: i32 = left.segments[0].span + right_spaces;
        let mut index_r = right.at_or_to_the_left_of(column_r).unwrap();

        loop {
            let segment_l = &left.segments[index_l];
            let segment_r = &right.segments[index_r];
            let columns_over_limit = column_r - limit;

            // Subtract the overlap so overflow past the limit is not
            // penalized by both sides.
            let new_intercept = segment_l.cost_at(column_l) + segment_r.cost_at(column_r)
                - (over * columns_over_limit.max(0)) as f32;
            let new_gradient = segment_l.gradient + segment_r.gradient
                - if columns_over_limit >= 0 { over } else { 0 };

            let mut new_layout = LayoutTree::new(LayoutItem::composite(
                LayoutType::Juxtaposition,
                segment_l.layout.value.spaces_before(),
                segment_l.layout.value.break_decision(),
            ));
            adopt_layout_and_flatten_if_same_type(&segment_l.layout, &mut new_layout);
            adopt_layout_and_flatten_if_same_type(&segment_r.layout, &mut new_layout);

            let new_span = segment_l.span + segment_r.span + right_spaces;
            result.push(LayoutFunctionSegment {
                column: column_l,
                layout: new_layout,
                span: new_span,
                intercept: new_intercept,
                gradient: new_gradient,
            });

            let left_done = index_l + 1 >= left.segments.len();
            let right_done = index_r + 1 >= right.segments.len();
            if left_done && right_done {
                break;
            }
            let next_column_l = if left_done {
                i32::MAX
            } else {
                left.segments[index_l + 1].column
            };
            let next_column_r = if right_done {
                i32::MAX
            } else {
                right.segments[index_r + 1].column
            };

            // Advance whichever side reaches its next knot in fewer
            // starting-column steps.
            if right_done || (next_column_l - column_l) <= (next_column_r - column_r) {
                column_l = next_column_l;
                index_l += 1;
                column_r = column_l + left.segments[index_l].span + right_spaces;
                index_r = right.at_or_to_the_left_of(column_r).unwrap();
            } else {
                column_r = next_column_r;
                column_l = column_r - left.segments[index_l].span - right_spaces;
                index_r += 1;
            }
        }
        result
    }

    /// Shifts the function left by `indent` columns so that a block placed
    /// at its own column 0 actually starts at column `indent`, recomputing
    /// the overflow contribution for the shifted columns.
    pub fn indent(&self, lf: &LayoutFunction, indent: i32) -> LayoutFunction {
        debug_assert!(indent >= 0);
        let limit = self.style.column_limit;
        let over = self.style.over_column_limit_penalty;

        let mut result = LayoutFunction::default();
        let mut indent_column: i32 = 0;
        let mut column = indent;
        let mut index = lf
            .at_or_to_the_left_of(column)
            .expect("indented layout function must not be empty");
        loop {
            let segment = &lf.segments[index];
            let columns_over_limit = column - limit;

            let new_intercept =
                segment.cost_at(column) - (over * columns_over_limit.max(0)) as f32;
            let new_gradient =
                segment.gradient - if columns_over_limit >= 0 { over } else { 0 };

            let mut new_layout = segment.layout.clone();
            new_layout.value.add_indentation(indent as usize);

            result.push(LayoutFunctionSegment {
                column: indent_column,
                layout: new_layout,
                span: indent + segment.span,
                intercept: new_intercept,
                gradient: new_gradient,
            });

            index += 1;
            if index >= lf.segments.len() {
                break;
            }
            column = lf.segments[index].column;
            indent_column = column - indent;
        }
        result
    }

    /// Lower envelope (pointwise minimum) of the inputs. Ties are broken
    /// by lower gradient, then by earlier argument. Crossover columns
    /// between segments of different slope are computed analytically and
    /// inserted as knots.
    pub fn choice(&self, lfs: Vec<LayoutFunction>) -> LayoutFunction {
        assert!(!lfs.is_empty(), "choice requires at least one layout function");
        if lfs.len() == 1 {
            return lfs.into_iter().next().unwrap();
        }

        let mut result = LayoutFunction::default();
        let mut cursors = vec![0usize; lfs.len()];
        let mut last_emitted: Option<(usize, usize)> = None;
        let mut current_column: i32 = 0;
        loop {
            let mut next_knot = i32::MAX;
            for (i, lf) in lfs.iter().enumerate() {
                cursors[i] = lf
                    .at_or_to_the_left_of(current_column)
                    .expect("choice inputs must not be empty");
                if cursors[i] + 1 < lf.segments.len() {
                    next_knot = next_knot.min(lf.segments[cursors[i] + 1].column);
                }
            }

            loop {
                let mut min_index = 0;
                for i in 1..lfs.len() {
                    let candidate = &lfs[i].segments[cursors[i]];
                    let best = &lfs[min_index].segments[cursors[min_index]];
                    let candidate_cost = candidate.cost_at(current_column);
                    let best_cost = best.cost_at(current_column);
                    if candidate_cost < best_cost
                        || (candidate_cost == best_cost && candidate.gradient < best.gradient)
                    {
                        min_index = i;
                    }
                }
                let min_segment = &lfs[min_index].segments[cursors[min_index]];
                if last_emitted != Some((min_index, cursors[min_index])) {
                    result.push(LayoutFunctionSegment {
                        column: current_column,
                        layout: min_segment.layout.clone(),
                        span: min_segment.span,
                        intercept: min_segment.cost_at(current_column),
                        gradient: min_segment.gradient,
                    });
                    last_emitted = Some((min_index, cursors[min_index]));
                }

                // Closest crossover with a flatter segment before the next
                // knot, if any.
                let mut next_column = next_knot;
                for (i, lf) in lfs.iter().enumerate() {
                    let segment = &lf.segments[cursors[i]];
                    if segment.gradient >= min_segment.gradient {
                        continue;
                    }
                    let gamma = (segment.cost_at(current_column)
                        - min_segment.cost_at(current_column))
                        / (min_segment.gradient - segment.gradient) as f32;
                    let column = current_column + gamma.ceil() as i32;
                    if column > current_column && column < next_knot && column < next_column {
                        next_column = column;
                    }
                }
                current_column = next_column;
                if current_column >= next_knot {
                    break;
                }
            }
            if current_column == i32::MAX {
                break;
            }
        }
        result
    }

    /// The standard "fit on one line; else break after a prefix; else fully
    /// stacked" choice for wrappable sequences. Juxtaposing across an
    /// element that must wrap is never offered.
    pub fn wrap(&self, lfs: &[LayoutFunction]) -> LayoutFunction {
        if lfs.is_empty() {
            return LayoutFunction::default();
        }
        if lfs.len() == 1 {
            return lfs[0].clone();
        }
        let joinable =
            |slice: &[LayoutFunction]| slice.iter().skip(1).all(|lf| !lf.must_wrap());

        let mut choices = Vec::new();
        if joinable(lfs) {
            choices.push(self.juxtaposition(lfs));
        }
        for split in 1..lfs.len() {
            let (head, tail) = lfs.split_at(split);
            if !joinable(head) || !joinable(tail) {
                continue;
            }
            let stacked = self.stack(&[self.juxtaposition(head), self.juxtaposition(tail)]);
            choices.push(stacked);
        }
        choices.push(self.stack(lfs));
        self.choice(choices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_format_tokens;
    use crate::unwrapped_line::PartitionPolicy;

    fn style_40_100() -> FormatStyle {
        FormatStyle {
            column_limit: 40,
            over_column_limit_penalty: 100,
            line_break_penalty: 2,
            ..FormatStyle::default()
        }
    }

    fn line_of_length_19() -> (Vec<PreFormatToken>, UnwrappedLine) {
        // Two 9-column tokens joined by one space: 19 columns.
        let (_, ftokens) = make_format_tokens(&["abcdefghi", "rstuvwxyz"]);
        let line = UnwrappedLine::new(0, 0..2, PartitionPolicy::FitOnLineElseExpand);
        assert_eq!(line.length(&ftokens), 19);
        (ftokens, line)
    }

    #[test]
    fn line_layout_function_has_two_segments_under_limit() {
        let style = style_40_100();
        let (ftokens, line) = line_of_length_19();
        let factory = LayoutFunctionFactory::new(&style, &ftokens);
        let lf = factory.line(line);
        assert_eq!(lf.len(), 2);
        assert_eq!(lf.segments[0].column, 0);
        assert_eq!(lf.segments[0].intercept, 0.0);
        assert_eq!(lf.segments[0].gradient, 0);
        assert_eq!(lf.segments[1].column, 21);
        assert_eq!(lf.segments[1].intercept, 0.0);
        assert_eq!(lf.segments[1].gradient, 100);
        assert_eq!(lf.segments[0].span, 19);
    }

    #[test]
    fn oversized_line_layout_function_is_a_single_penalized_segment() {
        let style = FormatStyle {
            column_limit: 8,
            over_column_limit_penalty: 100,
            ..FormatStyle::default()
        };
        let (ftokens, line) = line_of_length_19();
        let factory = LayoutFunctionFactory::new(&style, &ftokens);
        let lf = factory.line(line);
        assert_eq!(lf.len(), 1);
        assert_eq!(lf.segments[0].column, 0);
        assert_eq!(lf.segments[0].intercept, (19 - 8) as f32 * 100.0);
        assert_eq!(lf.segments[0].gradient, 100);
    }

    #[test]
    fn stack_sums_costs_and_adds_break_penalty() {
        let style = style_40_100();
        let (ftokens, line) = line_of_length_19();
        let factory = LayoutFunctionFactory::new(&style, &ftokens);
        let lf1 = factory.line(line.clone());
        let lf2 = factory.line(line);
        let stacked = factory.stack(&[lf1, lf2]);
        assert_eq!(stacked.len(), 2);
        assert_eq!(stacked.segments[0].column, 0);
        assert_eq!(stacked.segments[0].intercept, 2.0);
        assert_eq!(stacked.segments[0].gradient, 0);
        assert_eq!(stacked.segments[1].column, 21);
        assert_eq!(stacked.segments[1].intercept, 2.0);
        assert_eq!(stacked.segments[1].gradient, 200);
        assert_eq!(stacked.segments[0].span, 19);
        assert_eq!(stacked.segments[0].layout.children.len(), 2);
        assert_eq!(
            stacked.segments[0].layout.value.layout_type(),
            LayoutType::Stack
        );
    }

    #[test]
    fn choice_is_the_lower_envelope_with_crossover_knot() {
        let style = style_40_100();
        let (ftokens, line) = line_of_length_19();
        let factory = LayoutFunctionFactory::new(&style, &ftokens);
        let layout = LayoutTree::new(LayoutItem::from_line(line, &ftokens));
        let f1 = LayoutFunction {
            segments: vec![LayoutFunctionSegment {
                column: 0,
                layout: layout.clone(),
                span: 19,
                intercept: 100.0,
                gradient: 1,
            }],
        };
        let f2 = LayoutFunction {
            segments: vec![LayoutFunctionSegment {
                column: 0,
                layout,
                span: 19,
                intercept: 0.0,
                gradient: 3,
            }],
        };
        let envelope = factory.choice(vec![f1, f2]);
        assert_eq!(envelope.len(), 2);
        assert_eq!(envelope.segments[0].column, 0);
        assert_eq!(envelope.segments[0].intercept, 0.0);
        assert_eq!(envelope.segments[0].gradient, 3);
        assert_eq!(envelope.segments[1].column, 50);
        assert_eq!(envelope.segments[1].intercept, 150.0);
        assert_eq!(envelope.segments[1].gradient, 1);
    }

    #[test]
    fn juxtaposition_accounts_for_spacing_and_span() {
        let style = style_40_100();
        let (_, ftokens) = make_format_tokens(&["aaaa", "bb"]);
        let factory = LayoutFunctionFactory::new(&style, &ftokens);
        let left = factory.line(UnwrappedLine::new(
            0,
            0..1,
            PartitionPolicy::FitOnLineElseExpand,
        ));
        let right = factory.line(UnwrappedLine::new(
            0,
            1..2,
            PartitionPolicy::FitOnLineElseExpand,
        ));
        let joined = factory.juxtaposition(&[left, right]);
        // span: 4 + 2 + one required space
        assert_eq!(joined.segments[0].span, 7);
        // While both sides are under the limit, the joined cost is zero.
        assert_eq!(joined.cost_at(0), 0.0);
        // Monotone non-decreasing afterwards.
        assert!(joined.cost_at(60) >= joined.cost_at(0));
    }

    #[test]
    fn indent_shifts_segments_left_and_extends_span() {
        let style = style_40_100();
        let (ftokens, line) = line_of_length_19();
        let factory = LayoutFunctionFactory::new(&style, &ftokens);
        let lf = factory.line(line);
        let indented = factory.indent(&lf, 4);
        // First segment re-anchored at column 0 with the indent applied.
        assert_eq!(indented.segments[0].column, 0);
        assert_eq!(indented.segments[0].span, 23);
        assert_eq!(indented.segments[0].layout.value.indentation(), 4);
        // Knot previously at 21 moves left by the indent.
        assert_eq!(indented.segments[1].column, 17);
        // Cost at the shifted coordinate equals the unshifted cost.
        assert_eq!(indented.cost_at(17), lf.cost_at(21));
    }

    #[test]
    fn wrap_prefers_single_line_when_it_fits() {
        let style = style_40_100();
        let (_, ftokens) = make_format_tokens(&["aa", "bb", "cc"]);
        let factory = LayoutFunctionFactory::new(&style, &ftokens);
        let lfs: Vec<LayoutFunction> = (0..3)
            .map(|i| {
                factory.line(UnwrappedLine::new(
                    0,
                    i..i + 1,
                    PartitionPolicy::FitOnLineElseExpand,
                ))
            })
            .collect();
        let wrapped = factory.wrap(&lfs);
        // At column 0 everything fits on one line at zero cost; stacked
        // variants cost at least one line-break penalty.
        assert_eq!(wrapped.cost_at(0), 0.0);
        assert_eq!(
            wrapped.segments[0].layout.value.layout_type(),
            LayoutType::Juxtaposition
        );
    }
}
