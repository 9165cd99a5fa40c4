//! Property tests for the layout-function algebra: monotonicity,
//! continuity at knots and choice optimality.
//!
//! All generated costs are small integers, which f32 represents exactly,
//! so the equalities below are exact.

use proptest::prelude::*;

use svx_format::format_token::PreFormatToken;
use svx_format::layout::{LayoutFunction, LayoutFunctionFactory};
use svx_format::style::FormatStyle;
use svx_format::testing::make_format_tokens;
use svx_format::unwrapped_line::{PartitionPolicy, UnwrappedLine};

/// Combinator expression over a fixed set of single-token lines.
///
/// Indentation only ever appears the way the optimizer uses it: as the
/// stacked continuation of a header line.
#[derive(Debug, Clone)]
enum Expr {
    Line(usize),
    Stack(Vec<Expr>),
    Juxtaposition(Vec<Expr>),
    /// `Stack(header, Indent(body, k))`.
    StackIndented(Box<Expr>, Box<Expr>, i32),
    Choice(Vec<Expr>),
    Wrap(Vec<Expr>),
}

const LINE_COUNT: usize = 5;

// Lines join with zero spacing, like juxtaposed call arguments after an
// opening parenthesis.
fn fixture() -> (String, Vec<PreFormatToken>) {
    let (source, mut ftokens) =
        make_format_tokens(&["ab", "cdefg", "hijklmnop", "qrstuvwxyzabcd", "e"]);
    for ftoken in &mut ftokens {
        ftoken.spaces_required = 0;
    }
    (source, ftokens)
}

fn eval(factory: &LayoutFunctionFactory, expr: &Expr) -> LayoutFunction {
    match expr {
        Expr::Line(index) => factory.line(UnwrappedLine::new(
            0,
            *index..*index + 1,
            PartitionPolicy::FitOnLineElseExpand,
        )),
        Expr::Stack(exprs) => {
            let lfs: Vec<_> = exprs.iter().map(|e| eval(factory, e)).collect();
            factory.stack(&lfs)
        }
        Expr::Juxtaposition(exprs) => {
            let lfs: Vec<_> = exprs.iter().map(|e| eval(factory, e)).collect();
            factory.juxtaposition(&lfs)
        }
        Expr::StackIndented(header, body, indent) => {
            let header = eval(factory, header);
            let body = eval(factory, body);
            factory.stack(&[header, factory.indent(&body, *indent)])
        }
        Expr::Choice(exprs) => {
            let lfs: Vec<_> = exprs.iter().map(|e| eval(factory, e)).collect();
            factory.choice(lfs)
        }
        Expr::Wrap(exprs) => {
            let lfs: Vec<_> = exprs.iter().map(|e| eval(factory, e)).collect();
            factory.wrap(&lfs)
        }
    }
}

fn arb_expr_continuous() -> impl Strategy<Value = Expr> {
    let line = (0..LINE_COUNT).prop_map(Expr::Line);
    line.prop_recursive(3, 12, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 2..4).prop_map(Expr::Stack),
            prop::collection::vec(inner.clone(), 2..4).prop_map(Expr::Juxtaposition),
            (inner.clone(), inner, 0i32..8)
                .prop_map(|(h, b, k)| Expr::StackIndented(Box::new(h), Box::new(b), k)),
        ]
    })
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    let line = (0..LINE_COUNT).prop_map(Expr::Line);
    line.prop_recursive(3, 12, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 2..4).prop_map(Expr::Stack),
            prop::collection::vec(inner.clone(), 2..4).prop_map(Expr::Juxtaposition),
            (inner.clone(), inner.clone(), 0i32..8)
                .prop_map(|(h, b, k)| Expr::StackIndented(Box::new(h), Box::new(b), k)),
            prop::collection::vec(inner.clone(), 2..4).prop_map(Expr::Choice),
            prop::collection::vec(inner, 2..4).prop_map(Expr::Wrap),
        ]
    })
}

fn small_style() -> FormatStyle {
    FormatStyle {
        column_limit: 30,
        line_break_penalty: 2,
        over_column_limit_penalty: 10,
        ..FormatStyle::default()
    }
}

proptest! {
    // Property 3: layout functions are monotonically non-decreasing in the
    // starting column.
    #[test]
    fn cost_is_monotone(expr in arb_expr()) {
        let (_, ftokens) = fixture();
        let style = small_style();
        let factory = LayoutFunctionFactory::new(&style, &ftokens);
        let lf = eval(&factory, &expr);
        prop_assert!(!lf.is_empty());
        let mut previous = lf.cost_at(0);
        for column in 1..120 {
            let cost = lf.cost_at(column);
            prop_assert!(cost >= previous, "cost decreased at column {column}");
            previous = cost;
        }
    }

    // Property 4: the merge combinators produce functions that are
    // continuous at every internal knot.
    #[test]
    fn merges_are_continuous_at_knots(expr in arb_expr_continuous()) {
        let (_, ftokens) = fixture();
        let style = small_style();
        let factory = LayoutFunctionFactory::new(&style, &ftokens);
        let lf = eval(&factory, &expr);
        for window in lf.segments.windows(2) {
            let knot = window[1].column;
            prop_assert_eq!(window[0].cost_at(knot), window[1].cost_at(knot));
        }
    }

    // Property 5: choice is the pointwise minimum of its inputs.
    #[test]
    fn choice_is_pointwise_minimum(exprs in prop::collection::vec(arb_expr(), 1..4)) {
        let (_, ftokens) = fixture();
        let style = small_style();
        let factory = LayoutFunctionFactory::new(&style, &ftokens);
        let lfs: Vec<LayoutFunction> = exprs.iter().map(|e| eval(&factory, e)).collect();
        let envelope = factory.choice(lfs.clone());
        for column in 0..120 {
            let expected = lfs
                .iter()
                .map(|lf| lf.cost_at(column))
                .fold(f32::INFINITY, f32::min);
            prop_assert_eq!(envelope.cost_at(column), expected, "at column {}", column);
        }
    }

    // Gradients never go negative, which is what monotonicity rests on.
    #[test]
    fn gradients_are_non_negative(expr in arb_expr()) {
        let (_, ftokens) = fixture();
        let style = small_style();
        let factory = LayoutFunctionFactory::new(&style, &ftokens);
        let lf = eval(&factory, &expr);
        for segment in &lf.segments {
            prop_assert!(segment.gradient >= 0);
        }
    }
}
