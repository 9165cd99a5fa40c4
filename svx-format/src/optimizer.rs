//! Layout optimization driver: computes a layout function for every
//! partition subtree bottom-up, picks the cheapest layout for the node's
//! indentation and rewrites the partition node with the reconstructed
//! lines.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::trace;

use crate::format_token::PreFormatToken;
use crate::layout::{LayoutFunction, LayoutFunctionFactory};
use crate::partition::TokenPartitionTree;
use crate::reconstructor::TreeReconstructor;
use crate::style::FormatStyle;
use crate::unwrapped_line::PartitionPolicy;

/// Fatal formatting failures. Any of these aborts the format of the
/// current file; other files continue.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// A partition carries a policy the optimizer has no combinator for.
    UnsupportedPolicy {
        policy: PartitionPolicy,
        token_range: std::ops::Range<usize>,
    },
    /// An optimal-layout partition did not have the header/args shape.
    MalformedOptimalLayout { children: usize },
    /// A combinator produced an empty layout function.
    EmptyLayoutFunction,
    /// The driver's cancellation flag was raised.
    Cancelled,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnsupportedPolicy {
                policy,
                token_range,
            } => write!(
                f,
                "unsupported partition policy {:?} over tokens {}..{}",
                policy, token_range.start, token_range.end
            ),
            FormatError::MalformedOptimalLayout { children } => write!(
                f,
                "optimal-layout partition must have exactly 2 children (header, args), got {children}"
            ),
            FormatError::EmptyLayoutFunction => write!(f, "empty layout function"),
            FormatError::Cancelled => write!(f, "formatting cancelled"),
        }
    }
}

impl std::error::Error for FormatError {}

fn check_cancelled(cancel: Option<&AtomicBool>) -> Result<(), FormatError> {
    match cancel {
        Some(flag) if flag.load(Ordering::Relaxed) => Err(FormatError::Cancelled),
        _ => Ok(()),
    }
}

/// Optimizes the layout of `node` in place.
pub fn optimize_token_partition_tree(
    ftokens: &[PreFormatToken],
    node: &mut TokenPartitionTree,
    style: &FormatStyle,
    cancel: Option<&AtomicBool>,
) -> Result<(), FormatError> {
    let indentation = node.value.indentation_spaces;
    let factory = LayoutFunctionFactory::new(style, ftokens);

    let layout_function = compute_layout_function(&factory, node, cancel)?;
    if layout_function.is_empty() {
        return Err(FormatError::EmptyLayoutFunction);
    }
    trace!(segments = layout_function.len(), "layout function computed");

    let index = layout_function
        .at_or_to_the_left_of(indentation as i32)
        .ok_or(FormatError::EmptyLayoutFunction)?;
    let chosen = &layout_function.segments[index];

    let mut reconstructor = TreeReconstructor::new(indentation, ftokens);
    reconstructor.traverse_tree(&chosen.layout);
    reconstructor.replace_token_partition_tree_node(node);
    Ok(())
}

fn compute_layout_function(
    factory: &LayoutFunctionFactory,
    subnode: &TokenPartitionTree,
    cancel: Option<&AtomicBool>,
) -> Result<LayoutFunction, FormatError> {
    check_cancelled(cancel)?;

    if subnode.is_leaf() {
        return Ok(factory.line(subnode.value.clone()));
    }

    match subnode.value.policy {
        PartitionPolicy::OptimalLayout => {
            // Header/arguments shape of function, macro and system calls.
            if subnode.children.len() != 2 {
                return Err(FormatError::MalformedOptimalLayout {
                    children: subnode.children.len(),
                });
            }
            let header = compute_layout_function(factory, &subnode.children[0], cancel)?;
            let args = compute_layout_function(factory, &subnode.children[1], cancel)?;

            let wrap_spaces = factory.style().wrap_spaces;
            let stack_layout = factory.stack(&[header.clone(), factory.indent(&args, wrap_spaces)]);
            if args.must_wrap() {
                return Ok(stack_layout);
            }
            let juxtaposed_layout = factory.juxtaposition(&[header, args]);
            Ok(factory.choice(vec![juxtaposed_layout, stack_layout]))
        }
        PartitionPolicy::FitOnLineElseExpand => {
            let layouts = child_layouts(factory, subnode, cancel)?;
            Ok(factory.wrap(&layouts))
        }
        PartitionPolicy::AlwaysExpand => {
            let layouts = child_layouts(factory, subnode, cancel)?;
            Ok(factory.stack(&layouts))
        }
        policy => Err(FormatError::UnsupportedPolicy {
            policy,
            token_range: subnode.value.tokens.clone(),
        }),
    }
}

fn child_layouts(
    factory: &LayoutFunctionFactory,
    subnode: &TokenPartitionTree,
    cancel: Option<&AtomicBool>,
) -> Result<Vec<LayoutFunction>, FormatError> {
    subnode
        .children
        .iter()
        .map(|child| compute_layout_function(factory, child, cancel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{leaf_partition, make_format_tokens, set_must_wrap};
    use crate::unwrapped_line::UnwrappedLine;

    fn narrow_style() -> FormatStyle {
        FormatStyle {
            column_limit: 20,
            ..FormatStyle::default()
        }
    }

    #[test]
    fn call_that_fits_stays_on_one_line() {
        let (_, ftokens) = make_format_tokens(&["call(", "a,", "b)"]);
        let mut node = TokenPartitionTree::with_children(
            UnwrappedLine::new(0, 0..3, PartitionPolicy::OptimalLayout),
            vec![
                leaf_partition(0..1, PartitionPolicy::FitOnLineElseExpand),
                leaf_partition(1..3, PartitionPolicy::FitOnLineElseExpand),
            ],
        );
        optimize_token_partition_tree(&ftokens, &mut node, &narrow_style(), None).unwrap();
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].value.tokens, 0..3);
        assert_eq!(node.value.tokens, 0..3);
    }

    #[test]
    fn must_wrap_args_force_the_stacked_branch() {
        let (_, mut ftokens) = make_format_tokens(&["call(", "a,", "b)"]);
        set_must_wrap(&mut ftokens, 1);
        let mut node = TokenPartitionTree::with_children(
            UnwrappedLine::new(0, 0..3, PartitionPolicy::OptimalLayout),
            vec![
                leaf_partition(0..1, PartitionPolicy::FitOnLineElseExpand),
                leaf_partition(1..3, PartitionPolicy::FitOnLineElseExpand),
            ],
        );
        let style = narrow_style();
        optimize_token_partition_tree(&ftokens, &mut node, &style, None).unwrap();
        assert_eq!(node.children.len(), 2);
        // Wrapped arguments are indented by wrap_spaces.
        assert_eq!(
            node.children[1].value.indentation_spaces,
            style.wrap_spaces as usize
        );
    }

    #[test]
    fn always_expand_stacks_every_child() {
        let (_, ftokens) = make_format_tokens(&["a", "b", "c"]);
        let mut node = TokenPartitionTree::with_children(
            UnwrappedLine::new(2, 0..3, PartitionPolicy::AlwaysExpand),
            vec![
                leaf_partition(0..1, PartitionPolicy::FitOnLineElseExpand),
                leaf_partition(1..2, PartitionPolicy::FitOnLineElseExpand),
                leaf_partition(2..3, PartitionPolicy::FitOnLineElseExpand),
            ],
        );
        optimize_token_partition_tree(&ftokens, &mut node, &FormatStyle::default(), None).unwrap();
        assert_eq!(node.children.len(), 3);
        assert!(node
            .children
            .iter()
            .all(|child| child.value.indentation_spaces == 2));
    }

    #[test]
    fn unsupported_policy_is_fatal_for_the_partition() {
        let (_, ftokens) = make_format_tokens(&["a", "b"]);
        let mut node = TokenPartitionTree::with_children(
            UnwrappedLine::new(0, 0..2, PartitionPolicy::Preserve),
            vec![
                leaf_partition(0..1, PartitionPolicy::FitOnLineElseExpand),
                leaf_partition(1..2, PartitionPolicy::FitOnLineElseExpand),
            ],
        );
        let error =
            optimize_token_partition_tree(&ftokens, &mut node, &FormatStyle::default(), None)
                .unwrap_err();
        assert!(matches!(error, FormatError::UnsupportedPolicy { .. }));
    }

    #[test]
    fn cancellation_discards_the_partition() {
        let (_, ftokens) = make_format_tokens(&["a", "b"]);
        let mut node = TokenPartitionTree::with_children(
            UnwrappedLine::new(0, 0..2, PartitionPolicy::AlwaysExpand),
            vec![
                leaf_partition(0..1, PartitionPolicy::FitOnLineElseExpand),
                leaf_partition(1..2, PartitionPolicy::FitOnLineElseExpand),
            ],
        );
        let cancel = AtomicBool::new(true);
        let before = node.clone();
        let error = optimize_token_partition_tree(
            &ftokens,
            &mut node,
            &FormatStyle::default(),
            Some(&cancel),
        )
        .unwrap_err();
        assert_eq!(error, FormatError::Cancelled);
        assert_eq!(node, before);
    }
}
