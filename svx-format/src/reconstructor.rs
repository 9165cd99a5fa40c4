//! Materialises a chosen layout tree back into a flat sequence of
//! unwrapped lines and rewrites the owning partition node.

use crate::format_token::PreFormatToken;
use crate::layout::{LayoutTree, LayoutType};
use crate::partition::TokenPartitionTree;
use crate::unwrapped_line::UnwrappedLine;

pub struct TreeReconstructor<'a> {
    unwrapped_lines: Vec<UnwrappedLine>,
    /// Index into `unwrapped_lines` of the line currently being extended.
    active_line: Option<usize>,
    current_indentation_spaces: usize,
    ftokens: &'a [PreFormatToken],
}

impl<'a> TreeReconstructor<'a> {
    pub fn new(indentation_spaces: usize, ftokens: &'a [PreFormatToken]) -> Self {
        TreeReconstructor {
            unwrapped_lines: Vec::new(),
            active_line: None,
            current_indentation_spaces: indentation_spaces,
            ftokens,
        }
    }

    pub fn traverse_tree(&mut self, layout_tree: &LayoutTree) {
        let relative_indentation = layout_tree.value.indentation();
        let saved_indentation = self.current_indentation_spaces;
        self.current_indentation_spaces += relative_indentation;

        // An indented block always starts on a fresh line.
        if relative_indentation > 0 {
            self.active_line = None;
        }

        match layout_tree.value.layout_type() {
            LayoutType::Line => {
                debug_assert!(layout_tree.children.is_empty());
                let line = layout_tree.value.to_unwrapped_line();
                match self.active_line {
                    None => {
                        let mut line = line;
                        line.indentation_spaces = self.current_indentation_spaces;
                        self.unwrapped_lines.push(line);
                        self.active_line = Some(self.unwrapped_lines.len() - 1);
                    }
                    Some(active) => {
                        self.unwrapped_lines[active].span_up_to(line.tokens.end);
                    }
                }
            }

            LayoutType::Juxtaposition => {
                // Children extend the active line in order.
                for child in &layout_tree.children {
                    self.traverse_tree(child);
                }
            }

            LayoutType::Stack => {
                if layout_tree.children.is_empty() {
                    self.current_indentation_spaces = saved_indentation;
                    return;
                }
                if layout_tree.children.len() == 1 {
                    self.traverse_tree(&layout_tree.children[0]);
                    self.current_indentation_spaces = saved_indentation;
                    return;
                }

                // When appending to an existing line, wrapped children
                // line up under the column where that line ends.
                let mut indentation = self.current_indentation_spaces;
                if let Some(active) = self.active_line {
                    indentation = self.unwrapped_lines[active].final_column(self.ftokens)
                        + layout_tree.value.spaces_before();
                }

                self.traverse_tree(&layout_tree.children[0]);

                let outer_indentation = self.current_indentation_spaces;
                self.current_indentation_spaces = indentation;
                for child in layout_tree.children.iter().skip(1) {
                    self.active_line = None;
                    self.traverse_tree(child);
                }
                self.current_indentation_spaces = outer_indentation;
            }
        }

        self.current_indentation_spaces = saved_indentation;
    }

    /// Overwrites `node` so that its value spans the reconstructed lines
    /// and its children are exactly those lines.
    pub fn replace_token_partition_tree_node(self, node: &mut TokenPartitionTree) {
        assert!(!self.unwrapped_lines.is_empty());
        let first_line = &self.unwrapped_lines[0];
        let last_line = self.unwrapped_lines.last().unwrap();

        let mut value = first_line.clone();
        value.span_up_to(last_line.tokens.end);
        value.indentation_spaces = self.current_indentation_spaces;

        node.value = value;
        node.children = self
            .unwrapped_lines
            .into_iter()
            .map(TokenPartitionTree::leaf)
            .collect();
    }
}
