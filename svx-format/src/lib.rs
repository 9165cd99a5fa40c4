//! Formatting engine of the svx toolchain.
//!
//! The tree unwrapper (fed by the parser) produces a token-partition tree:
//! nested groups of unwrapped lines whose policies say how each group may
//! be laid out. This crate takes it from there. The layout optimizer
//! computes a piecewise-linear cost function of the starting column for
//! every subtree, bottom-up, picks the cheapest layout for the enclosing
//! indentation and the tree reconstructor materialises that choice back
//! into a flat sequence of unwrapped lines. The alignment engine is a
//! separate pass that pads alignable row groups (declarations, port lists,
//! case items, ...) into columns.
//!
//! The optimization algebra follows the rfmt/pub44667 formulation: layouts
//! compose horizontally (juxtaposition), vertically (stack) or as the lower
//! envelope of alternatives (choice), and every composition is computed by
//! a sweep over segment knots in strictly ascending column order.

pub mod align;
pub mod format_token;
pub mod formatter;
pub mod layout;
pub mod optimizer;
pub mod partition;
pub mod reconstructor;
pub mod style;
pub mod testing;
pub mod unwrapped_line;

pub use format_token::{PreFormatToken, SpacingOptions};
pub use optimizer::{optimize_token_partition_tree, FormatError};
pub use partition::TokenPartitionTree;
pub use style::{AlignmentPolicy, FormatStyle};
pub use unwrapped_line::{PartitionPolicy, UnwrappedLine};
