//! SystemVerilog-specific knowledge layered over the grammar-agnostic core:
//! the stable kind constants mirrored from the generated parser enums,
//! token classification, number-literal decomposition, CST accessors and
//! the matchers the lint rules are written with.

pub mod classification;
pub mod matchers;
pub mod node_kinds;
pub mod nodes;
pub mod numbers;
pub mod token_kinds;
