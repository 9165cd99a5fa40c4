//! Hierarchical document symbols derived from the syntax tree.
//!
//! Modules, packages, classes, functions and tasks always appear;
//! variables and instances are optional. Each symbol carries the full
//! source range of its construct and a selection range on the defining
//! identifier token. Two kind mappings are supported because editors
//! disagree on which icons look reasonable for hardware constructs.

use lsp_types::{Position, Range, SymbolKind};

use svx_syntax::line_column::LineColumnMap;
use svx_syntax::token::Token;
use svx_syntax::tree::{Node, Symbol};
use svx_syntax::tree_utils::string_span_of;
use svx_syntax::verilog::node_kinds as nk;
use svx_syntax::verilog::nodes;

/// Which editor-facing kind table to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKindMapping {
    /// Straightforward kinds: modules are modules, blocks are namespaces.
    Standard,
    /// Swaps module/block kinds onto method/class, which some editors
    /// render with nicer icons.
    ClassMethodSwap,
}

/// One node of the document-symbol tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SvDocumentSymbol {
    pub name: String,
    pub kind: SymbolKind,
    pub range: Range,
    pub selection_range: Range,
    pub children: Vec<SvDocumentSymbol>,
}

/// Collects the document symbols of a parsed unit.
pub fn document_symbols(
    root: &Symbol,
    source: &str,
    mapping: SymbolKindMapping,
    include_variables: bool,
) -> Vec<SvDocumentSymbol> {
    let collector = Collector {
        map: LineColumnMap::new(source),
        source,
        mapping,
        include_variables,
    };
    collector.collect_symbol(root)
}

struct Collector<'a> {
    map: LineColumnMap,
    source: &'a str,
    mapping: SymbolKindMapping,
    include_variables: bool,
}

impl Collector<'_> {
    fn collect_symbol(&self, symbol: &Symbol) -> Vec<SvDocumentSymbol> {
        let node = match symbol {
            Symbol::Node(node) => node,
            Symbol::Leaf(_) => return Vec::new(),
        };
        match self.visible_symbol(symbol, node) {
            Some((name_token, kind)) => {
                let children = self.collect_children(node);
                vec![SvDocumentSymbol {
                    name: name_token.text(self.source).to_string(),
                    kind,
                    range: self.range_of_symbol(symbol),
                    selection_range: self.range_of_span(&name_token.span),
                    children,
                }]
            }
            None => self.collect_children(node),
        }
    }

    fn collect_children(&self, node: &Node) -> Vec<SvDocumentSymbol> {
        node.children()
            .iter()
            .flatten()
            .flat_map(|child| self.collect_symbol(child))
            .collect()
    }

    fn visible_symbol<'b>(
        &self,
        symbol: &'b Symbol,
        node: &'b Node,
    ) -> Option<(&'b Token, SymbolKind)> {
        let swap = self.mapping == SymbolKindMapping::ClassMethodSwap;
        match node.tag() {
            nk::MODULE_DECLARATION => {
                let kind = if swap {
                    SymbolKind::METHOD
                } else {
                    SymbolKind::MODULE
                };
                nodes::module_name(symbol).map(|token| (token, kind))
            }
            nk::PACKAGE_DECLARATION => {
                nodes::package_name(symbol).map(|token| (token, SymbolKind::PACKAGE))
            }
            nk::CLASS_DECLARATION => {
                nodes::class_name(symbol).map(|token| (token, SymbolKind::CLASS))
            }
            nk::FUNCTION_DECLARATION => {
                nodes::function_name(symbol).map(|token| (token, SymbolKind::FUNCTION))
            }
            nk::TASK_DECLARATION => {
                nodes::task_name(symbol).map(|token| (token, SymbolKind::METHOD))
            }
            nk::SEQ_BLOCK | nk::GENERATE_BLOCK => {
                let kind = if swap {
                    SymbolKind::CLASS
                } else {
                    SymbolKind::NAMESPACE
                };
                nodes::begin_label(symbol).map(|token| (token, kind))
            }
            nk::REGISTER_VARIABLE | nk::GATE_INSTANCE if self.include_variables => {
                nodes::instance_name(symbol).map(|token| (token, SymbolKind::VARIABLE))
            }
            _ => None,
        }
    }

    fn range_of_symbol(&self, symbol: &Symbol) -> Range {
        match string_span_of(symbol) {
            Some(span) => self.range_of_span(&span),
            None => Range::default(),
        }
    }

    fn range_of_span(&self, span: &std::ops::Range<usize>) -> Range {
        let start = self.map.position(span.start);
        let end = self.map.position(span.end);
        Range {
            start: Position {
                line: start.line as u32,
                character: start.column as u32,
            },
            end: Position {
                line: end.line as u32,
                character: end.column as u32,
            },
        }
    }
}
