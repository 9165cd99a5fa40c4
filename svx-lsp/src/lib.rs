//! Language-server front-end payloads.

pub mod document_symbols;

pub use document_symbols::{document_symbols, SvDocumentSymbol, SymbolKindMapping};
