//! Minimal SystemVerilog token scanner.
//!
//! The real grammar and its generated tokenizer are external
//! collaborators; this scanner produces just enough structure for the
//! token- and line-based rules, the number-literal checks and
//! preserve-policy formatting to run end to end from the command line.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use svx_syntax::token::{Token, TokenKind};
use svx_syntax::tree::{Node, Symbol};
use svx_syntax::verilog::{node_kinds as nk, token_kinds as tk};

static KEYWORDS: Lazy<BTreeMap<&'static str, TokenKind>> = Lazy::new(|| {
    BTreeMap::from([
        ("module", tk::KW_MODULE),
        ("endmodule", tk::KW_ENDMODULE),
        ("package", tk::KW_PACKAGE),
        ("endpackage", tk::KW_ENDPACKAGE),
        ("class", tk::KW_CLASS),
        ("endclass", tk::KW_ENDCLASS),
        ("function", tk::KW_FUNCTION),
        ("endfunction", tk::KW_ENDFUNCTION),
        ("task", tk::KW_TASK),
        ("endtask", tk::KW_ENDTASK),
        ("case", tk::KW_CASE),
        ("endcase", tk::KW_ENDCASE),
        ("default", tk::KW_DEFAULT),
        ("unique", tk::KW_UNIQUE),
        ("begin", tk::KW_BEGIN),
        ("end", tk::KW_END),
        ("assign", tk::KW_ASSIGN),
        ("wire", tk::KW_WIRE),
        ("reg", tk::KW_REG),
        ("logic", tk::KW_LOGIC),
        ("input", tk::KW_INPUT),
        ("output", tk::KW_OUTPUT),
        ("inout", tk::KW_INOUT),
        ("parameter", tk::KW_PARAMETER),
        ("localparam", tk::KW_LOCALPARAM),
        ("enum", tk::KW_ENUM),
        ("struct", tk::KW_STRUCT),
        ("union", tk::KW_UNION),
        ("typedef", tk::KW_TYPEDEF),
        ("dist", tk::KW_DIST),
    ])
});

static DIRECTIVES: Lazy<BTreeMap<&'static str, TokenKind>> = Lazy::new(|| {
    BTreeMap::from([
        ("`define", tk::PP_DEFINE),
        ("`include", tk::PP_INCLUDE),
        ("`ifdef", tk::PP_IFDEF),
        ("`ifndef", tk::PP_IFNDEF),
        ("`else", tk::PP_ELSE),
        ("`elsif", tk::PP_ELSIF),
        ("`endif", tk::PP_ENDIF),
        ("`undef", tk::PP_UNDEF),
    ])
});

fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_identifier_part(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$'
}

fn is_digit_part(byte: u8) -> bool {
    byte.is_ascii_hexdigit() || matches!(byte, b'_' | b'x' | b'X' | b'z' | b'Z' | b'?')
}

/// Tokenizes `source`, skipping whitespace. Unrecognized bytes become
/// single-character `OTHER` tokens rather than scan failures.
pub fn scan(source: &str) -> Vec<Token> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        // Comments.
        if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
            let end = source[i..]
                .find('\n')
                .map(|n| i + n)
                .unwrap_or(bytes.len());
            tokens.push(Token::new(tk::EOL_COMMENT, i..end));
            i = end;
            continue;
        }
        if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
            let end = source[i + 2..]
                .find("*/")
                .map(|n| i + 2 + n + 2)
                .unwrap_or(bytes.len());
            tokens.push(Token::new(tk::BLOCK_COMMENT, i..end));
            i = end;
            continue;
        }

        // String literals; backslash escapes (including escaped newlines)
        // stay inside the literal.
        if b == b'"' {
            let mut j = i + 1;
            while j < bytes.len() {
                match bytes[j] {
                    b'\\' => j += 2,
                    b'"' => {
                        j += 1;
                        break;
                    }
                    _ => j += 1,
                }
            }
            let end = j.min(bytes.len());
            tokens.push(Token::new(tk::STRING_LITERAL, i..end));
            i = end;
            continue;
        }

        // Preprocessor directives and macro references.
        if b == b'`' {
            let mut j = i + 1;
            while j < bytes.len() && is_identifier_part(bytes[j]) {
                j += 1;
            }
            let kind = DIRECTIVES
                .get(&source[i..j])
                .copied()
                .unwrap_or(tk::MACRO_IDENTIFIER);
            tokens.push(Token::new(kind, i..j));
            i = j;
            continue;
        }

        // Based-literal base: '[sS]?[bodhBODH]
        if b == b'\'' {
            let mut j = i + 1;
            if matches!(bytes.get(j), Some(b's') | Some(b'S')) {
                j += 1;
            }
            let base_kind = match bytes.get(j).map(u8::to_ascii_lowercase) {
                Some(b'b') => Some(tk::BIN_BASE),
                Some(b'o') => Some(tk::OCT_BASE),
                Some(b'd') => Some(tk::DEC_BASE),
                Some(b'h') => Some(tk::HEX_BASE),
                _ => None,
            };
            match base_kind {
                Some(kind) => {
                    tokens.push(Token::new(kind, i..j + 1));
                    i = j + 1;
                    // Digits may be separated from the base by spaces.
                    while i < bytes.len() && bytes[i] == b' ' {
                        i += 1;
                    }
                    let digits_start = i;
                    while i < bytes.len() && is_digit_part(bytes[i]) {
                        i += 1;
                    }
                    if i > digits_start {
                        let digits_kind = match kind {
                            tk::BIN_BASE => tk::BIN_DIGITS,
                            tk::OCT_BASE => tk::OCT_DIGITS,
                            tk::DEC_BASE => tk::DEC_DIGITS,
                            _ => tk::HEX_DIGITS,
                        };
                        tokens.push(Token::new(digits_kind, digits_start..i));
                    }
                }
                None => {
                    tokens.push(Token::new(tk::OTHER, i..i + 1));
                    i += 1;
                }
            }
            continue;
        }

        // Plain decimal numbers.
        if b.is_ascii_digit() {
            let mut j = i;
            while j < bytes.len() && (bytes[j].is_ascii_digit() || bytes[j] == b'_') {
                j += 1;
            }
            tokens.push(Token::new(tk::DEC_NUMBER, i..j));
            i = j;
            continue;
        }

        // Identifiers and keywords.
        if is_identifier_start(b) {
            let mut j = i;
            while j < bytes.len() && is_identifier_part(bytes[j]) {
                j += 1;
            }
            let kind = KEYWORDS
                .get(&source[i..j])
                .copied()
                .unwrap_or(tk::SYMBOL_IDENTIFIER);
            tokens.push(Token::new(kind, i..j));
            i = j;
            continue;
        }

        // Two-character operators the alignment engine keys on.
        let two = bytes.get(i + 1).map(|next| [b, *next]);
        let kind = match two {
            Some([b'<', b'=']) => Some((tk::NON_BLOCKING_ASSIGN, 2)),
            Some([b':', b'=']) => Some((tk::DIST_WEIGHT, 2)),
            Some([b':', b'/']) => Some((tk::DIST_RANGE_WEIGHT, 2)),
            Some([b'=', b'=']) => Some((tk::OTHER, 2)),
            _ => None,
        };
        if let Some((kind, len)) = kind {
            tokens.push(Token::new(kind, i..i + len));
            i += len;
            continue;
        }

        let kind = match b {
            b'=' => tk::EQUALS,
            b':' => tk::COLON,
            b';' => tk::SEMICOLON,
            b',' => tk::COMMA,
            b'.' => tk::DOT,
            b'(' => tk::LPAREN,
            b')' => tk::RPAREN,
            b'[' => tk::LBRACKET,
            b']' => tk::RBRACKET,
            b'{' => tk::LBRACE,
            b'}' => tk::RBRACE,
            _ => tk::OTHER,
        };
        // Advance whole characters so spans stay on UTF-8 boundaries even
        // for bytes the scanner has no use for.
        let width = source[i..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(1);
        tokens.push(Token::new(kind, i..i + width));
        i += width;
    }
    tokens
}

/// Builds a flat syntax tree over the token stream, grouping sized number
/// literals (`<width> '<base> <digits>`) into number nodes so the
/// number-literal rules can run without the full parser.
pub fn build_syntax_tree(tokens: &[Token]) -> Symbol {
    let mut children: Vec<Option<Symbol>> = Vec::new();
    let mut i = 0usize;
    while i < tokens.len() {
        let token = &tokens[i];
        let is_number_start = token.kind == tk::DEC_NUMBER
            && tokens
                .get(i + 1)
                .is_some_and(|t| svx_syntax::verilog::classification::is_number_base(t.kind))
            && tokens
                .get(i + 2)
                .is_some_and(|t| svx_syntax::verilog::classification::is_number_digits(t.kind));
        if is_number_start {
            let base_digits = Node::new(
                nk::BASE_DIGITS,
                vec![
                    Some(Symbol::Leaf(tokens[i + 1].clone())),
                    Some(Symbol::Leaf(tokens[i + 2].clone())),
                ],
            );
            let number = Node::new(
                nk::NUMBER,
                vec![
                    Some(Symbol::Leaf(token.clone())),
                    Some(Symbol::Node(base_digits)),
                ],
            );
            children.push(Some(Symbol::Node(number)));
            i += 3;
        } else {
            children.push(Some(Symbol::Leaf(token.clone())));
            i += 1;
        }
    }
    Symbol::Node(Node::new(nk::DESCRIPTION_LIST, children))
}
