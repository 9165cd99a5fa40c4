//! Token classification predicates.

use super::token_kinds as tk;
use crate::token::TokenKind;

/// True for end-of-line and block comments.
pub fn is_comment(kind: TokenKind) -> bool {
    kind == tk::EOL_COMMENT || kind == tk::BLOCK_COMMENT
}

/// True for tokens that open or steer preprocessor conditionals and
/// definitions.
pub fn is_preprocessor_directive(kind: TokenKind) -> bool {
    matches!(
        kind,
        tk::PP_DEFINE
            | tk::PP_INCLUDE
            | tk::PP_IFDEF
            | tk::PP_IFNDEF
            | tk::PP_ELSE
            | tk::PP_ELSIF
            | tk::PP_ENDIF
            | tk::PP_UNDEF
    )
}

/// True for plain and macro identifiers.
pub fn is_identifier_like(kind: TokenKind) -> bool {
    kind == tk::SYMBOL_IDENTIFIER || kind == tk::MACRO_IDENTIFIER
}

/// True for the base part of a based literal (`'b`, `'o`, `'d`, `'h`,
/// with optional sign letter).
pub fn is_number_base(kind: TokenKind) -> bool {
    matches!(kind, tk::BIN_BASE | tk::OCT_BASE | tk::DEC_BASE | tk::HEX_BASE)
}

/// True for the digits part of a based literal.
pub fn is_number_digits(kind: TokenKind) -> bool {
    matches!(
        kind,
        tk::BIN_DIGITS | tk::OCT_DIGITS | tk::DEC_DIGITS | tk::HEX_DIGITS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_and_directive_classes_are_disjoint() {
        assert!(is_comment(tk::EOL_COMMENT));
        assert!(is_comment(tk::BLOCK_COMMENT));
        assert!(!is_comment(tk::PP_DEFINE));
        assert!(is_preprocessor_directive(tk::PP_IFDEF));
        assert!(!is_preprocessor_directive(tk::EOL_COMMENT));
        assert!(is_identifier_like(tk::SYMBOL_IDENTIFIER));
        assert!(!is_identifier_like(tk::KW_MODULE));
    }
}
