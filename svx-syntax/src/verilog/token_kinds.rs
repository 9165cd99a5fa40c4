//! Token kind constants mirrored from the generated SystemVerilog token
//! enumeration. Values are stable within a build and compared for equality
//! only; nothing may depend on their numeric ordering.

use crate::token::TokenKind;

pub const SYMBOL_IDENTIFIER: TokenKind = TokenKind(300);
pub const MACRO_IDENTIFIER: TokenKind = TokenKind(301);
pub const STRING_LITERAL: TokenKind = TokenKind(302);

pub const DEC_NUMBER: TokenKind = TokenKind(310);
pub const UNBASED_NUMBER: TokenKind = TokenKind(311);
pub const BIN_BASE: TokenKind = TokenKind(312);
pub const OCT_BASE: TokenKind = TokenKind(313);
pub const DEC_BASE: TokenKind = TokenKind(314);
pub const HEX_BASE: TokenKind = TokenKind(315);
pub const BIN_DIGITS: TokenKind = TokenKind(316);
pub const OCT_DIGITS: TokenKind = TokenKind(317);
pub const DEC_DIGITS: TokenKind = TokenKind(318);
pub const HEX_DIGITS: TokenKind = TokenKind(319);

pub const EOL_COMMENT: TokenKind = TokenKind(330);
pub const BLOCK_COMMENT: TokenKind = TokenKind(331);

pub const PP_DEFINE: TokenKind = TokenKind(340);
pub const PP_INCLUDE: TokenKind = TokenKind(341);
pub const PP_IFDEF: TokenKind = TokenKind(342);
pub const PP_IFNDEF: TokenKind = TokenKind(343);
pub const PP_ELSE: TokenKind = TokenKind(344);
pub const PP_ELSIF: TokenKind = TokenKind(345);
pub const PP_ENDIF: TokenKind = TokenKind(346);
pub const PP_UNDEF: TokenKind = TokenKind(347);

pub const KW_MODULE: TokenKind = TokenKind(360);
pub const KW_ENDMODULE: TokenKind = TokenKind(361);
pub const KW_PACKAGE: TokenKind = TokenKind(362);
pub const KW_ENDPACKAGE: TokenKind = TokenKind(363);
pub const KW_CLASS: TokenKind = TokenKind(364);
pub const KW_ENDCLASS: TokenKind = TokenKind(365);
pub const KW_FUNCTION: TokenKind = TokenKind(366);
pub const KW_ENDFUNCTION: TokenKind = TokenKind(367);
pub const KW_TASK: TokenKind = TokenKind(368);
pub const KW_ENDTASK: TokenKind = TokenKind(369);
pub const KW_CASE: TokenKind = TokenKind(370);
pub const KW_ENDCASE: TokenKind = TokenKind(371);
pub const KW_DEFAULT: TokenKind = TokenKind(372);
pub const KW_UNIQUE: TokenKind = TokenKind(373);
pub const KW_BEGIN: TokenKind = TokenKind(374);
pub const KW_END: TokenKind = TokenKind(375);
pub const KW_ASSIGN: TokenKind = TokenKind(376);
pub const KW_WIRE: TokenKind = TokenKind(377);
pub const KW_REG: TokenKind = TokenKind(378);
pub const KW_LOGIC: TokenKind = TokenKind(379);
pub const KW_INPUT: TokenKind = TokenKind(380);
pub const KW_OUTPUT: TokenKind = TokenKind(381);
pub const KW_INOUT: TokenKind = TokenKind(382);
pub const KW_PARAMETER: TokenKind = TokenKind(383);
pub const KW_LOCALPARAM: TokenKind = TokenKind(384);
pub const KW_ENUM: TokenKind = TokenKind(385);
pub const KW_STRUCT: TokenKind = TokenKind(386);
pub const KW_UNION: TokenKind = TokenKind(387);
pub const KW_TYPEDEF: TokenKind = TokenKind(388);
pub const KW_DIST: TokenKind = TokenKind(389);

pub const EQUALS: TokenKind = TokenKind(400);
pub const NON_BLOCKING_ASSIGN: TokenKind = TokenKind(401);
pub const COLON: TokenKind = TokenKind(402);
pub const SEMICOLON: TokenKind = TokenKind(403);
pub const COMMA: TokenKind = TokenKind(404);
pub const DOT: TokenKind = TokenKind(405);
pub const LPAREN: TokenKind = TokenKind(406);
pub const RPAREN: TokenKind = TokenKind(407);
pub const LBRACKET: TokenKind = TokenKind(408);
pub const RBRACKET: TokenKind = TokenKind(409);
pub const LBRACE: TokenKind = TokenKind(410);
pub const RBRACE: TokenKind = TokenKind(411);
pub const DIST_WEIGHT: TokenKind = TokenKind(412);
pub const DIST_RANGE_WEIGHT: TokenKind = TokenKind(413);

/// Catch-all for operators and punctuation the core never inspects.
pub const OTHER: TokenKind = TokenKind(499);
