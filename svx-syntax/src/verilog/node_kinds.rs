//! Non-terminal kind constants mirrored from the generated SystemVerilog
//! grammar enumeration. Compared for equality only.

use crate::tree::NodeKind;

pub const DESCRIPTION_LIST: NodeKind = NodeKind(1);
pub const MODULE_DECLARATION: NodeKind = NodeKind(2);
pub const MODULE_HEADER: NodeKind = NodeKind(3);
pub const MODULE_ITEM_LIST: NodeKind = NodeKind(4);
pub const PACKAGE_DECLARATION: NodeKind = NodeKind(5);
pub const CLASS_DECLARATION: NodeKind = NodeKind(6);
pub const CLASS_ITEMS: NodeKind = NodeKind(7);
pub const FUNCTION_DECLARATION: NodeKind = NodeKind(8);
pub const TASK_DECLARATION: NodeKind = NodeKind(9);
pub const SEQ_BLOCK: NodeKind = NodeKind(10);
pub const GENERATE_BLOCK: NodeKind = NodeKind(11);
pub const REGISTER_VARIABLE: NodeKind = NodeKind(12);
pub const GATE_INSTANCE: NodeKind = NodeKind(13);
pub const DATA_DECLARATION: NodeKind = NodeKind(14);

pub const NUMBER: NodeKind = NodeKind(20);
pub const BASE_DIGITS: NodeKind = NodeKind(21);
pub const STRING_LITERAL: NodeKind = NodeKind(22);

pub const CASE_STATEMENT: NodeKind = NodeKind(30);
pub const CASE_ITEM_LIST: NodeKind = NodeKind(31);
pub const CASE_ITEM: NodeKind = NodeKind(32);
pub const DEFAULT_ITEM: NodeKind = NodeKind(33);

pub const PORT_DECLARATION_LIST: NodeKind = NodeKind(40);
pub const PORT_LIST: NodeKind = NodeKind(41);
pub const FORMAL_PARAMETER_LIST: NodeKind = NodeKind(42);
pub const STRUCT_UNION_MEMBER_LIST: NodeKind = NodeKind(43);
pub const PORT_ACTUAL_LIST: NodeKind = NodeKind(44);
pub const ACTUAL_PARAMETER_BY_NAME_LIST: NodeKind = NodeKind(45);
pub const ENUM_NAME_LIST: NodeKind = NodeKind(46);
pub const DISTRIBUTION_ITEM_LIST: NodeKind = NodeKind(47);
pub const STATEMENT_LIST: NodeKind = NodeKind(48);
pub const BLOCK_ITEM_STATEMENT_LIST: NodeKind = NodeKind(49);

/// Partial-parse recovery marker; visitors must tolerate these.
pub const ERROR_RECOVERY: NodeKind = NodeKind(99);
