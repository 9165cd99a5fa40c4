//! Formatter configuration.

use serde::{Deserialize, Serialize};

/// How an alignable row group should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentPolicy {
    /// Pad cells into columns.
    Align,
    /// Normalize to minimal spacing.
    FlushLeft,
    /// Leave the rows untouched.
    Preserve,
    /// Align when the estimated ragged-right badness exceeds
    /// [`FormatStyle::infer_alignment_max_ragged`], flush left otherwise.
    Infer,
}

/// Flat configuration record consumed by the layout optimizer and the
/// alignment engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatStyle {
    /// Column beyond which characters are penalized.
    pub column_limit: i32,
    /// Spaces of indentation per syntax level.
    pub indentation_spaces: i32,
    /// Extra indentation for wrapped continuation lines.
    pub wrap_spaces: i32,
    /// Cost of each line break in a stacked layout.
    pub line_break_penalty: i32,
    /// Cost per character past the column limit. Must be positive.
    pub over_column_limit_penalty: i32,

    pub port_declarations_alignment: AlignmentPolicy,
    pub formal_parameters_alignment: AlignmentPolicy,
    pub struct_union_members_alignment: AlignmentPolicy,
    pub named_port_alignment: AlignmentPolicy,
    pub named_parameter_alignment: AlignmentPolicy,
    pub case_items_alignment: AlignmentPolicy,
    pub assignment_statement_alignment: AlignmentPolicy,
    pub enum_assignment_statement_alignment: AlignmentPolicy,
    pub distribution_items_alignment: AlignmentPolicy,
    pub module_items_alignment: AlignmentPolicy,

    /// Threshold for [`AlignmentPolicy::Infer`]: groups whose estimated
    /// ragged-right badness exceeds this many spaces get aligned.
    /// Empirically tuned.
    pub infer_alignment_max_ragged: i32,
}

impl Default for FormatStyle {
    fn default() -> Self {
        FormatStyle {
            column_limit: 100,
            indentation_spaces: 2,
            wrap_spaces: 4,
            line_break_penalty: 2,
            over_column_limit_penalty: 100,
            port_declarations_alignment: AlignmentPolicy::Align,
            formal_parameters_alignment: AlignmentPolicy::Align,
            struct_union_members_alignment: AlignmentPolicy::Align,
            named_port_alignment: AlignmentPolicy::Align,
            named_parameter_alignment: AlignmentPolicy::Align,
            case_items_alignment: AlignmentPolicy::Infer,
            assignment_statement_alignment: AlignmentPolicy::Infer,
            enum_assignment_statement_alignment: AlignmentPolicy::Infer,
            distribution_items_alignment: AlignmentPolicy::Infer,
            module_items_alignment: AlignmentPolicy::Align,
            infer_alignment_max_ragged: 4,
        }
    }
}
