//! Concrete style rules.

pub mod case_missing_default;
pub mod forbid_line_continuations;
pub mod no_trailing_spaces;
pub mod undersized_binary_literal;

pub use case_missing_default::CaseMissingDefaultRule;
pub use forbid_line_continuations::ForbidLineContinuationsRule;
pub use no_trailing_spaces::NoTrailingSpacesRule;
pub use undersized_binary_literal::UndersizedBinaryLiteralRule;
