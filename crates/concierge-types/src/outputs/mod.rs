//! Composite results that pair several completions.
mod comparison;

pub use comparison::RolePlayComparison;
