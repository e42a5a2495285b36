//! Grammar productions, split by node family.
//!
//! Statements in `stmt`, expressions (loosest to tightest binding) in `expr`.

mod expr;
mod stmt;
