//! # Row Merging
//!
//! Aligns one input row to the merged header and injects annotation values.
//!
//! For every column of the merged header:
//!
//! | column in input? | key in annotation map? | output value          |
//! |------------------|------------------------|-----------------------|
//! | yes              | no                     | original field        |
//! | either           | yes                    | annotation value      |
//! | no               | no                     | empty string          |
//!
//! A [`MergePlan`] resolves each merged column to its source position once per
//! run, so the per-row work is a copy followed by hashed placement of the
//! annotation values.

mod plan;

#[cfg(test)]
mod tests;

pub use plan::{merge_row, ColumnSource, MergePlan, MergedRow};
