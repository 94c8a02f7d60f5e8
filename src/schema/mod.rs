//! # Schema Reconciliation
//!
//! Computes the output header of an annotation run from the input file's header
//! and the set of annotation columns reported by the annotation source.
//!
//! ## Rules
//!
//! 1. Original columns keep their positions. Downstream consumers index into
//!    them, so they are never reordered.
//! 2. Annotation columns absent from the original header are appended in the
//!    order they were first observed, or alphabetically when
//!    [`ReconcilePolicy::sort_columns`] is set.
//! 3. Annotation columns that already exist in the original header are
//!    overwrite targets: the header is unchanged and the merge step replaces
//!    the original value.
//! 4. With [`ReconcilePolicy::add_missing_cols`], canonical columns that neither
//!    the input nor the annotation source provide are appended as empty columns.
//!
//! Reconciliation is a pure function and runs once per file.

mod reconcile;

#[cfg(test)]
mod tests;

pub use reconcile::{reconcile, reconcile_with_summary, ReconcilePolicy, ReconcileSummary};
