//! # Annotation Pipeline
//!
//! Streams a mutation file through reconciliation and merging:
//!
//! ```text
//! comments ─────────────────────────────────────────────┐
//! header ──► reconcile (once) ──► merged header ────────┤
//! row ──► parse ──► annotate ──► merge ──► write ───────┴──► output
//! ```
//!
//! Rows are processed one at a time in input order, so memory use is bounded by
//! the size of a single row. Any I/O error or malformed row aborts the run;
//! output already written is left in place.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mafannotator::annotation::{AnnotatedMafSource, KeyColumns};
//! use mafannotator::pipeline::{annotate_file, PipelineConfig};
//!
//! let mut source = AnnotatedMafSource::from_path("annotator_out.maf", KeyColumns::default())?;
//! let stats = annotate_file("input.maf", "output.maf", &mut source, PipelineConfig::default())?;
//! println!("{}", stats);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod driver;
mod error;
mod preamble;
mod report;
mod stats;


pub use config::PipelineConfig;
pub use driver::{annotate_file, AnnotationPipeline, PipelineState};
pub use error::PipelineError;
pub use preamble::{read_preamble, Preamble};
pub use report::RunReport;
pub use stats::PipelineStats;
