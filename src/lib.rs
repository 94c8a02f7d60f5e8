//! # maf-annotator - Annotation Merging for Mutation Files
//!
//! `mafannotator` merges externally computed variant annotations into
//! tab-delimited mutation records (MAF and similar formats). Given an input file
//! and an annotation source, it produces an output whose header is the union of
//! the input columns and the annotation columns, with values merged row by row.
//!
//! ## Key Features
//!
//! - **Stable Schemas**: Input columns never move. New annotation columns are
//!   appended, optionally sorted, so downstream consumers keep working.
//!
//! - **Re-annotation in Place**: Annotation columns that already exist in the
//!   input are overwritten with the new values instead of being duplicated.
//!
//! - **Streaming**: Rows are merged one at a time in input order; memory use is
//!   bounded by a single row.
//!
//! - **Fail Loud**: A row whose field count does not match the header aborts the
//!   run rather than producing misaligned columns.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::io::Cursor;
//! use mafannotator::annotation::{AnnotationMap, InMemorySource, KeyColumns, RecordKey};
//! use mafannotator::pipeline::{AnnotationPipeline, PipelineConfig};
//!
//! let mut source = InMemorySource::new(KeyColumns::new(["Chr", "Pos"]));
//! let mut annotations = AnnotationMap::new();
//! annotations.insert("Effect".to_string(), "missense".to_string());
//! source.insert(RecordKey::new(["1", "100"]), annotations);
//!
//! let mut output = Vec::new();
//! let stats = AnnotationPipeline::new(PipelineConfig::default())
//!     .run(Cursor::new("Chr\tPos\tRef\n1\t100\tA\n"), &mut output, &mut source)?;
//!
//! assert_eq!(stats.rows_written, 1);
//! assert_eq!(
//!     String::from_utf8(output)?,
//!     "Chr\tPos\tRef\tEffect\n1\t100\tA\tmissense\n"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`record`]: headers and parsed rows
//! - [`schema`]: merged header computation
//! - [`merge`]: row alignment and annotation injection
//! - [`annotation`]: annotation sources
//! - [`pipeline`]: the streaming driver
//! - [`external`]: running `vcf2maf.pl` / `maf2maf.pl`

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod annotation;
pub mod external;
pub mod merge;
pub mod pipeline;
pub mod record;
pub mod schema;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::annotation::{
        AnnotatedMafSource, AnnotationError, AnnotationMap, AnnotationSource, InMemorySource,
        KeyColumns, RecordKey,
    };
    pub use crate::external::{ExternalAnnotator, ExternalAnnotatorConfig, ExternalError};
    pub use crate::merge::{merge_row, MergePlan, MergedRow};
    pub use crate::pipeline::{
        annotate_file, AnnotationPipeline, PipelineConfig, PipelineError, PipelineState,
        PipelineStats, RunReport,
    };
    pub use crate::record::{Header, Record, RecordError};
    pub use crate::schema::{reconcile, reconcile_with_summary, ReconcilePolicy, ReconcileSummary};
}
