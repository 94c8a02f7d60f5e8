//! # External Annotator
//!
//! Thin wrapper around the Perl converters that run VEP over a whole input
//! file before merging: `vcf2maf.pl` for VCF input and `maf2maf.pl` for
//! everything else. The annotated MAF they produce is then loaded with
//! [`crate::annotation::AnnotatedMafSource`].
//!
//! Tool locations are never hard-coded; they come from
//! [`ExternalAnnotatorConfig`]. Without a configured intermediate directory a
//! temporary one is created and removed when the [`ExternalAnnotator`] is
//! dropped.

mod config;
mod error;
mod runner;

pub use config::{ExternalAnnotatorConfig, InputKind};
pub use error::ExternalError;
pub use runner::{AnnotatorCommand, ExternalAnnotator};
