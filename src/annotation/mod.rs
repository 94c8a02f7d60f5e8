//! # Annotation Sources
//!
//! The merge engine never computes annotations itself. It asks an
//! [`AnnotationSource`] for the annotation values of each record and for the
//! full set of annotation columns the source can produce.
//!
//! Two sources are provided:
//!
//! - [`AnnotatedMafSource`]: looks records up in the tab-delimited output of a
//!   prior whole-file annotation run (for example `maf2maf.pl`). Its header is
//!   the annotation column set.
//! - [`InMemorySource`]: a map held in memory, for programmatic use and tests.
//!
//! A lookup miss is not an error. The pipeline treats it as an empty
//! annotation map and the merged row falls back to original or empty values.

mod error;
mod key;
mod maf;
mod memory;


use std::borrow::Cow;
use std::collections::HashMap;

use crate::record::{Header, Record};

pub use error::AnnotationError;
pub use key::{KeyColumns, RecordKey, DEFAULT_KEY_COLUMNS};
pub use maf::AnnotatedMafSource;
pub use memory::InMemorySource;

/// Annotation values for one record, keyed by column name
pub type AnnotationMap = HashMap<String, String>;

/// Provider of per-record annotation values.
pub trait AnnotationSource {
    /// Every annotation column this source can produce, in first-observed order
    fn columns(&self) -> &[String];

    /// Check the source can serve records of `input`.
    ///
    /// Called once, after the input header is read and before any record is
    /// annotated.
    fn bind(&mut self, input: &Header) -> Result<(), AnnotationError> {
        let _ = input;
        Ok(())
    }

    /// Annotation values for `record`, or `None` if the source has none
    fn annotate(&self, record: &Record<'_>) -> Option<Cow<'_, AnnotationMap>>;
}

impl<T: AnnotationSource + ?Sized> AnnotationSource for Box<T> {
    fn columns(&self) -> &[String] {
        (**self).columns()
    }

    fn bind(&mut self, input: &Header) -> Result<(), AnnotationError> {
        (**self).bind(input)
    }

    fn annotate(&self, record: &Record<'_>) -> Option<Cow<'_, AnnotationMap>> {
        (**self).annotate(record)
    }
}
