use serde::{Deserialize, Serialize};

use super::AnnotationError;
use crate::record::{Header, Record};

/// Columns identifying a variant in MAF files
pub const DEFAULT_KEY_COLUMNS: &[&str] = &[
    "Chromosome",
    "Start_Position",
    "End_Position",
    "Reference_Allele",
    "Tumor_Seq_Allele2",
];

/// Values of the key columns of one record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey(Vec<String>);

impl RecordKey {
    /// Key made of the given values, in key column order
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    /// Key values in key column order
    pub fn values(&self) -> &[String] {
        &self.0
    }
}

/// Ordered list of columns that identify a record for annotation lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyColumns(Vec<String>);

impl Default for KeyColumns {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_COLUMNS.iter().copied())
    }
}

impl KeyColumns {
    /// Key built from the given column names
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(columns.into_iter().map(Into::into).collect())
    }

    /// Column names in key order
    pub fn columns(&self) -> &[String] {
        &self.0
    }

    /// Fail if any key column is absent from `header`
    pub fn check(&self, header: &Header, location: &'static str) -> Result<(), AnnotationError> {
        match self.0.iter().find(|column| !header.contains(column)) {
            Some(column) => Err(AnnotationError::MissingKeyColumn {
                column: column.clone(),
                location,
            }),
            None => Ok(()),
        }
    }

    /// Key of `record`, or `None` if its header lacks a key column
    pub fn key_for(&self, record: &Record<'_>) -> Option<RecordKey> {
        self.0
            .iter()
            .map(|column| record.get(column).map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(RecordKey)
    }

    /// Key from positional fields aligned to `header`
    pub fn key_for_fields<S: AsRef<str>>(&self, header: &Header, fields: &[S]) -> Option<RecordKey> {
        self.0
            .iter()
            .map(|column| {
                header
                    .index_of(column)
                    .and_then(|idx| fields.get(idx))
                    .map(|value| value.as_ref().to_string())
            })
            .collect::<Option<Vec<_>>>()
            .map(RecordKey)
    }
}
