use crate::annotation::AnnotationMap;
use crate::record::{Header, Record, RecordError};

/// Where a merged column takes its base value from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// Field at this position of the input row
    Original(usize),
    /// Column added by reconciliation; empty unless annotated
    Added,
}

/// A row aligned to the merged header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedRow {
    /// Field values in merged header order
    pub fields: Vec<String>,
    /// Annotation keys that had no column in the merged header
    pub ignored_keys: usize,
}

/// Per-run column mapping from the input header to the merged header
#[derive(Debug, Clone)]
pub struct MergePlan {
    merged: Header,
    original_len: usize,
    sources: Vec<ColumnSource>,
}

impl MergePlan {
    /// Resolve every merged column against the original header.
    pub fn new(original: &Header, merged: &Header) -> Self {
        let sources = merged
            .iter()
            .map(|name| match original.index_of(name) {
                Some(idx) => ColumnSource::Original(idx),
                None => ColumnSource::Added,
            })
            .collect();

        Self {
            merged: merged.clone(),
            original_len: original.len(),
            sources,
        }
    }

    /// The header rows are aligned to after merging
    pub fn merged_header(&self) -> &Header {
        &self.merged
    }

    /// Base value source for each merged column
    pub fn sources(&self) -> &[ColumnSource] {
        &self.sources
    }

    /// Merge a parsed record with its annotations.
    ///
    /// `None` annotations behave like an empty map.
    pub fn merge(
        &self,
        record: &Record<'_>,
        annotations: Option<&AnnotationMap>,
    ) -> Result<MergedRow, RecordError> {
        self.merge_fields(record.fields(), annotations, record.line_number())
    }

    /// Merge raw fields aligned to the original header.
    ///
    /// Fails with [`RecordError::MalformedRow`] when `raw` does not have one
    /// field per original column.
    pub fn merge_fields<S: AsRef<str>>(
        &self,
        raw: &[S],
        annotations: Option<&AnnotationMap>,
        line: usize,
    ) -> Result<MergedRow, RecordError> {
        if raw.len() != self.original_len {
            return Err(RecordError::MalformedRow {
                line,
                expected: self.original_len,
                found: raw.len(),
            });
        }

        let mut fields: Vec<String> = self
            .sources
            .iter()
            .map(|source| match *source {
                ColumnSource::Original(idx) => raw[idx].as_ref().to_string(),
                ColumnSource::Added => String::new(),
            })
            .collect();

        let mut ignored_keys = 0;
        if let Some(annotations) = annotations {
            for (name, value) in annotations {
                match self.merged.index_of(name) {
                    Some(idx) => fields[idx].clone_from(value),
                    None => ignored_keys += 1,
                }
            }
        }

        Ok(MergedRow {
            fields,
            ignored_keys,
        })
    }
}

/// One-shot merge of a raw row without a prebuilt plan.
///
/// Builds a [`MergePlan`] on every call; the pipeline reuses one plan per run
/// instead. A row with the wrong number of fields is reported as
/// [`RecordError::MalformedRow`] with `line` set to 0, since a bare row has no
/// position in any file.
pub fn merge_row<S: AsRef<str>>(
    raw: &[S],
    annotations: &AnnotationMap,
    original: &Header,
    merged: &Header,
) -> Result<Vec<String>, RecordError> {
    MergePlan::new(original, merged)
        .merge_fields(raw, Some(annotations), 0)
        .map(|row| row.fields)
}
