use std::fmt;

use serde::Serialize;

/// Counters collected over one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    /// Metadata lines copied ahead of the header
    pub comment_lines: usize,
    /// Blank lines skipped
    pub blank_lines: usize,
    /// Data rows parsed
    pub rows_read: usize,
    /// Merged rows written
    pub rows_written: usize,
    /// Rows for which the annotation source had nothing
    pub rows_without_annotation: usize,
    /// Annotation values dropped because their column is not in the output
    pub ignored_annotation_values: usize,
    /// Number of columns in the merged header
    pub output_columns: usize,
    /// Columns appended to the input header
    pub appended_columns: Vec<String>,
    /// Input columns overwritten by annotation values
    pub overwritten_columns: Vec<String>,
}

impl PipelineStats {
    /// Share of written rows that received annotations
    pub fn annotation_rate(&self) -> f64 {
        if self.rows_written == 0 {
            return 0.0;
        }
        let annotated = self.rows_written.saturating_sub(self.rows_without_annotation);
        annotated as f64 / self.rows_written as f64
    }
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} rows ({} without annotation) with {} columns ({} added, {} overwritten)",
            self.rows_written,
            self.rows_without_annotation,
            self.output_columns,
            self.appended_columns.len(),
            self.overwritten_columns.len()
        )
    }
}
