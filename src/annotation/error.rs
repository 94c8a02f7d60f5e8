/// Errors that can occur while loading or binding an annotation source
#[derive(Debug, thiserror::Error)]
pub enum AnnotationError {
    /// I/O error reading the annotation file
    #[error("Failed to read annotation file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV/TSV parsing error
    #[error("Annotation file parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// Invalid column layout in the annotation file header
    #[error("Invalid annotation header: {0}")]
    InvalidHeader(#[from] crate::record::RecordError),

    /// A lookup key column is absent from a header
    #[error("Key column '{column}' missing from {location} header")]
    MissingKeyColumn {
        /// Name of the key column
        column: String,
        /// Which header lacks it ("annotation" or "input")
        location: &'static str,
    },
}
