use crate::annotation::AnnotationError;
use crate::record::RecordError;

/// Errors that abort a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// I/O error reading input or writing output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Bad header or a row that does not fit the header
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The annotation source cannot serve this input
    #[error("Annotation source error: {0}")]
    Annotation(#[from] AnnotationError),

    /// The input ended before a header line was found
    #[error("Input has no header line")]
    MissingHeader,

    /// The output path names the input file
    #[error("Output would overwrite the input file: {}", .0.display())]
    OutputIsInput(std::path::PathBuf),

    /// The pipeline was run more than once
    #[error("Pipeline already ran (state: {0:?})")]
    AlreadyRun(super::PipelineState),
}
