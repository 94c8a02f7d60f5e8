use std::path::PathBuf;

/// Errors from running the external annotator
#[derive(Debug, thiserror::Error)]
pub enum ExternalError {
    /// I/O error preparing the working directory
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The converter could not be started
    #[error("Could not execute '{program}': {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The converter exited unsuccessfully
    #[error("Annotator exited with status {status}: {stderr}")]
    Failed {
        /// Exit code, or -1 when terminated by a signal
        status: i32,
        /// Last lines of the converter's standard error
        stderr: String,
    },

    /// The converter succeeded but did not write its output file
    #[error("Annotator produced no output at {0}")]
    MissingOutput(PathBuf),
}
