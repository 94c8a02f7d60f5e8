use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{PipelineConfig, PipelineStats};

/// JSON-serializable summary of a finished run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Crate version that produced the output
    pub tool_version: String,
    /// Completion time
    pub finished_at: DateTime<Utc>,
    /// Input mutation file
    pub input: PathBuf,
    /// Merged output file
    pub output: PathBuf,
    /// Annotation file the values were taken from, if any
    pub annotation_file: Option<PathBuf>,
    /// Configuration the run used
    pub config: PipelineConfig,
    /// Run counters
    pub stats: PipelineStats,
}

impl RunReport {
    /// Report stamped with the current time
    pub fn new(
        input: &Path,
        output: &Path,
        annotation_file: Option<&Path>,
        config: &PipelineConfig,
        stats: PipelineStats,
    ) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            finished_at: Utc::now(),
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            annotation_file: annotation_file.map(Path::to_path_buf),
            config: config.clone(),
            stats,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the report as JSON to `path`
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = self
            .to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}
