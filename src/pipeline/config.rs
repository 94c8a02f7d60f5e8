use serde::{Deserialize, Serialize};

use crate::schema::ReconcilePolicy;

/// Default marker for metadata lines preceding the header
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Configuration for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Header reconciliation policy
    pub policy: ReconcilePolicy,

    /// Lines before the header starting with this prefix are copied to the
    /// output unchanged. An empty prefix disables comment detection.
    pub comment_prefix: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            policy: ReconcilePolicy::default(),
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Configuration using `policy` and the default comment prefix
    pub fn with_policy(policy: ReconcilePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub(crate) fn is_comment(&self, line: &str) -> bool {
        !self.comment_prefix.is_empty() && line.starts_with(&self.comment_prefix)
    }
}
