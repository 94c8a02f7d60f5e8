use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::record::Header;

/// Policy flags controlling how the merged header is built
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcilePolicy {
    /// Alphabetize the appended column segment
    pub sort_columns: bool,

    /// Append canonical columns missing from both the input and the
    /// annotation source, filled with empty values
    pub add_missing_cols: bool,

    /// Canonical column list consulted when `add_missing_cols` is set.
    /// Empty by default, in which case `add_missing_cols` does not change
    /// the header.
    #[serde(default)]
    pub canonical_columns: Vec<String>,
}

impl ReconcilePolicy {
    /// Policy with the given flags and no canonical column list
    pub fn new(sort_columns: bool, add_missing_cols: bool) -> Self {
        Self {
            sort_columns,
            add_missing_cols,
            canonical_columns: Vec::new(),
        }
    }

    /// Set the canonical column list used by `add_missing_cols`
    pub fn with_canonical_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.canonical_columns = columns.into_iter().map(Into::into).collect();
        self
    }
}

/// Merged header together with a description of how it was derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// The merged output header
    pub merged: Header,
    /// Columns appended after the original ones, in output order
    pub appended: Vec<String>,
    /// Original columns whose values the annotation source overwrites
    pub overwritten: Vec<String>,
}

/// Compute the merged header for `original` and `annotation_columns`.
pub fn reconcile<S: AsRef<str>>(
    original: &Header,
    annotation_columns: &[S],
    policy: &ReconcilePolicy,
) -> Header {
    reconcile_with_summary(original, annotation_columns, policy).merged
}

/// Like [`reconcile`], also reporting appended and overwritten columns.
pub fn reconcile_with_summary<S: AsRef<str>>(
    original: &Header,
    annotation_columns: &[S],
    policy: &ReconcilePolicy,
) -> ReconcileSummary {
    let mut seen: HashSet<&str> = HashSet::with_capacity(annotation_columns.len());
    let mut appended = Vec::new();
    let mut overwritten = Vec::new();

    for name in annotation_columns {
        let name = name.as_ref();
        if !seen.insert(name) {
            continue;
        }
        if original.contains(name) {
            overwritten.push(name.to_string());
        } else {
            appended.push(name.to_string());
        }
    }

    if policy.add_missing_cols {
        for name in &policy.canonical_columns {
            if seen.insert(name.as_str()) && !original.contains(name) {
                appended.push(name.clone());
            }
        }
    }

    if policy.sort_columns {
        appended.sort();
    }

    let mut names = Vec::with_capacity(original.len() + appended.len());
    names.extend(original.names().iter().cloned());
    names.extend(appended.iter().cloned());

    ReconcileSummary {
        merged: Header::from_unique(names),
        appended,
        overwritten,
    }
}
