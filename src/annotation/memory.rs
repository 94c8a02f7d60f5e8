use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use super::{AnnotationError, AnnotationMap, AnnotationSource, KeyColumns, RecordKey};
use crate::record::{Header, Record};

/// Annotation source backed by an in-memory map
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    key_columns: KeyColumns,
    columns: Vec<String>,
    seen: HashSet<String>,
    entries: HashMap<RecordKey, AnnotationMap>,
}

impl InMemorySource {
    /// Empty source keyed by `key_columns`
    pub fn new(key_columns: KeyColumns) -> Self {
        Self {
            key_columns,
            ..Default::default()
        }
    }

    /// Declare annotation columns up front, even if no record carries them
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for column in columns {
            self.observe(column.into());
        }
        self
    }

    /// Register annotations for the record identified by `key`.
    ///
    /// New column names extend [`AnnotationSource::columns`] in the order
    /// they are first seen.
    pub fn insert(&mut self, key: RecordKey, annotations: AnnotationMap) {
        let mut names: Vec<&String> = annotations.keys().collect();
        names.sort();
        for name in names {
            if !self.seen.contains(name) {
                self.observe(name.clone());
            }
        }
        self.entries.insert(key, annotations);
    }

    /// Number of annotated records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no record is annotated
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn observe(&mut self, column: String) {
        if self.seen.insert(column.clone()) {
            self.columns.push(column);
        }
    }
}

impl AnnotationSource for InMemorySource {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn bind(&mut self, input: &Header) -> Result<(), AnnotationError> {
        self.key_columns.check(input, "input")
    }

    fn annotate(&self, record: &Record<'_>) -> Option<Cow<'_, AnnotationMap>> {
        let key = self.key_columns.key_for(record)?;
        self.entries.get(&key).map(Cow::Borrowed)
    }
}
