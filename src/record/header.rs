use std::collections::HashMap;
use std::fmt;

use super::RecordError;

/// Separator between fields on every line of a mutation file
pub const FIELD_DELIMITER: char = '\t';

/// Ordered set of unique column names.
///
/// Order is significant for positional access. Names are compared exactly
/// (case-sensitive). A `Header` is never modified after construction; schema
/// reconciliation always builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Header {
    /// Build a header from column names, rejecting duplicates.
    pub fn new<I, S>(names: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(names.len());

        for (position, name) in names.iter().enumerate() {
            if let Some(&first) = index.get(name.as_str()) {
                return Err(RecordError::DuplicateColumn {
                    name: name.clone(),
                    first,
                    second: position,
                });
            }
            index.insert(name.clone(), position);
        }

        Ok(Self { names, index })
    }

    /// Build a header from names already known to be unique.
    pub(crate) fn from_unique(names: Vec<String>) -> Self {
        let index = names
            .iter()
            .enumerate()
            .map(|(position, name)| (name.clone(), position))
            .collect();
        Self { names, index }
    }

    /// Parse a tab-delimited header line.
    ///
    /// Trailing line terminators are ignored. A line with no visible content
    /// is rejected with [`RecordError::EmptyHeader`].
    pub fn parse_line(line: &str) -> Result<Self, RecordError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Err(RecordError::EmptyHeader);
        }
        Self::new(line.split(FIELD_DELIMITER))
    }

    /// Position of `name`, if present
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Whether the header contains `name`
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the header has no columns
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column names in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over column names in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Render the header as a tab-delimited line without a terminator
    pub fn to_line(&self) -> String {
        self.names.join("\t")
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

impl<'a> IntoIterator for &'a Header {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
