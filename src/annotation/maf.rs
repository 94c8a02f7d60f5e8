use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};

use super::{AnnotationError, AnnotationMap, AnnotationSource, KeyColumns, RecordKey};
use crate::record::{Header, Record};

/// Annotation source backed by the output file of a whole-file annotation run.
///
/// The file is tab-delimited with `#` comment lines. Its header supplies the
/// annotation column set, and each row is indexed by the configured key
/// columns. When several rows share a key the first one wins.
#[derive(Debug, Clone)]
pub struct AnnotatedMafSource {
    key_columns: KeyColumns,
    columns: Vec<String>,
    entries: HashMap<RecordKey, AnnotationMap>,
    duplicate_keys: usize,
}

impl AnnotatedMafSource {
    /// Load an annotated MAF file from disk
    pub fn from_path<P: AsRef<Path>>(path: P, key_columns: KeyColumns) -> Result<Self, AnnotationError> {
        let file = File::open(path.as_ref())?;
        debug!("Loading annotations from {}", path.as_ref().display());
        Self::from_reader(BufReader::new(file), key_columns)
    }

    /// Load annotated rows from a reader
    pub fn from_reader<R: Read>(reader: R, key_columns: KeyColumns) -> Result<Self, AnnotationError> {
        let mut csv_reader = annotation_reader(reader);

        let columns: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        let header = Header::new(columns.iter().cloned())?;
        key_columns.check(&header, "annotation")?;

        let mut entries = HashMap::new();
        let mut duplicate_keys = 0;

        for row in csv_reader.records() {
            let row = row?;
            let fields: Vec<&str> = row.iter().collect();
            let Some(key) = key_columns.key_for_fields(&header, &fields[..]) else {
                continue;
            };

            match entries.entry(key) {
                Entry::Vacant(slot) => {
                    let annotations: AnnotationMap = columns
                        .iter()
                        .cloned()
                        .zip(fields.iter().map(|value| value.to_string()))
                        .collect();
                    slot.insert(annotations);
                }
                Entry::Occupied(_) => duplicate_keys += 1,
            }
        }

        if duplicate_keys > 0 {
            warn!(
                "{} annotated rows share a key with an earlier row and were ignored",
                duplicate_keys
            );
        }
        debug!(
            "Loaded {} annotated records ({} columns)",
            entries.len(),
            columns.len()
        );

        Ok(Self {
            key_columns,
            columns,
            entries,
            duplicate_keys,
        })
    }

    /// Read only the column names of an annotated MAF file
    pub fn read_columns<P: AsRef<Path>>(path: P) -> Result<Vec<String>, AnnotationError> {
        let file = File::open(path)?;
        let mut csv_reader = annotation_reader(BufReader::new(file));
        Ok(csv_reader.headers()?.iter().map(str::to_string).collect())
    }

    /// Number of distinct annotated records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the file held no data rows
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows dropped because their key was already present
    pub fn duplicate_keys(&self) -> usize {
        self.duplicate_keys
    }

    /// Columns used to match input records
    pub fn key_columns(&self) -> &KeyColumns {
        &self.key_columns
    }
}

impl AnnotationSource for AnnotatedMafSource {
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

fn annotation_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .quoting(false)
        .has_headers(true)
        .from_reader(reader)
}
