/// Errors raised while building headers or parsing data rows
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The same column name appears twice in one header
    #[error("Duplicate column '{name}' at positions {first} and {second}")]
    DuplicateColumn {
        /// Column name that occurs more than once
        name: String,
        /// Position of the first occurrence
        first: usize,
        /// Position of the repeated occurrence
        second: usize,
    },

    /// The header line contains no column names
    #[error("Header line is empty")]
    EmptyHeader,

    /// A data line whose field count does not match the header
    #[error("Malformed row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        /// 1-based line number in the input file, or 0 when the row was
        /// not read from a file
        line: usize,
        /// Number of columns in the header
        expected: usize,
        /// Number of fields found on the line
        found: usize,
    },
}
