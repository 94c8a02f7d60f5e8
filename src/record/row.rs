use super::{Header, RecordError, FIELD_DELIMITER};

/// One data row, borrowed from its source line.
///
/// The field count always equals the length of the header the row was parsed
/// against; [`Record::parse`] refuses anything else.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    header: &'a Header,
    fields: Vec<&'a str>,
    line_number: usize,
}

impl<'a> Record<'a> {
    /// Split a tab-delimited data line and align it to `header`.
    ///
    /// `line_number` is 1-based and only used for error reporting.
    pub fn parse(header: &'a Header, line: &'a str, line_number: usize) -> Result<Self, RecordError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let fields: Vec<&'a str> = line.split(FIELD_DELIMITER).collect();

        if fields.len() != header.len() {
            return Err(RecordError::MalformedRow {
                line: line_number,
                expected: header.len(),
                found: fields.len(),
            });
        }

        Ok(Self {
            header,
            fields,
            line_number,
        })
    }

    /// Value of the column called `name`
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.header.index_of(name).map(|idx| self.fields[idx])
    }

    /// Field values in header order
    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// Header this record is aligned to
    pub fn header(&self) -> &'a Header {
        self.header
    }

    /// 1-based line number the record was read from
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
