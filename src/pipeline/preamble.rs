use std::io::BufRead;

use super::{PipelineConfig, PipelineError};
use crate::record::Header;

/// Everything in a mutation file up to and including the header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preamble {
    /// Metadata lines exactly as read, line terminators included
    pub comments: Vec<String>,
    /// Blank lines skipped before the header
    pub blank_lines: usize,
    /// Parsed header
    pub header: Header,
    /// Number of lines consumed, header included
    pub lines_read: usize,
}

/// Read comment lines and the header from the start of `reader`.
///
/// Comment lines are kept byte for byte so they can be copied to the output
/// unchanged. The reader is left positioned at the first data line.
pub fn read_preamble<R: BufRead>(
    reader: &mut R,
    config: &PipelineConfig,
) -> Result<Preamble, PipelineError> {
    let mut comments = Vec::new();
    let mut blank_lines = 0;
    let mut lines_read = 0;
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(PipelineError::MissingHeader);
        }
        lines_read += 1;

        let content = line.trim_end_matches(['\r', '\n']);
        if config.is_comment(content) {
            comments.push(line.clone());
        } else if content.trim().is_empty() {
            blank_lines += 1;
        } else {
            let header = Header::parse_line(content)?;
            return Ok(Preamble {
                comments,
                blank_lines,
                header,
                lines_read,
            });
        }
    }
}
