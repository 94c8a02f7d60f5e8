use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use super::{read_preamble, PipelineConfig, PipelineError, PipelineStats};
use crate::annotation::AnnotationSource;
use crate::merge::MergePlan;
use crate::record::Record;
use crate::schema::reconcile_with_summary;

/// Lifecycle of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Nothing read yet
    Init,
    /// Merged header computed and written
    HeaderResolved,
    /// Data rows are being merged
    Streaming,
    /// All rows written and output flushed
    Done,
    /// The run aborted; output may be partial
    Failed,
}

/// Single-use driver merging one input stream into one output stream
#[derive(Debug)]
pub struct AnnotationPipeline {
    config: PipelineConfig,
    state: PipelineState,
}

impl AnnotationPipeline {
    /// Create a pipeline in the [`PipelineState::Init`] state
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            state: PipelineState::Init,
        }
    }

    /// Configuration of this run
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Merge every row of `reader` with annotations from `source` into `writer`.
    ///
    /// A pipeline runs once. On error the state becomes
    /// [`PipelineState::Failed`] and whatever was already written stays in
    /// `writer`.
    pub fn run<R, W, S>(
        &mut self,
        mut reader: R,
        writer: W,
        source: &mut S,
    ) -> Result<PipelineStats, PipelineError>
    where
        R: BufRead,
        W: Write,
        S: AnnotationSource + ?Sized,
    {
        if self.state != PipelineState::Init {
            return Err(PipelineError::AlreadyRun(self.state));
        }

        match self.stream(&mut reader, writer, source) {
            Ok(stats) => {
                self.transition(PipelineState::Done);
                info!("{}", stats);
                Ok(stats)
            }
            Err(e) => {
                self.transition(PipelineState::Failed);
                Err(e)
            }
        }
    }

    fn stream<R, W, S>(
        &mut self,
        reader: &mut R,
        writer: W,
        source: &mut S,
    ) -> Result<PipelineStats, PipelineError>
    where
        R: BufRead,
        W: Write,
        S: AnnotationSource + ?Sized,
    {
        let preamble = read_preamble(reader, &self.config)?;
        let header = &preamble.header;

        let mut out = BufWriter::new(writer);
        for comment in &preamble.comments {
            out.write_all(comment.as_bytes())?;
        }

        source.bind(header)?;
        let summary = reconcile_with_summary(header, source.columns(), &self.config.policy);
        let plan = MergePlan::new(header, &summary.merged);

        let mut stats = PipelineStats {
            comment_lines: preamble.comments.len(),
            blank_lines: preamble.blank_lines,
            output_columns: summary.merged.len(),
            appended_columns: summary.appended,
            overwritten_columns: summary.overwritten,
            ..Default::default()
        };
        debug!(
            "Merged header has {} columns ({} appended, {} overwritten)",
            stats.output_columns,
            stats.appended_columns.len(),
            stats.overwritten_columns.len()
        );

        write_row(&mut out, plan.merged_header().names())?;
        self.transition(PipelineState::HeaderResolved);

        self.transition(PipelineState::Streaming);
        let mut line = String::new();
        let mut line_number = preamble.lines_read;

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            line_number += 1;

            if line.trim().is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            let record = Record::parse(header, &line, line_number)?;
            stats.rows_read += 1;

            let annotations = source.annotate(&record);
            if annotations.is_none() {
                stats.rows_without_annotation += 1;
                debug!("No annotations for line {}", line_number);
            }

            let merged = plan.merge(&record, annotations.as_deref())?;
            stats.ignored_annotation_values += merged.ignored_keys;
            write_row(&mut out, &merged.fields[..])?;
            stats.rows_written += 1;
        }

        out.flush()?;
        Ok(stats)
    }

    fn transition(&mut self, next: PipelineState) {
        debug!("Pipeline state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Write one tab-joined row.
///
/// Fields are written as they are, with no quoting; a row holding a single
/// empty field is an empty line.
fn write_row<W: Write, S: AsRef<str>>(out: &mut W, fields: &[S]) -> std::io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.write_all(b"\t")?;
        }
        out.write_all(field.as_ref().as_bytes())?;
    }
    out.write_all(b"\n")
}

/// Annotate the file at `input` into a new file at `output`.
///
/// `output` is created or truncated. A failed run leaves a partial file
/// behind that the caller should treat as invalid. Writing over `input`
/// itself is refused before anything is opened for writing.
pub fn annotate_file<P, Q, S>(
    input: P,
    output: Q,
    source: &mut S,
    config: PipelineConfig,
) -> Result<PipelineStats, PipelineError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: AnnotationSource + ?Sized,
{
    let input = input.as_ref();
    let output = output.as_ref();

    info!("Reading input from: {}", input.display());
    info!("Writing output to: {}", output.display());

    if same_file(input, output) {
        return Err(PipelineError::OutputIsInput(output.to_path_buf()));
    }

    let reader = BufReader::new(File::open(input)?);
    let writer = File::create(output)?;

    AnnotationPipeline::new(config).run(reader, writer, source)
}

/// Whether both paths name the same existing file
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
