use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[cfg(feature = "colorized_output")]
use console::style;

use mafannotator::annotation::AnnotatedMafSource;
use mafannotator::pipeline::read_preamble;
use mafannotator::schema::{reconcile_with_summary, ReconcileSummary};

use super::MergeOptions;

/// How a merged column relates to the input header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnOrigin {
    Original,
    Overwritten,
    Added,
}

impl ColumnOrigin {
    fn label(&self) -> &'static str {
        match self {
            ColumnOrigin::Original => "original",
            ColumnOrigin::Overwritten => "overwritten",
            ColumnOrigin::Added => "added",
        }
    }
}

/// Print the reconciled header of `input` against `annotated`
pub fn run(input: PathBuf, annotated: PathBuf, options: MergeOptions) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let settings = options.resolve()?;

    let file = File::open(&input).context("Failed to open input file")?;
    let preamble = read_preamble(&mut BufReader::new(file), &settings.pipeline)
        .context("Failed to read input header")?;
    let annotation_columns = AnnotatedMafSource::read_columns(&annotated)
        .with_context(|| format!("Failed to read header of {}", annotated.display()))?;

    let summary =
        reconcile_with_summary(&preamble.header, &annotation_columns, &settings.pipeline.policy);

    println!("Reconciled Header");
    println!("=================");
    println!("Input:      {}", input.display());
    println!("Annotation: {}", annotated.display());
    println!(
        "Columns: {} input, {} annotation, {} output",
        preamble.header.len(),
        annotation_columns.len(),
        summary.merged.len()
    );
    println!();

    for (position, (name, origin)) in classify(&summary).into_iter().enumerate() {
        println!("{:>4}  {:<12} {}", position + 1, origin.label(), render(name, origin));
    }

    Ok(())
}

fn classify(summary: &ReconcileSummary) -> Vec<(&str, ColumnOrigin)> {
    summary
        .merged
        .iter()
        .map(|name| {
            let origin = if summary.appended.iter().any(|c| c == name) {
                ColumnOrigin::Added
            } else if summary.overwritten.iter().any(|c| c == name) {
                ColumnOrigin::Overwritten
            } else {
                ColumnOrigin::Original
            };
            (name, origin)
        })
        .collect()
}

#[cfg(feature = "colorized_output")]
fn render(name: &str, origin: ColumnOrigin) -> String {
    match origin {
        ColumnOrigin::Original => name.to_string(),
        ColumnOrigin::Overwritten => style(name).yellow().to_string(),
        ColumnOrigin::Added => style(name).green().to_string(),
    }
}

#[cfg(not(feature = "colorized_output"))]
fn render(name: &str, _origin: ColumnOrigin) -> String {
    name.to_string()
}
