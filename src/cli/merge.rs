use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use mafannotator::annotation::{AnnotatedMafSource, AnnotationSource};
use mafannotator::pipeline::{annotate_file, RunReport};

use super::{default_output, ensure_distinct_output, MergeOptions, Settings};

/// Merge a precomputed annotated MAF into a mutation file
pub fn run(
    input: PathBuf,
    annotated: PathBuf,
    output: Option<PathBuf>,
    options: MergeOptions,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }
    if !annotated.exists() {
        anyhow::bail!("Annotation file does not exist: {}", annotated.display());
    }

    let settings = options.resolve()?;
    let output = output.unwrap_or_else(|| default_output(&input));
    ensure_distinct_output(&input, &output)?;

    info!("maf-annotator - merge annotations");
    info!("=================================");
    merge_annotations(&input, &annotated, &output, &settings, options.report())
}

/// Load `annotated`, merge it into `input`, and optionally write a report
pub(super) fn merge_annotations(
    input: &Path,
    annotated: &Path,
    output: &Path,
    settings: &Settings,
    report: Option<&Path>,
) -> Result<()> {
    info!("Input:      {}", input.display());
    info!("Annotation: {}", annotated.display());
    info!("Output:     {}", output.display());
    info!(
        "Key columns: {}",
        settings.key_columns.columns().join(", ")
    );
    if settings.pipeline.policy.sort_columns {
        info!("Sorting added columns");
    }
    if settings.pipeline.policy.add_missing_cols {
        info!(
            "Adding {} canonical columns when missing",
            settings.pipeline.policy.canonical_columns.len()
        );
    }

    let mut source = AnnotatedMafSource::from_path(annotated, settings.key_columns.clone())
        .with_context(|| format!("Failed to load annotations from {}", annotated.display()))?;
    info!(
        "Loaded {} annotated records ({} columns)",
        source.len(),
        source.columns().len()
    );

    let stats = annotate_file(input, output, &mut source, settings.pipeline.clone())
        .context("Annotation merge failed")?;

    info!("Merge complete!");
    info!("  Rows written: {}", stats.rows_written);
    info!("  Rows without annotation: {}", stats.rows_without_annotation);
    info!("  Output columns: {}", stats.output_columns);
    if !stats.appended_columns.is_empty() {
        info!("  Added columns: {}", stats.appended_columns.join(", "));
    }
    if !stats.overwritten_columns.is_empty() {
        info!(
            "  Overwritten columns: {}",
            stats.overwritten_columns.join(", ")
        );
    }

    if let Some(report_path) = report {
        RunReport::new(input, output, Some(annotated), &settings.pipeline, stats)
            .write_to(report_path)
            .with_context(|| format!("Failed to write report: {}", report_path.display()))?;
        info!("Report written to {}", report_path.display());
    }

    Ok(())
}
