use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use mafannotator::external::{ExternalAnnotator, InputKind};

use super::merge::merge_annotations;
use super::{default_output, ensure_distinct_output, MergeOptions};

/// Run the external converter over `input`, then merge its annotations
pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    vep_path: Option<PathBuf>,
    script_dir: Option<PathBuf>,
    intermediate_dir: Option<PathBuf>,
    options: MergeOptions,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let mut settings = options.resolve()?;
    if vep_path.is_some() {
        settings.annotator.vep_path = vep_path;
    }
    if script_dir.is_some() {
        settings.annotator.script_dir = script_dir;
    }
    if intermediate_dir.is_some() {
        settings.annotator.intermediate_dir = intermediate_dir;
    }
    let output = output.unwrap_or_else(|| default_output(&input));
    ensure_distinct_output(&input, &output)?;

    info!("maf-annotator - annotate and merge");
    info!("==================================");

    // Owns the scratch directory; keep it alive until the merge is done.
    let mut annotator = ExternalAnnotator::new(settings.annotator.clone());
    let annotated = annotator
        .run(&input)
        .context("External annotation failed")?;

    let base = InputKind::detect(&input).merge_base(&input, &annotated);
    if base != input.as_path() {
        info!("Merging into converter output {}", base.display());
    }
    merge_annotations(base, &annotated, &output, &settings, options.report())
}
