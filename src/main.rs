//! # maf-annotate
//!
//! Command-line front end for merging variant annotations into tab-delimited
//! mutation files.
//!
//! ## Usage
//!
//! ```bash
//! # Merge a precomputed annotated MAF into a mutation file
//! maf-annotate merge study.maf annotator_out.maf study.annotated.maf
//!
//! # Run maf2maf/vcf2maf first, then merge
//! maf-annotate annotate calls.vcf --vep-path /opt/vep --script-dir /opt/vcf2maf
//!
//! # Preview the reconciled header
//! maf-annotate header study.maf annotator_out.maf --sort-columns
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
