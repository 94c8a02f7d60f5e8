use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use mafannotator::annotation::KeyColumns;
use mafannotator::external::ExternalAnnotatorConfig;
use mafannotator::pipeline::PipelineConfig;
use mafannotator::schema::ReconcilePolicy;

mod annotate;
mod config;
mod header;
mod merge;

use config::Config;

/// maf-annotator - Merge variant annotations into mutation files
#[derive(Parser)]
#[command(name = "maf-annotate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that reconciles a header
#[derive(Args, Debug, Clone, Default)]
pub struct MergeOptions {
    /// Alphabetize the columns added to the input header
    #[arg(long)]
    sort_columns: bool,

    /// Add canonical columns missing from the annotation output, filled empty
    #[arg(long)]
    add_missing_cols: bool,

    /// Canonical column list used by --add-missing-cols (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "COLUMNS")]
    canonical_columns: Vec<String>,

    /// Columns identifying a variant for annotation lookup (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "COLUMNS")]
    key_columns: Vec<String>,

    /// Prefix of metadata lines preceding the header
    #[arg(long, value_name = "PREFIX")]
    comment_prefix: Option<String>,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a JSON run report to this file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

/// Settings after merging the config file with command-line flags
#[derive(Debug, Clone)]
pub struct Settings {
    pub pipeline: PipelineConfig,
    pub key_columns: KeyColumns,
    pub annotator: ExternalAnnotatorConfig,
}

impl MergeOptions {
    /// Combine the optional config file with flags; flags win.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        Ok(self.resolve_with(file))
    }

    fn resolve_with(&self, file: Config) -> Settings {
        let canonical_columns = if self.canonical_columns.is_empty() {
            file.merge.canonical_columns.unwrap_or_default()
        } else {
            self.canonical_columns.clone()
        };

        let policy = ReconcilePolicy {
            sort_columns: self.sort_columns || file.merge.sort_columns.unwrap_or(false),
            add_missing_cols: self.add_missing_cols || file.merge.add_missing_cols.unwrap_or(false),
            canonical_columns,
        };

        let mut pipeline = PipelineConfig::with_policy(policy);
        if let Some(prefix) = self.comment_prefix.clone().or(file.merge.comment_prefix) {
            pipeline.comment_prefix = prefix;
        }

        let key_columns = if !self.key_columns.is_empty() {
            KeyColumns::new(self.key_columns.iter().cloned())
        } else {
            file.lookup
                .key_columns
                .map(KeyColumns::new)
                .unwrap_or_default()
        };

        Settings {
            pipeline,
            key_columns,
            annotator: file.annotator,
        }
    }

    /// Where to write the JSON run report, if requested
    pub fn report(&self) -> Option<&Path> {
        self.report.as_deref()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Merge a precomputed annotated MAF into a mutation file
    Merge {
        /// Input mutation file (tab-delimited)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Annotated MAF produced by a prior annotation run
        #[arg(value_name = "ANNOTATED")]
        annotated: PathBuf,

        /// Output file path (defaults to <input stem>.annotated.maf)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: MergeOptions,
    },

    /// Run vcf2maf/maf2maf over the input, then merge its annotations
    Annotate {
        /// Input VCF or MAF file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file path (defaults to <input stem>.annotated.maf)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// VEP installation directory
        #[arg(long, value_name = "DIR")]
        vep_path: Option<PathBuf>,

        /// Directory containing vcf2maf.pl and maf2maf.pl
        #[arg(long, value_name = "DIR")]
        script_dir: Option<PathBuf>,

        /// Keep converter output in this directory instead of a temporary one
        #[arg(long, value_name = "DIR")]
        intermediate_dir: Option<PathBuf>,

        #[command(flatten)]
        options: MergeOptions,
    },

    /// Show the reconciled header without writing any rows
    Header {
        /// Input mutation file (tab-delimited)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Annotated MAF whose header supplies the annotation columns
        #[arg(value_name = "ANNOTATED")]
        annotated: PathBuf,

        #[command(flatten)]
        options: MergeOptions,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Merge {
            input,
            annotated,
            output,
            options,
        } => merge::run(input, annotated, output, options),
        Commands::Annotate {
            input,
            output,
            vep_path,
            script_dir,
            intermediate_dir,
            options,
        } => annotate::run(input, output, vep_path, script_dir, intermediate_dir, options),
        Commands::Header {
            input,
            annotated,
            options,
        } => header::run(input, annotated, options),
    }
}

/// Default output path next to the input: `<stem>.annotated.maf`
fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{}.annotated.maf", stem))
}

/// Refuse an output path that names the input file
fn ensure_distinct_output(input: &Path, output: &Path) -> Result<()> {
    let same = match (input.canonicalize(), output.canonicalize()) {
        (Ok(input), Ok(output)) => input == output,
        _ => false,
    };
    if same {
        anyhow::bail!(
            "Output file would overwrite the input: {}",
            output.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_must_differ_from_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("study.maf");
        std::fs::write(&input, "Chr\tPos\n1\t2\n").unwrap();

        let err = ensure_distinct_output(&input, &input).unwrap_err();
        assert!(err.to_string().contains("overwrite the input"));

        let relative = dir.path().join(".").join("study.maf");
        assert!(ensure_distinct_output(&input, &relative).is_err());

        assert!(ensure_distinct_output(&input, &default_output(&input)).is_ok());
        assert_eq!(std::fs::read_to_string(&input).unwrap(), "Chr\tPos\n1\t2\n");
    }

    #[test]
    fn test_default_output() {
        assert_eq!(
            default_output(Path::new("/data/study.maf")),
            PathBuf::from("/data/study.annotated.maf")
        );
        assert_eq!(
            default_output(Path::new("calls.vcf")),
            PathBuf::from("calls.annotated.maf")
        );
    }

    #[test]
    fn test_flags_override_config_file() {
        let file = Config::from_str(
            r###"
            [merge]
            sort_columns = false
            add_missing_cols = true
            canonical_columns = ["Hugo_Symbol"]
            comment_prefix = "##"

            [lookup]
            key_columns = ["Chromosome"]
        "###,
        )
        .unwrap();

        let options = MergeOptions {
            sort_columns: true,
            canonical_columns: vec!["Gene".to_string()],
            ..Default::default()
        };
        let settings = options.resolve_with(file);

        assert!(settings.pipeline.policy.sort_columns);
        assert!(settings.pipeline.policy.add_missing_cols);
        assert_eq!(settings.pipeline.policy.canonical_columns, vec!["Gene".to_string()]);
        assert_eq!(settings.pipeline.comment_prefix, "##");
        assert_eq!(settings.key_columns, KeyColumns::new(["Chromosome"]));
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = MergeOptions::default().resolve().unwrap();

        assert_eq!(settings.pipeline, PipelineConfig::default());
        assert_eq!(settings.key_columns, KeyColumns::default());
        assert_eq!(settings.annotator, ExternalAnnotatorConfig::default());
    }

    #[test]
    fn test_cli_parses_merge_command() {
        let cli = Cli::try_parse_from([
            "maf-annotate",
            "-v",
            "merge",
            "in.maf",
            "anno.maf",
            "--sort-columns",
            "--key-columns",
            "Chromosome,Start_Position",
        ])
        .unwrap();

        assert_eq!(cli.verbosity(), 1);
        match cli.command {
            Commands::Merge { options, output, .. } => {
                assert!(options.sort_columns);
                assert_eq!(options.key_columns.len(), 2);
                assert!(output.is_none());
            }
            _ => panic!("expected merge command"),
        }
    }
}
