use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default file name of the intermediate annotated MAF
pub const DEFAULT_INTERMEDIATE_MAF: &str = "annotator_out.maf";

/// Kind of input file, which decides the converter script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Variant call format, annotated with `vcf2maf.pl`
    Vcf,
    /// Anything else is assumed to be MAF, annotated with `maf2maf.pl`
    Maf,
}

impl InputKind {
    /// Detect from the file extension (`.vcf`, case-insensitive)
    pub fn detect(path: &Path) -> Self {
        let is_vcf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("vcf"));

        if is_vcf {
            InputKind::Vcf
        } else {
            InputKind::Maf
        }
    }

    /// Converter script for this kind of input
    pub fn script_name(&self) -> &'static str {
        match self {
            InputKind::Vcf => "vcf2maf.pl",
            InputKind::Maf => "maf2maf.pl",
        }
    }

    /// Command-line flag naming the input file
    pub fn input_flag(&self) -> &'static str {
        match self {
            InputKind::Vcf => "--input-vcf",
            InputKind::Maf => "--input-maf",
        }
    }

    /// Table whose rows the annotations are merged into.
    ///
    /// A MAF input keeps its own rows and columns. A VCF has no MAF header to
    /// merge into, so the converter's annotated MAF becomes the base table.
    pub fn merge_base<'a>(&self, input: &'a Path, annotated: &'a Path) -> &'a Path {
        match self {
            InputKind::Vcf => annotated,
            InputKind::Maf => input,
        }
    }
}

/// Locations and options for the external annotation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalAnnotatorConfig {
    /// Interpreter used to run the converter scripts
    pub perl: String,

    /// Directory holding `vcf2maf.pl` and `maf2maf.pl`; looked up relative
    /// to the working directory when unset
    pub script_dir: Option<PathBuf>,

    /// VEP installation passed as `--vep-path`
    pub vep_path: Option<PathBuf>,

    /// File name of the annotated MAF inside the intermediate directory
    pub intermediate_maf: String,

    /// Working directory for the converter; a temporary directory when unset
    pub intermediate_dir: Option<PathBuf>,

    /// Extra arguments appended to the converter command line
    pub extra_args: Vec<String>,
}

impl Default for ExternalAnnotatorConfig {
    fn default() -> Self {
        Self {
            perl: "perl".to_string(),
            script_dir: None,
            vep_path: None,
            intermediate_maf: DEFAULT_INTERMEDIATE_MAF.to_string(),
            intermediate_dir: None,
            extra_args: Vec::new(),
        }
    }
}

impl ExternalAnnotatorConfig {
    /// Full path of the converter script for `kind`
    pub fn script_path(&self, kind: InputKind) -> PathBuf {
        match &self.script_dir {
            Some(dir) => dir.join(kind.script_name()),
            None => PathBuf::from(kind.script_name()),
        }
    }
}
