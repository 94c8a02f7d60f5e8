//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation can live in a
//! config file. Command-line flags take precedence over file values.
//!
//! ```toml
//! # maf-annotator.toml
//! [merge]
//! sort_columns = true
//! add_missing_cols = true
//! canonical_columns = ["Hugo_Symbol", "Variant_Classification", "HGVSp_Short"]
//! comment_prefix = "#"
//!
//! [lookup]
//! key_columns = ["Chromosome", "Start_Position", "End_Position"]
//!
//! [annotator]
//! perl = "perl"
//! script_dir = "/opt/vcf2maf"
//! vep_path = "/opt/vep"
//! intermediate_maf = "annotator_out.maf"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use mafannotator::external::ExternalAnnotatorConfig;

/// Root configuration structure for maf-annotator.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Header reconciliation and output settings.
    #[serde(default)]
    pub merge: MergeConfig,

    /// Annotation lookup settings.
    #[serde(default)]
    pub lookup: LookupConfig,

    /// External converter locations.
    #[serde(default)]
    pub annotator: ExternalAnnotatorConfig,
}

/// Configuration for header reconciliation.
#[derive(Debug, Default, Deserialize)]
pub struct MergeConfig {
    /// Alphabetize newly added columns.
    pub sort_columns: Option<bool>,

    /// Append canonical columns missing from the annotation output.
    pub add_missing_cols: Option<bool>,

    /// Canonical annotation column list.
    pub canonical_columns: Option<Vec<String>>,

    /// Marker for metadata lines preceding the header.
    pub comment_prefix: Option<String>,
}

/// Configuration for matching input rows to annotated rows.
#[derive(Debug, Default, Deserialize)]
pub struct LookupConfig {
    /// Columns identifying a variant.
    pub key_columns: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [merge]
            sort_columns = true
            add_missing_cols = false
            canonical_columns = ["Hugo_Symbol", "HGVSp_Short"]

            [lookup]
            key_columns = ["Chromosome", "Start_Position"]

            [annotator]
            script_dir = "/opt/vcf2maf"
            vep_path = "/opt/vep"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.merge.sort_columns, Some(true));
        assert_eq!(config.merge.add_missing_cols, Some(false));
        assert_eq!(
            config.merge.canonical_columns,
            Some(vec!["Hugo_Symbol".to_string(), "HGVSp_Short".to_string()])
        );
        assert_eq!(config.lookup.key_columns.map(|k| k.len()), Some(2));
        assert_eq!(config.annotator.vep_path, Some(PathBuf::from("/opt/vep")));
        assert_eq!(config.annotator.perl, "perl");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [merge]
            sort_columns = true
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.merge.sort_columns, Some(true));
        assert_eq!(config.merge.comment_prefix, None);
        assert_eq!(config.annotator.intermediate_maf, "annotator_out.maf");
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.merge.sort_columns, None);
        assert!(config.lookup.key_columns.is_none());
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[merge]\nsort_columns = \"yes\"").is_err());
    }
}
