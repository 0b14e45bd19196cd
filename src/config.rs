use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};

use crate::errors::*;

pub const DEFAULT_PREFIX: &str = "contig";

/// Substrings that mark a contig name as not placed on a chromosome or scaffold.
pub const UNPLACED_KEYWORDS: [&str; 3] = ["unanchor", "unplace", "unscaffold"];

/// Where the renamed records are written.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputDestination {
    #[default]
    Stdout,
    /// Base path; the records go to `<base>.fa`.
    File(PathBuf),
}

impl OutputDestination {
    /// `"stdout"` selects standard output, anything else is a file base path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "stdout" {
            OutputDestination::Stdout
        } else {
            OutputDestination::File(PathBuf::from(arg))
        }
    }
}

/// What happens to records absent from the rename table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedPolicy {
    #[default]
    Keep,
    Sequential,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    pub prefix: String,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub output: OutputDestination,
    pub names: Option<PathBuf>,
    pub unmatched: UnmatchedPolicy,
    pub keep_unplaced: bool,
    pub unplaced_keywords: Vec<String>,
    /// Contigs to reverse complement, by their name in the input.
    pub revcomp: Vec<String>,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
            output: OutputDestination::Stdout,
            names: None,
            unmatched: UnmatchedPolicy::Keep,
            keep_unplaced: false,
            unplaced_keywords: UNPLACED_KEYWORDS.iter().map(|&k| k.to_owned()).collect(),
            revcomp: Vec::new(),
        }
    }
}

impl RenameConfig {
    pub fn from_yaml_str(yaml: &str, origin: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::Config {
            file: origin.to_owned(),
            source: Box::new(e),
        })
    }

    pub fn from_yaml_file(file: impl AsRef<Path>) -> Result<Self> {
        let file = file.as_ref();
        let yaml = std::fs::read_to_string(file).map_err(|e| Error::Config {
            file: file.display().to_string(),
            source: Box::new(e),
        })?;
        Self::from_yaml_str(&yaml, &file.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RenameConfig::default();
        assert_eq!(config.prefix, "contig");
        assert_eq!(config.output, OutputDestination::Stdout);
        assert_eq!(config.unplaced_keywords, ["unanchor", "unplace", "unscaffold"]);
        assert!(config.names.is_none());
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let yaml = "prefix: scaffold\noutput:\n  file: out/asm\nunmatched: remove\n";
        let config = RenameConfig::from_yaml_str(yaml, "config.yaml").unwrap();
        assert_eq!(config.prefix, "scaffold");
        assert_eq!(config.output, OutputDestination::File(PathBuf::from("out/asm")));
        assert_eq!(config.unmatched, UnmatchedPolicy::Remove);
        assert!(!config.keep_unplaced);
        assert_eq!(config.unplaced_keywords.len(), 3);
    }

    #[test]
    fn bad_yaml_is_config_error() {
        let err = RenameConfig::from_yaml_str("prefix: [", "config.yaml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn output_from_arg() {
        assert_eq!(OutputDestination::from_arg("stdout"), OutputDestination::Stdout);
        assert_eq!(
            OutputDestination::from_arg("asm"),
            OutputDestination::File(PathBuf::from("asm"))
        );
    }
}
