use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, io, path::PathBuf};

const CONFIG_FILE: &str = "leadclean.yaml";

/// Paths the tool works against. All fields default to the conventional
/// layout in the working directory, so a partial (or absent) config file
/// works.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_raw_dir")]
    pub raw_dir: PathBuf,
    #[serde(default = "default_cleaned_dir")]
    pub cleaned_dir: PathBuf,
    #[serde(default = "default_ledger_path")]
    pub ledger_path: PathBuf,
}

fn default_raw_dir() -> PathBuf {
    PathBuf::from("raw_data")
}

fn default_cleaned_dir() -> PathBuf {
    PathBuf::from("cleaned_data")
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("processed_files.txt")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            raw_dir: default_raw_dir(),
            cleaned_dir: default_cleaned_dir(),
            ledger_path: default_ledger_path(),
        }
    }
}

impl Config {
    /// Read `leadclean.yaml` from the working directory; absent file means
    /// pure defaults.
    pub fn load() -> Result<Self> {
        match fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => Self::from_yaml(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("reading `{}`", CONFIG_FILE)),
        }
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents).with_context(|| format!("parsing `{}`", CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventional_layout() {
        let cfg = Config::default();
        assert_eq!(cfg.raw_dir, PathBuf::from("raw_data"));
        assert_eq!(cfg.cleaned_dir, PathBuf::from("cleaned_data"));
        assert_eq!(cfg.ledger_path, PathBuf::from("processed_files.txt"));
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() -> Result<()> {
        let cfg = Config::from_yaml("raw_dir: /srv/incoming\n")?;
        assert_eq!(cfg.raw_dir, PathBuf::from("/srv/incoming"));
        assert_eq!(cfg.cleaned_dir, PathBuf::from("cleaned_data"));
        assert_eq!(cfg.ledger_path, PathBuf::from("processed_files.txt"));
        Ok(())
    }

    #[test]
    fn full_yaml_overrides_everything() -> Result<()> {
        let cfg = Config::from_yaml(
            "raw_dir: in\ncleaned_dir: out\nledger_path: out/ledger.txt\n",
        )?;
        assert_eq!(cfg.raw_dir, PathBuf::from("in"));
        assert_eq!(cfg.cleaned_dir, PathBuf::from("out"));
        assert_eq!(cfg.ledger_path, PathBuf::from("out/ledger.txt"));
        Ok(())
    }
}
