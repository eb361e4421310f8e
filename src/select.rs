use crate::ledger::Ledger;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Pick the next raw CSV that still has cleaning work left.
///
/// Scans `raw_dir` for `*.csv` entries in alphabetical order and returns the
/// first whose ledger entry has fewer than two completed kinds. Returns
/// `None` when everything is done (or the directory is missing or empty);
/// the caller falls back to an interactively supplied path.
pub fn next_eligible(raw_dir: &Path, ledger: &Ledger) -> Result<Option<PathBuf>> {
    let pattern = format!("{}/*.csv", raw_dir.display());
    for entry in glob(&pattern).context("invalid glob pattern for raw-data scan")? {
        let path = match entry {
            Ok(p) => p,
            Err(e) => {
                warn!("cannot read glob entry: {:?}", e);
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|f| f.to_str()) else {
            continue;
        };
        if !ledger.completed_for(name).is_complete() {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ProcessingKind;
    use std::fs;
    use tempfile::tempdir;

    fn empty_ledger(dir: &Path) -> Ledger {
        Ledger::load(dir.join("processed_files.txt")).unwrap()
    }

    #[test]
    fn picks_first_csv_alphabetically() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("b.csv"), "Name\n")?;
        fs::write(dir.path().join("a.csv"), "Name\n")?;
        fs::write(dir.path().join("notes.txt"), "not a csv\n")?;

        let ledger = empty_ledger(dir.path());
        let picked = next_eligible(dir.path(), &ledger)?.expect("a file should be eligible");
        assert_eq!(picked.file_name().unwrap(), "a.csv");
        Ok(())
    }

    #[test]
    fn skips_fully_processed_files_regardless_of_order() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.csv"), "Name\n")?;
        fs::write(dir.path().join("b.csv"), "Name\n")?;

        let mut ledger = empty_ledger(dir.path());
        ledger.record("a.csv", ProcessingKind::WebScraping)?;
        ledger.record("a.csv", ProcessingKind::PhoneNumbers)?;

        let picked = next_eligible(dir.path(), &ledger)?.expect("b.csv should be eligible");
        assert_eq!(picked.file_name().unwrap(), "b.csv");
        Ok(())
    }

    #[test]
    fn partially_processed_files_stay_eligible() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.csv"), "Name\n")?;

        let mut ledger = empty_ledger(dir.path());
        ledger.record("a.csv", ProcessingKind::WebScraping)?;

        let picked = next_eligible(dir.path(), &ledger)?.expect("a.csv has one kind left");
        assert_eq!(picked.file_name().unwrap(), "a.csv");
        Ok(())
    }

    #[test]
    fn none_when_all_done_or_dir_missing() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.csv"), "Name\n")?;

        let mut ledger = empty_ledger(dir.path());
        ledger.record("a.csv", ProcessingKind::WebScraping)?;
        ledger.record("a.csv", ProcessingKind::PhoneNumbers)?;
        assert!(next_eligible(dir.path(), &ledger)?.is_none());

        let ledger = empty_ledger(dir.path());
        assert!(next_eligible(&dir.path().join("no_such_dir"), &ledger)?.is_none());
        Ok(())
    }
}
