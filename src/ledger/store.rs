use super::kind::{KindSet, ProcessingKind};
use anyhow::{Context, Result};
use std::{
    collections::BTreeMap,
    fs::{self, OpenOptions},
    io::{self, Write},
    path::PathBuf,
};
use tracing::warn;

/// `Ledger` tracks which (file, processing kind) pairs are already done,
/// backed by a plain-text file of `<filename>: <label>` lines.
///
/// The file is append-only during normal runs: `record` adds one line and
/// never rewrites prior entries, so repeated runs can leave duplicate lines.
/// Duplicates are collapsed on load, not assumed away.
pub struct Ledger {
    path: PathBuf,
    entries: BTreeMap<String, KindSet>,
}

impl Ledger {
    /// Load the ledger at `path`. A missing file yields an empty ledger.
    /// Lines with no colon or with an unknown label are a data-integrity
    /// problem: warned about and skipped, never a crash.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path: PathBuf = path.into();
        let mut entries: BTreeMap<String, KindSet> = BTreeMap::new();

        match fs::read_to_string(&path) {
            Ok(contents) => {
                for raw in contents.lines() {
                    let line = raw.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let Some((name, label)) = line.split_once(':') else {
                        warn!(line, "ledger line has no `:` separator, skipping");
                        continue;
                    };
                    let Some(kind) = ProcessingKind::from_label(label) else {
                        warn!(line, "ledger line has an unknown processing label, skipping");
                        continue;
                    };
                    entries.entry(name.trim().to_string()).or_default().insert(kind);
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| format!("reading ledger `{}`", path.display()))
            }
        }

        Ok(Ledger { path, entries })
    }

    /// Append one completed (file, kind) line, creating the ledger file if
    /// absent. Prior lines are never rewritten or deduplicated. Callers must
    /// invoke this only after the corresponding output append has succeeded.
    pub fn record(&mut self, filename: &str, kind: ProcessingKind) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening ledger `{}` for append", self.path.display()))?;
        writeln!(file, "{}: {}", filename, kind.label())
            .with_context(|| format!("appending to ledger `{}`", self.path.display()))?;

        self.entries.entry(filename.to_string()).or_default().insert(kind);
        Ok(())
    }

    /// The kinds already completed for `filename` (empty set if unknown).
    pub fn completed_for(&self, filename: &str) -> KindSet {
        self.entries.get(filename).copied().unwrap_or_default()
    }

    pub fn is_done(&self, filename: &str, kind: ProcessingKind) -> bool {
        self.completed_for(filename).contains(kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, KindSet)> {
        self.entries.iter().map(|(name, kinds)| (name.as_str(), *kinds))
    }

    /// Rewrite the ledger file deterministically: filenames sorted, kinds in
    /// fixed order, duplicate lines gone. Written to a temp file first and
    /// renamed into place. Maintenance only, never part of a cleaning run.
    /// Returns the non-blank line counts before and after.
    pub fn compact(&self) -> Result<(usize, usize)> {
        let before = match fs::read_to_string(&self.path) {
            Ok(contents) => contents.lines().filter(|l| !l.trim().is_empty()).count(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                return Err(e).with_context(|| format!("reading ledger `{}`", self.path.display()))
            }
        };

        let mut out = String::new();
        let mut after = 0;
        for (name, kinds) in &self.entries {
            for kind in kinds.iter() {
                out.push_str(name);
                out.push_str(": ");
                out.push_str(kind.label());
                out.push('\n');
                after += 1;
            }
        }

        let tmp_path = PathBuf::from(format!("{}.tmp", self.path.display()));
        fs::write(&tmp_path, out)
            .with_context(|| format!("writing compacted ledger `{}`", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "renaming `{}` to `{}`",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok((before, after))
    }
}
