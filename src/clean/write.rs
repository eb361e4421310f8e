use super::Table;
use crate::ledger::ProcessingKind;
use anyhow::{Context, Result};
use std::{
    fs::OpenOptions,
    io::BufWriter,
    path::{Path, PathBuf},
};

/// Output file path for `base_filename` cleaned for `kind`:
/// `<cleaned_dir>/<subdir>/<prefix><base_filename>`.
pub fn output_path(cleaned_dir: &Path, kind: ProcessingKind, base_filename: &str) -> PathBuf {
    cleaned_dir
        .join(kind.subdir())
        .join(format!("{}{}", kind.prefix(), base_filename))
}

/// Append `table`'s rows to the CSV at `path`, writing the header row only
/// when the file does not yet exist. Returns the number of data rows written.
pub fn append_table(path: &Path, table: &Table) -> Result<usize> {
    let write_header = !path.exists();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening output file `{}` for append", path.display()))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    if write_header {
        writer
            .write_record(&table.headers)
            .with_context(|| format!("writing header to `{}`", path.display()))?;
    }
    for row in &table.rows {
        writer
            .write_record(row)
            .with_context(|| format!("writing row to `{}`", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing output file `{}`", path.display()))?;

    Ok(table.rows.len())
}
