use crate::{
    clean::{self, write},
    config::Config,
    ledger::{Ledger, ProcessingKind},
};
use anyhow::{anyhow, Context, Result};
use std::{
    fs,
    io::{self, BufRead, Write as IoWrite},
    path::{Path, PathBuf},
};
use tracing::info;

/// Terminal state of one cleaning pass over a single file. Every exit from
/// `process_file` short of an error is one of these.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Both kinds already recorded in the ledger; nothing to do.
    SkippedFullyProcessed,
    /// The chosen kind was already recorded; nothing written.
    SkippedKindDone(ProcessingKind),
    /// The menu input was not `1` or `2`; nothing written.
    AbortedInvalidChoice,
    /// Rows projected and appended, ledger updated.
    Cleaned {
        kind: ProcessingKind,
        rows_in: usize,
        rows_out: usize,
        output: PathBuf,
    },
}

/// Run one cleaning pass over `input_path`: load, check the ledger, prompt
/// for the purpose on `input`, project, append the output, then record the
/// ledger line.
///
/// The ledger is updated strictly after the output append succeeds. The
/// converse is not guarded: if the process dies between the append and the
/// ledger write, the rows are on disk unrecorded and a rerun appends them
/// again. Known gap, kept as-is.
///
/// Dedup is keyed by the base filename of `input_path`, so a user-supplied
/// path outside the raw directory dedupes against a raw file of the same
/// name.
pub fn process_file<R: BufRead>(
    cfg: &Config,
    ledger: &mut Ledger,
    input_path: &Path,
    input: &mut R,
) -> Result<RunOutcome> {
    let table = clean::load_table(input_path)?;

    let base = input_path
        .file_name()
        .and_then(|f| f.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow!("input path `{}` has no usable filename", input_path.display()))?;

    let done = ledger.completed_for(&base);
    if done.is_complete() {
        return Ok(RunOutcome::SkippedFullyProcessed);
    }

    println!("Processing options:");
    println!("1. Web Scraping");
    println!("2. Phone Numbers");
    print!("Choose processing option (1 or 2): ");
    io::stdout().flush()?;

    let mut choice = String::new();
    input
        .read_line(&mut choice)
        .context("reading processing choice")?;
    let kind = match choice.trim() {
        "1" => ProcessingKind::WebScraping,
        "2" => ProcessingKind::PhoneNumbers,
        _ => return Ok(RunOutcome::AbortedInvalidChoice),
    };

    if done.contains(kind) {
        return Ok(RunOutcome::SkippedKindDone(kind));
    }

    let cleaned = match kind {
        ProcessingKind::WebScraping => clean::project_for_web_scraping(&table)?,
        ProcessingKind::PhoneNumbers => clean::project_for_phone_numbers(&table)?,
    };

    let output = write::output_path(&cfg.cleaned_dir, kind, &base);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory `{}`", parent.display()))?;
    }
    let rows_out = write::append_table(&output, &cleaned)?;
    ledger.record(&base, kind)?;

    info!(
        file = %base,
        kind = kind.label(),
        rows_in = table.rows.len(),
        rows_out,
        output = %output.display(),
        "cleaned"
    );

    Ok(RunOutcome::Cleaned {
        kind,
        rows_in: table.rows.len(),
        rows_out,
        output,
    })
}
