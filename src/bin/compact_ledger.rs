//! compact_ledger.rs: rewrite the ledger file deterministically.
//!
//! Loads the ledger, collapses duplicate lines, sorts filenames, and writes
//! the result back via temp file + rename. The main binary never does this;
//! its appends stay append-only.

use anyhow::Result;
use leadclean::{Config, Ledger};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cfg = Config::load()?;
    let ledger = Ledger::load(&cfg.ledger_path)?;
    let (before, after) = ledger.compact()?;
    println!(
        "compacted {}: {} lines before, {} lines after",
        cfg.ledger_path.display(),
        before,
        after
    );

    Ok(())
}
