//! ledger_state.rs: show what the ledger has recorded and what is still
//! pending in the raw-data directory.
//!
//! - Lists every ledger entry with the purposes completed for it.
//! - Lists raw-data CSVs that still have cleaning work left.
//! - Computes the overall (file, purpose) completion percentage.

use anyhow::Result;
use glob::glob;
use leadclean::{Config, Ledger, ProcessingKind};

fn main() -> Result<()> {
    let cfg = Config::load()?;
    let ledger = Ledger::load(&cfg.ledger_path)?;

    println!("ledger: {}", cfg.ledger_path.display());
    if ledger.is_empty() {
        println!("  (empty)");
    }
    for (name, kinds) in ledger.entries() {
        let done: Vec<&str> = kinds.iter().map(|k| k.describe()).collect();
        println!("  {}: {}", name, done.join(", "));
    }

    let pattern = format!("{}/*.csv", cfg.raw_dir.display());
    let mut total_slots = 0usize;
    let mut done_slots = 0usize;
    let mut pending: Vec<String> = Vec::new();
    for entry in glob(&pattern)? {
        let Ok(path) = entry else { continue };
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|f| f.to_str()) else {
            continue;
        };
        let kinds = ledger.completed_for(name);
        total_slots += ProcessingKind::ALL.len();
        done_slots += kinds.len();
        if !kinds.is_complete() {
            pending.push(name.to_string());
        }
    }

    println!();
    println!("pending in {}:", cfg.raw_dir.display());
    if pending.is_empty() {
        println!("  (none)");
    }
    for name in &pending {
        println!("  {}", name);
    }

    if total_slots > 0 {
        let pct = 100.0 * done_slots as f64 / total_slots as f64;
        println!();
        println!(
            "{}/{} (file, purpose) pairs complete ({:.1}%)",
            done_slots, total_slots, pct
        );
    }

    Ok(())
}
