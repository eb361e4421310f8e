use anyhow::Result;
use leadclean::{run, select, Config, Ledger, RunOutcome};
use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) configure dirs ───────────────────────────────────────────
    let cfg = Config::load()?;
    fs::create_dir_all(&cfg.raw_dir)?;
    fs::create_dir_all(&cfg.cleaned_dir)?;

    // ─── 3) load ledger to skip processed files ──────────────────────
    let mut ledger = Ledger::load(&cfg.ledger_path)?;
    info!(entries = ledger.len(), "ledger loaded");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    // ─── 4) pick the input file ──────────────────────────────────────
    let input_path = match select::next_eligible(&cfg.raw_dir, &ledger)? {
        Some(path) => {
            println!("Using new file for cleaning: {}", path.display());
            path
        }
        None => {
            print!("Please enter the path to the CSV file you want to clean: ");
            io::stdout().flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            PathBuf::from(line.trim())
        }
    };

    // ─── 5) run one cleaning pass, report, exit 0 either way ─────────
    match run::process_file(&cfg, &mut ledger, &input_path, &mut input) {
        Ok(RunOutcome::SkippedFullyProcessed) => {
            println!("This file has already been processed for both web scraping and phone numbers. Skipping...");
        }
        Ok(RunOutcome::SkippedKindDone(kind)) => {
            println!(
                "This file has already been processed for {}. Skipping...",
                kind.describe()
            );
        }
        Ok(RunOutcome::AbortedInvalidChoice) => {
            println!("Invalid choice. No data has been processed.");
        }
        Ok(RunOutcome::Cleaned { rows_out, output, .. }) => {
            info!(rows_out, output = %output.display(), "run complete");
            println!("Data cleaning completed successfully!");
        }
        Err(e) if is_not_found(&e) => {
            println!(
                "The file {} does not exist. Please check the file path and try again.",
                input_path.display()
            );
        }
        Err(e) => {
            println!("An error occurred: {}. Exiting program.", e);
        }
    }

    Ok(())
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .map_or(false, |io_err| io_err.kind() == io::ErrorKind::NotFound)
    })
}
