pub mod clean;
pub mod config;
pub mod ledger;
pub mod run;
pub mod select;

pub use config::Config;
pub use ledger::{KindSet, Ledger, ProcessingKind};
pub use run::RunOutcome;
