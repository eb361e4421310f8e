// src/ledger/mod.rs

pub mod kind;
pub mod store;

pub use kind::{KindSet, ProcessingKind};
pub use store::Ledger;
