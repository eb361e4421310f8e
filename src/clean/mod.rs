// src/clean/mod.rs

pub mod project;
pub mod write;

pub use project::{project_for_phone_numbers, project_for_web_scraping};

use anyhow::{Context, Result};
use std::{fs::File, io::BufReader, path::Path};

/// In-memory tabular data: one header row plus string cells.
///
/// A cell is *missing* when its row is shorter than the header position
/// (ragged row). An empty string is a present value, not a missing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Read `path` into a `Table`. Ragged rows are allowed; short rows surface
/// as missing trailing cells.
pub fn load_table(path: &Path) -> Result<Table> {
    let file = File::open(path)
        .with_context(|| format!("opening input CSV `{}`", path.display()))?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("reading header row of `{}`", path.display()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("reading record {} of `{}`", i + 1, path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table { headers, rows })
}
