use super::Table;
use anyhow::{anyhow, Result};

fn require_column(table: &Table, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| anyhow!("input is missing required column `{}`", name))
}

/// Project a table down to the columns the web scraper consumes.
///
/// Keeps `Name` and `Website`, drops rows where either cell is missing
/// (ragged row; an empty string is a present value and is kept), and adds
/// an `Emails` column initialized to empty for every row.
pub fn project_for_web_scraping(table: &Table) -> Result<Table> {
    let name_idx = require_column(table, "Name")?;
    let site_idx = require_column(table, "Website")?;

    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let (Some(name), Some(site)) = (row.get(name_idx), row.get(site_idx)) else {
            continue;
        };
        rows.push(vec![name.clone(), site.clone(), String::new()]);
    }

    Ok(Table {
        headers: vec!["Name".into(), "Website".into(), "Emails".into()],
        rows,
    })
}

/// Project a table down to `Name` and `Phone Number`, dropping rows whose
/// `Phone Number` cell is missing. A missing `Name` cell leaves that field
/// empty rather than dropping the row.
pub fn project_for_phone_numbers(table: &Table) -> Result<Table> {
    let name_idx = require_column(table, "Name")?;
    let phone_idx = require_column(table, "Phone Number")?;

    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let Some(phone) = row.get(phone_idx) else {
            continue;
        };
        let name = row.get(name_idx).cloned().unwrap_or_default();
        rows.push(vec![name, phone.clone()]);
    }

    Ok(Table {
        headers: vec!["Name".into(), "Phone Number".into()],
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn web_scraping_keeps_empty_strings_and_drops_ragged_rows() -> Result<()> {
        let input = table(
            &["Name", "Website"],
            &[
                &["A", "x.com"],
                &["B", ""],   // empty Website is present, kept
                &["C"],       // missing Website cell, dropped
                &[],          // missing both, dropped
            ],
        );

        let out = project_for_web_scraping(&input)?;
        assert_eq!(out.headers, vec!["Name", "Website", "Emails"]);
        assert_eq!(
            out.rows,
            vec![
                vec!["A".to_string(), "x.com".to_string(), String::new()],
                vec!["B".to_string(), String::new(), String::new()],
            ]
        );
        Ok(())
    }

    #[test]
    fn web_scraping_subsets_extra_columns() -> Result<()> {
        let input = table(
            &["Phone Number", "Name", "Website", "Notes"],
            &[&["555-0100", "A", "x.com", "vip"]],
        );

        let out = project_for_web_scraping(&input)?;
        assert_eq!(
            out.rows,
            vec![vec!["A".to_string(), "x.com".to_string(), String::new()]]
        );
        Ok(())
    }

    #[test]
    fn web_scraping_requires_both_columns() {
        let input = table(&["Name", "Phone Number"], &[&["A", "555-0100"]]);
        let err = project_for_web_scraping(&input).unwrap_err();
        assert!(err.to_string().contains("Website"));
    }

    #[test]
    fn phone_numbers_drops_rows_without_phone_cell() -> Result<()> {
        let input = table(
            &["Name", "Website", "Phone Number"],
            &[
                &["A", "x.com", "555-0100"],
                &["B", "y.com"], // phone cell missing, dropped
                &["C", "z.com", ""], // empty phone is present, kept
            ],
        );

        let out = project_for_phone_numbers(&input)?;
        assert_eq!(out.headers, vec!["Name", "Phone Number"]);
        assert_eq!(
            out.rows,
            vec![
                vec!["A".to_string(), "555-0100".to_string()],
                vec!["C".to_string(), String::new()],
            ]
        );
        Ok(())
    }

    #[test]
    fn phone_numbers_requires_both_columns() {
        let input = table(&["Name", "Website"], &[&["A", "x.com"]]);
        let err = project_for_phone_numbers(&input).unwrap_err();
        assert!(err.to_string().contains("Phone Number"));
    }

    #[test]
    fn projections_preserve_row_order_and_input() -> Result<()> {
        let input = table(
            &["Name", "Website"],
            &[&["B", "b.com"], &["A", "a.com"]],
        );
        let before = input.clone();

        let out = project_for_web_scraping(&input)?;
        assert_eq!(out.rows[0][0], "B");
        assert_eq!(out.rows[1][0], "A");
        assert_eq!(input, before);
        Ok(())
    }
}
