use anyhow::{bail, Context, Result};
use std::fs::File;
use std::path::Path;

use super::normalize::canonical_header;
use super::types::{Criterion, Review};

/// Read one judge's score sheet.
///
/// Sheet layout: first row = column headers, second row = units/metadata
/// (discarded), remaining rows = one team each. The judge identifier is
/// the file stem. Rows that are entirely empty or whose team-number cell
/// does not resolve to an integer are dropped.
pub fn read_sheet(path: &Path) -> Result<Vec<Review>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let judge = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    let mut rows = reader.records();
    let header_row = match rows.next() {
        Some(record) => record.context("Failed to read header row")?,
        None => bail!("File is empty"),
    };
    let headers: Vec<String> = header_row.iter().map(canonical_header).collect();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let team_number_col =
        column("team number").ok_or_else(|| anyhow::anyhow!("Missing 'team number' column"))?;
    let team_name_col =
        column("team name").ok_or_else(|| anyhow::anyhow!("Missing 'team name' column"))?;
    let score_cols: Vec<Option<usize>> =
        Criterion::ALL.iter().map(|c| column(c.column())).collect();

    // Second physical row carries unit annotations, not scores.
    rows.next();

    let mut reviews = Vec::new();
    for record in rows {
        let record = record.with_context(|| format!("Malformed row in {}", path.display()))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let Some(team_number) = parse_team_number(record.get(team_number_col).unwrap_or(""))
        else {
            continue;
        };
        let team_name = record.get(team_name_col).unwrap_or("").trim().to_string();

        let score_at =
            |idx: usize| score_cols[idx].and_then(|col| parse_score(record.get(col).unwrap_or("")));

        reviews.push(Review {
            judge: judge.clone(),
            team_number,
            team_name,
            design: score_at(0),
            originality: score_at(1),
            impact: score_at(2),
            technical: score_at(3),
        });
    }

    Ok(reviews)
}

/// Coerce a score cell to a number. Empty or non-numeric cells become
/// missing, never an error.
fn parse_score(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Team numbers are integer keys, but spreadsheet exports often render
/// them as "7.0". Accept integral numerics only.
fn parse_team_number(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    if let Ok(n) = cell.parse::<i64>() {
        return Some(n);
    }
    cell.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .map(|v| v as i64)
}
