use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::confirm::{checkpoint, Confirm};
use crate::sheets::read_sheet;
use crate::sheets::types::Review;
use crate::validate;

/// Load every judge sheet in `folder`, merge the records, and run the
/// advisory checkpoints (per-file duplicates, score ranges, review
/// coverage). A sheet that fails to parse is skipped with a warning;
/// the run only aborts if no sheet yields any record, or the operator
/// declines a checkpoint.
pub fn assemble(
    folder: &Path,
    min_reviews: usize,
    confirm: &mut dyn Confirm,
    verbose: bool,
) -> Result<Vec<Review>> {
    let paths = discover_sheets(folder)?;
    if paths.is_empty() {
        bail!("No CSV files found in {}", folder.display());
    }

    let mut corpus = Vec::new();
    for path in &paths {
        match read_sheet(path) {
            Ok(records) => {
                if verbose {
                    eprintln!("  {}: {} records", path.display(), records.len());
                }
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                let issues = validate::check_duplicates(&records, &file_name);
                checkpoint(
                    "Duplicate Team Entries:",
                    &issues,
                    "duplicate team IDs",
                    confirm,
                )?;
                corpus.extend(records);
            }
            Err(e) => {
                eprintln!("Warning: Could not process {}: {}", path.display(), e);
            }
        }
    }

    if corpus.is_empty() {
        bail!("No valid data found in CSV files");
    }

    if verbose {
        eprintln!("Merged {} reviews from {} files", corpus.len(), paths.len());
    }

    let issues = validate::check_ranges(&corpus);
    checkpoint(
        "Score Validation Issues:",
        &issues,
        "score validation issues",
        confirm,
    )?;

    let issues = validate::check_review_counts(&corpus, min_reviews);
    checkpoint(
        "Review Count Issues:",
        &issues,
        "insufficient reviews",
        confirm,
    )?;

    Ok(corpus)
}

/// Glob for judge sheets. The glob crate yields paths in sorted order,
/// so discovery order is stable across runs.
fn discover_sheets(folder: &Path) -> Result<Vec<PathBuf>> {
    let pattern = folder.join("*.csv");
    let paths = glob::glob(&pattern.to_string_lossy())
        .with_context(|| format!("Invalid input folder {}", folder.display()))?
        .filter_map(|entry| entry.ok())
        .collect();
    Ok(paths)
}
