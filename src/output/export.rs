use anyhow::{Context, Result};
use std::path::Path;

use crate::scoring::engine::TeamSummary;

/// Write the complete ranked table as CSV: all teams, all computed
/// columns, unrounded values. Missing criterion means serialize as
/// empty fields. Independent of the top-N display limit.
pub fn write_summary_csv(path: &Path, summaries: &[TeamSummary]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    for summary in summaries {
        writer
            .serialize(summary)
            .with_context(|| format!("Failed to write results to {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write results to {}", path.display()))?;
    Ok(())
}
