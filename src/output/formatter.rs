use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::io::IsTerminal;

use crate::scoring::engine::TeamSummary;
use crate::sheets::types::Criterion;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Render the top `top` teams as a bordered table, in rank order.
/// Requesting more rows than exist is not an error; the table just
/// ends early. Scores display rounded to 2 decimals; a criterion with
/// no values at all renders as "-".
pub fn format_leaderboard(summaries: &[TeamSummary], top: usize) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec!["Team #", "Team Name", "# Reviews", "Final Score"];
    header.extend(Criterion::ALL.iter().map(|c| c.label()));
    table.set_header(header);

    for summary in summaries.iter().take(top) {
        let mut row = vec![
            summary.team_number.to_string(),
            summary.team_name.clone(),
            summary.num_reviews.to_string(),
            format!("{:.2}", summary.final_score),
        ];
        row.extend(Criterion::ALL.iter().map(|&c| format_mean(summary.mean(c))));
        table.add_row(row);
    }

    table.to_string()
}

fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(value) => format!("{:.2}", value),
        None => "-".to_string(),
    }
}
