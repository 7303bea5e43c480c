pub mod export;
pub mod formatter;

pub use export::write_summary_csv;
pub use formatter::{format_leaderboard, should_use_colors};
