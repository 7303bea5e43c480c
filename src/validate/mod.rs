pub mod coverage;
pub mod duplicates;
pub mod scores;

pub use coverage::check_review_counts;
pub use duplicates::check_duplicates;
pub use scores::check_ranges;
