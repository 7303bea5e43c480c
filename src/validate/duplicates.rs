use std::collections::HashSet;

use crate::sheets::types::Review;

/// Flag team numbers scored more than once within a single judge's
/// sheet. Runs per file, before the sheets are merged, so the file
/// name can be reported alongside the duplicated rows.
pub fn check_duplicates(records: &[Review], file_name: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut issues = Vec::new();

    for review in records {
        if !seen.insert(review.team_number) {
            issues.push(format!(
                "Duplicate entry for Team {} ({}) in {}",
                review.team_number, review.team_name, file_name
            ));
        }
    }

    issues
}
