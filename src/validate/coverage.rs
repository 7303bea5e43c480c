use std::collections::BTreeMap;

use crate::sheets::types::Review;

/// Flag teams reviewed fewer than `min_reviews` times across the
/// merged corpus. The first team name seen for a number is the one
/// reported.
pub fn check_review_counts(corpus: &[Review], min_reviews: usize) -> Vec<String> {
    let mut counts: BTreeMap<i64, (usize, &str)> = BTreeMap::new();
    for review in corpus {
        let entry = counts
            .entry(review.team_number)
            .or_insert((0, review.team_name.as_str()));
        entry.0 += 1;
    }

    counts
        .iter()
        .filter(|(_, (count, _))| *count < min_reviews)
        .map(|(team_number, (count, team_name))| {
            format!(
                "Team {} ({}) has only {} reviews, minimum required is {}",
                team_number, team_name, count, min_reviews
            )
        })
        .collect()
}
