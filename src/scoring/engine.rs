use serde::Serialize;
use std::collections::BTreeMap;

use super::weights::CriterionWeights;
use crate::sheets::types::{Criterion, Review};

/// Aggregated standing for one team across all its reviews.
///
/// Criterion fields hold the mean of the raw scores ignoring missing
/// values; a team with no value at all for a criterion gets `None`,
/// not zero. Serialized field order matches the export layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    #[serde(rename = "team number")]
    pub team_number: i64,
    #[serde(rename = "team name")]
    pub team_name: String,
    pub num_reviews: usize,
    pub total_weighted: f64,
    pub design: Option<f64>,
    pub originality: Option<f64>,
    pub impact: Option<f64>,
    pub technical: Option<f64>,
    pub final_score: f64,
}

impl TeamSummary {
    pub fn mean(&self, criterion: Criterion) -> Option<f64> {
        match criterion {
            Criterion::Design => self.design,
            Criterion::Originality => self.originality,
            Criterion::Impact => self.impact,
            Criterion::Technical => self.technical,
        }
    }
}

/// Weighted value of one review: each criterion contributes raw score
/// times weight, with a missing criterion contributing 0. A partially
/// scored review still counts as a full review.
pub fn weighted_total(review: &Review, weights: &CriterionWeights) -> f64 {
    Criterion::ALL
        .iter()
        .map(|&c| review.score(c).unwrap_or(0.0) * weights.weight(c))
        .sum()
}

/// Aggregate the corpus into one ranked row per (team number, team name).
///
/// final_score = sum of weighted totals / review count. Teams sort by
/// final score descending; the sort is stable over the ascending
/// grouping order, so tied teams keep that order. Pure function of its
/// inputs: the same corpus always yields the same table.
pub fn summarize(corpus: &[Review], weights: &CriterionWeights) -> Vec<TeamSummary> {
    let mut groups: BTreeMap<(i64, String), Vec<&Review>> = BTreeMap::new();
    for review in corpus {
        groups
            .entry((review.team_number, review.team_name.clone()))
            .or_default()
            .push(review);
    }

    let mut summaries: Vec<TeamSummary> = groups
        .into_iter()
        .map(|((team_number, team_name), reviews)| {
            let num_reviews = reviews.len();
            let total_weighted: f64 = reviews.iter().map(|r| weighted_total(r, weights)).sum();
            let mean = |criterion: Criterion| {
                let present: Vec<f64> =
                    reviews.iter().filter_map(|r| r.score(criterion)).collect();
                if present.is_empty() {
                    None
                } else {
                    Some(present.iter().sum::<f64>() / present.len() as f64)
                }
            };

            TeamSummary {
                team_number,
                team_name,
                num_reviews,
                total_weighted,
                design: mean(Criterion::Design),
                originality: mean(Criterion::Originality),
                impact: mean(Criterion::Impact),
                technical: mean(Criterion::Technical),
                final_score: total_weighted / num_reviews as f64,
            }
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    summaries
}
