use crate::sheets::types::{Criterion, Review};

/// Flag every present criterion score outside the 0-10 scale.
/// Bounds are inclusive: exactly 0 and exactly 10 are valid.
/// Missing scores are never flagged; they are excluded from
/// aggregation instead.
pub fn check_ranges(corpus: &[Review]) -> Vec<String> {
    let mut issues = Vec::new();

    for criterion in Criterion::ALL {
        for review in corpus {
            if let Some(score) = review.score(criterion) {
                if score < 0.0 || score > 10.0 {
                    issues.push(format!(
                        "Invalid {} score ({}) for Team {} in review by {}",
                        criterion.column(),
                        score,
                        review.team_number,
                        review.judge
                    ));
                }
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_review(team_number: i64, technical: Option<f64>) -> Review {
        Review {
            judge: "alice".to_string(),
            team_number,
            team_name: "Rustaceans".to_string(),
            design: Some(8.0),
            originality: Some(7.0),
            impact: Some(9.0),
            technical,
        }
    }

    #[test]
    fn test_in_range_scores_pass() {
        let corpus = vec![sample_review(7, Some(8.0))];
        assert!(check_ranges(&corpus).is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut review = sample_review(7, Some(10.0));
        review.design = Some(0.0);
        assert!(check_ranges(&[review]).is_empty());
    }

    #[test]
    fn test_out_of_range_flagged_with_context() {
        let corpus = vec![sample_review(7, Some(15.0)), sample_review(9, Some(-2.0))];
        let issues = check_ranges(&corpus);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("technical"));
        assert!(issues[0].contains("15"));
        assert!(issues[0].contains("Team 7"));
        assert!(issues[0].contains("alice"));
        assert!(issues[1].contains("-2"));
    }

    #[test]
    fn test_missing_scores_not_flagged() {
        let corpus = vec![sample_review(7, None)];
        assert!(check_ranges(&corpus).is_empty());
    }
}
