/// One of the four judged dimensions, in fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Design,
    Originality,
    Impact,
    Technical,
}

impl Criterion {
    pub const ALL: [Criterion; 4] = [
        Criterion::Design,
        Criterion::Originality,
        Criterion::Impact,
        Criterion::Technical,
    ];

    /// Canonical column name as it appears in a normalized sheet header.
    pub fn column(&self) -> &'static str {
        match self {
            Criterion::Design => "design",
            Criterion::Originality => "originality",
            Criterion::Impact => "impact",
            Criterion::Technical => "technical",
        }
    }

    /// Human-readable label for the leaderboard.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Design => "Design",
            Criterion::Originality => "Originality",
            Criterion::Impact => "Impact",
            Criterion::Technical => "Technical",
        }
    }
}

/// One judge's scoring of one team.
///
/// A `None` score means the cell was empty or non-numeric; those are
/// excluded from means and contribute nothing to weighted totals.
#[derive(Debug, Clone)]
pub struct Review {
    pub judge: String,
    pub team_number: i64,
    pub team_name: String,
    pub design: Option<f64>,
    pub originality: Option<f64>,
    pub impact: Option<f64>,
    pub technical: Option<f64>,
}

impl Review {
    pub fn score(&self, criterion: Criterion) -> Option<f64> {
        match criterion {
            Criterion::Design => self.design,
            Criterion::Originality => self.originality,
            Criterion::Impact => self.impact,
            Criterion::Technical => self.technical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criterion_order_is_fixed() {
        let columns: Vec<&str> = Criterion::ALL.iter().map(|c| c.column()).collect();
        assert_eq!(columns, vec!["design", "originality", "impact", "technical"]);
    }

    #[test]
    fn test_score_accessor() {
        let review = Review {
            judge: "alice".to_string(),
            team_number: 7,
            team_name: "Rustaceans".to_string(),
            design: Some(8.0),
            originality: None,
            impact: Some(9.0),
            technical: Some(8.0),
        };
        assert_eq!(review.score(Criterion::Design), Some(8.0));
        assert_eq!(review.score(Criterion::Originality), None);
    }
}
