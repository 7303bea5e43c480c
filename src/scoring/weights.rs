use crate::sheets::types::Criterion;

/// Fixed criterion weighting applied to every review.
///
/// The weights must sum to 1.0 so a fully-scored review lands on the
/// same 0-10 scale as its raw scores. Built once at startup and
/// injected into the aggregator; never mutated mid-run.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionWeights {
    pub design: f64,
    pub originality: f64,
    pub impact: f64,
    pub technical: f64,
}

impl Default for CriterionWeights {
    fn default() -> Self {
        Self {
            design: 0.20,
            originality: 0.20,
            impact: 0.25,
            technical: 0.35,
        }
    }
}

impl CriterionWeights {
    pub fn weight(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Design => self.design,
            Criterion::Originality => self.originality,
            Criterion::Impact => self.impact,
            Criterion::Technical => self.technical,
        }
    }

    /// Validate the weight table at startup.
    /// Returns all validation errors at once (not just the first).
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for criterion in Criterion::ALL {
            if self.weight(criterion) < 0.0 {
                errors.push(format!(
                    "weights.{}: must be non-negative",
                    criterion.column()
                ));
            }
        }

        let total: f64 = Criterion::ALL.iter().map(|c| self.weight(*c)).sum();
        if (total - 1.0).abs() > 1e-9 {
            errors.push(format!("weights: must sum to 1.0 (got {})", total));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
