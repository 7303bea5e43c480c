pub mod engine;
pub mod weights;

pub use engine::{summarize, weighted_total, TeamSummary};
pub use weights::CriterionWeights;
