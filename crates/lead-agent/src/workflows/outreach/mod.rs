//! Outbound lead pipeline: scoring, ranking, suggestion copy, and the reviewer feedback
//! loop that nudges scoring weights.
//!
//! A batch of cleaned leads is scored against the active weight snapshot, ranked and
//! bucketed, rendered into suggestions, and reviewed. Reviewer feedback produces
//! recommendations that the configuration owner can apply back onto the weights.

pub mod domain;
pub mod feedback;
pub mod ranking;
pub mod router;
pub mod scoring;
pub mod service;
pub mod suggestions;
pub mod weights;

#[cfg(test)]
mod tests;

pub use domain::{
    Lead, LeadId, OutreachError, ScoreComponents, ScoreFactor, SuggestionCategory,
    TargetCriteria, HOT_LEAD_THRESHOLD, STRENGTH_THRESHOLD, WARM_LEAD_THRESHOLD,
};
pub use feedback::{
    Feedback, FeedbackProcessor, FeedbackSubmission, FeedbackTrends, ProcessedFeedback,
    Recommendation,
};
pub use ranking::CategorizedLeads;
pub use router::outreach_router;
pub use scoring::{ConstantGrowthSignal, GrowthSignal, ScoringEngine, SeniorityTier};
pub use service::{LeadBatch, OutreachService, SuggestionRequest};
pub use suggestions::{Suggestion, SuggestionGenerator, SuggestionOptions};
pub use weights::{ScoringWeights, WeightError, WeightStore};
