use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use super::domain::{Lead, OutreachError, ScoreFactor, TargetCriteria};
use super::feedback::{
    FeedbackProcessor, FeedbackSubmission, FeedbackTrends, ProcessedFeedback, Recommendation,
};
use super::ranking::{self, CategorizedLeads};
use super::scoring::{GrowthSignal, ScoringEngine};
use super::suggestions::{Suggestion, SuggestionGenerator, SuggestionOptions};
use super::weights::{ScoringWeights, WeightError, WeightStore};
use crate::config::ScoringConfig;

/// Lead batch plus optional targeting, as accepted by the scoring endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadBatch {
    pub leads: Vec<Lead>,
    #[serde(default)]
    pub target_criteria: Option<TargetCriteria>,
}

/// Suggestion request; unset limits fall back to the configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub leads: Vec<Lead>,
    #[serde(default)]
    pub target_criteria: Option<TargetCriteria>,
    #[serde(default)]
    pub min_score: Option<u8>,
    #[serde(default)]
    pub max_count: Option<usize>,
}

/// Facade wiring the weight store, scoring engine, suggestion generator, and feedback
/// history together for one process.
pub struct OutreachService {
    weights: Arc<WeightStore>,
    engine: Arc<ScoringEngine>,
    generator: SuggestionGenerator,
    feedback: Mutex<FeedbackProcessor>,
    defaults: SuggestionOptions,
}

impl OutreachService {
    pub fn new(config: &ScoringConfig) -> Self {
        let weights = Arc::new(WeightStore::new(config.weights));
        let engine = Arc::new(ScoringEngine::new(weights.clone()));
        Self::from_parts(weights, engine, config.suggestions)
    }

    pub fn with_growth_signal(config: &ScoringConfig, growth: Arc<dyn GrowthSignal>) -> Self {
        let weights = Arc::new(WeightStore::new(config.weights));
        let engine = Arc::new(ScoringEngine::with_growth_signal(weights.clone(), growth));
        Self::from_parts(weights, engine, config.suggestions)
    }

    fn from_parts(
        weights: Arc<WeightStore>,
        engine: Arc<ScoringEngine>,
        defaults: SuggestionOptions,
    ) -> Self {
        Self {
            generator: SuggestionGenerator::new(engine.clone()),
            weights,
            engine,
            feedback: Mutex::new(FeedbackProcessor::new()),
            defaults,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Score every lead in the batch and return them ranked.
    pub fn score(&self, batch: LeadBatch) -> Vec<Lead> {
        let LeadBatch {
            mut leads,
            target_criteria,
        } = batch;
        self.engine.score_batch(&mut leads, target_criteria.as_ref());
        ranking::rank(leads)
    }

    /// Order already scored leads, highest first. Ties keep their input order.
    pub fn rank(&self, leads: Vec<Lead>) -> Vec<Lead> {
        ranking::rank(leads)
    }

    /// Bucket leads by score band, scoring any that arrive unscored.
    pub fn categorize(&self, batch: LeadBatch) -> CategorizedLeads {
        let LeadBatch {
            mut leads,
            target_criteria,
        } = batch;
        self.engine.score_missing(&mut leads, target_criteria.as_ref());
        ranking::categorize(ranking::rank(leads))
    }

    pub fn suggest(&self, request: SuggestionRequest) -> Vec<Suggestion> {
        let options = SuggestionOptions {
            min_score: request.min_score.unwrap_or(self.defaults.min_score),
            max_count: request.max_count.unwrap_or(self.defaults.max_count),
        };
        self.generator
            .generate(request.leads, request.target_criteria.as_ref(), options)
    }

    /// Validate and record reviewer feedback.
    pub fn submit_feedback(
        &self,
        submission: FeedbackSubmission,
    ) -> Result<ProcessedFeedback, OutreachError> {
        submission.validate()?;
        Ok(self.feedback_processor().process(submission))
    }

    pub fn trends(&self) -> FeedbackTrends {
        self.feedback_processor().analyze_trends()
    }

    pub fn feedback_count(&self) -> usize {
        self.feedback_processor().len()
    }

    pub fn clear_feedback(&self) {
        self.feedback_processor().clear();
    }

    pub fn weights(&self) -> Arc<ScoringWeights> {
        self.weights.snapshot()
    }

    pub fn replace_weights(
        &self,
        weights: ScoringWeights,
    ) -> Result<Arc<ScoringWeights>, WeightError> {
        self.weights.replace(weights)
    }

    /// Apply a scoring adjustment to the factors that made the reviewed suggestion stand
    /// out. Search and filter recommendations are not weight changes and return `None`.
    pub fn apply_recommendation(
        &self,
        recommendation: &Recommendation,
        strengths: &[ScoreFactor],
    ) -> Result<Option<Arc<ScoringWeights>>, WeightError> {
        self.weights.apply(recommendation, strengths)
    }

    fn feedback_processor(&self) -> MutexGuard<'_, FeedbackProcessor> {
        self.feedback.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
