mod factors;

pub use factors::SeniorityTier;

use std::sync::Arc;

use tracing::debug;

use super::domain::{Lead, ScoreComponents, ScoreFactor, TargetCriteria};
use super::weights::{ScoringWeights, WeightStore};

pub const DEFAULT_GROWTH_POTENTIAL: f64 = 0.7;

/// Source of the growth-potential factor.
///
/// The default is a constant; richer company growth data can be plugged in without
/// touching how the engine aggregates factors.
pub trait GrowthSignal: Send + Sync {
    fn growth_potential(&self, lead: &Lead) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantGrowthSignal(pub f64);

impl Default for ConstantGrowthSignal {
    fn default() -> Self {
        Self(DEFAULT_GROWTH_POTENTIAL)
    }
}

impl GrowthSignal for ConstantGrowthSignal {
    fn growth_potential(&self, _lead: &Lead) -> f64 {
        self.0
    }
}

/// Computes the six factor values for a lead and folds them into a 0-100 score using
/// the active weight snapshot.
pub struct ScoringEngine {
    weights: Arc<WeightStore>,
    growth: Arc<dyn GrowthSignal>,
}

impl ScoringEngine {
    pub fn new(weights: Arc<WeightStore>) -> Self {
        Self::with_growth_signal(weights, Arc::new(ConstantGrowthSignal::default()))
    }

    pub fn with_growth_signal(weights: Arc<WeightStore>, growth: Arc<dyn GrowthSignal>) -> Self {
        Self { weights, growth }
    }

    pub fn components(&self, lead: &Lead, criteria: Option<&TargetCriteria>) -> ScoreComponents {
        let fallback = TargetCriteria::default();
        let criteria = criteria.unwrap_or(&fallback);

        ScoreComponents {
            decision_maker: factors::decision_maker(lead),
            company_fit: factors::company_fit(lead, criteria),
            growth_potential: self.growth.growth_potential(lead).clamp(0.0, 1.0),
            skill_relevance: factors::skill_relevance(lead, criteria),
            location_relevance: factors::location_relevance(lead, criteria),
            engagement_potential: factors::engagement_potential(lead),
        }
    }

    /// Score one lead against the current weights.
    pub fn calculate_score(
        &self,
        lead: &Lead,
        criteria: Option<&TargetCriteria>,
    ) -> (u8, ScoreComponents) {
        let weights = self.weights.snapshot();
        self.calculate_with(&weights, lead, criteria)
    }

    /// Score one lead against an explicit weight snapshot.
    pub fn calculate_with(
        &self,
        weights: &ScoringWeights,
        lead: &Lead,
        criteria: Option<&TargetCriteria>,
    ) -> (u8, ScoreComponents) {
        let components = self.components(lead, criteria);
        let score = weighted_score(&components, weights);
        debug!(lead_id = %lead.id.0, score, "lead scored");
        (score, components)
    }

    /// Write score and components onto every lead, reading one weight snapshot for the
    /// whole batch. Input order is untouched.
    pub fn score_batch(&self, leads: &mut [Lead], criteria: Option<&TargetCriteria>) {
        let weights = self.weights.snapshot();
        for lead in leads.iter_mut() {
            let (score, components) = self.calculate_with(&weights, lead, criteria);
            lead.score = Some(score);
            lead.score_components = Some(components);
        }
    }

    /// Like [`ScoringEngine::score_batch`] but leaves already scored leads alone.
    pub fn score_missing(&self, leads: &mut [Lead], criteria: Option<&TargetCriteria>) {
        let weights = self.weights.snapshot();
        for lead in leads.iter_mut().filter(|lead| !lead.is_scored()) {
            let (score, components) = self.calculate_with(&weights, lead, criteria);
            lead.score = Some(score);
            lead.score_components = Some(components);
        }
    }
}

/// `round(100 * sum(component * weight))`, clamped to `[0, 100]`.
pub fn weighted_score(components: &ScoreComponents, weights: &ScoringWeights) -> u8 {
    let weighted: f64 = ScoreFactor::ordered()
        .into_iter()
        .map(|factor| components.get(factor) * weights.weight(factor))
        .sum();

    // Snap away binary representation noise (0.655 sums to 0.65499...) before rounding.
    let scaled = (weighted * 100.0 * 1e6).round() / 1e6;
    if !scaled.is_finite() {
        return 0;
    }
    scaled.round().clamp(0.0, 100.0) as u8
}
