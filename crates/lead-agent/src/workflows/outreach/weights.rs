use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::ScoreFactor;
use super::feedback::Recommendation;

/// Multiplicative weight per factor. Weights summing to 1 keep scores within `[0, 100]`;
/// anything else is clamped by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub decision_maker: f64,
    pub company_fit: f64,
    pub growth_potential: f64,
    pub skill_relevance: f64,
    pub location_relevance: f64,
    pub engagement_potential: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            decision_maker: 0.25,
            company_fit: 0.20,
            growth_potential: 0.15,
            skill_relevance: 0.15,
            location_relevance: 0.10,
            engagement_potential: 0.15,
        }
    }
}

impl ScoringWeights {
    pub fn weight(&self, factor: ScoreFactor) -> f64 {
        match factor {
            ScoreFactor::DecisionMaker => self.decision_maker,
            ScoreFactor::CompanyFit => self.company_fit,
            ScoreFactor::GrowthPotential => self.growth_potential,
            ScoreFactor::SkillRelevance => self.skill_relevance,
            ScoreFactor::LocationRelevance => self.location_relevance,
            ScoreFactor::EngagementPotential => self.engagement_potential,
        }
    }

    fn weight_mut(&mut self, factor: ScoreFactor) -> &mut f64 {
        match factor {
            ScoreFactor::DecisionMaker => &mut self.decision_maker,
            ScoreFactor::CompanyFit => &mut self.company_fit,
            ScoreFactor::GrowthPotential => &mut self.growth_potential,
            ScoreFactor::SkillRelevance => &mut self.skill_relevance,
            ScoreFactor::LocationRelevance => &mut self.location_relevance,
            ScoreFactor::EngagementPotential => &mut self.engagement_potential,
        }
    }

    pub fn sum(&self) -> f64 {
        ScoreFactor::ordered()
            .into_iter()
            .map(|factor| self.weight(factor))
            .sum()
    }

    pub fn validate(&self) -> Result<(), WeightError> {
        for factor in ScoreFactor::ordered() {
            let value = self.weight(factor);
            if !value.is_finite() {
                return Err(WeightError::NotFinite { factor });
            }
            if value < 0.0 {
                return Err(WeightError::Negative { factor, value });
            }
        }
        Ok(())
    }

    /// Shift the listed factors by `delta` (every factor when none are listed), clamp at
    /// zero, and renormalize so the weights sum to 1.
    pub fn adjusted(&self, factors: &[ScoreFactor], delta: f64) -> Result<Self, WeightError> {
        if !delta.is_finite() {
            return Err(WeightError::InvalidDelta(delta));
        }

        let mut next = *self;
        let targets: Vec<ScoreFactor> = if factors.is_empty() {
            ScoreFactor::ordered().to_vec()
        } else {
            factors.to_vec()
        };

        for factor in targets {
            let weight = next.weight_mut(factor);
            *weight = (*weight + delta).max(0.0);
        }

        let total = next.sum();
        if total <= f64::EPSILON {
            return Err(WeightError::Degenerate);
        }

        for factor in ScoreFactor::ordered() {
            let weight = next.weight_mut(factor);
            *weight /= total;
        }

        next.validate()?;
        Ok(next)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightError {
    #[error("weight for {} must be non-negative, got {value}", .factor.key())]
    Negative { factor: ScoreFactor, value: f64 },
    #[error("weight for {} must be a finite number", .factor.key())]
    NotFinite { factor: ScoreFactor },
    #[error("adjustment delta must be finite, got {0}")]
    InvalidDelta(f64),
    #[error("adjustment would zero out every weight")]
    Degenerate,
}

/// Shared holder for the active weight snapshot.
///
/// Readers clone the inner `Arc` and keep a consistent view for a whole scoring pass;
/// writers swap in a fresh snapshot, so no reader ever observes a half-applied update.
#[derive(Debug)]
pub struct WeightStore {
    current: RwLock<Arc<ScoringWeights>>,
}

impl Default for WeightStore {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl WeightStore {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            current: RwLock::new(Arc::new(weights)),
        }
    }

    pub fn snapshot(&self) -> Arc<ScoringWeights> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the active weights wholesale. Last write wins.
    pub fn replace(&self, weights: ScoringWeights) -> Result<Arc<ScoringWeights>, WeightError> {
        weights.validate()?;
        let next = Arc::new(weights);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = next.clone();
        info!(total = next.sum(), "scoring weights replaced");
        Ok(next)
    }

    /// Derive and install an adjusted snapshot under a single write lock.
    pub fn adjust(
        &self,
        factors: &[ScoreFactor],
        delta: f64,
    ) -> Result<Arc<ScoringWeights>, WeightError> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(guard.adjusted(factors, delta)?);
        *guard = next.clone();
        info!(delta, factors = factors.len(), "scoring weights adjusted");
        Ok(next)
    }

    /// Apply a feedback recommendation. Only scoring adjustments touch the weights; the
    /// other kinds return `None` and leave the snapshot as it was.
    pub fn apply(
        &self,
        recommendation: &Recommendation,
        strengths: &[ScoreFactor],
    ) -> Result<Option<Arc<ScoringWeights>>, WeightError> {
        match recommendation {
            Recommendation::ScoringAdjustment { adjustment, .. } => {
                self.adjust(strengths, *adjustment).map(Some)
            }
            Recommendation::SearchRecommendation { .. }
            | Recommendation::FilterRecommendation { .. } => Ok(None),
        }
    }
}
