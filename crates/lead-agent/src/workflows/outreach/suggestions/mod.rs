mod templates;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{Lead, ScoreFactor, SuggestionCategory, TargetCriteria};
use super::ranking;
use super::scoring::ScoringEngine;

/// Limits applied when turning a lead batch into suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionOptions {
    pub min_score: u8,
    pub max_count: usize,
}

impl Default for SuggestionOptions {
    fn default() -> Self {
        Self {
            min_score: 0,
            max_count: 10,
        }
    }
}

/// A ranked lead packaged with reviewer-facing copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub lead: Lead,
    #[serde(rename = "type")]
    pub category: SuggestionCategory,
    pub title: String,
    pub description: String,
    pub action: String,
}

impl Suggestion {
    /// Factors called out as strengths in the description.
    pub fn strengths(&self) -> Vec<ScoreFactor> {
        self.lead
            .score_components
            .map(|components| components.strengths())
            .unwrap_or_default()
    }
}

/// Scores, filters, ranks, and templates leads into suggestions. Output depends only on
/// the input batch, the criteria, and the weight snapshot.
pub struct SuggestionGenerator {
    engine: Arc<ScoringEngine>,
}

impl SuggestionGenerator {
    pub fn new(engine: Arc<ScoringEngine>) -> Self {
        Self { engine }
    }

    pub fn generate(
        &self,
        mut leads: Vec<Lead>,
        criteria: Option<&TargetCriteria>,
        options: SuggestionOptions,
    ) -> Vec<Suggestion> {
        let received = leads.len();
        self.engine.score_missing(&mut leads, criteria);

        let filtered = ranking::filter_by_min_score(leads, options.min_score);
        let suggestions: Vec<Suggestion> = ranking::rank(filtered)
            .into_iter()
            .take(options.max_count)
            .map(create_suggestion)
            .collect();

        info!(
            received,
            emitted = suggestions.len(),
            min_score = options.min_score,
            "generated lead suggestions"
        );
        suggestions
    }
}

pub(crate) fn create_suggestion(lead: Lead) -> Suggestion {
    let score = lead.score_or_zero();
    let category = SuggestionCategory::for_score(score);
    let components = lead.score_components.unwrap_or_default();
    let strengths = components.strengths();

    Suggestion {
        title: templates::title(&lead, category, &components),
        description: templates::description(&lead, category, score, &strengths),
        action: templates::action(&lead, category),
        category,
        lead,
    }
}
