mod keywords;
mod trends;

pub use trends::FeedbackTrends;

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::info;

use super::domain::{LeadId, OutreachError};

pub const POSITIVE_ADJUSTMENT: f64 = 0.1;
pub const NEGATIVE_ADJUSTMENT: f64 = -0.1;

const MIN_RATING: u8 = 1;
const MAX_RATING: u8 = 5;

/// Reviewer verdict on a suggestion, as submitted by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub lead_id: LeadId,
    pub suggestion_type: String,
    pub rating: u8,
    #[serde(default)]
    pub is_relevant: bool,
    #[serde(default)]
    pub comments: String,
}

impl FeedbackSubmission {
    /// Boundary check for externally supplied feedback. The processor itself accepts
    /// whatever it is given.
    pub fn validate(&self) -> Result<(), OutreachError> {
        if self.lead_id.0.trim().is_empty() {
            return Err(OutreachError::InvalidFeedback(
                "lead_id must not be empty".to_string(),
            ));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(OutreachError::InvalidFeedback(format!(
                "rating {} outside {MIN_RATING}-{MAX_RATING}",
                self.rating
            )));
        }
        Ok(())
    }
}

/// Stored feedback entry; immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub lead_id: LeadId,
    pub suggestion_type: String,
    pub rating: u8,
    pub is_relevant: bool,
    pub comments: String,
    pub timestamp: DateTime<Utc>,
}

impl Feedback {
    fn recorded(submission: FeedbackSubmission, timestamp: DateTime<Utc>) -> Self {
        let FeedbackSubmission {
            lead_id,
            suggestion_type,
            rating,
            is_relevant,
            comments,
        } = submission;

        Self {
            lead_id,
            suggestion_type,
            rating,
            is_relevant,
            comments,
            timestamp,
        }
    }
}

/// Instruction derived from feedback for whoever owns scoring configuration or search.
///
/// Serialized with its `description` and `action` alongside the variant fields; both are
/// derived from the variant and ignored when reading one back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Recommendation {
    ScoringAdjustment {
        suggestion_type: String,
        adjustment: f64,
    },
    SearchRecommendation {
        lead_id: LeadId,
    },
    FilterRecommendation {
        keywords: Vec<String>,
    },
}

impl Recommendation {
    pub fn description(&self) -> &'static str {
        match self {
            Recommendation::ScoringAdjustment { adjustment, .. } if *adjustment >= 0.0 => {
                "Increase weight for similar leads"
            }
            Recommendation::ScoringAdjustment { .. } => "Decrease weight for similar leads",
            Recommendation::SearchRecommendation { .. } => "Find more leads similar to this one",
            Recommendation::FilterRecommendation { .. } => "Add filters based on feedback",
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Recommendation::ScoringAdjustment { .. } => "adjust_scoring_weights",
            Recommendation::SearchRecommendation { .. } => "search_similar_leads",
            Recommendation::FilterRecommendation { .. } => "add_filters",
        }
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Recommendation::ScoringAdjustment {
                suggestion_type,
                adjustment,
            } => {
                map.serialize_entry("type", "scoring_adjustment")?;
                map.serialize_entry("suggestion_type", suggestion_type)?;
                map.serialize_entry("adjustment", adjustment)?;
            }
            Recommendation::SearchRecommendation { lead_id } => {
                map.serialize_entry("type", "search_recommendation")?;
                map.serialize_entry("lead_id", lead_id)?;
            }
            Recommendation::FilterRecommendation { keywords } => {
                map.serialize_entry("type", "filter_recommendation")?;
                map.serialize_entry("keywords", keywords)?;
            }
        }
        map.serialize_entry("description", self.description())?;
        map.serialize_entry("action", self.action())?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedFeedback {
    pub original_feedback: Feedback,
    pub recommendations: Vec<Recommendation>,
}

/// Append-only feedback history plus the rule table that turns feedback into
/// recommendations.
#[derive(Debug, Default)]
pub struct FeedbackProcessor {
    history: Vec<Feedback>,
}

impl FeedbackProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, submission: FeedbackSubmission) -> ProcessedFeedback {
        self.process_at(submission, Utc::now())
    }

    /// Record feedback with an explicit timestamp and derive its recommendations.
    pub fn process_at(
        &mut self,
        submission: FeedbackSubmission,
        timestamp: DateTime<Utc>,
    ) -> ProcessedFeedback {
        let feedback = Feedback::recorded(submission, timestamp);
        self.history.push(feedback.clone());

        let recommendations = recommendations_for(&feedback);
        info!(
            lead_id = %feedback.lead_id.0,
            rating = feedback.rating,
            relevant = feedback.is_relevant,
            recommendations = recommendations.len(),
            "feedback processed"
        );

        ProcessedFeedback {
            original_feedback: feedback,
            recommendations,
        }
    }

    pub fn analyze_trends(&self) -> FeedbackTrends {
        trends::analyze(&self.history)
    }

    /// History in insertion order.
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

pub(crate) fn recommendations_for(feedback: &Feedback) -> Vec<Recommendation> {
    if feedback.rating >= 4 && feedback.is_relevant {
        return vec![
            Recommendation::ScoringAdjustment {
                suggestion_type: feedback.suggestion_type.clone(),
                adjustment: POSITIVE_ADJUSTMENT,
            },
            Recommendation::SearchRecommendation {
                lead_id: feedback.lead_id.clone(),
            },
        ];
    }

    if feedback.rating <= 2 || !feedback.is_relevant {
        let mut recommendations = vec![Recommendation::ScoringAdjustment {
            suggestion_type: feedback.suggestion_type.clone(),
            adjustment: NEGATIVE_ADJUSTMENT,
        }];

        let keywords = keywords::extract_keywords(&feedback.comments);
        if !keywords.is_empty() {
            recommendations.push(Recommendation::FilterRecommendation { keywords });
        }
        return recommendations;
    }

    // Rating 3 and relevant: nothing to act on.
    Vec::new()
}
