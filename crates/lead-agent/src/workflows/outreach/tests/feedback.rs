use chrono::{TimeZone, Utc};

use super::common::*;
use crate::workflows::outreach::feedback::{
    FeedbackProcessor, FeedbackTrends, Recommendation, NEGATIVE_ADJUSTMENT, POSITIVE_ADJUSTMENT,
};
use crate::workflows::outreach::domain::OutreachError;

#[test]
fn strong_positive_feedback_recommends_more_of_the_same() {
    let mut processor = FeedbackProcessor::new();

    let processed = processor.process(feedback("12345", 5, true, "Great fit"));

    assert_eq!(
        processed.recommendations,
        vec![
            Recommendation::ScoringAdjustment {
                suggestion_type: "warm_lead".to_string(),
                adjustment: POSITIVE_ADJUSTMENT,
            },
            Recommendation::SearchRecommendation {
                lead_id: "12345".into(),
            },
        ]
    );
    assert_eq!(
        processed.recommendations[0].description(),
        "Increase weight for similar leads"
    );
    assert_eq!(processed.recommendations[1].action(), "search_similar_leads");
}

#[test]
fn negative_feedback_adds_filters_from_comments() {
    let mut processor = FeedbackProcessor::new();

    let processed = processor.process(feedback("12345", 1, false, "Wrong industry entirely"));

    assert_eq!(
        processed.recommendations,
        vec![
            Recommendation::ScoringAdjustment {
                suggestion_type: "warm_lead".to_string(),
                adjustment: NEGATIVE_ADJUSTMENT,
            },
            Recommendation::FilterRecommendation {
                keywords: vec!["industry".to_string()],
            },
        ]
    );
    assert_eq!(processed.recommendations[1].action(), "add_filters");
}

#[test]
fn negative_feedback_without_usable_comment_only_adjusts() {
    let mut processor = FeedbackProcessor::new();

    let processed = processor.process(feedback("12345", 2, true, "meh"));

    assert_eq!(processed.recommendations.len(), 1);
    assert_eq!(
        processed.recommendations[0].description(),
        "Decrease weight for similar leads"
    );
}

#[test]
fn high_rating_marked_irrelevant_is_negative() {
    let mut processor = FeedbackProcessor::new();

    let processed = processor.process(feedback("12345", 4, false, ""));

    assert_eq!(
        processed.recommendations,
        vec![Recommendation::ScoringAdjustment {
            suggestion_type: "warm_lead".to_string(),
            adjustment: NEGATIVE_ADJUSTMENT,
        }]
    );
}

#[test]
fn neutral_relevant_feedback_has_no_recommendations() {
    let mut processor = FeedbackProcessor::new();

    let processed = processor.process(feedback("12345", 3, true, "Fine I guess"));

    assert!(processed.recommendations.is_empty());
    assert_eq!(processor.len(), 1);
}

#[test]
fn recorded_feedback_keeps_explicit_timestamp() {
    let mut processor = FeedbackProcessor::new();
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();

    let processed = processor.process_at(feedback("12345", 5, true, ""), at);

    assert_eq!(processed.original_feedback.timestamp, at);
    assert_eq!(processor.history()[0].timestamp, at);
}

#[test]
fn trends_on_empty_history_are_zeroed() {
    let processor = FeedbackProcessor::new();

    assert_eq!(processor.analyze_trends(), FeedbackTrends::empty());
}

#[test]
fn trends_aggregate_ratings_and_phrases() {
    let mut processor = FeedbackProcessor::new();
    processor.process(feedback("a", 5, true, "Great fit and right industry"));
    processor.process(feedback("b", 1, false, "Wrong industry for us"));
    processor.process(feedback("c", 3, true, ""));

    let trends = processor.analyze_trends();

    assert_eq!(trends.total_feedback, 3);
    assert!((trends.average_rating - 3.0).abs() < 1e-9);
    assert!((trends.relevance_rate - 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(trends.common_issues, vec!["Industry mismatch".to_string()]);
    assert_eq!(
        trends.positive_factors,
        vec!["Good overall fit".to_string(), "Industry match".to_string()]
    );
}

#[test]
fn history_is_ordered_and_clearable() {
    let mut processor = FeedbackProcessor::new();
    processor.process(feedback("first", 4, true, ""));
    processor.process(feedback("second", 2, true, ""));

    let ids: Vec<&str> = processor
        .history()
        .iter()
        .map(|entry| entry.lead_id.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "second"]);

    processor.clear();
    assert!(processor.is_empty());
    assert_eq!(processor.analyze_trends().total_feedback, 0);
}

#[test]
fn submission_validation_rejects_bad_input() {
    assert!(feedback("12345", 3, true, "").validate().is_ok());
    assert!(matches!(
        feedback("12345", 0, true, "").validate(),
        Err(OutreachError::InvalidFeedback(_))
    ));
    assert!(matches!(
        feedback("12345", 6, true, "").validate(),
        Err(OutreachError::InvalidFeedback(_))
    ));
    assert!(matches!(
        feedback("  ", 4, true, "").validate(),
        Err(OutreachError::InvalidFeedback(_))
    ));
}

#[test]
fn serialized_recommendations_carry_description_and_action() {
    let mut processor = FeedbackProcessor::new();
    let processed = processor.process(feedback("12345", 1, false, "Different region entirely"));

    let payload = serde_json::to_value(&processed.recommendations).expect("serializes");

    assert_eq!(payload[0]["description"], "Decrease weight for similar leads");
    assert_eq!(payload[0]["action"], "adjust_scoring_weights");
    assert_eq!(payload[1]["type"], "filter_recommendation");
    assert_eq!(payload[1]["keywords"], serde_json::json!(["location"]));
    assert_eq!(payload[1]["action"], "add_filters");

    let restored: Vec<Recommendation> = serde_json::from_value(payload).expect("deserializes");
    assert_eq!(restored, processed.recommendations);
}
