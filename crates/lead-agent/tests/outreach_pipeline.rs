//! End-to-end scenarios for the outreach pipeline driven through the public service facade
//! and HTTP router: score a batch, review the suggestions, and fold the feedback back into
//! the scoring weights.

mod common {
    use lead_agent::config::ScoringConfig;
    use lead_agent::workflows::outreach::{
        FeedbackSubmission, Lead, OutreachService, SuggestionRequest, TargetCriteria,
    };

    pub(super) fn lead(id: &str, title: &str, industry: &str, location: &str) -> Lead {
        let mut lead = Lead::new(id, title);
        lead.name = format!("Contact {id}");
        lead.current_company = format!("{industry} Co");
        lead.industry = industry.to_string();
        lead.location = location.to_string();
        lead
    }

    pub(super) fn pipeline_batch() -> Vec<Lead> {
        let mut founder = lead("lead-1", "Founder & CEO", "Fintech", "Berlin, Germany");
        founder.company_size = Some("11-50".to_string());
        founder.skills = vec!["Payments".to_string(), "Compliance".to_string()];
        founder.engagement_signals = vec!["liked post".to_string(); 3];

        let mut director = lead("lead-2", "Director of Engineering", "Fintech", "Munich");
        director.skills = vec!["Payments".to_string()];

        let intern = lead("lead-3", "Marketing Intern", "Retail", "Lisbon");

        vec![intern, director, founder]
    }

    pub(super) fn criteria() -> TargetCriteria {
        TargetCriteria {
            industries: vec!["Fintech".to_string()],
            company_sizes: vec!["11-50".to_string()],
            skills: vec!["Payments".to_string(), "Compliance".to_string()],
            locations: vec!["Berlin".to_string()],
        }
    }

    pub(super) fn request() -> SuggestionRequest {
        SuggestionRequest {
            leads: pipeline_batch(),
            target_criteria: Some(criteria()),
            min_score: None,
            max_count: None,
        }
    }

    pub(super) fn review(
        lead_id: &str,
        rating: u8,
        is_relevant: bool,
        comments: &str,
    ) -> FeedbackSubmission {
        FeedbackSubmission {
            lead_id: lead_id.into(),
            suggestion_type: "hot_lead".to_string(),
            rating,
            is_relevant,
            comments: comments.to_string(),
        }
    }

    pub(super) fn service() -> OutreachService {
        OutreachService::new(&ScoringConfig::default())
    }
}

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::*;
use lead_agent::workflows::outreach::{
    outreach_router, Recommendation, ScoreFactor, SuggestionCategory,
};
use serde_json::Value;
use tower::ServiceExt;

#[test]
fn suggestions_rank_the_batch_by_fit() {
    let service = service();

    let suggestions = service.suggest(request());

    let ids: Vec<&str> = suggestions
        .iter()
        .map(|suggestion| suggestion.lead.id.as_str())
        .collect();
    assert_eq!(ids, vec!["lead-1", "lead-2", "lead-3"]);
    assert_eq!(suggestions[0].category, SuggestionCategory::HotLead);
    assert_eq!(suggestions[2].category, SuggestionCategory::ColdLead);
    assert!(suggestions
        .windows(2)
        .all(|pair| pair[0].lead.score >= pair[1].lead.score));
}

#[test]
fn director_is_not_mistaken_for_an_executive() {
    let service = service();

    let suggestions = service.suggest(request());

    let director = suggestions
        .iter()
        .find(|suggestion| suggestion.lead.id.as_str() == "lead-2")
        .expect("director suggested");
    let components = director.lead.score_components.expect("scored");
    assert_eq!(components.decision_maker, 0.8);
}

#[test]
fn positive_review_raises_weights_behind_the_suggestion() {
    let service = service();
    let suggestions = service.suggest(request());
    let top = &suggestions[0];
    let before = service.weights();

    let processed = service
        .submit_feedback(review(top.lead.id.as_str(), 5, true, "Great fit, right industry"))
        .expect("valid review");
    let adjustment = processed
        .recommendations
        .iter()
        .find(|recommendation| matches!(recommendation, Recommendation::ScoringAdjustment { .. }))
        .expect("adjustment recommended");
    let strengths = top.strengths();
    let updated = service
        .apply_recommendation(adjustment, &strengths)
        .expect("weights remain valid")
        .expect("weights changed");

    assert!(strengths.contains(&ScoreFactor::DecisionMaker));
    assert!(updated.growth_potential < before.growth_potential);
    assert!(
        updated.decision_maker / updated.growth_potential
            > before.decision_maker / before.growth_potential
    );
    assert!((updated.sum() - 1.0).abs() < 1e-9);

    let rescored = service.suggest(request());
    assert!(rescored[0].lead.score >= top.lead.score);
    assert_eq!(service.trends().positive_factors[0], "Good overall fit");
}

#[test]
fn negative_review_suggests_filters() {
    let service = service();

    let processed = service
        .submit_feedback(review("lead-3", 1, false, "Different region and too small"))
        .expect("valid review");

    assert!(processed.recommendations.contains(&Recommendation::FilterRecommendation {
        keywords: vec!["location".to_string(), "company_size".to_string()],
    }));
    let trends = service.trends();
    assert_eq!(trends.total_feedback, 1);
    assert_eq!(trends.relevance_rate, 0.0);
    assert_eq!(trends.common_issues, vec!["Company size issues".to_string()]);
}

#[tokio::test]
async fn router_serves_suggestions_for_the_batch() {
    let router = outreach_router(Arc::new(service()));

    let response = router
        .oneshot(
            Request::post("/api/v1/leads/suggestions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&request()).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(payload[0]["lead"]["id"], "lead-1");
    assert_eq!(payload[0]["type"], "hot_lead");
    assert_eq!(payload.as_array().map(Vec::len), Some(3));
}
