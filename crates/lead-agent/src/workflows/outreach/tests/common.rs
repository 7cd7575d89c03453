use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::config::ScoringConfig;
use crate::workflows::outreach::domain::{Lead, TargetCriteria};
use crate::workflows::outreach::feedback::FeedbackSubmission;
use crate::workflows::outreach::scoring::ScoringEngine;
use crate::workflows::outreach::weights::{ScoringWeights, WeightStore};
use crate::workflows::outreach::{outreach_router, OutreachService, SuggestionGenerator};

pub(super) fn cto_lead() -> Lead {
    let mut lead = Lead::new("12345", "CTO");
    lead.name = "John Doe".to_string();
    lead.current_company = "Tech Corp".to_string();
    lead.location = "San Francisco, CA".to_string();
    lead.industry = "Technology".to_string();
    lead
}

pub(super) fn vp_lead() -> Lead {
    let mut lead = Lead::new("67890", "VP of Engineering");
    lead.name = "Jane Smith".to_string();
    lead.current_company = "Software Inc".to_string();
    lead.location = "New York, NY".to_string();
    lead.industry = "Technology".to_string();
    lead.company_size = Some("201-500".to_string());
    lead.skills = vec!["Kubernetes".to_string(), "Rust".to_string()];
    lead.engagement_signals = vec!["posted".to_string(), "commented".to_string()];
    lead
}

pub(super) fn developer_lead() -> Lead {
    let mut lead = Lead::new("54321", "Software Developer");
    lead.name = "Bob Johnson".to_string();
    lead.current_company = "Dev Solutions".to_string();
    lead.location = "Austin, TX".to_string();
    lead.industry = "Retail".to_string();
    lead
}

/// Lead that maxes out every factor under [`full_match_criteria`].
pub(super) fn ideal_lead() -> Lead {
    let mut lead = Lead::new("99999", "Chief Executive Officer");
    lead.name = "Ada Park".to_string();
    lead.current_company = "Northwind".to_string();
    lead.location = "Seattle, WA".to_string();
    lead.industry = "Technology".to_string();
    lead.company_size = Some("51-200".to_string());
    lead.skills = vec!["Rust".to_string(), "Kubernetes".to_string()];
    lead.engagement_signals = vec![
        "posted".to_string(),
        "commented".to_string(),
        "shared".to_string(),
    ];
    lead
}

pub(super) fn full_match_criteria() -> TargetCriteria {
    TargetCriteria {
        industries: vec!["Technology".to_string()],
        company_sizes: vec!["51-200".to_string()],
        skills: vec!["Rust".to_string(), "Kubernetes".to_string()],
        locations: vec!["Seattle".to_string()],
    }
}

pub(super) fn scored(id: &str, score: u8) -> Lead {
    let mut lead = Lead::new(id, "Analyst");
    lead.score = Some(score);
    lead
}

pub(super) fn scoring_engine() -> ScoringEngine {
    ScoringEngine::new(Arc::new(WeightStore::default()))
}

pub(super) fn scoring_engine_with(weights: ScoringWeights) -> ScoringEngine {
    ScoringEngine::new(Arc::new(WeightStore::new(weights)))
}

pub(super) fn suggestion_generator() -> SuggestionGenerator {
    SuggestionGenerator::new(Arc::new(scoring_engine()))
}

pub(super) fn outreach_service() -> OutreachService {
    OutreachService::new(&ScoringConfig::default())
}

pub(super) fn router_with_service(service: OutreachService) -> axum::Router {
    outreach_router(Arc::new(service))
}

pub(super) fn feedback(
    lead_id: &str,
    rating: u8,
    is_relevant: bool,
    comments: &str,
) -> FeedbackSubmission {
    FeedbackSubmission {
        lead_id: lead_id.into(),
        suggestion_type: "warm_lead".to_string(),
        rating,
        is_relevant,
        comments: comments.to_string(),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
