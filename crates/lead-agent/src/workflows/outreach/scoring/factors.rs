use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::super::domain::{Lead, TargetCriteria};

/// Value used for a factor when there is nothing to compare against.
pub(crate) const NEUTRAL: f64 = 0.5;

const INDUSTRY_MATCH_BONUS: f64 = 0.2;
const COMPANY_SIZE_MATCH_BONUS: f64 = 0.2;
const LOCATION_MATCH: f64 = 1.0;
const LOCATION_MISMATCH: f64 = 0.3;

/// Seniority ladder used for the decision-maker factor, most senior first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityTier {
    Executive,
    VicePresident,
    Manager,
    Senior,
    IndividualContributor,
}

const EXECUTIVE_TOKENS: [&str; 6] = ["ceo", "cto", "cio", "cfo", "coo", "chief"];
const VICE_PRESIDENT_TOKENS: [&str; 4] = ["vp", "svp", "evp", "director"];
const SENIOR_TOKENS: [&str; 5] = ["senior", "sr", "lead", "leader", "principal"];

impl SeniorityTier {
    /// Classify a free-form job title. Matching is by whole word so that, for example,
    /// "Director" is not mistaken for a "CTO".
    pub fn from_title(title: &str) -> Self {
        let lowered = title.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .collect();
        let normalized = format!(" {} ", tokens.join(" "));

        if has_any(&tokens, &EXECUTIVE_TOKENS) {
            Self::Executive
        } else if has_any(&tokens, &VICE_PRESIDENT_TOKENS)
            || normalized.contains(" vice president ")
        {
            Self::VicePresident
        } else if has_any(&tokens, &["manager"]) || normalized.contains(" head of ") {
            Self::Manager
        } else if has_any(&tokens, &SENIOR_TOKENS) {
            Self::Senior
        } else {
            Self::IndividualContributor
        }
    }

    pub const fn score(self) -> f64 {
        match self {
            Self::Executive => 1.0,
            Self::VicePresident => 0.8,
            Self::Manager => 0.6,
            Self::Senior => 0.4,
            Self::IndividualContributor => 0.2,
        }
    }
}

fn has_any(tokens: &[&str], candidates: &[&str]) -> bool {
    tokens.iter().any(|token| candidates.contains(token))
}

pub(crate) fn decision_maker(lead: &Lead) -> f64 {
    SeniorityTier::from_title(&lead.current_title).score()
}

pub(crate) fn company_fit(lead: &Lead, criteria: &TargetCriteria) -> f64 {
    let mut score = NEUTRAL;

    if !lead.industry.is_empty() && criteria.industries.contains(&lead.industry) {
        score += INDUSTRY_MATCH_BONUS;
    }

    if let Some(size) = lead.company_size.as_ref().filter(|size| !size.is_empty()) {
        if criteria.company_sizes.contains(size) {
            score += COMPANY_SIZE_MATCH_BONUS;
        }
    }

    score.min(1.0)
}

pub(crate) fn skill_relevance(lead: &Lead, criteria: &TargetCriteria) -> f64 {
    let target: BTreeSet<&str> = criteria.skills.iter().map(String::as_str).collect();
    let held: BTreeSet<&str> = lead.skills.iter().map(String::as_str).collect();

    if target.is_empty() || held.is_empty() {
        return NEUTRAL;
    }

    let matching = target.intersection(&held).count();
    (matching as f64 / target.len() as f64).min(1.0)
}

pub(crate) fn location_relevance(lead: &Lead, criteria: &TargetCriteria) -> f64 {
    let lead_location = lead.location.trim().to_lowercase();
    let targets: Vec<String> = criteria
        .locations
        .iter()
        .map(|location| location.trim().to_lowercase())
        .filter(|location| !location.is_empty())
        .collect();

    if targets.is_empty() || lead_location.is_empty() {
        return NEUTRAL;
    }

    let matched = targets.iter().any(|target| {
        lead_location.contains(target.as_str()) || target.contains(lead_location.as_str())
    });

    if matched {
        LOCATION_MATCH
    } else {
        LOCATION_MISMATCH
    }
}

pub(crate) fn engagement_potential(lead: &Lead) -> f64 {
    match lead.engagement_signals.len() {
        0 => NEUTRAL,
        1 => 0.6,
        2 => 0.8,
        _ => 1.0,
    }
}
