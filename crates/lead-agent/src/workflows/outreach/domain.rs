use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for leads supplied by ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

impl LeadId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LeadId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Cleaned contact record evaluated for outreach.
///
/// Only `current_title` is required on the wire; every other field falls back to an
/// empty or neutral value so scoring never fails on partial records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(default)]
    pub id: LeadId,
    #[serde(default)]
    pub name: String,
    pub current_title: String,
    #[serde(default)]
    pub current_company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub engagement_signals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_components: Option<ScoreComponents>,
}

impl Lead {
    pub fn new(id: impl Into<String>, current_title: impl Into<String>) -> Self {
        Self {
            id: LeadId(id.into()),
            name: String::new(),
            current_title: current_title.into(),
            current_company: String::new(),
            location: String::new(),
            industry: String::new(),
            company_size: None,
            skills: Vec::new(),
            engagement_signals: Vec::new(),
            score: None,
            score_components: None,
        }
    }

    /// Score used for ordering and thresholds; unscored leads rank as zero.
    pub fn score_or_zero(&self) -> u8 {
        self.score.unwrap_or(0)
    }

    pub fn is_scored(&self) -> bool {
        self.score.is_some() && self.score_components.is_some()
    }
}

/// The six independently computed factors that make up a lead score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    DecisionMaker,
    CompanyFit,
    GrowthPotential,
    SkillRelevance,
    LocationRelevance,
    EngagementPotential,
}

impl ScoreFactor {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::DecisionMaker,
            Self::CompanyFit,
            Self::GrowthPotential,
            Self::SkillRelevance,
            Self::LocationRelevance,
            Self::EngagementPotential,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::DecisionMaker => "decision_maker",
            Self::CompanyFit => "company_fit",
            Self::GrowthPotential => "growth_potential",
            Self::SkillRelevance => "skill_relevance",
            Self::LocationRelevance => "location_relevance",
            Self::EngagementPotential => "engagement_potential",
        }
    }

    /// Phrase used when the factor is called out as a strength in suggestion copy.
    pub const fn strength_phrase(self) -> &'static str {
        match self {
            Self::DecisionMaker => "decision-making authority",
            Self::CompanyFit => "strong company fit",
            Self::GrowthPotential => "high growth potential",
            Self::SkillRelevance => "relevant skill set",
            Self::LocationRelevance => "ideal location",
            Self::EngagementPotential => "high engagement potential",
        }
    }
}

/// Component values at or above this mark count as strengths.
pub const STRENGTH_THRESHOLD: f64 = 0.8;

/// Per-factor sub-scores, each within `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub decision_maker: f64,
    pub company_fit: f64,
    pub growth_potential: f64,
    pub skill_relevance: f64,
    pub location_relevance: f64,
    pub engagement_potential: f64,
}

impl ScoreComponents {
    pub fn get(&self, factor: ScoreFactor) -> f64 {
        match factor {
            ScoreFactor::DecisionMaker => self.decision_maker,
            ScoreFactor::CompanyFit => self.company_fit,
            ScoreFactor::GrowthPotential => self.growth_potential,
            ScoreFactor::SkillRelevance => self.skill_relevance,
            ScoreFactor::LocationRelevance => self.location_relevance,
            ScoreFactor::EngagementPotential => self.engagement_potential,
        }
    }

    /// Factors whose component reaches the strength threshold, in factor order.
    pub fn strengths(&self) -> Vec<ScoreFactor> {
        ScoreFactor::ordered()
            .into_iter()
            .filter(|factor| self.get(*factor) >= STRENGTH_THRESHOLD)
            .collect()
    }
}

/// Desired lead attributes. Empty lists mean "no preference" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetCriteria {
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub company_sizes: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
}

pub const HOT_LEAD_THRESHOLD: u8 = 80;
pub const WARM_LEAD_THRESHOLD: u8 = 60;

/// Score band assigned to ranked leads and their suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    HotLead,
    WarmLead,
    ColdLead,
}

impl SuggestionCategory {
    pub const fn for_score(score: u8) -> Self {
        if score >= HOT_LEAD_THRESHOLD {
            Self::HotLead
        } else if score >= WARM_LEAD_THRESHOLD {
            Self::WarmLead
        } else {
            Self::ColdLead
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HotLead => "hot_lead",
            Self::WarmLead => "warm_lead",
            Self::ColdLead => "cold_lead",
        }
    }
}

impl FromStr for SuggestionCategory {
    type Err = OutreachError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hot_lead" | "hot" => Ok(Self::HotLead),
            "warm_lead" | "warm" => Ok(Self::WarmLead),
            "cold_lead" | "cold" => Ok(Self::ColdLead),
            _ => Err(OutreachError::UnsupportedCategory(value.to_string())),
        }
    }
}

/// Caller-facing errors raised at the pipeline boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutreachError {
    #[error("unsupported lead category '{0}'")]
    UnsupportedCategory(String),
    #[error("unsupported lead source '{0}'")]
    UnsupportedSource(String),
    #[error("invalid feedback: {0}")]
    InvalidFeedback(String),
}
