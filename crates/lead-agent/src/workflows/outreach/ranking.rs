use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::domain::{Lead, SuggestionCategory};

/// Order leads by descending score. The sort is stable, so equal scores keep their
/// input order.
pub fn rank(mut leads: Vec<Lead>) -> Vec<Lead> {
    leads.sort_by_key(|lead| Reverse(lead.score_or_zero()));
    leads
}

/// Keep leads whose score is at least `min_score`.
pub fn filter_by_min_score(leads: Vec<Lead>, min_score: u8) -> Vec<Lead> {
    leads
        .into_iter()
        .filter(|lead| lead.score_or_zero() >= min_score)
        .collect()
}

/// Split leads into hot, warm, and cold buckets, preserving input order in each.
pub fn categorize(leads: Vec<Lead>) -> CategorizedLeads {
    let mut categorized = CategorizedLeads::default();
    for lead in leads {
        match SuggestionCategory::for_score(lead.score_or_zero()) {
            SuggestionCategory::HotLead => categorized.hot.push(lead),
            SuggestionCategory::WarmLead => categorized.warm.push(lead),
            SuggestionCategory::ColdLead => categorized.cold.push(lead),
        }
    }
    categorized
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedLeads {
    pub hot: Vec<Lead>,
    pub warm: Vec<Lead>,
    pub cold: Vec<Lead>,
}

impl CategorizedLeads {
    pub fn bucket(&self, category: SuggestionCategory) -> &[Lead] {
        match category {
            SuggestionCategory::HotLead => &self.hot,
            SuggestionCategory::WarmLead => &self.warm,
            SuggestionCategory::ColdLead => &self.cold,
        }
    }

    pub fn into_bucket(self, category: SuggestionCategory) -> Vec<Lead> {
        match category {
            SuggestionCategory::HotLead => self.hot,
            SuggestionCategory::WarmLead => self.warm,
            SuggestionCategory::ColdLead => self.cold,
        }
    }

    pub fn len(&self) -> usize {
        self.hot.len() + self.warm.len() + self.cold.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
