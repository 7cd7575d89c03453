use super::super::domain::{Lead, ScoreComponents, ScoreFactor, SuggestionCategory};
use super::super::scoring::SeniorityTier;

pub(crate) fn title(
    lead: &Lead,
    category: SuggestionCategory,
    components: &ScoreComponents,
) -> String {
    match category {
        SuggestionCategory::HotLead => {
            if components.decision_maker >= SeniorityTier::Executive.score() {
                format!(
                    "High-value executive decision maker at {}",
                    lead.current_company
                )
            } else {
                format!("High-potential lead in {} industry", lead.industry)
            }
        }
        SuggestionCategory::WarmLead => {
            format!("Promising {} at {}", lead.current_title, lead.current_company)
        }
        SuggestionCategory::ColdLead => {
            format!("Potential lead: {}, {}", lead.name, lead.current_title)
        }
    }
}

pub(crate) fn description(
    lead: &Lead,
    category: SuggestionCategory,
    score: u8,
    strengths: &[ScoreFactor],
) -> String {
    let intro = format!(
        "{} is a {} at {} based in {}",
        lead.name, lead.current_title, lead.current_company, lead.location
    );
    let phrases: Vec<&str> = strengths
        .iter()
        .map(|factor| factor.strength_phrase())
        .collect();

    match category {
        SuggestionCategory::HotLead => format!(
            "{intro}{}. With a lead score of {score}, they represent a high-value opportunity.",
            strengths_clause(&phrases)
        ),
        SuggestionCategory::WarmLead => format!(
            "{intro}{}. Their lead score of {score} indicates good potential.",
            strengths_clause(&phrases)
        ),
        SuggestionCategory::ColdLead => format!("{intro}. Their lead score is {score}."),
    }
}

pub(crate) fn action(lead: &Lead, category: SuggestionCategory) -> String {
    match category {
        SuggestionCategory::HotLead => format!(
            "Reach out directly with a personalized message highlighting specific value propositions for {}.",
            lead.current_company
        ),
        SuggestionCategory::WarmLead => "Connect on LinkedIn with a personalized invitation and share relevant content to establish credibility.".to_string(),
        SuggestionCategory::ColdLead => "Add to nurture campaign and monitor for engagement signals before direct outreach.".to_string(),
    }
}

/// " with X", " with X and Y", or " with X, Y, and Z"; empty when there is nothing to list.
pub(crate) fn strengths_clause(phrases: &[&str]) -> String {
    match phrases {
        [] => String::new(),
        [only] => format!(" with {only}"),
        [first, second] => format!(" with {first} and {second}"),
        [head @ .., last] => format!(" with {}, and {last}", head.join(", ")),
    }
}
