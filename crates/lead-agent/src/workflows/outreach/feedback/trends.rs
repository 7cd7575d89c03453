use serde::{Deserialize, Serialize};

use super::Feedback;

const ISSUE_RULES: [(&[&str], &str); 5] = [
    (&["wrong industry"], "Industry mismatch"),
    (&["not decision maker", "wrong title"], "Title/role mismatch"),
    (&["wrong location"], "Location mismatch"),
    (&["too small", "company size"], "Company size issues"),
    (&["irrelevant", "not relevant"], "General relevance issues"),
];

const POSITIVE_RULES: [(&[&str], &str); 5] = [
    (&["good fit", "great fit"], "Good overall fit"),
    (
        &["decision maker", "right title"],
        "Appropriate decision-maker level",
    ),
    (&["right industry", "perfect industry"], "Industry match"),
    (&["right size", "good size"], "Company size match"),
    (&["relevant", "useful"], "General relevance"),
];

/// Aggregate view over the feedback history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackTrends {
    pub total_feedback: usize,
    pub average_rating: f64,
    pub relevance_rate: f64,
    pub common_issues: Vec<String>,
    pub positive_factors: Vec<String>,
}

impl FeedbackTrends {
    pub fn empty() -> Self {
        Self {
            total_feedback: 0,
            average_rating: 0.0,
            relevance_rate: 0.0,
            common_issues: Vec::new(),
            positive_factors: Vec::new(),
        }
    }
}

pub(crate) fn analyze(history: &[Feedback]) -> FeedbackTrends {
    if history.is_empty() {
        return FeedbackTrends::empty();
    }

    let total = history.len() as f64;
    let rating_sum: f64 = history.iter().map(|feedback| f64::from(feedback.rating)).sum();
    let relevant = history.iter().filter(|feedback| feedback.is_relevant).count() as f64;

    let corpus = history
        .iter()
        .map(|feedback| feedback.comments.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    FeedbackTrends {
        total_feedback: history.len(),
        average_rating: rating_sum / total,
        relevance_rate: relevant / total,
        common_issues: matched_labels(&corpus, &ISSUE_RULES),
        positive_factors: matched_labels(&corpus, &POSITIVE_RULES),
    }
}

/// Each rule contributes its label at most once, however many comments hit it.
fn matched_labels(corpus: &str, rules: &[(&[&str], &str)]) -> Vec<String> {
    rules
        .iter()
        .filter(|(phrases, _)| phrases.iter().any(|phrase| corpus.contains(phrase)))
        .map(|(_, label)| label.to_string())
        .collect()
}
