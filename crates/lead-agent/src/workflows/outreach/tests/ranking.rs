use super::common::*;
use crate::workflows::outreach::domain::SuggestionCategory;
use crate::workflows::outreach::ranking::{categorize, filter_by_min_score, rank};

fn ids(leads: &[crate::workflows::outreach::Lead]) -> Vec<&str> {
    leads.iter().map(|lead| lead.id.as_str()).collect()
}

#[test]
fn rank_orders_descending_and_is_stable() {
    let leads = vec![
        scored("a", 70),
        scored("b", 90),
        scored("c", 70),
        scored("d", 10),
        scored("e", 90),
    ];

    let ranked = rank(leads);

    assert_eq!(ids(&ranked), vec!["b", "e", "a", "c", "d"]);
}

#[test]
fn unscored_leads_rank_last() {
    let leads = vec![crate::workflows::outreach::Lead::new("x", "CTO"), scored("y", 1)];

    let ranked = rank(leads);

    assert_eq!(ids(&ranked), vec!["y", "x"]);
}

#[test]
fn min_score_filter_is_inclusive() {
    let leads = vec![scored("a", 59), scored("b", 60), scored("c", 61)];

    let filtered = filter_by_min_score(leads, 60);

    assert_eq!(ids(&filtered), vec!["b", "c"]);
}

#[test]
fn categorize_respects_band_boundaries() {
    let leads = vec![
        scored("hot-edge", 80),
        scored("warm-top", 79),
        scored("warm-edge", 60),
        scored("cold-edge", 59),
        scored("hot-top", 100),
        scored("cold-floor", 0),
    ];

    let categorized = categorize(leads);

    assert_eq!(ids(&categorized.hot), vec!["hot-edge", "hot-top"]);
    assert_eq!(ids(&categorized.warm), vec!["warm-top", "warm-edge"]);
    assert_eq!(ids(&categorized.cold), vec!["cold-edge", "cold-floor"]);
    assert_eq!(categorized.len(), 6);
}

#[test]
fn categorize_places_each_lead_exactly_once() {
    let leads: Vec<_> = (0..=100u8)
        .map(|score| scored(&format!("lead-{score}"), score))
        .collect();

    let categorized = categorize(leads);

    assert_eq!(categorized.len(), 101);
    assert_eq!(categorized.bucket(SuggestionCategory::HotLead).len(), 21);
    assert_eq!(categorized.bucket(SuggestionCategory::WarmLead).len(), 20);
    assert_eq!(categorized.bucket(SuggestionCategory::ColdLead).len(), 60);
    let mut all: Vec<String> = categorized
        .hot
        .iter()
        .chain(&categorized.warm)
        .chain(&categorized.cold)
        .map(|lead| lead.id.0.clone())
        .collect();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 101);
}
