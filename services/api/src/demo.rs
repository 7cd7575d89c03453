use crate::infra::load_leads;
use clap::Args;
use lead_agent::config::AppConfig;
use lead_agent::error::AppError;
use lead_agent::workflows::outreach::{
    FeedbackSubmission, FeedbackTrends, Lead, OutreachService, Recommendation, Suggestion,
    SuggestionRequest, TargetCriteria,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct SuggestArgs {
    /// Lead batch to score (.json array or .csv export)
    #[arg(long)]
    pub(crate) leads: PathBuf,
    /// Drop leads scoring below this value (0-100)
    #[arg(long)]
    pub(crate) min_score: Option<u8>,
    /// Maximum number of suggestions to print
    #[arg(long)]
    pub(crate) max_count: Option<usize>,
    /// Target industry (repeatable)
    #[arg(long)]
    pub(crate) industry: Vec<String>,
    /// Target skill (repeatable)
    #[arg(long)]
    pub(crate) skill: Vec<String>,
    /// Target location (repeatable)
    #[arg(long)]
    pub(crate) location: Vec<String>,
    /// Target company size band, e.g. 51-200 (repeatable)
    #[arg(long)]
    pub(crate) company_size: Vec<String>,
}

impl SuggestArgs {
    fn criteria(&self) -> Option<TargetCriteria> {
        let criteria = TargetCriteria {
            industries: self.industry.clone(),
            company_sizes: self.company_size.clone(),
            skills: self.skill.clone(),
            locations: self.location.clone(),
        };
        (criteria != TargetCriteria::default()).then_some(criteria)
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional lead batch to use instead of the built-in sample
    #[arg(long)]
    pub(crate) leads: Option<PathBuf>,
    /// Print recommendations without applying scoring adjustments to the weights
    #[arg(long)]
    pub(crate) dry_run: bool,
}

pub(crate) fn run_suggest(args: SuggestArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = OutreachService::new(&config.scoring);
    let leads = load_leads(&args.leads)?;

    let suggestions = service.suggest(SuggestionRequest {
        leads,
        target_criteria: args.criteria(),
        min_score: args.min_score,
        max_count: args.max_count,
    });

    println!(
        "{} suggestion(s) from {}",
        suggestions.len(),
        args.leads.display()
    );
    render_suggestions(&suggestions);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { leads, dry_run } = args;

    let config = AppConfig::load()?;
    let service = OutreachService::new(&config.scoring);
    let leads = match leads {
        Some(path) => load_leads(&path)?,
        None => sample_leads(),
    };

    println!("Lead outreach demo");
    let request = SuggestionRequest {
        leads,
        target_criteria: Some(sample_criteria()),
        min_score: None,
        max_count: None,
    };
    let suggestions = service.suggest(request.clone());
    render_suggestions(&suggestions);

    let (Some(best), Some(worst)) = (suggestions.first(), suggestions.last()) else {
        println!("\nNo suggestions to review");
        return Ok(());
    };

    println!("\nReviewer feedback");
    let reviews = [
        (
            best,
            review(best, 5, true, "Great fit, decision maker at the right size company"),
        ),
        (
            worst,
            review(worst, 1, false, "Wrong industry and too small for our product"),
        ),
    ];

    for (suggestion, submission) in reviews {
        let processed = service.submit_feedback(submission)?;
        println!(
            "- {} rated {}/5: {} recommendation(s)",
            suggestion.lead.id.as_str(),
            processed.original_feedback.rating,
            processed.recommendations.len()
        );
        for recommendation in &processed.recommendations {
            render_recommendation(recommendation);
            if dry_run {
                continue;
            }
            if let Some(weights) =
                service.apply_recommendation(recommendation, &suggestion.strengths())?
            {
                println!(
                    "    weights now: decision_maker {:.3}, company_fit {:.3}, growth_potential {:.3}, skill_relevance {:.3}, location_relevance {:.3}, engagement_potential {:.3}",
                    weights.decision_maker,
                    weights.company_fit,
                    weights.growth_potential,
                    weights.skill_relevance,
                    weights.location_relevance,
                    weights.engagement_potential
                );
            }
        }
    }

    render_trends(&service.trends());

    println!("\nRescored batch");
    let rescored = service.suggest(request);
    for suggestion in &rescored {
        println!(
            "- {} {} -> {}",
            suggestion.lead.id.as_str(),
            suggestion.lead.score_or_zero(),
            suggestion.category.label()
        );
    }
    Ok(())
}

fn review(
    suggestion: &Suggestion,
    rating: u8,
    is_relevant: bool,
    comments: &str,
) -> FeedbackSubmission {
    FeedbackSubmission {
        lead_id: suggestion.lead.id.clone(),
        suggestion_type: suggestion.category.label().to_string(),
        rating,
        is_relevant,
        comments: comments.to_string(),
    }
}

fn render_suggestions(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("\nSuggestions: none");
        return;
    }

    println!("\nSuggestions");
    for (rank, suggestion) in suggestions.iter().enumerate() {
        println!(
            "{}. [{}] {} (score {})",
            rank + 1,
            suggestion.category.label(),
            suggestion.title,
            suggestion.lead.score_or_zero()
        );
        println!("   {}", suggestion.description);
        println!("   Next step: {}", suggestion.action);
    }
}

fn render_recommendation(recommendation: &Recommendation) {
    match recommendation {
        Recommendation::ScoringAdjustment { adjustment, .. } => println!(
            "  * {} ({:+.1}) -> {}",
            recommendation.description(),
            adjustment,
            recommendation.action()
        ),
        Recommendation::SearchRecommendation { lead_id } => println!(
            "  * {} (lead {}) -> {}",
            recommendation.description(),
            lead_id.as_str(),
            recommendation.action()
        ),
        Recommendation::FilterRecommendation { keywords } => println!(
            "  * {} ({}) -> {}",
            recommendation.description(),
            keywords.join(", "),
            recommendation.action()
        ),
    }
}

fn render_trends(trends: &FeedbackTrends) {
    println!("\nFeedback trends");
    println!(
        "- {} review(s) | average rating {:.1} | {:.0}% relevant",
        trends.total_feedback,
        trends.average_rating,
        trends.relevance_rate * 100.0
    );
    if trends.common_issues.is_empty() {
        println!("- Common issues: none");
    } else {
        println!("- Common issues: {}", trends.common_issues.join(", "));
    }
    if trends.positive_factors.is_empty() {
        println!("- Positive factors: none");
    } else {
        println!("- Positive factors: {}", trends.positive_factors.join(", "));
    }
}

fn sample_criteria() -> TargetCriteria {
    TargetCriteria {
        industries: vec!["Technology".to_string()],
        company_sizes: vec!["51-200".to_string()],
        skills: vec!["Rust".to_string(), "Kubernetes".to_string()],
        locations: vec!["Seattle".to_string()],
    }
}

pub(crate) fn sample_leads() -> Vec<Lead> {
    let mut cto = Lead::new("12345", "CTO");
    cto.name = "John Doe".to_string();
    cto.current_company = "Tech Corp".to_string();
    cto.location = "San Francisco, CA".to_string();
    cto.industry = "Technology".to_string();

    let mut vp = Lead::new("67890", "VP of Engineering");
    vp.name = "Jane Smith".to_string();
    vp.current_company = "Software Inc".to_string();
    vp.location = "Seattle, WA".to_string();
    vp.industry = "Technology".to_string();
    vp.company_size = Some("51-200".to_string());
    vp.skills = vec!["Rust".to_string(), "Kubernetes".to_string()];
    vp.engagement_signals = vec![
        "posted".to_string(),
        "commented".to_string(),
        "shared".to_string(),
    ];

    let mut developer = Lead::new("54321", "Software Developer");
    developer.name = "Bob Johnson".to_string();
    developer.current_company = "Dev Solutions".to_string();
    developer.location = "Austin, TX".to_string();
    developer.industry = "Retail".to_string();

    vec![cto, vp, developer]
}
