use crate::infra::InMemoryAnswerStore;
use clap::Args;
use kindred::compatibility::Importance::{Critical, High, Low, Medium};
use kindred::compatibility::{
    AnswerSet, AnswerSubmission, Category, CompatibilityEngine, CompatibilityService, Importance,
    OptionId, QuestionCatalog, QuestionId, Suggestion, UserId,
};
use kindred::error::AppError;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Load the catalog from a JSON file instead of the built-in standard catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Comma-separated question ids already answered; switches to the unanswered listing
    #[arg(long, value_delimiter = ',')]
    pub(crate) answered: Vec<u32>,
    /// Maximum number of unanswered questions to list
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) limit: Option<i64>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Load the catalog from a JSON file instead of the built-in standard catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Number of suggestions to print for the featured user
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub(crate) limit: i64,
}

pub(crate) fn run_catalog_listing(args: CatalogArgs) -> Result<(), AppError> {
    let CatalogArgs {
        catalog,
        answered,
        limit,
    } = args;

    let catalog = QuestionCatalog::load(catalog.as_deref())?;
    println!(
        "Question catalog {} ({} questions)",
        catalog.version(),
        catalog.len()
    );

    if answered.is_empty() && limit.is_none() {
        for category in Category::ordered() {
            println!(
                "\n{} (weight {:.2})",
                category.label(),
                catalog.category_weight(category)
            );
            for question in catalog.questions_by_category(category) {
                println!("- [{}] {}", question.id, question.prompt);
                for option in &question.options {
                    println!("    {}) {} (weight {})", option.id, option.text, option.weight);
                }
            }
        }
        return Ok(());
    }

    let answered: BTreeSet<QuestionId> = answered.into_iter().map(QuestionId).collect();
    let limit = limit.unwrap_or(catalog.len() as i64);
    let open = catalog.unanswered_questions(&answered, limit)?;

    if open.is_empty() {
        println!("\nNo unanswered questions remain");
    } else {
        println!("\nNext questions to ask");
        for question in open {
            println!(
                "- [{}] {} ({})",
                question.id,
                question.prompt,
                question.category.label()
            );
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { catalog, limit } = args;

    let catalog = Arc::new(QuestionCatalog::load(catalog.as_deref())?);
    let engine = Arc::new(CompatibilityEngine::new(catalog.clone()));
    let store = Arc::new(InMemoryAnswerStore::default());
    let service = CompatibilityService::new(engine, store.clone(), store);

    let mut rejected = 0usize;
    for (user, entries) in SAMPLE_COHORT {
        let user = UserId::new(*user);
        for (question, option, importance) in entries.iter() {
            let submission = AnswerSubmission {
                question_id: QuestionId(*question),
                option_id: OptionId::new(*option),
                importance: Some(*importance),
            };
            if service.submit_answer(&user, submission).is_err() {
                rejected += 1;
            }
        }
    }

    println!("Compatibility engine demo");
    println!(
        "Catalog {} | {} sample users | {} answers rejected by the catalog",
        catalog.version(),
        SAMPLE_COHORT.len(),
        rejected
    );

    let featured = UserId::new(FEATURED_USER);
    let progress = service.progress(&featured)?;
    println!(
        "\nProgress for {}: {}/{} answered ({}%)",
        featured,
        progress.answered_questions,
        progress.total_questions,
        progress.completion_percentage
    );
    for (category, entry) in &progress.per_category {
        println!(
            "- {}: {}/{} ({}%)",
            category.label(),
            entry.answered,
            entry.total,
            entry.percentage
        );
    }

    let insights = service.insights(&featured)?;
    if insights.traits.is_empty() {
        println!("\nInsights: none yet");
    } else {
        println!("\nInsights");
        for insight in &insights.traits {
            println!(
                "- {}: {} (mean weight {:.2}, {})",
                insight.category.label(),
                insight.label,
                insight.mean_weight,
                insight.band.label()
            );
        }
    }

    let suggestions = service.suggestions(&featured, Some(limit))?;
    render_suggestions(&featured, &suggestions);

    let mine = service.answers(&featured)?;
    render_asymmetry(&service, &featured, &mine)?;

    let next = service.next_questions(&featured, 3)?;
    if !next.is_empty() {
        println!("\nNext questions for {}", featured);
        for question in next {
            println!("- [{}] {}", question.id, question.prompt);
        }
    }

    Ok(())
}

fn render_suggestions(featured: &UserId, suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("\nSuggestions for {}: none", featured);
        return;
    }

    println!("\nSuggestions for {}", featured);
    for suggestion in suggestions {
        println!(
            "- {}: {}% ({} shared answers, {} deal-breakers)",
            suggestion.candidate_id,
            suggestion.percentage,
            suggestion.common_answers.len(),
            suggestion.deal_breakers.len()
        );
        for common in suggestion.common_answers.iter().take(3) {
            println!(
                "    shared [{}] {}: {}",
                common.question_id,
                common.category.label(),
                common.option_text
            );
        }
        for breaker in &suggestion.deal_breakers {
            println!(
                "    deal-breaker [{}]: {} vs {}",
                breaker.question_id, breaker.answer_a, breaker.answer_b
            );
        }
    }
}

fn render_asymmetry(
    service: &CompatibilityService<InMemoryAnswerStore, InMemoryAnswerStore>,
    featured: &UserId,
    mine: &AnswerSet,
) -> Result<(), AppError> {
    println!("\nDirectional scores");
    for (other, _) in SAMPLE_COHORT {
        let other = UserId::new(*other);
        if &other == featured {
            continue;
        }
        let theirs = service.answers(&other)?;
        println!(
            "- {} -> {}: {}% | {} -> {}: {}%",
            featured,
            other,
            service.engine().score(mine, &theirs),
            other,
            featured,
            service.engine().score(&theirs, mine)
        );
    }
    Ok(())
}

const FEATURED_USER: &str = "avery";

type CohortEntry = (&'static str, &'static [(u32, &'static str, Importance)]);

const SAMPLE_COHORT: &[CohortEntry] = &[
        (
            "avery",
            &[
                (1, "a", High),
                (3, "a", Medium),
                (6, "b", Critical),
                (7, "a", Critical),
                (11, "a", Medium),
                (16, "b", Medium),
                (17, "b", Low),
                (21, "b", Low),
                (22, "a", High),
            ],
        ),
        (
            "blake",
            &[
                (1, "a", Medium),
                (3, "b", Medium),
                (6, "b", High),
                (7, "a", Critical),
                (11, "b", Low),
                (16, "b", Medium),
                (22, "a", Medium),
            ],
        ),
        (
            "casey",
            &[
                (1, "c", Low),
                (3, "c", Medium),
                (6, "c", Medium),
                (7, "c", High),
                (11, "c", Medium),
                (16, "c", Critical),
                (21, "c", Medium),
            ],
        ),
        (
            "devon",
            &[
                (1, "b", Medium),
                (6, "b", Medium),
                (7, "b", Medium),
                (17, "c", Medium),
                (21, "d", Medium),
                (22, "b", Low),
            ],
        ),
        (
            "emery",
            &[(2, "a", Medium), (8, "c", Critical), (24, "b", High)],
        ),
];
