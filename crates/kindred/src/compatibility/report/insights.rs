use super::super::answers::AnswerSet;
use super::super::catalog::{Category, QuestionCatalog};
use super::views::{Insights, TraitBand, TraitInsight};

pub(crate) fn generate_insights(catalog: &QuestionCatalog, answers: &AnswerSet) -> Insights {
    let traits = Category::ordered()
        .into_iter()
        .filter_map(|category| {
            let weights: Vec<i32> = catalog
                .questions_by_category(category)
                .into_iter()
                .filter_map(|question| {
                    let answer = answers.get(question.id)?;
                    question.option(&answer.option_id).map(|option| option.weight)
                })
                .collect();

            if weights.is_empty() {
                return None;
            }

            let sum: i64 = weights.iter().map(|weight| i64::from(*weight)).sum();
            let mean_weight = sum as f64 / weights.len() as f64;
            let band = TraitBand::classify(mean_weight);

            Some(TraitInsight {
                category,
                band,
                mean_weight,
                label: trait_label(category, band),
            })
        })
        .collect();

    Insights { traits }
}

fn trait_label(category: Category, band: TraitBand) -> &'static str {
    match (category, band) {
        (Category::Lifestyle, TraitBand::Open) => "Active, adventurous lifestyle",
        (Category::Lifestyle, TraitBand::Balanced) => "Balanced lifestyle",
        (Category::Lifestyle, TraitBand::Traditional) => "Calm, home-centred lifestyle",
        (Category::Values, TraitBand::Open) => "Independent, progressive values",
        (Category::Values, TraitBand::Balanced) => "Balanced values",
        (Category::Values, TraitBand::Traditional) => "Traditional, family-first values",
        (Category::Personality, TraitBand::Open) => "Outgoing, open personality",
        (Category::Personality, TraitBand::Balanced) => "Balanced personality",
        (Category::Personality, TraitBand::Traditional) => "Reserved, cautious personality",
        (Category::Relationship, TraitBand::Open) => "Independent relationship style",
        (Category::Relationship, TraitBand::Balanced) => "Balanced relationship style",
        (Category::Relationship, TraitBand::Traditional) => "Close, committed relationship style",
        (Category::Interests, TraitBand::Open) => "Adventurous interests",
        (Category::Interests, TraitBand::Balanced) => "Varied interests",
        (Category::Interests, TraitBand::Traditional) => "Quiet, familiar interests",
    }
}
