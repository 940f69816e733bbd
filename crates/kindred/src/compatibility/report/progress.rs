use std::collections::BTreeMap;

use super::super::answers::AnswerSet;
use super::super::catalog::{Category, QuestionCatalog};
use super::views::{CategoryProgress, CompletionStats};

pub(crate) fn completion_stats(catalog: &QuestionCatalog, answers: &AnswerSet) -> CompletionStats {
    let mut per_category = BTreeMap::new();
    let mut total_questions = 0;
    let mut answered_questions = 0;

    for category in Category::ordered() {
        let questions = catalog.questions_by_category(category);
        let total = questions.len();
        let answered = questions
            .iter()
            .filter(|question| answers.contains(question.id))
            .count();

        total_questions += total;
        answered_questions += answered;
        per_category.insert(
            category,
            CategoryProgress {
                total,
                answered,
                percentage: percentage(answered, total),
            },
        );
    }

    CompletionStats {
        total_questions,
        answered_questions,
        completion_percentage: percentage(answered_questions, total_questions),
        per_category,
    }
}

fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }

    ((part as f64 / whole as f64) * 100.0).round().clamp(0.0, 100.0) as u8
}
