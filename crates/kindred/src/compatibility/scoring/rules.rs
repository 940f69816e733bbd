use tracing::debug;

use super::super::answers::AnswerSet;
use super::super::catalog::{OptionId, Question, QuestionCatalog};
use super::CommonAnswer;

/// Running weights for one pairwise comparison plus the exact matches seen on the way.
#[derive(Debug, Default)]
pub(crate) struct OverlapTally {
    pub total_weight: f64,
    pub matched_weight: f64,
    pub common: Vec<CommonAnswer>,
}

impl OverlapTally {
    pub fn percentage(&self) -> u8 {
        if self.total_weight <= 0.0 {
            return 0;
        }

        let ratio = (100.0 * self.matched_weight / self.total_weight).round();
        ratio.clamp(0.0, 100.0) as u8
    }
}

/// Walks the questions both users answered. The first user's importance scales each question.
pub(crate) fn tally_overlap(
    catalog: &QuestionCatalog,
    first: &AnswerSet,
    second: &AnswerSet,
) -> OverlapTally {
    let mut tally = OverlapTally::default();

    for answer in first.iter() {
        let Some(other) = second.get(answer.question_id) else {
            continue;
        };

        let Some(question) = catalog.question_by_id(answer.question_id) else {
            debug!(
                question_id = %answer.question_id,
                "skipping shared answer for question missing from catalog"
            );
            continue;
        };

        let question_weight =
            catalog.category_weight(question.category) * answer.importance.multiplier();
        let compatibility = answer_compatibility(question, &answer.option_id, &other.option_id);

        tally.total_weight += question_weight;
        tally.matched_weight += question_weight * compatibility;

        if answer.option_id == other.option_id {
            if let Some(option) = question.option(&answer.option_id) {
                tally.common.push(CommonAnswer {
                    question_id: question.id,
                    category: question.category,
                    option_id: option.id.clone(),
                    option_text: option.text.clone(),
                });
            }
        }
    }

    tally
}

/// Partial credit in `[0, 1]` for two chosen options of the same question.
pub(crate) fn answer_compatibility(question: &Question, first: &OptionId, second: &OptionId) -> f64 {
    let (Some(first), Some(second)) = (question.option(first), question.option(second)) else {
        debug!(
            question_id = %question.id,
            first = %first,
            second = %second,
            "answer references an unknown option; scoring as mismatch"
        );
        return 0.0;
    };

    if first.id == second.id {
        return 1.0;
    }

    let spread = question.weight_spread();
    if spread == 0 {
        return 1.0;
    }

    let distance = (i64::from(first.weight) - i64::from(second.weight)).abs() as f64;
    (1.0 - distance / spread as f64).max(0.0)
}
