use super::super::answers::{AnswerSet, Importance};
use super::super::catalog::QuestionCatalog;
use super::DealBreaker;

/// Only `first`'s critical flags count; `second`'s importance is ignored.
pub(crate) fn find_deal_breakers(
    catalog: &QuestionCatalog,
    first: &AnswerSet,
    second: &AnswerSet,
) -> Vec<DealBreaker> {
    catalog
        .questions()
        .iter()
        .filter_map(|question| {
            let mine = first.get(question.id)?;
            if mine.importance != Importance::Critical {
                return None;
            }

            let theirs = second.get(question.id)?;
            (mine.option_id != theirs.option_id).then(|| DealBreaker {
                question_id: question.id,
                answer_a: mine.option_id.clone(),
                answer_b: theirs.option_id.clone(),
            })
        })
        .collect()
}
