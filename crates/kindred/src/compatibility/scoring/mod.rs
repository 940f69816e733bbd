mod deal_breakers;
mod rules;

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::catalog::{
    Category, InvalidArgument, OptionId, Question, QuestionCatalog, QuestionId,
};
use crate::config::{EngineConfig, DEFAULT_PARALLEL_THRESHOLD};

/// Stateless engine applying the catalog's weighting to pairs of answer sets.
///
/// Every operation is a pure function of its arguments and the immutable catalog, so a
/// single engine can be shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CompatibilityEngine {
    catalog: Arc<QuestionCatalog>,
    pub(crate) parallel_threshold: usize,
}

impl CompatibilityEngine {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self {
            catalog,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn from_config(catalog: Arc<QuestionCatalog>, config: &EngineConfig) -> Self {
        Self::new(catalog).with_parallel_threshold(config.parallel_threshold)
    }

    /// Candidate pools at least this large are scored in parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Weighted agreement in `0..=100`. Importance is taken from `first` only.
    pub fn score(&self, first: &AnswerSet, second: &AnswerSet) -> u8 {
        rules::tally_overlap(&self.catalog, first, second).percentage()
    }

    /// Questions where both users picked the same option, in question id order.
    pub fn common_answers(&self, first: &AnswerSet, second: &AnswerSet) -> Vec<CommonAnswer> {
        rules::tally_overlap(&self.catalog, first, second).common
    }

    /// Critical answers of `first` that `second` answered differently, in catalog order.
    pub fn deal_breakers(&self, first: &AnswerSet, second: &AnswerSet) -> Vec<DealBreaker> {
        deal_breakers::find_deal_breakers(&self.catalog, first, second)
    }

    /// Score, shared answers, and deal-breakers computed together.
    pub fn compatibility(&self, first: &AnswerSet, second: &AnswerSet) -> CompatibilityReport {
        let tally = rules::tally_overlap(&self.catalog, first, second);

        CompatibilityReport {
            percentage: tally.percentage(),
            common_answers: tally.common,
            deal_breakers: self.deal_breakers(first, second),
        }
    }

    /// Catalog questions `answers` has not covered yet, most heavily weighted category first.
    pub fn unanswered_questions(
        &self,
        answers: &AnswerSet,
        limit: i64,
    ) -> Result<Vec<&Question>, InvalidArgument> {
        let answered: BTreeSet<QuestionId> = answers.question_ids();
        self.catalog.unanswered_questions(&answered, limit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonAnswer {
    pub question_id: QuestionId,
    pub category: Category,
    pub option_id: OptionId,
    pub option_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealBreaker {
    pub question_id: QuestionId,
    pub answer_a: OptionId,
    pub answer_b: OptionId,
}

/// Derived comparison between two users; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub percentage: u8,
    pub common_answers: Vec<CommonAnswer>,
    pub deal_breakers: Vec<DealBreaker>,
}
