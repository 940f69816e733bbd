mod insights;
mod progress;
pub mod views;

use super::answers::AnswerSet;
use super::scoring::CompatibilityEngine;
use views::{CompletionStats, Insights};

impl CompatibilityEngine {
    /// How much of the catalog `answers` covers, overall and per category.
    pub fn completion_stats(&self, answers: &AnswerSet) -> CompletionStats {
        progress::completion_stats(self.catalog(), answers)
    }

    /// Coarse trait labels derived from the weights of the chosen options.
    pub fn insights(&self, answers: &AnswerSet) -> Insights {
        insights::generate_insights(self.catalog(), answers)
    }
}
