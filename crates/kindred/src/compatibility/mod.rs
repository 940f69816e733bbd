//! Questionnaire compatibility: catalog, pairwise scoring, ranking, and progress reporting.
//!
//! Everything below [`CompatibilityEngine`] is a pure computation over caller supplied
//! answer sets and the immutable [`QuestionCatalog`]. [`CompatibilityService`] layers the
//! host's answer store and candidate pool on top and [`compatibility_router`] exposes it
//! over HTTP.

pub mod answers;
pub mod catalog;
pub mod ranking;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use answers::{Answer, AnswerSet, Candidate, Importance, UserId};
pub use catalog::{
    AnswerOption, CatalogDefinition, CatalogError, Category, CategoryWeights, InvalidArgument,
    OptionId, Question, QuestionCatalog, QuestionId,
};
pub use ranking::Suggestion;
pub use report::views::{CategoryProgress, CompletionStats, Insights, TraitBand, TraitInsight};
pub use repository::{AnswerStore, CandidatePool, StoreError};
pub use router::compatibility_router;
pub use scoring::{CommonAnswer, CompatibilityEngine, CompatibilityReport, DealBreaker};
pub use service::{AnswerRejection, AnswerSubmission, CompatibilityService, ServiceError};
