use super::answers::{Answer, AnswerSet, Candidate, UserId};

/// Per-user answer persistence owned by the host application.
pub trait AnswerStore: Send + Sync {
    /// Returns the user's answers, or an empty set for users who have not answered anything.
    fn fetch(&self, user: &UserId) -> Result<AnswerSet, StoreError>;
    /// Inserts or replaces the answer for `answer.question_id`.
    fn upsert(&self, user: &UserId, answer: Answer) -> Result<(), StoreError>;
    /// Drops every answer belonging to `user`.
    fn reset(&self, user: &UserId) -> Result<(), StoreError>;
}

/// Source of other users' answers for ranking (e.g. a user directory query).
pub trait CandidatePool: Send + Sync {
    fn candidates(&self) -> Result<Vec<Candidate>, StoreError>;
}

/// Error enumeration for store and pool failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("answer store unavailable: {0}")]
    Unavailable(String),
}
