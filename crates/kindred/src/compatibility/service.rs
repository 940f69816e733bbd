use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::answers::{Answer, AnswerSet, Importance, UserId};
use super::catalog::{InvalidArgument, OptionId, Question, QuestionId};
use super::ranking::Suggestion;
use super::report::views::{CompletionStats, Insights};
use super::repository::{AnswerStore, CandidatePool, StoreError};
use super::scoring::{CompatibilityEngine, CompatibilityReport};
use crate::config::{EngineConfig, DEFAULT_SUGGESTION_LIMIT};

/// Answer submitted by a user for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub question_id: QuestionId,
    pub option_id: OptionId,
    #[serde(default)]
    pub importance: Option<Importance>,
}

/// Service composing the answer store, candidate pool, and compatibility engine.
pub struct CompatibilityService<S, P> {
    engine: Arc<CompatibilityEngine>,
    store: Arc<S>,
    pool: Arc<P>,
    suggestion_limit: u32,
}

impl<S, P> CompatibilityService<S, P>
where
    S: AnswerStore + 'static,
    P: CandidatePool + 'static,
{
    pub fn new(engine: Arc<CompatibilityEngine>, store: Arc<S>, pool: Arc<P>) -> Self {
        Self {
            engine,
            store,
            pool,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    pub fn from_config(
        engine: Arc<CompatibilityEngine>,
        store: Arc<S>,
        pool: Arc<P>,
        config: &EngineConfig,
    ) -> Self {
        let mut service = Self::new(engine, store, pool);
        service.suggestion_limit = config.suggestion_limit;
        service
    }

    pub fn engine(&self) -> &CompatibilityEngine {
        &self.engine
    }

    /// Validate an answer against the catalog and upsert it for `user`.
    pub fn submit_answer(
        &self,
        user: &UserId,
        submission: AnswerSubmission,
    ) -> Result<Answer, ServiceError> {
        let AnswerSubmission {
            question_id,
            option_id,
            importance,
        } = submission;

        let question = self
            .engine
            .catalog()
            .question_by_id(question_id)
            .ok_or(AnswerRejection::UnknownQuestion(question_id))?;
        if question.option(&option_id).is_none() {
            return Err(AnswerRejection::UnknownOption {
                question: question_id,
                option: option_id,
            }
            .into());
        }

        let answer = Answer {
            question_id,
            option_id,
            importance: importance.unwrap_or_default(),
            answered_at: Utc::now(),
        };

        self.store.upsert(user, answer.clone())?;
        debug!(
            %user,
            question_id = %answer.question_id,
            importance = answer.importance.label(),
            "answer recorded"
        );
        Ok(answer)
    }

    /// Remove every answer `user` has given.
    pub fn reset_answers(&self, user: &UserId) -> Result<(), ServiceError> {
        self.store.reset(user)?;
        info!(%user, "answers reset");
        Ok(())
    }

    pub fn answers(&self, user: &UserId) -> Result<AnswerSet, ServiceError> {
        Ok(self.store.fetch(user)?)
    }

    /// Compare `user` against `other`, weighting by `user`'s importance flags.
    pub fn compatibility(
        &self,
        user: &UserId,
        other: &UserId,
    ) -> Result<CompatibilityReport, ServiceError> {
        let mine = self.store.fetch(user)?;
        let theirs = self.store.fetch(other)?;
        Ok(self.engine.compatibility(&mine, &theirs))
    }

    /// Rank the candidate pool for `user`. Falls back to the configured limit when none is given.
    pub fn suggestions(
        &self,
        user: &UserId,
        limit: Option<i64>,
    ) -> Result<Vec<Suggestion>, ServiceError> {
        let answers = self.store.fetch(user)?;
        let pool = self.pool.candidates()?;
        let limit = limit.unwrap_or_else(|| i64::from(self.suggestion_limit));
        Ok(self.engine.suggest(user, &answers, &pool, limit))
    }

    pub fn progress(&self, user: &UserId) -> Result<CompletionStats, ServiceError> {
        let answers = self.store.fetch(user)?;
        Ok(self.engine.completion_stats(&answers))
    }

    pub fn insights(&self, user: &UserId) -> Result<Insights, ServiceError> {
        let answers = self.store.fetch(user)?;
        Ok(self.engine.insights(&answers))
    }

    /// Next questions to ask `user`, heaviest category first.
    pub fn next_questions(
        &self,
        user: &UserId,
        limit: i64,
    ) -> Result<Vec<&Question>, ServiceError> {
        let answers = self.store.fetch(user)?;
        Ok(self.engine.unanswered_questions(&answers, limit)?)
    }
}

/// Submitted answer does not line up with the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerRejection {
    #[error("question {0} is not in the catalog")]
    UnknownQuestion(QuestionId),
    #[error("question {question} has no option '{option}'")]
    UnknownOption {
        question: QuestionId,
        option: OptionId,
    },
}

/// Error raised by the compatibility service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Rejected(#[from] AnswerRejection),
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error(transparent)]
    Store(#[from] StoreError),
}
