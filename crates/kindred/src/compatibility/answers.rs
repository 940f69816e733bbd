use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{OptionId, QuestionId};

/// Opaque user identifier supplied by the host's user directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How much the answering user cares about a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Importance {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Low => 0.5,
            Self::Medium => 1.0,
            Self::High => 1.5,
            Self::Critical => 2.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: QuestionId,
    pub option_id: OptionId,
    #[serde(default)]
    pub importance: Importance,
    #[serde(default = "Utc::now")]
    pub answered_at: DateTime<Utc>,
}

/// One user's answers keyed by question. Submitting twice for a question replaces the first answer.
///
/// Serialized as a list of answers ordered by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Answer>", into = "Vec<Answer>")]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the answer for its question, returning the previous one.
    pub fn upsert(&mut self, answer: Answer) -> Option<Answer> {
        self.answers.insert(answer.question_id, answer)
    }

    /// Removes every answer.
    pub fn reset(&mut self) {
        self.answers.clear();
    }

    pub fn get(&self, question_id: QuestionId) -> Option<&Answer> {
        self.answers.get(&question_id)
    }

    pub fn contains(&self, question_id: QuestionId) -> bool {
        self.answers.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Answers in ascending question id order.
    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }

    pub fn question_ids(&self) -> BTreeSet<QuestionId> {
        self.answers.keys().copied().collect()
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = Self::new();
        for answer in iter {
            set.upsert(answer);
        }
        set
    }
}

impl From<Vec<Answer>> for AnswerSet {
    fn from(answers: Vec<Answer>) -> Self {
        answers.into_iter().collect()
    }
}

impl From<AnswerSet> for Vec<Answer> {
    fn from(set: AnswerSet) -> Self {
        set.into_iter().collect()
    }
}

impl IntoIterator for AnswerSet {
    type Item = Answer;
    type IntoIter = btree_map::IntoValues<QuestionId, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.answers.into_values()
    }
}

/// Another user's answers offered for ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub user_id: UserId,
    pub answers: AnswerSet,
}
