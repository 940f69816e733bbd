use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::compatibility::answers::{Answer, AnswerSet, Candidate, Importance, UserId};
use crate::compatibility::catalog::{
    AnswerOption, CatalogDefinition, Category, CategoryWeights, OptionId, Question,
    QuestionCatalog, QuestionId,
};
use crate::compatibility::repository::{AnswerStore, CandidatePool, StoreError};
use crate::compatibility::{compatibility_router, CompatibilityEngine, CompatibilityService};

pub(super) fn answered_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 17, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn answer(question: u32, option: &str, importance: Importance) -> Answer {
    Answer {
        question_id: QuestionId(question),
        option_id: OptionId::new(option),
        importance,
        answered_at: answered_at(),
    }
}

/// Builds an answer set from `(question, option, importance)` triples.
pub(super) fn answers(entries: &[(u32, &str, Importance)]) -> AnswerSet {
    entries
        .iter()
        .map(|(question, option, importance)| answer(*question, option, *importance))
        .collect()
}

pub(super) fn candidate(id: &str, entries: &[(u32, &str, Importance)]) -> Candidate {
    Candidate {
        user_id: UserId::new(id),
        answers: answers(entries),
    }
}

pub(super) fn question(
    id: u32,
    category: Category,
    options: &[(&str, i32)],
) -> Question {
    Question {
        id: QuestionId(id),
        category,
        prompt: format!("Question {id}"),
        options: options
            .iter()
            .map(|(option, weight)| AnswerOption {
                id: OptionId::new(*option),
                text: format!("Option {option}"),
                weight: *weight,
            })
            .collect(),
    }
}

/// One question per category:
/// 1 lifestyle (a=1, b=3), 2 values (a=1, b=2, c=3), 3 personality (a=2, b=2),
/// 4 relationship (a=1, b=2, c=3, d=4), 5 interests (a=1, b=3).
pub(super) fn sample_catalog() -> Arc<QuestionCatalog> {
    let definition = CatalogDefinition {
        version: "fixture".to_string(),
        category_weights: CategoryWeights::standard(),
        questions: vec![
            question(1, Category::Lifestyle, &[("a", 1), ("b", 3)]),
            question(2, Category::Values, &[("a", 1), ("b", 2), ("c", 3)]),
            question(3, Category::Personality, &[("a", 2), ("b", 2)]),
            question(
                4,
                Category::Relationship,
                &[("a", 1), ("b", 2), ("c", 3), ("d", 4)],
            ),
            question(5, Category::Interests, &[("a", 1), ("b", 3)]),
        ],
    };

    Arc::new(QuestionCatalog::new(definition).expect("fixture catalog is valid"))
}

pub(super) fn engine() -> CompatibilityEngine {
    CompatibilityEngine::new(sample_catalog())
}

pub(super) fn standard_engine() -> CompatibilityEngine {
    CompatibilityEngine::new(Arc::new(
        QuestionCatalog::standard().expect("standard catalog is valid"),
    ))
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) users: Arc<Mutex<HashMap<UserId, AnswerSet>>>,
}

impl MemoryStore {
    pub(super) fn seed(&self, user: &str, set: AnswerSet) {
        self.users
            .lock()
            .expect("store mutex poisoned")
            .insert(UserId::new(user), set);
    }
}

impl AnswerStore for MemoryStore {
    fn fetch(&self, user: &UserId) -> Result<AnswerSet, StoreError> {
        let guard = self.users.lock().expect("store mutex poisoned");
        Ok(guard.get(user).cloned().unwrap_or_default())
    }

    fn upsert(&self, user: &UserId, answer: Answer) -> Result<(), StoreError> {
        let mut guard = self.users.lock().expect("store mutex poisoned");
        guard.entry(user.clone()).or_default().upsert(answer);
        Ok(())
    }

    fn reset(&self, user: &UserId) -> Result<(), StoreError> {
        let mut guard = self.users.lock().expect("store mutex poisoned");
        if let Some(set) = guard.get_mut(user) {
            set.reset();
        }
        Ok(())
    }
}

impl CandidatePool for MemoryStore {
    fn candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        let guard = self.users.lock().expect("store mutex poisoned");
        Ok(guard
            .iter()
            .map(|(user_id, answers)| Candidate {
                user_id: user_id.clone(),
                answers: answers.clone(),
            })
            .collect())
    }
}

pub(super) struct UnavailableStore;

impl AnswerStore for UnavailableStore {
    fn fetch(&self, _user: &UserId) -> Result<AnswerSet, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn upsert(&self, _user: &UserId, _answer: Answer) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn reset(&self, _user: &UserId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

impl CandidatePool for UnavailableStore {
    fn candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) type MemoryService = CompatibilityService<MemoryStore, MemoryStore>;

pub(super) fn build_service() -> (MemoryService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = CompatibilityService::new(Arc::new(engine()), store.clone(), store.clone());
    (service, store)
}

pub(super) fn unavailable_service() -> CompatibilityService<UnavailableStore, UnavailableStore> {
    let store = Arc::new(UnavailableStore);
    CompatibilityService::new(Arc::new(engine()), store.clone(), store)
}

pub(super) fn router_with_service(service: MemoryService) -> axum::Router {
    compatibility_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
