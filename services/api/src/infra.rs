use kindred::compatibility::{
    Answer, AnswerSet, AnswerStore, Candidate, CandidatePool, StoreError, UserId,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local answer store that doubles as the candidate pool.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAnswerStore {
    users: Arc<Mutex<HashMap<UserId, AnswerSet>>>,
}

impl InMemoryAnswerStore {
    fn guard(&self) -> Result<MutexGuard<'_, HashMap<UserId, AnswerSet>>, StoreError> {
        self.users
            .lock()
            .map_err(|_| StoreError::Unavailable("answer store mutex poisoned".to_string()))
    }

    pub(crate) fn seed(&self, user: UserId, answers: AnswerSet) -> Result<(), StoreError> {
        self.guard()?.insert(user, answers);
        Ok(())
    }
}

impl AnswerStore for InMemoryAnswerStore {
    fn fetch(&self, user: &UserId) -> Result<AnswerSet, StoreError> {
        Ok(self.guard()?.get(user).cloned().unwrap_or_default())
    }

    fn upsert(&self, user: &UserId, answer: Answer) -> Result<(), StoreError> {
        self.guard()?.entry(user.clone()).or_default().upsert(answer);
        Ok(())
    }

    fn reset(&self, user: &UserId) -> Result<(), StoreError> {
        self.guard()?.remove(user);
        Ok(())
    }
}

impl CandidatePool for InMemoryAnswerStore {
    fn candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        let guard = self.guard()?;
        let mut pool: Vec<Candidate> = guard
            .iter()
            .map(|(user_id, answers)| Candidate {
                user_id: user_id.clone(),
                answers: answers.clone(),
            })
            .collect();
        pool.sort_by(|left, right| left.user_id.cmp(&right.user_id));
        Ok(pool)
    }
}
