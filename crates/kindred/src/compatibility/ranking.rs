use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::answers::{AnswerSet, Candidate, UserId};
use super::scoring::{CommonAnswer, CompatibilityEngine, DealBreaker};

/// A ranked candidate with the evidence behind the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub candidate_id: UserId,
    pub percentage: u8,
    pub common_answers: Vec<CommonAnswer>,
    pub deal_breakers: Vec<DealBreaker>,
}

impl CompatibilityEngine {
    /// Ranks `pool` against `answers`, best match first.
    ///
    /// The candidate whose id equals `exclude` is skipped, candidates scoring zero are
    /// dropped, ties are ordered by ascending candidate id, and at most `limit` entries are
    /// returned. A non-positive `limit` yields an empty ranking.
    pub fn suggest(
        &self,
        exclude: &UserId,
        answers: &AnswerSet,
        pool: &[Candidate],
        limit: i64,
    ) -> Vec<Suggestion> {
        let Ok(limit) = usize::try_from(limit) else {
            return Vec::new();
        };
        if limit == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<Suggestion> = if pool.len() >= self.parallel_threshold {
            pool.par_iter()
                .filter_map(|candidate| self.suggestion_for(exclude, answers, candidate))
                .collect()
        } else {
            pool.iter()
                .filter_map(|candidate| self.suggestion_for(exclude, answers, candidate))
                .collect()
        };

        ranked.sort_by(|left, right| {
            right
                .percentage
                .cmp(&left.percentage)
                .then_with(|| left.candidate_id.cmp(&right.candidate_id))
        });

        debug!(
            pool = pool.len(),
            matched = ranked.len(),
            limit,
            "ranked suggestion pool"
        );

        ranked.truncate(limit);
        ranked
    }

    fn suggestion_for(
        &self,
        exclude: &UserId,
        answers: &AnswerSet,
        candidate: &Candidate,
    ) -> Option<Suggestion> {
        if &candidate.user_id == exclude {
            return None;
        }

        let report = self.compatibility(answers, &candidate.answers);
        if report.percentage == 0 {
            return None;
        }

        Some(Suggestion {
            candidate_id: candidate.user_id.clone(),
            percentage: report.percentage,
            common_answers: report.common_answers,
            deal_breakers: report.deal_breakers,
        })
    }
}
