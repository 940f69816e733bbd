use std::sync::Arc;

use super::common::*;
use crate::compatibility::answers::Importance::{Critical, Medium};
use crate::compatibility::answers::{Importance, UserId};
use crate::compatibility::catalog::{InvalidArgument, OptionId, QuestionId};
use crate::compatibility::service::{
    AnswerRejection, AnswerSubmission, CompatibilityService, ServiceError,
};
use crate::config::EngineConfig;

fn submission(question: u32, option: &str, importance: Option<Importance>) -> AnswerSubmission {
    AnswerSubmission {
        question_id: QuestionId(question),
        option_id: OptionId::new(option),
        importance,
    }
}

#[test]
fn submit_rejects_unknown_question() {
    let (service, store) = build_service();
    let user = UserId::new("alex");

    let err = service
        .submit_answer(&user, submission(42, "a", None))
        .expect_err("question 42 is not in the catalog");

    assert!(matches!(
        err,
        ServiceError::Rejected(AnswerRejection::UnknownQuestion(QuestionId(42)))
    ));
    assert!(store.users.lock().expect("lock").is_empty());
}

#[test]
fn submit_rejects_unknown_option() {
    let (service, _) = build_service();
    let user = UserId::new("alex");

    let err = service
        .submit_answer(&user, submission(1, "z", Some(Critical)))
        .expect_err("option z does not exist");

    match err {
        ServiceError::Rejected(AnswerRejection::UnknownOption { question, option }) => {
            assert_eq!(question, QuestionId(1));
            assert_eq!(option, OptionId::new("z"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(service.answers(&user).expect("answers").is_empty());
}

#[test]
fn submit_defaults_importance_and_overwrites_previous_answer() {
    let (service, _) = build_service();
    let user = UserId::new("alex");

    let first = service
        .submit_answer(&user, submission(2, "a", None))
        .expect("valid answer");
    assert_eq!(first.importance, Importance::Medium);

    service
        .submit_answer(&user, submission(2, "c", Some(Critical)))
        .expect("valid answer");

    let stored = service.answers(&user).expect("answers");
    assert_eq!(stored.len(), 1);
    let answer = stored.get(QuestionId(2)).expect("question 2 answered");
    assert_eq!(answer.option_id, OptionId::new("c"));
    assert_eq!(answer.importance, Critical);
}

#[test]
fn reset_clears_only_the_requested_user() {
    let (service, store) = build_service();
    store.seed("alex", answers(&[(1, "a", Medium), (2, "b", Medium)]));
    store.seed("sam", answers(&[(1, "a", Medium)]));

    service
        .reset_answers(&UserId::new("alex"))
        .expect("reset succeeds");

    assert!(service
        .answers(&UserId::new("alex"))
        .expect("answers")
        .is_empty());
    assert_eq!(
        service.answers(&UserId::new("sam")).expect("answers").len(),
        1
    );
    assert_eq!(
        service
            .progress(&UserId::new("alex"))
            .expect("progress")
            .answered_questions,
        0
    );
}

#[test]
fn compatibility_reads_both_users_from_the_store() {
    let (service, store) = build_service();
    store.seed("alex", answers(&[(1, "a", Medium), (2, "b", Medium)]));
    store.seed("sam", answers(&[(1, "b", Medium), (2, "b", Medium)]));

    let report = service
        .compatibility(&UserId::new("alex"), &UserId::new("sam"))
        .expect("report");

    assert_eq!(report.percentage, 55);
    assert_eq!(report.common_answers.len(), 1);

    let stranger = service
        .compatibility(&UserId::new("alex"), &UserId::new("nobody"))
        .expect("report");
    assert_eq!(stranger.percentage, 0);
}

#[test]
fn suggestions_exclude_the_requesting_user() {
    let (service, store) = build_service();
    store.seed("alex", answers(&[(1, "a", Medium)]));
    store.seed("sam", answers(&[(1, "a", Medium)]));
    store.seed("riley", answers(&[(1, "b", Medium)]));

    let ranked = service
        .suggestions(&UserId::new("alex"), None)
        .expect("suggestions");

    let ids: Vec<&str> = ranked.iter().map(|s| s.candidate_id.0.as_str()).collect();
    assert_eq!(ids, vec!["sam"]);
}

#[test]
fn suggestions_fall_back_to_the_configured_limit() {
    let store = Arc::new(MemoryStore::default());
    store.seed("alex", answers(&[(1, "a", Medium)]));
    for index in 0..5 {
        store.seed(&format!("match-{index}"), answers(&[(1, "a", Medium)]));
    }
    let config = EngineConfig {
        suggestion_limit: 3,
        ..EngineConfig::default()
    };
    let service =
        CompatibilityService::from_config(Arc::new(engine()), store.clone(), store, &config);

    let defaulted = service
        .suggestions(&UserId::new("alex"), None)
        .expect("suggestions");
    assert_eq!(defaulted.len(), 3);
    assert_eq!(defaulted[0].candidate_id, UserId::new("match-0"));

    let explicit = service
        .suggestions(&UserId::new("alex"), Some(5))
        .expect("suggestions");
    assert_eq!(explicit.len(), 5);

    let none = service
        .suggestions(&UserId::new("alex"), Some(0))
        .expect("suggestions");
    assert!(none.is_empty());
}

#[test]
fn next_questions_reject_negative_limits() {
    let (service, store) = build_service();
    store.seed("alex", answers(&[(2, "a", Medium)]));

    let err = service
        .next_questions(&UserId::new("alex"), -1)
        .expect_err("negative limit");
    assert!(matches!(
        err,
        ServiceError::InvalidArgument(InvalidArgument::NegativeLimit(-1))
    ));

    let next: Vec<u32> = service
        .next_questions(&UserId::new("alex"), 2)
        .expect("next questions")
        .into_iter()
        .map(|question| question.id.0)
        .collect();
    assert_eq!(next, vec![1, 3]);
}

#[test]
fn store_failures_surface_as_store_errors() {
    let service = unavailable_service();
    let user = UserId::new("alex");

    assert!(matches!(
        service.answers(&user),
        Err(ServiceError::Store(_))
    ));
    assert!(matches!(
        service.submit_answer(&user, submission(1, "a", None)),
        Err(ServiceError::Store(_))
    ));
    assert!(matches!(
        service.suggestions(&user, Some(3)),
        Err(ServiceError::Store(_))
    ));
}
