use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::answers::{AnswerSet, Importance, UserId};
use super::catalog::{OptionId, QuestionId};
use super::repository::{AnswerStore, CandidatePool};
use super::service::{AnswerSubmission, CompatibilityService, ServiceError};

const DEFAULT_NEXT_QUESTIONS: i64 = 5;

/// Router builder exposing the engine and answer service over HTTP.
pub fn compatibility_router<S, P>(service: Arc<CompatibilityService<S, P>>) -> Router
where
    S: AnswerStore + 'static,
    P: CandidatePool + 'static,
{
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler::<S, P>))
        .route("/api/v1/compatibility/score", post(score_handler::<S, P>))
        .route(
            "/api/v1/users/:user_id/answers",
            get(answers_handler::<S, P>).delete(reset_handler::<S, P>),
        )
        .route(
            "/api/v1/users/:user_id/answers/:question_id",
            put(submit_handler::<S, P>),
        )
        .route(
            "/api/v1/users/:user_id/compatibility/:other_id",
            get(compatibility_handler::<S, P>),
        )
        .route(
            "/api/v1/users/:user_id/suggestions",
            get(suggestions_handler::<S, P>),
        )
        .route(
            "/api/v1/users/:user_id/progress",
            get(progress_handler::<S, P>),
        )
        .route(
            "/api/v1/users/:user_id/insights",
            get(insights_handler::<S, P>),
        )
        .route(
            "/api/v1/users/:user_id/questions/next",
            get(next_questions_handler::<S, P>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerBody {
    pub(crate) option_id: OptionId,
    #[serde(default)]
    pub(crate) importance: Option<Importance>,
}

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct ScoreRequest {
    pub(crate) first: AnswerSet,
    pub(crate) second: AnswerSet,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LimitQuery {
    #[serde(default)]
    pub(crate) limit: Option<i64>,
}

pub(crate) async fn catalog_handler<S, P>(
    State(service): State<Arc<CompatibilityService<S, P>>>,
) -> Response
where
    S: AnswerStore + 'static,
    P: CandidatePool + 'static,
{
    (StatusCode::OK, Json(service.engine().catalog().summary())).into_response()
}

pub(crate) async fn score_handler<S, P>(
    State(service): State<Arc<CompatibilityService<S, P>>>,
    Json(request): Json<ScoreRequest>,
) -> Response
where
    S: AnswerStore + 'static,
    P: CandidatePool + 'static,
{
    let report = service
        .engine()
        .compatibility(&request.first, &request.second);
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn submit_handler<S, P>(
    State(service): State<Arc<CompatibilityService<S, P>>>,
    Path((user_id, question_id)): Path<(String, u32)>,
    Json(body): Json<AnswerBody>,
) -> Response
where
    S: AnswerStore + 'static,
    P: CandidatePool + 'static,
{
    let submission = AnswerSubmission {
        question_id: QuestionId(question_id),
        option_id: body.option_id,
        importance: body.importance,
    };
    respond(service.submit_answer(&UserId(user_id), submission))
}

pub(crate) async fn answers_handler<S, P>(
    State(service): State<Arc<CompatibilityService<S, P>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: AnswerStore + 'static,
    P: CandidatePool + 'static,
{
    respond(service.answers(&UserId(user_id)))
}

pub(crate) async fn reset_handler<S, P>(
    State(service): State<Arc<CompatibilityService<S, P>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: AnswerStore + 'static,
    P: CandidatePool + 'static,
{
    match service.reset_answers(&UserId(user_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn compatibility_handler<S, P>(
    State(service): State<Arc<CompatibilityService<S, P>>>,
    Path((user_id, other_id)): Path<(String, String)>,
) -> Response
where
    S: AnswerStore + 'static,
    P: CandidatePool + 'static,
{
    respond(service.compatibility(&UserId(user_id), &UserId(other_id)))
}

pub(crate) async fn suggestions_handler<S, P>(
    State(service): State<Arc<CompatibilityService<S, P>>>,
    Path(user_id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Response
where
    S: AnswerStore + 'static,
    P: CandidatePool + 'static,
{
    respond(service.suggestions(&UserId(user_id), query.limit))
}

pub(crate) async fn progress_handler<S, P>(
    State(service): State<Arc<CompatibilityService<S, P>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: AnswerStore + 'static,
    P: CandidatePool + 'static,
{
    respond(service.progress(&UserId(user_id)))
}

pub(crate) async fn insights_handler<S, P>(
    State(service): State<Arc<CompatibilityService<S, P>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: AnswerStore + 'static,
    P: CandidatePool + 'static,
{
    respond(service.insights(&UserId(user_id)))
}

pub(crate) async fn next_questions_handler<S, P>(
    State(service): State<Arc<CompatibilityService<S, P>>>,
    Path(user_id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Response
where
    S: AnswerStore + 'static,
    P: CandidatePool + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_NEXT_QUESTIONS);
    respond(service.next_questions(&UserId(user_id), limit))
}

fn respond<T: Serialize>(result: Result<T, ServiceError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ServiceError) -> Response {
    let status = match &error {
        ServiceError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}
