use crate::{error::AppError, AppState};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use core_types::{
    validate_submission, ChronicDetails, ListQuery, Questionnaire, TrimStrings, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE,
};
use database::{DbError, QuestionnaireStore};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

pub const API_RUNNING: &str = "Healthcare App API Running";
pub const SUBMITTED: &str = "Questionnaire submitted successfully";

/// Raw listing parameters. Anything absent, non-numeric or below 1 falls back
/// to the defaults rather than rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    page: Option<String>,
    #[serde(rename = "pageSize")]
    page_size: Option<String>,
    health_condition: Option<String>,
}

impl ListParams {
    pub fn into_query(self) -> ListQuery {
        ListQuery::new(
            parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            parse_positive(self.page_size.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE),
            self.health_condition,
        )
    }
}

fn parse_positive(value: Option<&str>) -> Option<u32> {
    value?.trim().parse::<u32>().ok().filter(|value| *value >= 1)
}

/// A questionnaire as returned by the listing, with its chronic-detail record
/// attached when the health condition is the chronic sentinel.
#[derive(Debug, Serialize)]
pub struct QuestionnaireListing {
    #[serde(flatten)]
    pub questionnaire: Questionnaire,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chronic_health_details: Option<ChronicDetails>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
    pub result: Questionnaire,
}

/// # GET /
/// Liveness check. Never touches the store.
pub async fn api_running() -> &'static str {
    API_RUNNING
}

/// # GET /questionnaires
/// One page of questionnaires, trimmed, with chronic details joined in.
pub async fn get_questionnaires(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<QuestionnaireListing>>, AppError> {
    let query = params.into_query();
    let rows = state.store.list_questionnaires(&query).await?.trim_strings();

    let store = state.store.as_ref();
    let listings = try_join_all(rows.into_iter().map(|row| enrich(store, row))).await?;

    Ok(Json(listings))
}

async fn enrich(
    store: &dyn QuestionnaireStore,
    questionnaire: Questionnaire,
) -> Result<QuestionnaireListing, DbError> {
    let chronic_health_details = if questionnaire.is_chronic() {
        store
            .get_chronic_details(questionnaire.id)
            .await?
            .trim_strings()
    } else {
        None
    };

    Ok(QuestionnaireListing {
        questionnaire,
        chronic_health_details,
    })
}

/// # POST /submit-questionnaire
/// Validates the body, then stores the questionnaire (and its chronic details)
/// atomically.
pub async fn submit_questionnaire(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let Json(payload) = payload?;
    let submission = validate_submission(&payload)?;

    let result = state
        .store
        .submit_questionnaire(&submission)
        .await?
        .trim_strings();
    tracing::info!(questionnaire_id = result.id, chronic = result.is_chronic(), "Questionnaire submitted.");

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: SUBMITTED,
            result,
        }),
    ))
}
