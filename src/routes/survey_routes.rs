use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::survey_controller::SurveyController;
use crate::dto::survey_dto::{ApiResponse, SubmitSurveyRequest, SurveyListResponse, SurveyResponse};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_survey_router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_survey))
        .route("/:person_id", get(get_surveys_by_person))
}

async fn submit_survey(
    State(state): State<AppState>,
    Json(request): Json<SubmitSurveyRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<SurveyResponse>>)> {
    let controller = SurveyController::new(state.pool.clone());
    let response = controller.submit(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_surveys_by_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> AppResult<Json<SurveyListResponse>> {
    let controller = SurveyController::new(state.pool.clone());
    let response = controller.get_by_person(&person_id).await?;
    Ok(Json(response))
}
