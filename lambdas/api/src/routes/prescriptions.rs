use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use domain::prescriptions::inputs::CreatePrescriptionInput;

use crate::{error::ApiResult, extract::AppJson, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/prescriptions", post(create_prescription))
        .route("/api/prescriptions/user/:user_id", get(list_prescriptions))
        .route("/api/prescriptions/:id", get(get_prescription))
}

async fn create_prescription(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePrescriptionInput>,
) -> ApiResult<impl IntoResponse> {
    let prescription = state.prescriptions.create(input).await?;
    Ok((StatusCode::CREATED, Json(prescription)))
}

async fn list_prescriptions(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.prescriptions.list_for_user(&user_id).await?))
}

async fn get_prescription(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.prescriptions.get(&id).await?))
}
