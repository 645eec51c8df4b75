use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::{hospitals::HospitalQuery, listing::ListQuery};

use crate::{error::ApiResult, extract::AppQuery, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/hospitals", get(list_hospitals))
        .route("/api/hospitals/:id", get(get_hospital))
}

// List hospitals, most beds first
async fn list_hospitals(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<HospitalQuery>,
) -> ApiResult<impl IntoResponse> {
    let hospitals = state.hospitals.list(&ListQuery::from(query)).await?;
    Ok(Json(hospitals))
}

async fn get_hospital(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.hospitals.get(&id).await?))
}
