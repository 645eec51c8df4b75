use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use domain::orders::inputs::{PlaceOrderInput, UpdateStatusInput};

use crate::{error::ApiResult, extract::AppJson, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/orders", post(place_order))
        .route("/api/orders/user/:user_id", get(list_orders))
        .route("/api/orders/:id", get(get_order))
        .route("/api/orders/:id/status", put(update_order_status))
}

async fn place_order(
    State(state): State<AppState>,
    AppJson(input): AppJson<PlaceOrderInput>,
) -> ApiResult<impl IntoResponse> {
    let order = state.orders.place(input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn list_orders(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.orders.list_for_user(&user_id).await?))
}

async fn get_order(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.orders.get(&id).await?))
}

// "cancelled" cancels; any other status must be the next step
async fn update_order_status(
    Path(id): Path<String>,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateStatusInput>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.orders.update_status(&id, input.status).await?))
}
