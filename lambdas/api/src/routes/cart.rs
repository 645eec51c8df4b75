use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use domain::cart::inputs::AddToCartInput;
use serde::Deserialize;

use crate::{
    error::ApiResult,
    extract::{AppJson, AppQuery},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/cart/:user_id", get(get_cart))
        .route("/api/cart/:user_id/add", post(add_to_cart))
        .route("/api/cart/:user_id/update", put(update_cart))
        .route("/api/cart/:user_id/remove/:medicine_id", delete(remove_from_cart))
        .route("/api/cart/:user_id/clear", delete(clear_cart))
}

#[derive(Debug, Deserialize)]
struct UpdateCartParams {
    medicine_id: String,
    quantity: u32,
}

async fn get_cart(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.carts.get(&user_id).await?))
}

async fn add_to_cart(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    AppJson(input): AppJson<AddToCartInput>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.carts.add(&user_id, input).await?))
}

// Quantity 0 drops the line
async fn update_cart(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UpdateCartParams>,
) -> ApiResult<impl IntoResponse> {
    let cart = state
        .carts
        .update(&user_id, &params.medicine_id, params.quantity)
        .await?;
    Ok(Json(cart))
}

async fn remove_from_cart(
    Path((user_id, medicine_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.carts.remove(&user_id, &medicine_id).await?))
}

async fn clear_cart(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.carts.clear(&user_id).await?))
}
