use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

mod cart;
mod hospitals;
mod medicines;
mod orders;
mod prescriptions;

pub const API_MESSAGE: &str = "Hospot API - Find & Book Hospital Beds in Real Time";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .merge(hospitals::routes())
        .merge(medicines::routes())
        .merge(prescriptions::routes())
        .merge(cart::routes())
        .merge(orders::routes())
}

async fn root() -> Json<Value> {
    Json(json!({ "message": API_MESSAGE }))
}
