use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::{
    listing::ListQuery,
    medicines::{MedicineCategory, MedicineQuery},
};
use serde::Deserialize;

use crate::{error::ApiResult, extract::AppQuery, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/medicines", get(list_medicines))
        .route("/api/medicines/:id", get(get_medicine))
}

#[derive(Debug, Default, Deserialize)]
struct MedicineParams {
    search: Option<String>,
    category: Option<String>,
    prescription_required: Option<String>,
}

impl TryFrom<MedicineParams> for MedicineQuery {
    type Error = domain::Error;

    fn try_from(params: MedicineParams) -> Result<Self, Self::Error> {
        let category = match params.category.as_deref() {
            None | Some("") => None,
            Some(category) => Some(category.parse::<MedicineCategory>()?),
        };

        let prescription_required = match params.prescription_required.as_deref() {
            None | Some("") => None,
            Some(flag) => Some(flag.parse::<bool>().map_err(|_| {
                domain::Error::validation(
                    "prescription_required",
                    format!("expected true or false, got '{flag}'"),
                )
            })?),
        };

        Ok(MedicineQuery {
            search: params.search,
            category,
            prescription_required,
        })
    }
}

async fn list_medicines(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<MedicineParams>,
) -> ApiResult<impl IntoResponse> {
    let query = MedicineQuery::try_from(params)?;
    let medicines = state.medicines.list(&ListQuery::from(query)).await?;
    Ok(Json(medicines))
}

async fn get_medicine(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.medicines.get(&id).await?))
}
