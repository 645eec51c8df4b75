use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PrescribedMedicine;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionInput {
    pub user_id: String,
    pub doctor_name: String,
    pub hospital_name: String,
    pub prescription_date: DateTime<Utc>,
    pub medicines: Vec<PrescribedMedicine>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub image_url: Option<String>,
}
