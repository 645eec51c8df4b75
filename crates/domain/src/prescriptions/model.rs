use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrescribedMedicine {
    /// Catalog id when the prescription was linked to one; often empty.
    #[serde(default)]
    pub medicine_id: String,
    pub medicine_name: String,
    pub dosage: String,
    pub duration: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: String,
    pub user_id: String,
    pub doctor_name: String,
    pub hospital_name: String,
    pub prescription_date: DateTime<Utc>,
    pub medicines: Vec<PrescribedMedicine>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
}
