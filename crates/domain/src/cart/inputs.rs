use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartInput {
    pub medicine_id: String,
    #[serde(default = "one")]
    pub quantity: u32,
    #[serde(default)]
    pub prescription_id: Option<String>,
}

fn one() -> u32 {
    1
}
