use serde::{Deserialize, Serialize};

use super::aggregate::{OrderItem, OrderStatus, PaymentMethod};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderInput {
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub delivery_address: String,
    pub contact_number: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub prescription_ids: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateStatusInput {
    pub status: OrderStatus,
}
