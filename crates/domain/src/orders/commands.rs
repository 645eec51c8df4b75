use serde::{Deserialize, Serialize};

use super::aggregate::{OrderItem, OrderStatus, PaymentMethod};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Open a new order from checked-out items
    PlaceOrder {
        id: String,
        user_id: String,
        items: Vec<OrderItem>,
        delivery_address: String,
        contact_number: String,
        payment_method: PaymentMethod,
        notes: String,
        prescription_ids: Vec<String>,
    },

    /// Move one step along the fulfilment path
    AdvanceStatus { status: OrderStatus },

    /// Cancel an order that has not reached a terminal state
    CancelOrder,
}
