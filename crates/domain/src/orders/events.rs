use chrono::{DateTime, Utc};
use cqrs_es::DomainEvent;
use serde::{Deserialize, Serialize};

use super::aggregate::{OrderItem, OrderStatus, PaymentMethod};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Event {
    OrderPlaced {
        id: String,
        user_id: String,
        items: Vec<OrderItem>,
        subtotal: f64,
        delivery_fee: f64,
        total_amount: f64,
        delivery_address: String,
        contact_number: String,
        payment_method: PaymentMethod,
        notes: String,
        prescription_ids: Vec<String>,
        order_date: DateTime<Utc>,
        estimated_delivery: DateTime<Utc>,
    },

    OrderStatusChanged {
        id: String,
        from: OrderStatus,
        to: OrderStatus,
        updated_at: DateTime<Utc>,
    },

    OrderCancelled {
        id: String,
        from: OrderStatus,
        updated_at: DateTime<Utc>,
    },
}

impl DomainEvent for Event {
    fn event_type(&self) -> String {
        match self {
            Event::OrderPlaced { .. } => "Order:Placed".to_string(),
            Event::OrderStatusChanged { .. } => "Order:StatusChanged".to_string(),
            Event::OrderCancelled { .. } => "Order:Cancelled".to_string(),
        }
    }

    fn event_version(&self) -> String {
        "1.0".to_string()
    }
}
