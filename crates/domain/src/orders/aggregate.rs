use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use cqrs_es::Aggregate;
use serde::{Deserialize, Serialize};

use crate::{cart::model::round_to_cents, errors::Error};

use super::{Command, Event};

pub use crate::cart::CartItem as OrderItem;

/// Flat delivery charge added to every order.
pub const DELIVERY_FEE: f64 = 5.99;

const DELIVERY_DAYS: i64 = 2;

/// Order fulfilment status
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, not yet accepted by the pharmacy
    #[default]
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            Self::Pending => Some(Self::Confirmed),
            Self::Confirmed => Some(Self::Preparing),
            Self::Preparing => Some(Self::OutForDelivery),
            Self::OutForDelivery => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CashOnDelivery,
    Card,
    Upi,
}

/// Order aggregate
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total_amount: f64,
    pub delivery_address: String,
    pub contact_number: String,
    pub payment_method: PaymentMethod,
    pub notes: String,
    pub prescription_ids: Vec<String>,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    pub estimated_delivery: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

pub const AGGREGATE_TYPE: &str = "Order";

#[derive(Clone, Copy, Debug)]
pub struct Services {
    pub now: fn() -> DateTime<Utc>,
}

impl Default for Services {
    fn default() -> Self {
        Self { now: Utc::now }
    }
}

#[async_trait]
impl Aggregate for Order {
    type Command = Command;
    type Event = Event;
    type Error = Error;
    type Services = Services;

    fn aggregate_type() -> String {
        AGGREGATE_TYPE.to_string()
    }

    async fn handle(
        &self,
        command: Self::Command,
        services: &Self::Services,
    ) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            Command::PlaceOrder {
                id,
                user_id,
                items,
                delivery_address,
                contact_number,
                payment_method,
                notes,
                prescription_ids,
            } => {
                self.validate_new()?;
                validate_placement(&user_id, &items, &delivery_address, &contact_number)?;

                let now = (services.now)();
                let subtotal = round_to_cents(items.iter().map(OrderItem::line_total).sum());

                Ok(vec![Event::OrderPlaced {
                    id,
                    user_id,
                    items,
                    subtotal,
                    delivery_fee: DELIVERY_FEE,
                    total_amount: round_to_cents(subtotal + DELIVERY_FEE),
                    delivery_address,
                    contact_number,
                    payment_method,
                    notes,
                    prescription_ids,
                    order_date: now,
                    estimated_delivery: now + Duration::days(DELIVERY_DAYS),
                }])
            }

            Command::AdvanceStatus { status } => {
                self.validate_existing()?;
                if self.status.next() != Some(status) {
                    return Err(self.transition_error(status));
                }

                Ok(vec![Event::OrderStatusChanged {
                    id: self.id.clone(),
                    from: self.status,
                    to: status,
                    updated_at: (services.now)(),
                }])
            }

            Command::CancelOrder => {
                self.validate_existing()?;
                if self.status.is_terminal() {
                    return Err(self.transition_error(OrderStatus::Cancelled));
                }

                Ok(vec![Event::OrderCancelled {
                    id: self.id.clone(),
                    from: self.status,
                    updated_at: (services.now)(),
                }])
            }
        }
    }

    fn apply(&mut self, event: Self::Event) {
        match event {
            Event::OrderPlaced {
                id,
                user_id,
                items,
                subtotal,
                delivery_fee,
                total_amount,
                delivery_address,
                contact_number,
                payment_method,
                notes,
                prescription_ids,
                order_date,
                estimated_delivery,
            } => {
                self.id = id;
                self.user_id = user_id;
                self.items = items;
                self.subtotal = subtotal;
                self.delivery_fee = delivery_fee;
                self.total_amount = total_amount;
                self.delivery_address = delivery_address;
                self.contact_number = contact_number;
                self.payment_method = payment_method;
                self.notes = notes;
                self.prescription_ids = prescription_ids;
                self.status = OrderStatus::Pending;
                self.order_date = order_date;
                self.estimated_delivery = Some(estimated_delivery);
                self.updated_at = order_date;
            }

            Event::OrderStatusChanged { to, updated_at, .. } => {
                self.status = to;
                self.updated_at = updated_at;
            }

            Event::OrderCancelled { updated_at, .. } => {
                self.status = OrderStatus::Cancelled;
                self.estimated_delivery = None;
                self.updated_at = updated_at;
            }
        }
    }
}

impl Order {
    fn validate_new(&self) -> Result<(), Error> {
        if !self.id.is_empty() {
            return Err(Error::Uniqueness {
                field: "id".to_string(),
            });
        }
        Ok(())
    }

    fn validate_existing(&self) -> Result<(), Error> {
        if self.id.is_empty() {
            return Err(Error::not_found(AGGREGATE_TYPE));
        }
        Ok(())
    }

    fn transition_error(&self, to: OrderStatus) -> Error {
        Error::InvalidStateTransition {
            from: self.status.to_string(),
            to: to.to_string(),
        }
    }
}

fn validate_placement(
    user_id: &str,
    items: &[OrderItem],
    delivery_address: &str,
    contact_number: &str,
) -> Result<(), Error> {
    if user_id.trim().is_empty() {
        return Err(Error::validation("userId", "must not be empty"));
    }
    if items.is_empty() {
        return Err(Error::validation("items", "order must contain at least one item"));
    }
    if items.iter().any(|item| item.quantity == 0) {
        return Err(Error::validation("items", "every quantity must be at least 1"));
    }
    if items
        .iter()
        .any(|item| !item.price.is_finite() || item.price < 0.0)
    {
        return Err(Error::validation("items", "prices must be non-negative"));
    }
    if delivery_address.trim().is_empty() {
        return Err(Error::validation("deliveryAddress", "must not be empty"));
    }
    if contact_number.trim().is_empty() {
        return Err(Error::validation("contactNumber", "must not be empty"));
    }
    Ok(())
}
