/// Order aggregate
pub mod aggregate;

/// Commands
pub mod commands;

/// Events
pub mod events;

/// Input DTOs
pub mod inputs;

/// View (read model)
pub mod view;

/// CQRS setup
pub mod cqrs;

/// Order placement and lookups
pub mod service;

pub use aggregate::{
    Order, OrderItem, OrderStatus, PaymentMethod, Services, AGGREGATE_TYPE, DELIVERY_FEE,
};
pub use commands::Command;
pub use cqrs::OrderCommandBus;
pub use events::Event;
pub use service::OrderService;
pub use view::{DocumentViewRepository, Query, View};
