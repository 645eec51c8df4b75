/// Cart document
pub mod model;

/// Input DTOs
pub mod inputs;

/// Store-backed operations
pub mod service;

pub use model::{Cart, CartItem};
pub use service::CartService;
