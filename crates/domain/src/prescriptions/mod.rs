/// Prescription records
pub mod model;

/// Input DTOs
pub mod inputs;

/// Store-backed operations
pub mod service;

pub use model::{PrescribedMedicine, Prescription};
pub use service::PrescriptionService;
