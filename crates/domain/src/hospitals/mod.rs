/// Hospital records
pub mod model;

/// Ranking for hospital listings
pub mod catalog;

/// Reference data
pub mod seed;

pub use catalog::{HospitalCatalog, HospitalQuery};
pub use model::{BedAvailability, BedType, Hospital};
