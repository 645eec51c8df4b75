/// Medicine records
pub mod model;

/// Ranking and filters for medicine listings
pub mod catalog;

/// Stock bookkeeping
pub mod inventory;

/// Reference data
pub mod seed;

pub use catalog::{MedicineCatalog, MedicineQuery};
pub use model::{DispensingType, Medicine, MedicineCategory};
