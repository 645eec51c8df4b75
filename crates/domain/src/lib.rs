//! Hospital and Pharmacy Domain

/// Cart of medicines per user
pub mod cart;

/// Domain errors
pub mod errors;

/// Hospital directory
pub mod hospitals;

/// Search, cap and ranking shared by the catalogs
pub mod listing;

/// Medicine catalog and stock
pub mod medicines;

/// Order aggregate
pub mod orders;

/// Uploaded prescriptions
pub mod prescriptions;

/// Reference data bootstrap
pub mod seed;

/// Document persistence
pub mod store;

pub use errors::Error;
