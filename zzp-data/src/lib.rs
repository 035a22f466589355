pub mod loader;
pub mod profile;
pub mod report;
pub mod request;

pub use loader::{TransactionLoadError, TransactionLoader};
pub use profile::{BusinessProfile, ProfileError};
pub use request::{ApiResponse, CalculateTaxRequest, handle_calculate_request};
