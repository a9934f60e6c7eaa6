pub mod models;
pub mod services;

pub use models::TaxTreatment;
pub use services::TaxCalculator;
