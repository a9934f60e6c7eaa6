pub mod models;
pub mod repositories;

pub use models::PartyProfile;
pub use repositories::PartyDirectory;
