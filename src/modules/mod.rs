pub mod documents;
pub mod parties;
pub mod taxes;
