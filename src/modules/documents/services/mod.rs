mod document_service;
pub(crate) mod totals_engine;

pub use document_service::{DocumentService, SubmittedDocument};
pub use totals_engine::{LineUpdate, TotalsEngine, TotalsMode};
