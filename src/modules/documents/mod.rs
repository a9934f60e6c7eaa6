pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Advisory, Document, DocumentKind, DocumentStatus, LineItem, LineItemUpdate};
pub use repositories::DocumentStore;
pub use services::{DocumentService, SubmittedDocument, TotalsEngine, TotalsMode};
