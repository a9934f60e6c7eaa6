//! VAT document totals engine for UAE bookkeeping
//!
//! This library maintains the derived financial figures of bookkeeping
//! documents (tax invoices, purchase invoices, quotations, cash and bank
//! book entries): per-line amounts, output tax by VAT treatment, live and
//! committed document totals, and recoverable input VAT for purchase
//! documents. The computation itself is pure and synchronous; persistence
//! and counterparty lookup are trait seams implemented by the caller.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::config::{Config, TaxConfig};
pub use crate::core::{AppError, Currency, Result};
pub use crate::modules::documents::{
    Advisory, Document, DocumentKind, DocumentService, DocumentStatus, DocumentStore, LineItem,
    LineItemUpdate, SubmittedDocument, TotalsEngine, TotalsMode,
};
pub use crate::modules::parties::{PartyDirectory, PartyProfile};
pub use crate::modules::taxes::{TaxCalculator, TaxTreatment};
