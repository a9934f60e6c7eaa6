// A document is the aggregate the totals engine operates on: an ordered
// collection of line items plus the document-level flags that steer tax
// defaults. Aggregate totals are never stored on the document; they are
// always recomputed by the engine from the lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::line_item::LineItem;
use crate::core::Currency;
use crate::modules::taxes::models::TaxTreatment;

/// The kind of bookkeeping document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Outgoing VAT invoice to a customer
    TaxInvoice,

    /// Incoming invoice from a supplier
    PurchaseInvoice,

    /// Quotation offered to a customer (no tax point yet)
    SalesQuotation,

    /// Cash book receipt or payment entry
    CashBookEntry,

    /// Bank book transaction entry
    BankTransaction,
}

impl DocumentKind {
    /// Purchase-side documents carry recoverable input VAT
    pub fn is_purchase(&self) -> bool {
        matches!(self, DocumentKind::PurchaseInvoice)
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::TaxInvoice => write!(f, "tax_invoice"),
            DocumentKind::PurchaseInvoice => write!(f, "purchase_invoice"),
            DocumentKind::SalesQuotation => write!(f, "sales_quotation"),
            DocumentKind::CashBookEntry => write!(f, "cash_book_entry"),
            DocumentKind::BankTransaction => write!(f, "bank_transaction"),
        }
    }
}

/// Document lifecycle
///
/// Drafts are freely editable; once submitted to the storage collaborator a
/// document is frozen and engine mutators reject further edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Draft,
    Submitted,
}

impl Default for DocumentStatus {
    fn default() -> Self {
        DocumentStatus::Draft
    }
}

/// A bookkeeping document: ordered line items plus tax-default flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document ID
    pub id: Uuid,

    /// What kind of document this is
    pub kind: DocumentKind,

    /// Currency for the entire document
    pub currency: Currency,

    /// Ordered line items; the engine keeps at least one present
    pub items: Vec<LineItem>,

    /// Purchase documents only: supplies fall under the reverse-charge
    /// mechanism unless a line says otherwise
    pub reverse_charge_applicable: bool,

    /// Treatment applied to new lines when set (usually sourced from the
    /// counterparty directory)
    pub tax_treatment_default: Option<TaxTreatment>,

    /// Current lifecycle status
    #[serde(default)]
    pub status: DocumentStatus,

    /// When the document was created
    pub created_at: DateTime<Utc>,

    /// When the document was last edited
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Create an empty draft document; the engine seeds the first line
    pub fn new(kind: DocumentKind, currency: Currency) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            currency,
            items: Vec::new(),
            reverse_charge_applicable: false,
            tax_treatment_default: None,
            status: DocumentStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the document can still be edited
    pub fn is_mutable(&self) -> bool {
        self.status == DocumentStatus::Draft
    }

    /// Treatment for new lines: explicit default first, then the
    /// reverse-charge flag on purchase documents, then standard-rated
    pub fn default_treatment(&self) -> TaxTreatment {
        if let Some(treatment) = self.tax_treatment_default {
            return treatment;
        }

        if self.kind.is_purchase() && self.reverse_charge_applicable {
            return TaxTreatment::ReverseCharge;
        }

        TaxTreatment::StandardRated
    }

    /// Find a line by id
    pub fn find_line(&self, line_id: Uuid) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == line_id)
    }

    pub(crate) fn find_line_mut(&mut self, line_id: Uuid) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id == line_id)
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
