use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use crate::core::{AppError, Currency, Result};
use crate::modules::documents::models::{Document, DocumentKind, DocumentStatus};
use crate::modules::documents::repositories::DocumentStore;
use crate::modules::documents::services::totals_engine::{TotalsEngine, TotalsMode};
use crate::modules::parties::repositories::PartyDirectory;

/// Final figures of a submitted document, computed over committed lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedDocument {
    /// Identifier assigned by the storage collaborator
    pub record_id: String,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    /// Recoverable input VAT; zero for non-purchase documents
    pub recoverable_input_tax: Decimal,
}

/// Orchestrates the totals engine against the storage and directory
/// collaborators: opens drafts for a counterparty and submits finalized
/// documents
pub struct DocumentService {
    engine: TotalsEngine,
    store: Arc<dyn DocumentStore>,
    directory: Arc<dyn PartyDirectory>,
}

impl DocumentService {
    pub fn new(
        engine: TotalsEngine,
        store: Arc<dyn DocumentStore>,
        directory: Arc<dyn PartyDirectory>,
    ) -> Self {
        Self {
            engine,
            store,
            directory,
        }
    }

    pub fn engine(&self) -> &TotalsEngine {
        &self.engine
    }

    /// Open a draft document for a counterparty
    ///
    /// The party's default tax treatment (from the directory) becomes the
    /// document's line default; the seed line is re-added so it picks the
    /// default up.
    pub async fn open_for_party(
        &self,
        kind: DocumentKind,
        currency: Currency,
        party_id: &str,
    ) -> Result<Document> {
        let party = self
            .directory
            .find_party(party_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Party {}", party_id)))?;

        let mut document = Document::new(kind, currency);
        document.tax_treatment_default = party.default_treatment;
        self.engine.add_line(&mut document, None)?;

        info!(
            document_id = %document.id,
            kind = %kind,
            party_id,
            "document opened"
        );
        Ok(document)
    }

    /// Finalize a draft and hand it to the storage collaborator
    ///
    /// Totals are committed-mode: draft lines with an empty description are
    /// dropped from the document before it is stored. A document with no
    /// committed line cannot be submitted.
    ///
    /// The caller's draft is finalized on a copy; it only takes on the
    /// submitted state once the store accepts it, so a storage failure
    /// leaves the draft intact, editable, and resubmittable.
    pub async fn submit(&self, document: &mut Document) -> Result<SubmittedDocument> {
        if !document.is_mutable() {
            return Err(AppError::validation(format!(
                "Document {} has already been submitted",
                document.id
            )));
        }

        let mut finalized = document.clone();
        finalized.items.retain(|item| item.is_committed());
        if finalized.items.is_empty() {
            return Err(AppError::validation(
                "Document must have at least one line with a description",
            ));
        }

        let subtotal = self.engine.subtotal(&finalized, TotalsMode::Committed);
        let tax_amount = self.engine.tax_amount(&finalized, TotalsMode::Committed);
        let total_amount = self.engine.total_amount(&finalized, TotalsMode::Committed);
        let recoverable_input_tax = self.engine.recoverable_input_tax(&finalized);

        finalized.status = DocumentStatus::Submitted;
        finalized.touch();

        let record_id = self.store.save(&finalized).await?;
        *document = finalized;

        info!(
            document_id = %document.id,
            record_id = %record_id,
            total = %document.currency.format_amount(total_amount),
            "document submitted"
        );

        Ok(SubmittedDocument {
            record_id,
            subtotal,
            tax_amount,
            total_amount,
            recoverable_input_tax,
        })
    }
}
