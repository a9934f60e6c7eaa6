// The totals engine maintains the derived figures of a document while the
// user edits it: add/insert/remove/update lines, live vs committed aggregate
// totals, and recoverable input VAT for purchase documents. It performs no
// I/O and assumes exclusive access to the document it is handed.

use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::{AppError, Currency, Result};
use crate::modules::documents::models::{
    Advisory, Document, DocumentKind, LineItem, LineItemUpdate,
};
use crate::modules::taxes::services::TaxCalculator;

/// Which lines feed an aggregate total
///
/// On-screen running totals cover every line so the figure moves as soon as
/// an amount is typed; submit-time totals skip draft lines whose description
/// is still empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalsMode {
    /// All lines, including empty-description drafts
    Live,
    /// Only lines with a non-empty description
    Committed,
}

/// Outcome of a line edit
#[derive(Debug, Clone)]
pub struct LineUpdate {
    /// The line after the edit, derived fields recomputed
    pub line: LineItem,
    /// Non-fatal condition for the UI to surface, if any
    pub advisory: Option<Advisory>,
}

/// Pure, synchronous totals engine over a [`Document`]
#[derive(Debug, Clone, Default)]
pub struct TotalsEngine {
    calculator: TaxCalculator,
}

impl TotalsEngine {
    pub fn new(calculator: TaxCalculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &TaxCalculator {
        &self.calculator
    }

    /// Open a fresh draft document seeded with one default line, the way a
    /// form opens with a single editable row
    pub fn open(&self, kind: DocumentKind, currency: Currency) -> Document {
        let mut document = Document::new(kind, currency);
        // A fresh draft is always mutable; seeding only fails if the
        // configured standard rate is out of range
        let _ = self.add_line(&mut document, None);
        document
    }

    /// Append a new line, or insert it after the given index
    ///
    /// Defaults: quantity 1, monetary fields zero, the jurisdiction standard
    /// rate, and the document's default treatment. Returns a copy of the
    /// created line so the caller can keep its id.
    pub fn add_line(&self, document: &mut Document, after: Option<usize>) -> Result<LineItem> {
        self.ensure_mutable(document)?;

        let mut line = LineItem::new(self.calculator.standard_rate(), document.default_treatment());
        line.recompute(&self.calculator)?;

        let position = match after {
            Some(index) if index + 1 < document.items.len() => index + 1,
            _ => document.items.len(),
        };
        document.items.insert(position, line.clone());
        document.touch();

        debug!(document_id = %document.id, line_id = %line.id, position, "line added");
        Ok(line)
    }

    /// Remove a line by id
    ///
    /// Forms always display at least one editable line, so removing the last
    /// remaining line is a no-op, as is removing an unknown id. Returns
    /// whether a line was actually removed.
    pub fn remove_line(&self, document: &mut Document, line_id: Uuid) -> Result<bool> {
        self.ensure_mutable(document)?;

        if document.items.len() <= 1 {
            debug!(document_id = %document.id, "remove skipped, last line is retained");
            return Ok(false);
        }

        let before = document.items.len();
        document.items.retain(|item| item.id != line_id);
        let removed = document.items.len() < before;
        if removed {
            document.touch();
        }

        Ok(removed)
    }

    /// Apply a typed field update to a line and recompute its derived fields
    ///
    /// Invalid values (negative quantity/rate/discount, out-of-range tax
    /// rate) are rejected before anything is mutated, so the prior value
    /// stays in place. A discount larger than the line base is accepted but
    /// clamps the line amount to zero and raises an advisory.
    pub fn update_line(
        &self,
        document: &mut Document,
        line_id: Uuid,
        update: LineItemUpdate,
    ) -> Result<LineUpdate> {
        self.ensure_mutable(document)?;
        self.validate_update(&update)?;

        let line = document
            .find_line_mut(line_id)
            .ok_or_else(|| AppError::not_found(format!("Line {}", line_id)))?;

        let recompute = !matches!(update, LineItemUpdate::Description(_));
        match update {
            LineItemUpdate::Description(value) => line.description = value,
            LineItemUpdate::Quantity(value) => line.quantity = value,
            LineItemUpdate::UnitRate(value) => line.unit_rate = value,
            LineItemUpdate::Discount(value) => line.discount = value,
            LineItemUpdate::TaxRate(value) => line.tax_rate = value,
            LineItemUpdate::TaxTreatment(value) => line.tax_treatment = value,
        }

        if recompute {
            // Cannot fail: the incoming value was validated above and the
            // stored rate was validated when it was set
            line.recompute(&self.calculator)?;
        }

        let advisory = if recompute && line.discount_exceeds_base() {
            warn!(
                line_id = %line.id,
                discount = %line.discount,
                base = %line.base_amount(),
                "discount exceeds line base amount, line amount clamped to zero"
            );
            Some(Advisory::DiscountExceedsAmount)
        } else {
            None
        };

        let updated = LineUpdate {
            line: line.clone(),
            advisory,
        };
        document.touch();

        Ok(updated)
    }

    /// Sum of line amounts over the lines selected by `mode`, rounded to the
    /// document currency scale
    pub fn subtotal(&self, document: &Document, mode: TotalsMode) -> Decimal {
        let raw: Decimal = self
            .included_lines(document, mode)
            .map(|item| item.line_amount)
            .sum();

        document.currency.round(raw)
    }

    /// Sum of line taxes over the lines selected by `mode`, rounded to the
    /// document currency scale
    pub fn tax_amount(&self, document: &Document, mode: TotalsMode) -> Decimal {
        let raw: Decimal = self
            .included_lines(document, mode)
            .map(|item| item.line_tax)
            .sum();

        document.currency.round(raw)
    }

    /// Grand total: subtotal plus tax for the same mode
    pub fn total_amount(&self, document: &Document, mode: TotalsMode) -> Decimal {
        self.subtotal(document, mode) + self.tax_amount(document, mode)
    }

    /// Recoverable input VAT for purchase documents
    ///
    /// Standard-rated and reverse-charge lines recover at the jurisdiction
    /// standard rate (not the line rate: reverse-charge lines carry zero
    /// supplier tax but are self-assessed). Zero-rated and exempt lines
    /// contribute nothing, and non-purchase documents recover nothing.
    pub fn recoverable_input_tax(&self, document: &Document) -> Decimal {
        if !document.kind.is_purchase() {
            return Decimal::ZERO;
        }

        let raw: Decimal = document
            .items
            .iter()
            .map(|item| {
                self.calculator
                    .recoverable_input_tax(item.line_amount, item.tax_treatment)
            })
            .sum();

        document.currency.round(raw)
    }

    fn included_lines<'a>(
        &self,
        document: &'a Document,
        mode: TotalsMode,
    ) -> impl Iterator<Item = &'a LineItem> {
        document
            .items
            .iter()
            .filter(move |item| mode == TotalsMode::Live || item.is_committed())
    }

    fn ensure_mutable(&self, document: &Document) -> Result<()> {
        if !document.is_mutable() {
            return Err(AppError::validation(format!(
                "Document {} has been submitted and can no longer be edited",
                document.id
            )));
        }

        Ok(())
    }

    fn validate_update(&self, update: &LineItemUpdate) -> Result<()> {
        match update {
            LineItemUpdate::Quantity(value)
            | LineItemUpdate::UnitRate(value)
            | LineItemUpdate::Discount(value) => {
                if *value < Decimal::ZERO {
                    return Err(AppError::invalid_field(
                        update.field_name(),
                        format!("must be non-negative, got {}", value),
                    ));
                }
            }
            LineItemUpdate::TaxRate(value) => {
                self.calculator.validate_tax_rate(*value)?;
            }
            LineItemUpdate::Description(_) | LineItemUpdate::TaxTreatment(_) => {}
        }

        Ok(())
    }
}
