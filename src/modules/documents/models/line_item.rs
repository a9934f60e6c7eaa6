// A line item is one billable or quotable row of a document. The stored
// fields are what the user edits; line_amount, line_tax and line_total are
// derived and recomputed on every edit, never mutated independently.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::taxes::models::TaxTreatment;
use crate::modules::taxes::services::TaxCalculator;

/// Represents a single line item in a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique identifier for the line item
    pub id: Uuid,

    /// Description of the product or service (may be empty while drafting)
    pub description: String,

    /// Quantity of items (fractional quantities allowed)
    pub quantity: Decimal,

    /// Price per unit in the document currency
    pub unit_rate: Decimal,

    /// Flat discount amount subtracted from the line base before tax
    pub discount: Decimal,

    /// Tax rate as a percentage in [0, 100]
    pub tax_rate: Decimal,

    /// VAT treatment governing whether the rate is applied
    pub tax_treatment: TaxTreatment,

    /// Derived: max(0, quantity * unit_rate - discount), unrounded
    #[serde(skip_deserializing)]
    pub line_amount: Decimal,

    /// Derived: output tax on line_amount, unrounded
    #[serde(skip_deserializing)]
    pub line_tax: Decimal,

    /// Derived: line_amount + line_tax, unrounded
    #[serde(skip_deserializing)]
    pub line_total: Decimal,
}

/// Typed field update for a line item
///
/// Description updates do not touch the derived fields; every other
/// variant triggers a recompute of the line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineItemUpdate {
    Description(String),
    Quantity(Decimal),
    UnitRate(Decimal),
    Discount(Decimal),
    TaxRate(Decimal),
    TaxTreatment(TaxTreatment),
}

impl LineItemUpdate {
    /// Name of the field this update targets, for error reporting
    pub fn field_name(&self) -> &'static str {
        match self {
            LineItemUpdate::Description(_) => "description",
            LineItemUpdate::Quantity(_) => "quantity",
            LineItemUpdate::UnitRate(_) => "unit_rate",
            LineItemUpdate::Discount(_) => "discount",
            LineItemUpdate::TaxRate(_) => "tax_rate",
            LineItemUpdate::TaxTreatment(_) => "tax_treatment",
        }
    }
}

/// Non-fatal condition raised by a line edit, for the UI to surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Advisory {
    /// The discount exceeds quantity * unit_rate; line_amount was clamped to 0
    DiscountExceedsAmount,
}

impl LineItem {
    /// Create a fresh line with form defaults: quantity 1, monetary fields
    /// zero, the given default rate and treatment
    pub fn new(tax_rate: Decimal, tax_treatment: TaxTreatment) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: String::new(),
            quantity: Decimal::ONE,
            unit_rate: Decimal::ZERO,
            discount: Decimal::ZERO,
            tax_rate,
            tax_treatment,
            line_amount: Decimal::ZERO,
            line_tax: Decimal::ZERO,
            line_total: Decimal::ZERO,
        }
    }

    /// Whether this line counts toward committed (submit-time) totals
    ///
    /// Draft lines with an empty description are excluded at submit time but
    /// still feed the live running totals on screen.
    pub fn is_committed(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// The undiscounted base amount, quantity * unit_rate
    pub fn base_amount(&self) -> Decimal {
        self.quantity * self.unit_rate
    }

    /// Whether the configured discount exceeds the base amount
    pub fn discount_exceeds_base(&self) -> bool {
        self.discount > self.base_amount()
    }

    /// Recompute the derived fields from the stored fields
    ///
    /// line_amount clamps at zero when the discount exceeds the base amount.
    /// Values stay unrounded; rounding happens at aggregation/display only.
    /// An out-of-range `tax_rate` (the fields are public, so a caller can
    /// set one directly) is an error, and the derived fields keep their
    /// last valid values.
    pub fn recompute(&mut self, calculator: &TaxCalculator) -> crate::core::Result<()> {
        let base = self.base_amount();
        let line_amount = (base - self.discount).max(Decimal::ZERO);
        let line_tax = calculator.line_tax(line_amount, self.tax_rate, self.tax_treatment)?;

        self.line_amount = line_amount;
        self.line_tax = line_tax;
        self.line_total = line_amount + line_tax;
        Ok(())
    }
}
