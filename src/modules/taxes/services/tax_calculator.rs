use rust_decimal::Decimal;

use crate::core::error::AppError;
use crate::modules::taxes::models::TaxTreatment;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// TaxCalculator handles per-line tax math and the jurisdiction standard rate
///
/// Rates are percentages in [0, 100]. Results are returned unrounded; callers
/// round to the currency scale at aggregation or display.
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    standard_rate: Decimal,
}

impl TaxCalculator {
    pub fn new(standard_rate: Decimal) -> Self {
        Self { standard_rate }
    }

    /// The jurisdiction's standard VAT rate (UAE: 5)
    pub fn standard_rate(&self) -> Decimal {
        self.standard_rate
    }

    /// Calculate output tax for a line
    ///
    /// Reverse-charge lines carry no supplier tax regardless of the line
    /// rate; every other treatment applies the line's own rate to the
    /// post-discount amount.
    pub fn line_tax(
        &self,
        line_amount: Decimal,
        tax_rate: Decimal,
        treatment: TaxTreatment,
    ) -> Result<Decimal, AppError> {
        self.validate_tax_rate(tax_rate)?;

        if !treatment.charges_output_tax() {
            return Ok(Decimal::ZERO);
        }

        Ok(line_amount * tax_rate / HUNDRED)
    }

    /// Recoverable input VAT contributed by one purchase line
    ///
    /// Uses the jurisdiction standard rate, not the line's own rate:
    /// reverse-charge lines show zero supplier tax but are self-assessed and
    /// recovered at the standard rate. Zero-rated and exempt lines
    /// contribute nothing.
    pub fn recoverable_input_tax(
        &self,
        line_amount: Decimal,
        treatment: TaxTreatment,
    ) -> Decimal {
        if !treatment.input_tax_recoverable() {
            return Decimal::ZERO;
        }

        line_amount * self.standard_rate / HUNDRED
    }

    /// Validate a tax rate is a percentage in [0, 100] with at most
    /// 4 decimal places
    pub fn validate_tax_rate(&self, tax_rate: Decimal) -> Result<(), AppError> {
        if tax_rate < Decimal::ZERO {
            return Err(AppError::invalid_field(
                "tax_rate",
                "Tax rate cannot be negative",
            ));
        }

        if tax_rate > HUNDRED {
            return Err(AppError::invalid_field(
                "tax_rate",
                "Tax rate cannot exceed 100 percent",
            ));
        }

        if tax_rate.normalize().scale() > 4 {
            return Err(AppError::invalid_field(
                "tax_rate",
                "Tax rate cannot have more than 4 decimal places",
            ));
        }

        Ok(())
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new(Decimal::from(5))
    }
}
