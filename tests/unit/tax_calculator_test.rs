// Property-based tests for the tax calculator
//
// Covers the output-tax rule per treatment, the recoverable-input-VAT rule
// (standard rate, not line rate), and tax-rate validation bounds.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use vatbook::{TaxCalculator, TaxTreatment};

proptest! {
    /// Property: tax calculation is deterministic
    #[test]
    fn test_line_tax_is_deterministic(
        amount_cents in 0u64..=1_000_000_000u64,
        tax_rate_percent in 0u8..=100u8,
    ) {
        let calculator = TaxCalculator::default();
        let amount = Decimal::new(amount_cents as i64, 2);
        let rate = Decimal::from(tax_rate_percent);

        let first = calculator.line_tax(amount, rate, TaxTreatment::StandardRated).unwrap();
        let second = calculator.line_tax(amount, rate, TaxTreatment::StandardRated).unwrap();

        prop_assert_eq!(first, second);
    }

    /// Property: tax never exceeds the amount for rates up to 100%
    #[test]
    fn test_line_tax_bounded(
        amount_cents in 0u64..=1_000_000_000u64,
        tax_rate_percent in 0u8..=100u8,
    ) {
        let calculator = TaxCalculator::default();
        let amount = Decimal::new(amount_cents as i64, 2);
        let rate = Decimal::from(tax_rate_percent);

        let tax = calculator.line_tax(amount, rate, TaxTreatment::StandardRated).unwrap();

        prop_assert!(tax >= Decimal::ZERO);
        prop_assert!(tax <= amount);
    }

    /// Property: reverse charge yields zero output tax at any rate
    #[test]
    fn test_reverse_charge_never_charges_output_tax(
        amount_cents in 0u64..=1_000_000_000u64,
        tax_rate_percent in 0u8..=100u8,
    ) {
        let calculator = TaxCalculator::default();
        let amount = Decimal::new(amount_cents as i64, 2);
        let rate = Decimal::from(tax_rate_percent);

        let tax = calculator.line_tax(amount, rate, TaxTreatment::ReverseCharge).unwrap();

        prop_assert_eq!(tax, Decimal::ZERO);
    }

    /// Property: recovery uses the configured standard rate, not the line rate
    #[test]
    fn test_recovery_ignores_line_rate(
        amount_cents in 0u64..=1_000_000_000u64,
    ) {
        let calculator = TaxCalculator::new(dec!(5));
        let amount = Decimal::new(amount_cents as i64, 2);

        let standard = calculator.recoverable_input_tax(amount, TaxTreatment::StandardRated);
        let reverse = calculator.recoverable_input_tax(amount, TaxTreatment::ReverseCharge);

        prop_assert_eq!(standard, amount * dec!(5) / dec!(100));
        prop_assert_eq!(reverse, standard);
    }

    /// Property: zero-rated and exempt lines recover nothing
    #[test]
    fn test_no_recovery_outside_scope(
        amount_cents in 0u64..=1_000_000_000u64,
    ) {
        let calculator = TaxCalculator::default();
        let amount = Decimal::new(amount_cents as i64, 2);

        prop_assert_eq!(
            calculator.recoverable_input_tax(amount, TaxTreatment::ZeroRated),
            Decimal::ZERO
        );
        prop_assert_eq!(
            calculator.recoverable_input_tax(amount, TaxTreatment::Exempt),
            Decimal::ZERO
        );
    }
}

mod deterministic {
    use super::*;

    #[test]
    fn test_standard_rated_five_percent() {
        let calculator = TaxCalculator::default();
        let tax = calculator
            .line_tax(dec!(1000), dec!(5), TaxTreatment::StandardRated)
            .unwrap();
        assert_eq!(tax, dec!(50));
    }

    #[test]
    fn test_reverse_charge_recovers_at_standard_rate() {
        // Line rate is 0 but recovery still happens at the 5% standard rate
        let calculator = TaxCalculator::new(dec!(5));
        assert_eq!(
            calculator.line_tax(dec!(1000), dec!(0), TaxTreatment::ReverseCharge).unwrap(),
            dec!(0)
        );
        assert_eq!(
            calculator.recoverable_input_tax(dec!(1000), TaxTreatment::ReverseCharge),
            dec!(50)
        );
    }

    #[test]
    fn test_rate_validation_bounds() {
        let calculator = TaxCalculator::default();

        assert!(calculator.validate_tax_rate(dec!(0)).is_ok());
        assert!(calculator.validate_tax_rate(dec!(100)).is_ok());
        assert!(calculator.validate_tax_rate(dec!(-0.01)).is_err());
        assert!(calculator.validate_tax_rate(dec!(100.01)).is_err());
    }

    #[test]
    fn test_rate_validation_precision() {
        let calculator = TaxCalculator::default();

        assert!(calculator.validate_tax_rate(dec!(5.1234)).is_ok());
        assert!(calculator.validate_tax_rate(dec!(5.12345)).is_err());
    }

    #[test]
    fn test_invalid_rate_rejected_in_line_tax() {
        let calculator = TaxCalculator::default();
        assert!(calculator
            .line_tax(dec!(100), dec!(101), TaxTreatment::StandardRated)
            .is_err());
    }
}
