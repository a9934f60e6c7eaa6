// Property-based tests for per-line derived figures
//
// Properties tested:
// 1. line_total = line_amount + line_tax after any recompute
// 2. line_amount is never negative, however large the discount
// 3. reverse charge forces line_tax to zero regardless of the line rate
// 4. derived fields match the arithmetic definition for valid inputs

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use vatbook::{LineItem, TaxCalculator, TaxTreatment};

fn line(
    quantity: Decimal,
    unit_rate: Decimal,
    discount: Decimal,
    tax_rate: Decimal,
    treatment: TaxTreatment,
) -> LineItem {
    let calculator = TaxCalculator::default();
    let mut line = LineItem::new(tax_rate, treatment);
    line.quantity = quantity;
    line.unit_rate = unit_rate;
    line.discount = discount;
    line.recompute(&calculator).expect("valid line inputs");
    line
}

proptest! {
    /// Property: line_total always equals line_amount + line_tax
    #[test]
    fn test_line_total_identity(
        quantity_cents in 0u64..=1_000_000u64,
        rate_cents in 0u64..=10_000_000u64,
        discount_cents in 0u64..=10_000_000u64,
        tax_rate_percent in 0u8..=100u8,
    ) {
        let item = line(
            Decimal::new(quantity_cents as i64, 2),
            Decimal::new(rate_cents as i64, 2),
            Decimal::new(discount_cents as i64, 2),
            Decimal::from(tax_rate_percent),
            TaxTreatment::StandardRated,
        );

        prop_assert_eq!(item.line_total, item.line_amount + item.line_tax);
    }

    /// Property: line_amount never goes negative, whatever the discount
    #[test]
    fn test_line_amount_non_negative(
        quantity_cents in 0u64..=1_000_000u64,
        rate_cents in 0u64..=10_000_000u64,
        discount_cents in 0u64..=100_000_000u64,
    ) {
        let item = line(
            Decimal::new(quantity_cents as i64, 2),
            Decimal::new(rate_cents as i64, 2),
            Decimal::new(discount_cents as i64, 2),
            dec!(5),
            TaxTreatment::StandardRated,
        );

        prop_assert!(item.line_amount >= Decimal::ZERO,
            "line_amount went negative: {}", item.line_amount);
        prop_assert!(item.line_tax >= Decimal::ZERO);
        prop_assert!(item.line_total >= Decimal::ZERO);
    }

    /// Property: reverse-charge lines carry zero output tax at any rate
    #[test]
    fn test_reverse_charge_zero_tax(
        quantity_cents in 0u64..=1_000_000u64,
        rate_cents in 0u64..=10_000_000u64,
        tax_rate_percent in 0u8..=100u8,
    ) {
        let item = line(
            Decimal::new(quantity_cents as i64, 2),
            Decimal::new(rate_cents as i64, 2),
            Decimal::ZERO,
            Decimal::from(tax_rate_percent),
            TaxTreatment::ReverseCharge,
        );

        prop_assert_eq!(item.line_tax, Decimal::ZERO);
        prop_assert_eq!(item.line_total, item.line_amount);
    }

    /// Property: without a discount the derived fields match the arithmetic
    #[test]
    fn test_line_arithmetic(
        quantity in 1u32..=10_000u32,
        rate_cents in 0u64..=10_000_000u64,
        tax_rate_percent in 0u8..=100u8,
    ) {
        let quantity = Decimal::from(quantity);
        let unit_rate = Decimal::new(rate_cents as i64, 2);
        let tax_rate = Decimal::from(tax_rate_percent);

        let item = line(quantity, unit_rate, Decimal::ZERO, tax_rate, TaxTreatment::StandardRated);

        let expected_amount = quantity * unit_rate;
        prop_assert_eq!(item.line_amount, expected_amount);
        prop_assert_eq!(item.line_tax, expected_amount * tax_rate / dec!(100));
    }
}

mod deterministic {
    use super::*;

    #[test]
    fn test_purchase_invoice_worked_example() {
        // 100 units at 50.00, 5% standard rate
        let item = line(dec!(100), dec!(50), dec!(0), dec!(5), TaxTreatment::StandardRated);

        assert_eq!(item.line_amount, dec!(5000));
        assert_eq!(item.line_tax, dec!(250));
        assert_eq!(item.line_total, dec!(5250));
    }

    #[test]
    fn test_discount_larger_than_base_clamps_to_zero() {
        let item = line(dec!(1), dec!(1000), dec!(1200), dec!(5), TaxTreatment::StandardRated);

        assert!(item.discount_exceeds_base());
        assert_eq!(item.line_amount, dec!(0));
        assert_eq!(item.line_tax, dec!(0));
        assert_eq!(item.line_total, dec!(0));
    }

    #[test]
    fn test_fractional_quantity() {
        let item = line(dec!(2.5), dec!(40), dec!(0), dec!(5), TaxTreatment::StandardRated);

        assert_eq!(item.line_amount, dec!(100));
        assert_eq!(item.line_tax, dec!(5));
    }

    #[test]
    fn test_zero_rated_line_with_zero_rate() {
        let item = line(dec!(3), dec!(200), dec!(0), dec!(0), TaxTreatment::ZeroRated);

        assert_eq!(item.line_amount, dec!(600));
        assert_eq!(item.line_tax, dec!(0));
        assert_eq!(item.line_total, dec!(600));
    }

    #[test]
    fn test_derived_fields_stay_unrounded() {
        // 3 * 33.333 = 99.999; rounding is deferred to aggregation/display
        let item = line(dec!(3), dec!(33.333), dec!(0), dec!(5), TaxTreatment::StandardRated);

        assert_eq!(item.line_amount, dec!(99.999));
        assert_eq!(item.line_tax, dec!(4.99995));
    }
}
