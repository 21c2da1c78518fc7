//! Comprehensive unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, rounding, currency
//! resolution, display formatting, and rates.

use core_kernel::{format_grouped, format_in_currency, Currency, Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050, Currency::ZAR);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_from_minor_handles_jpy_no_decimals() {
        let m = Money::from_minor(10000, Currency::JPY);
        assert_eq!(m.amount(), dec!(10000));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Money::new(dec!(10), Currency::USD).is_positive());
        assert!(Money::new(dec!(-10), Currency::USD).is_negative());
        assert!(!Money::zero(Currency::USD).is_positive());
        assert!(!Money::zero(Currency::USD).is_negative());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_addition_and_subtraction() {
        let a = Money::new(dec!(1250.75), Currency::USD);
        let b = Money::new(dec!(250.25), Currency::USD);

        assert_eq!((a + b).amount(), dec!(1501.00));
        assert_eq!((a - b).amount(), dec!(1000.50));
    }

    #[test]
    fn test_checked_add_rejects_currency_mismatch() {
        let usd = Money::new(dec!(100), Currency::USD);
        let zar = Money::new(dec!(100), Currency::ZAR);

        assert!(matches!(
            usd.checked_add(&zar),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
        assert!(matches!(
            usd.checked_sub(&zar),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_scalar_multiplication() {
        let m = Money::new(dec!(12000), Currency::USD);
        assert_eq!(m.multiply(dec!(0.02)).amount(), dec!(240.00));
        assert_eq!((m * dec!(0.01)).amount(), dec!(120.00));
    }

    #[test]
    fn test_division_by_zero_is_rejected() {
        let m = Money::new(dec!(100), Currency::USD);
        assert!(matches!(
            m.divide(Decimal::ZERO),
            Err(MoneyError::DivisionByZero)
        ));
    }

    #[test]
    fn test_negation() {
        let m = Money::new(dec!(55.55), Currency::USD);
        assert_eq!((-m).amount(), dec!(-55.55));
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_to_currency_standard_places() {
        let m = Money::new(dec!(100.456), Currency::USD);
        assert_eq!(m.round_to_currency().amount(), dec!(100.46));
    }

    #[test]
    fn test_round_to_currency_jpy_whole_units() {
        let m = Money::new(dec!(100.456), Currency::JPY);
        assert_eq!(m.round_to_currency().amount(), dec!(100));
    }
}

mod currency_resolution {
    use super::*;

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("Zar"), Some(Currency::ZAR));
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(Currency::from_code("XTS"), None);
        assert_eq!(Currency::from_code(""), None);
    }

    #[test]
    fn test_resolve_falls_back_to_usd() {
        assert_eq!(Currency::resolve("GBP"), Currency::GBP);
        assert_eq!(Currency::resolve("not-a-code"), Currency::USD);
    }

    #[test]
    fn test_code_round_trips() {
        for currency in [
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::JPY,
            Currency::ZAR,
            Currency::CHF,
            Currency::AUD,
            Currency::CAD,
            Currency::INR,
            Currency::SGD,
        ] {
            assert_eq!(Currency::from_code(currency.code()), Some(currency));
        }
    }
}

mod display {
    use super::*;

    #[test]
    fn test_grouped_formatting_inserts_separators() {
        assert_eq!(format_grouped(dec!(1234567.891), 2), "1,234,567.89");
        assert_eq!(format_grouped(dec!(100), 2), "100.00");
        assert_eq!(format_grouped(dec!(-9876.5), 2), "-9,876.50");
    }

    #[test]
    fn test_money_display_uses_symbol_and_grouping() {
        assert_eq!(
            Money::new(dec!(12000), Currency::ZAR).to_string(),
            "R 12,000.00"
        );
        assert_eq!(
            Money::new(dec!(10000), Currency::JPY).to_string(),
            "¥ 10,000"
        );
    }

    #[test]
    fn test_format_in_currency_falls_back_for_display_only() {
        assert_eq!(format_in_currency(dec!(1500), "EUR"), "€ 1,500.00");
        assert_eq!(format_in_currency(dec!(1500), "bogus"), "$ 1,500.00");
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_rate_construction() {
        assert_eq!(Rate::new(dec!(0.12)).as_percentage(), dec!(12));
        assert_eq!(Rate::from_percentage(dec!(12)).as_decimal(), dec!(0.12));
    }

    #[test]
    fn test_monthly_rate_is_one_twelfth() {
        assert_eq!(Rate::new(dec!(0.12)).monthly(), dec!(0.01));
        assert_eq!(Rate::new(dec!(0)).monthly(), dec!(0));
    }

    #[test]
    fn test_rate_applies_to_money() {
        let principal = Money::new(dec!(12000), Currency::USD);
        let fee = Rate::new(dec!(0.02)).apply(&principal);
        assert_eq!(fee.amount(), dec!(240.00));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::new(dec!(0.1793)).to_string(), "17.93%");
    }
}
