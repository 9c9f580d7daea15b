//! Tests for kroner amounts

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_nok_defaults() {
        assert_eq!(Money::default(), Money::zero(Currency::NOK));
        assert_eq!(Money::nok(dec!(1)).currency(), Currency::NOK);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::nok(dec!(100.123456789));
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Money::nok(dec!(-1)).is_negative());
        assert!(Money::nok(dec!(1)).is_positive());
        assert!(!Money::nok(dec!(0)).is_positive());
        assert!(!Money::nok(dec!(0)).is_negative());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_recovery_reduces_cost() {
        let gross = Money::nok(dec!(42000));
        let recovery = Money::nok(dec!(-12000));
        assert_eq!((gross + recovery).amount(), dec!(30000));
    }

    #[test]
    fn test_divide_by_zero_is_an_error() {
        assert_eq!(
            Money::nok(dec!(10)).divide(Decimal::ZERO),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_foreign_currency_is_not_summed() {
        let amounts = [Money::nok(dec!(10)), Money::new(dec!(5), Currency::SEK)];
        assert!(matches!(
            Money::try_sum(Currency::NOK, &amounts),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_share_of_premium() {
        let annual = Money::nok(dec!(12000));
        let share = annual.multiply(dec!(2) / dec!(3));
        assert_eq!(share.amount(), dec!(8000.0000));
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_display_uses_currency_symbol() {
        assert_eq!(Money::nok(dec!(1500.5)).to_string(), "kr 1500.50");
        assert_eq!(Money::new(dec!(2), Currency::EUR).to_string(), "€ 2.00");
    }

    #[test]
    fn test_serializes_with_currency_code() {
        let json = serde_json::to_value(Money::nok(dec!(10))).unwrap();
        assert_eq!(json["currency"], "NOK");
    }
}
