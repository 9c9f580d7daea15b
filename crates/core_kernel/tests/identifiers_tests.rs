//! Tests for identifiers and lenient payload decoding

use core_kernel::loose::{self, parse_norwegian_amount};
use core_kernel::{ClaimNumber, CustomerNumber, LooseAmount, PolicyNumber, ProductCode};
use rust_decimal_macros::dec;
use serde::Deserialize;

mod identifiers {
    use super::*;

    #[test]
    fn test_blank_identifier_is_empty() {
        assert!(CustomerNumber::new("   ").is_empty());
        assert!(!CustomerNumber::new("K-1").is_empty());
    }

    #[test]
    fn test_labels_name_upstream_fields() {
        assert_eq!(ClaimNumber::label(), "skadenummer");
        assert_eq!(PolicyNumber::label(), "polisenummer");
        assert_eq!(ProductCode::label(), "produktkode");
    }

    #[test]
    fn test_identifiers_order_lexically() {
        let mut codes = vec![ProductCode::new("HUS"), ProductCode::new("BIL")];
        codes.sort();
        assert_eq!(codes[0].as_str(), "BIL");
    }
}

mod amounts {
    use super::*;

    #[test]
    fn test_norwegian_formats() {
        assert_eq!(parse_norwegian_amount("1\u{a0}234,50"), Some(dec!(1234.50)));
        assert_eq!(parse_norwegian_amount("kr 750"), Some(dec!(750)));
        assert_eq!(parse_norwegian_amount("2500 NOK"), Some(dec!(2500)));
        assert_eq!(parse_norwegian_amount("12.5"), Some(dec!(12.5)));
        assert_eq!(parse_norwegian_amount("tolv"), None);
        assert_eq!(parse_norwegian_amount(""), None);
    }

    #[test]
    fn test_or_zero() {
        assert_eq!(LooseAmount::Missing.or_zero(), dec!(0));
        assert_eq!(LooseAmount::Malformed("x".into()).or_zero(), dec!(0));
        assert_eq!(LooseAmount::from(dec!(3)).or_zero(), dec!(3));
    }

    #[test]
    fn test_malformed_amount_serializes_raw_text() {
        let json = serde_json::to_value(LooseAmount::Malformed("ukjent".into())).unwrap();
        assert_eq!(json, "ukjent");
        assert!(serde_json::to_value(LooseAmount::Missing).unwrap().is_null());
    }
}

mod fields {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "loose::text")]
        number: Option<String>,
        #[serde(default, deserialize_with = "loose::flag")]
        open: Option<bool>,
    }

    #[test]
    fn test_open_flag_words() {
        let row: Row = serde_json::from_str(r#"{"number": 77, "open": "Avsluttet"}"#).unwrap();
        assert_eq!(row.number.as_deref(), Some("77"));
        assert_eq!(row.open, Some(false));
    }

    #[test]
    fn test_wrongly_typed_text_is_absent() {
        let row: Row = serde_json::from_str(r#"{"number": [1], "open": null}"#).unwrap();
        assert_eq!(row.number, None);
        assert_eq!(row.open, None);
    }
}
