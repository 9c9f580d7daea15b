//! Lenient field decoding for upstream payloads
//!
//! The customer payload is assembled by several upstream systems and is not
//! consistently typed: amounts arrive as JSON numbers, as strings with
//! Norwegian formatting ("12 345,50") or not at all, identifiers arrive as
//! numbers or strings, and flags as booleans, "J"/"N" or 0/1.
//!
//! Only raw input types use these helpers. Canonical domain types carry
//! proper types and never see the loose shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::str::FromStr;

/// An amount as supplied by an upstream system
///
/// Keeps the difference between "not supplied" and "supplied but not a
/// number" so that the latter can be reported instead of silently counted
/// as zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LooseAmount {
    #[default]
    Missing,
    Amount(Decimal),
    Malformed(String),
}

impl LooseAmount {
    /// Returns the parsed amount, if any
    pub fn value(&self) -> Option<Decimal> {
        match self {
            LooseAmount::Amount(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the parsed amount, treating missing and malformed as zero
    pub fn or_zero(&self) -> Decimal {
        self.value().unwrap_or(Decimal::ZERO)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, LooseAmount::Missing)
    }

    /// Returns the raw text of a malformed amount
    pub fn malformed(&self) -> Option<&str> {
        match self {
            LooseAmount::Malformed(raw) => Some(raw),
            _ => None,
        }
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::Null => LooseAmount::Missing,
            Value::Number(n) => {
                let text = n.to_string();
                Decimal::from_str(&text)
                    .or_else(|_| Decimal::from_scientific(&text))
                    .map(LooseAmount::Amount)
                    .unwrap_or(LooseAmount::Malformed(text))
            }
            Value::String(s) => {
                if s.trim().is_empty() {
                    return LooseAmount::Missing;
                }
                parse_norwegian_amount(&s)
                    .map(LooseAmount::Amount)
                    .unwrap_or(LooseAmount::Malformed(s))
            }
            other => LooseAmount::Malformed(other.to_string()),
        }
    }
}

impl From<Decimal> for LooseAmount {
    fn from(value: Decimal) -> Self {
        LooseAmount::Amount(value)
    }
}

impl<'de> Deserialize<'de> for LooseAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(LooseAmount::from_value)
    }
}

impl Serialize for LooseAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LooseAmount::Missing => serializer.serialize_none(),
            LooseAmount::Amount(value) => Serialize::serialize(value, serializer),
            LooseAmount::Malformed(raw) => serializer.serialize_str(raw),
        }
    }
}

/// Parses an amount written the Norwegian way
///
/// Accepts space / no-break-space thousands separators, a decimal comma,
/// `.` as thousands separator when a decimal comma is present, and an
/// optional `kr` / `NOK` marker.
pub fn parse_norwegian_amount(raw: &str) -> Option<Decimal> {
    let mut cleaned: String = raw
        .trim()
        .trim_end_matches("NOK")
        .trim_end_matches("kr")
        .trim_start_matches("kr")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}' && *c != '\u{202f}')
        .collect();

    if cleaned.contains(',') {
        cleaned = cleaned.replace('.', "").replace(',', ".");
    }
    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}

/// Decodes an optional free-text field that may arrive as a number
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Decodes a yes/no flag
///
/// Unknown spellings decode as `None` rather than failing the payload.
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0),
        Some(Value::String(s)) => parse_flag(&s),
        _ => None,
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "j" | "ja" | "y" | "yes" | "true" | "1" | "åpen" | "apen" => Some(true),
        "n" | "nei" | "no" | "false" | "0" | "lukket" | "avsluttet" => Some(false),
        _ => None,
    }
}

/// Decodes a non-negative count that may arrive as a string
///
/// Anything that is not a non-negative whole number decodes as zero.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()).unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default)]
        amount: LooseAmount,
        #[serde(default, deserialize_with = "text")]
        id: Option<String>,
        #[serde(default, deserialize_with = "flag")]
        open: Option<bool>,
        #[serde(default, deserialize_with = "count")]
        claims: u32,
    }

    fn sample(json: &str) -> Sample {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_amount_from_number_and_string() {
        assert_eq!(sample(r#"{"amount": 1250.5}"#).amount, LooseAmount::Amount(dec!(1250.5)));
        assert_eq!(sample(r#"{"amount": "12 345,50"}"#).amount, LooseAmount::Amount(dec!(12345.50)));
        assert_eq!(sample(r#"{"amount": "1.234,00 kr"}"#).amount, LooseAmount::Amount(dec!(1234.00)));
        assert_eq!(sample(r#"{"amount": "-500"}"#).amount, LooseAmount::Amount(dec!(-500)));
    }

    #[test]
    fn test_amount_missing_vs_malformed() {
        assert_eq!(sample(r#"{}"#).amount, LooseAmount::Missing);
        assert_eq!(sample(r#"{"amount": null}"#).amount, LooseAmount::Missing);
        assert_eq!(sample(r#"{"amount": "  "}"#).amount, LooseAmount::Missing);
        assert_eq!(
            sample(r#"{"amount": "ukjent"}"#).amount,
            LooseAmount::Malformed("ukjent".to_string())
        );
        assert!(sample(r#"{"amount": true}"#).amount.malformed().is_some());
    }

    #[test]
    fn test_amount_serializes_as_decimal_text() {
        let amount = LooseAmount::Amount(dec!(1250.50));
        let json = serde_json::to_value(&amount).unwrap();
        assert_eq!(json, "1250.50");

        let back: LooseAmount = serde_json::from_value(json).unwrap();
        assert_eq!(back, amount);
    }

    #[test]
    fn test_text_accepts_numbers() {
        assert_eq!(sample(r#"{"id": 1234567}"#).id.as_deref(), Some("1234567"));
        assert_eq!(sample(r#"{"id": " SK-1 "}"#).id.as_deref(), Some("SK-1"));
        assert_eq!(sample(r#"{"id": ""}"#).id, None);
    }

    #[test]
    fn test_flag_spellings() {
        assert_eq!(sample(r#"{"open": true}"#).open, Some(true));
        assert_eq!(sample(r#"{"open": "J"}"#).open, Some(true));
        assert_eq!(sample(r#"{"open": "nei"}"#).open, Some(false));
        assert_eq!(sample(r#"{"open": 0}"#).open, Some(false));
        assert_eq!(sample(r#"{"open": "kanskje"}"#).open, None);
    }

    #[test]
    fn test_count() {
        assert_eq!(sample(r#"{"claims": 4}"#).claims, 4);
        assert_eq!(sample(r#"{"claims": "7"}"#).claims, 7);
        assert_eq!(sample(r#"{"claims": -1}"#).claims, 0);
        assert_eq!(sample(r#"{}"#).claims, 0);
    }
}
