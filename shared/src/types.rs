//! Common types used across the platform

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A numeric form field that may arrive as a JSON number or as text.
///
/// HTML forms post everything as strings, while API clients usually send
/// numbers; both are accepted for ids, star ratings and the delivery radius.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NumericInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl NumericInput {
    /// Whole-number value, if the input represents one
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            NumericInput::Integer(n) => Some(*n),
            NumericInput::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            NumericInput::Float(_) => None,
            NumericInput::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Decimal value, if the input is numeric
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            NumericInput::Integer(n) => Some(Decimal::from(*n)),
            NumericInput::Float(f) => Decimal::try_from(*f).ok(),
            NumericInput::Text(s) => Decimal::from_str(s.trim()).ok(),
        }
    }

    /// True for an empty or whitespace-only text value
    pub fn is_blank(&self) -> bool {
        matches!(self, NumericInput::Text(s) if s.trim().is_empty())
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Integer(value)
    }
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        NumericInput::Integer(i64::from(value))
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_input_from_json() {
        let n: NumericInput = serde_json::from_str("3").unwrap();
        assert_eq!(n, NumericInput::Integer(3));

        let f: NumericInput = serde_json::from_str("2.5").unwrap();
        assert_eq!(f, NumericInput::Float(2.5));

        let s: NumericInput = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(s, NumericInput::Text("12".to_string()));
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(NumericInput::Integer(4).as_integer(), Some(4));
        assert_eq!(NumericInput::Float(4.0).as_integer(), Some(4));
        assert_eq!(NumericInput::Float(4.5).as_integer(), None);
        assert_eq!(NumericInput::from(" 7 ").as_integer(), Some(7));
        assert_eq!(NumericInput::from("seven").as_integer(), None);
    }

    #[test]
    fn test_as_decimal() {
        assert_eq!(NumericInput::from("12.5").as_decimal(), Some(Decimal::new(125, 1)));
        assert_eq!(NumericInput::Integer(10).as_decimal(), Some(Decimal::from(10)));
        assert_eq!(NumericInput::from("ten").as_decimal(), None);
    }

    #[test]
    fn test_is_blank() {
        assert!(NumericInput::from("   ").is_blank());
        assert!(!NumericInput::from("0").is_blank());
        assert!(!NumericInput::Integer(0).is_blank());
    }
}
