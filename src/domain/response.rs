use serde::{Serialize, Serializer};

/// The `Amount` element of a gateway reply after numeric coercion.
///
/// Text that does not start with a base-10 integer becomes `NotANumber`
/// instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    Value(i64),
    NotANumber,
}

impl Amount {
    /// Parses the leading integer of `text`: optional leading whitespace, an
    /// optional sign, then as many ASCII digits as follow. Trailing garbage is
    /// ignored; no digits at all, or an `i64` overflow, is `NotANumber`.
    ///
    /// Digits outside `i64::MIN..=i64::MAX` are `NotANumber`. They are never
    /// clamped or rounded to a nearby float.
    pub fn parse(text: &str) -> Self {
        let text = text.trim_start();
        let (negative, rest) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return Self::NotANumber;
        }

        let digits = &rest[..digits_len];
        let parsed = if negative {
            format!("-{digits}").parse::<i64>()
        } else {
            digits.parse::<i64>()
        };
        parsed.map(Self::Value).unwrap_or(Self::NotANumber)
    }

    pub fn value(self) -> Option<i64> {
        match self {
            Self::Value(v) => Some(v),
            Self::NotANumber => None,
        }
    }

    pub fn is_nan(self) -> bool {
        self == Self::NotANumber
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(v) => serializer.serialize_i64(*v),
            Self::NotANumber => serializer.serialize_none(),
        }
    }
}

/// Decoded gateway reply.
///
/// Elements missing from the reply are `None`; empty elements are `Some("")`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Desc")]
    pub description: Option<String>,
    #[serde(rename = "Rvg2c")]
    pub rvg2c: Option<String>,
    #[serde(rename = "Dcvc")]
    pub dcvc: Option<String>,
    /// Gateway transaction number.
    #[serde(rename = "SmilePayNO")]
    pub smilepay_no: Option<String>,
    #[serde(rename = "Data_id")]
    pub order_id: Option<String>,
    #[serde(rename = "Amount")]
    pub amount: Amount,
    #[serde(rename = "AtmBankNo")]
    pub atm_bank_no: Option<String>,
    /// ATM transaction serial.
    #[serde(rename = "AtmNo")]
    pub atm_no: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_parses_integers() {
        assert_eq!(Amount::parse("500"), Amount::Value(500));
        assert_eq!(Amount::parse("0"), Amount::Value(0));
        assert_eq!(Amount::parse("007"), Amount::Value(7));
        assert_eq!(Amount::parse("  42"), Amount::Value(42));
        assert_eq!(Amount::parse("-15"), Amount::Value(-15));
        assert_eq!(Amount::parse("+15"), Amount::Value(15));
    }

    #[test]
    fn test_amount_keeps_leading_digits() {
        assert_eq!(Amount::parse("500.75"), Amount::Value(500));
        assert_eq!(Amount::parse("12abc"), Amount::Value(12));
    }

    #[test]
    fn test_amount_not_a_number() {
        for text in ["", "   ", "abc", "-", "+", "NT$500", "- 5"] {
            assert!(Amount::parse(text).is_nan(), "{text:?} should be NaN");
        }
        assert_eq!(Amount::NotANumber.value(), None);
    }

    #[test]
    fn test_amount_overflow_is_not_a_number() {
        assert_eq!(
            Amount::parse("9223372036854775807"),
            Amount::Value(i64::MAX)
        );
        assert_eq!(
            Amount::parse("-9223372036854775808"),
            Amount::Value(i64::MIN)
        );
        assert!(Amount::parse("9223372036854775808").is_nan());
        assert!(Amount::parse("-9223372036854775809").is_nan());
        assert!(Amount::parse("99999999999999999999 TWD").is_nan());
    }

    #[test]
    fn test_amount_serializes_nan_as_null() {
        assert_eq!(serde_json::to_string(&Amount::Value(500)).unwrap(), "500");
        assert_eq!(serde_json::to_string(&Amount::NotANumber).unwrap(), "null");
    }
}
