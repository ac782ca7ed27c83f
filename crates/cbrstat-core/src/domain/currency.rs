use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// ISO 4217 character code, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();
        let valid = normalized.len() == 3 && normalized.chars().all(|ch| ch.is_ascii_uppercase());
        if !valid {
            return Err(ValidationError::InvalidCurrency {
                value: input.to_owned(),
            });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares against a feed `CharCode`, ignoring case and padding.
    pub fn matches(&self, char_code: &str) -> bool {
        self.0.eq_ignore_ascii_case(char_code.trim())
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_uppercase() {
        let code = CurrencyCode::parse(" usd ").expect("must normalize");
        assert_eq!(code.as_str(), "USD");
        assert!(code.matches("USD"));
        assert!(code.matches("usd"));
        assert!(!code.matches("EUR"));
    }

    #[test]
    fn rejects_wrong_length_and_digits() {
        for input in ["", "US", "USDT", "U5D", "840"] {
            assert!(
                matches!(
                    CurrencyCode::parse(input),
                    Err(ValidationError::InvalidCurrency { .. })
                ),
                "{input} should be rejected"
            );
        }
    }
}
