//! Phone value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Country code assumed for numbers entered without a leading `+`.
pub const COUNTRY_CODE: &str = "38";

/// Length of a normalized number: `+`, the country code and ten subscriber digits.
pub const NORMALIZED_LEN: usize = 13;

static PHONE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+0-9]").expect("Failed to compile phone character regex"));

/// A normalized phone number.
///
/// Construction strips every character that is not a digit or `+`. Numbers
/// without a leading `+` are assumed to be local and get the `+38` prefix,
/// absorbing a leading `38` that was typed without the plus sign.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Phone;
///
/// let phone = Phone::new("(050) 123-45-67").unwrap();
/// assert_eq!(phone.as_str(), "+380501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, normalizing the raw input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the normalized number is not
    /// exactly 13 characters long.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        let phone = Self::normalize(raw);

        if phone.len() != NORMALIZED_LEN {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(Self(phone))
    }

    /// Apply the normalization rules without checking the length.
    fn normalize(raw: &str) -> String {
        let phone: String = PHONE_CHARS
            .find_iter(raw)
            .map(|m| m.as_str())
            .collect();

        if phone.starts_with('+') {
            return phone;
        }

        let subscriber = phone.strip_prefix(COUNTRY_CODE).unwrap_or(&phone);
        format!("+{}{}", COUNTRY_CODE, subscriber)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with normalization
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_local_number_gets_country_code() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(phone.as_str(), "+380501234567");
        assert_eq!(phone.as_str().len(), NORMALIZED_LEN);
    }

    #[test]
    fn test_phone_strips_formatting() {
        let phone = Phone::new("+38 (050) 123-45-67").unwrap();
        assert_eq!(phone.as_str(), "+380501234567");

        let phone = Phone::new("050.123.45.67").unwrap();
        assert_eq!(phone.as_str(), "+380501234567");
    }

    #[test]
    fn test_phone_leading_country_code_without_plus() {
        let phone = Phone::new("380501234567").unwrap();
        assert_eq!(phone.as_str(), "+380501234567");
    }

    #[test]
    fn test_phone_explicit_plus_is_kept() {
        let phone = Phone::new("+123456789012").unwrap();
        assert_eq!(phone.as_str(), "+123456789012");
    }

    #[test]
    fn test_phone_rejects_wrong_length() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("12345").is_err());
        assert!(Phone::new("05012345678").is_err());
        assert!(Phone::new("+38050123456").is_err());
        assert!(Phone::new("no digits").is_err());

        match Phone::new("12345") {
            Err(ValidationError::InvalidPhone(raw)) => assert_eq!(raw, "12345"),
            other => panic!("Expected InvalidPhone, got: {:?}", other),
        }
    }

    #[test]
    fn test_phone_normalization_is_idempotent() {
        let inputs = [
            "0501234567",
            "+38 050 123 45 67",
            "380501234567",
            "(067)-000-11-22",
            "+123456789012",
        ];

        for raw in inputs {
            let once = Phone::new(raw).unwrap();
            let twice = Phone::new(once.as_str()).unwrap();
            assert_eq!(once, twice, "normalizing {:?} twice changed it", raw);
        }
    }

    #[test]
    fn test_phone_equality_is_structural() {
        let a = Phone::new("050 123 45 67").unwrap();
        let b = Phone::new("+380501234567").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Phone::new("0509999999").unwrap());
    }

    #[test]
    fn test_phone_display() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(format!("{}", phone), "+380501234567");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("0501234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+380501234567\"");
    }

    #[test]
    fn test_phone_deserialization_normalizes() {
        let phone: Phone = serde_json::from_str("\"050-123-45-67\"").unwrap();
        assert_eq!(phone.as_str(), "+380501234567");

        let result: Result<Phone, _> = serde_json::from_str("\"123\"");
        assert!(result.is_err());
    }
}
