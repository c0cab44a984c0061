//! Password generation parameters.

use serde::{Deserialize, Serialize};

/// Default length of generated passwords.
pub const DEFAULT_PASSWORD_LENGTH: usize = 30;

/// Parameters controlling password generation.
///
/// Persisted with each generated password version so the credential can
/// later be regenerated with the same shape without the caller
/// resupplying its intent. Character-class constraints are enforced by
/// the material generator; there are no generate-time validation rules
/// at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordGenerationParameters {
    /// Number of characters in the generated password
    pub length: usize,
    /// Exclude lowercase letters from the generated password
    pub exclude_lower: bool,
    /// Exclude uppercase letters from the generated password
    pub exclude_upper: bool,
    /// Exclude digits from the generated password
    pub exclude_number: bool,
    /// Include special characters in the generated password
    pub include_special: bool,
}

impl Default for PasswordGenerationParameters {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            exclude_lower: false,
            exclude_upper: false,
            exclude_number: false,
            include_special: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PasswordGenerationParameters::default();
        assert_eq!(params.length, 30);
        assert!(!params.exclude_lower);
        assert!(!params.exclude_upper);
        assert!(!params.exclude_number);
        assert!(!params.include_special);
    }

    #[test]
    fn test_omitted_fields_deserialize_to_defaults() {
        let params: PasswordGenerationParameters =
            serde_json::from_str(r#"{"length": 20, "exclude_upper": true}"#).unwrap();
        assert_eq!(params.length, 20);
        assert!(params.exclude_upper);
        assert!(!params.exclude_lower);
    }
}
