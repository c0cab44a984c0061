//! RSA key pair generation parameters.

use super::{validate_key_length, DEFAULT_KEY_LENGTH};
use lockbox_types::ValidationError;
use serde::{Deserialize, Serialize};

/// Parameters controlling RSA key pair generation.
///
/// Like SSH parameters, these are not persisted; regeneration always
/// uses kind defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsaGenerationParameters {
    /// Modulus length of the generated key pair, in bits
    pub key_length: u32,
}

impl Default for RsaGenerationParameters {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_LENGTH,
        }
    }
}

impl RsaGenerationParameters {
    /// Check the key length against the supported set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_key_length(self.key_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_supported_key_lengths() {
        for key_length in [2048, 3072, 4096] {
            assert!(RsaGenerationParameters { key_length }.validate().is_ok());
        }
    }

    #[test]
    fn test_rejects_unsupported_key_lengths() {
        for key_length in [512, 2047, 4000, 4097] {
            assert_eq!(
                RsaGenerationParameters { key_length }.validate(),
                Err(ValidationError::InvalidKeyLength)
            );
        }
    }
}
