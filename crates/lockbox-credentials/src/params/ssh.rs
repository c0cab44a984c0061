//! SSH key pair generation parameters.

use super::{validate_key_length, DEFAULT_KEY_LENGTH};
use lockbox_types::ValidationError;
use serde::{Deserialize, Serialize};

/// Parameters controlling SSH key pair generation.
///
/// Not persisted with the generated version: regenerating an SSH
/// credential always uses kind defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SshGenerationParameters {
    /// Modulus length of the generated key pair, in bits
    pub key_length: u32,
    /// Comment appended to the public key
    pub ssh_comment: String,
}

impl Default for SshGenerationParameters {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_LENGTH,
            ssh_comment: String::new(),
        }
    }
}

impl SshGenerationParameters {
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
            let params = SshGenerationParameters {
                key_length,
                ..Default::default()
            };
            assert!(params.validate().is_ok());
        }
    }

    #[test]
    fn test_rejects_unsupported_key_lengths() {
        for key_length in [1024, 2047, 2222, 8192] {
            let params = SshGenerationParameters {
                key_length,
                ..Default::default()
            };
            assert_eq!(params.validate(), Err(ValidationError::InvalidKeyLength));
        }
    }

    #[test]
    fn test_defaults() {
        let params = SshGenerationParameters::default();
        assert_eq!(params.key_length, 2048);
        assert!(params.ssh_comment.is_empty());
        assert!(params.validate().is_ok());
    }
}
