//! Kind-specific generation parameters.

pub mod certificate;
pub mod password;
pub mod rsa;
pub mod ssh;

pub use certificate::CertificateGenerationParameters;
pub use password::PasswordGenerationParameters;
pub use rsa::RsaGenerationParameters;
pub use ssh::SshGenerationParameters;

use lockbox_types::ValidationError;

/// Key lengths accepted for generated key material, in bits.
pub const VALID_KEY_LENGTHS: [u32; 3] = [2048, 3072, 4096];

/// Default key length for generated key material, in bits.
pub const DEFAULT_KEY_LENGTH: u32 = 2048;

pub(crate) fn validate_key_length(key_length: u32) -> Result<(), ValidationError> {
    if VALID_KEY_LENGTHS.contains(&key_length) {
        Ok(())
    } else {
        Err(ValidationError::InvalidKeyLength)
    }
}
