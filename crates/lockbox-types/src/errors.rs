//! Error types for Lockbox operations.

use crate::enums::CredentialKind;
use serde_json::Value;
use thiserror::Error;

/// The main error type for Lockbox operations.
///
/// Validation failures carry a structured [`ValidationError`]; the
/// remaining variants cover failures raised by external collaborators
/// (store, encryptor, material generator), which Lockbox propagates
/// unchanged and never retries.
#[derive(Error, Debug)]
pub enum LockboxError {
    /// A request failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The external encryptor failed to encrypt or decrypt
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// The external material generator failed
    #[error("Generation error: {0}")]
    Generation(String),

    /// The credential store failed or is unavailable
    #[error("Store error: {0}")]
    Store(String),

    /// Malformed identifier supplied by the caller
    #[error("Invalid identifier: {0}")]
    Identifier(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal bug - should never happen in production
    #[error("Bug detected: {0}\n\nThis is an internal error. Please report this issue at:\nhttps://github.com/lockbox-community/lockbox-rs/issues")]
    Bug(String),
}

/// A specialized Result type for Lockbox operations.
pub type Result<T> = std::result::Result<T, LockboxError>;

/// Helper macro to create and return a LockboxError::Bug
///
/// This should be used for conditions that should never occur
/// in normal operation and indicate a bug in Lockbox itself.
///
/// # Example
///
/// ```ignore
/// if some_impossible_condition {
///     bug!("This should never happen: {:?}", condition);
/// }
/// ```
#[macro_export]
macro_rules! bug {
    ($msg:expr) => {
        return Err($crate::LockboxError::Bug($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::LockboxError::Bug(format!($fmt, $($arg)*)))
    };
}

/// A structured validation failure.
///
/// Each variant identifies one entry in the error message catalog and
/// carries the positional parameters needed to render it. The rendered
/// `Display` text matches the catalog template filled in; localization
/// happens in the presentation layer via [`ValidationError::template`]
/// and [`ValidationError::params`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A set request arrived without a value payload
    #[error("you must specify a value for this credential")]
    MissingValue,

    /// Every subject field of a certificate request was blank
    #[error("at least one subject field must be provided for the certificate")]
    NoSubject,

    /// A certificate request named a signing CA while also asking to self-sign
    #[error("a certificate cannot be self-signed and name a signing CA")]
    SelfSignedWithCaName,

    /// A certificate request identified no signer at all
    #[error("you must name a signing CA, self-sign the certificate, or generate it as a CA")]
    MissingSigningCa,

    /// Key length outside the supported set
    #[error("key length must be one of 2048, 3072 or 4096 bits")]
    InvalidKeyLength,

    /// An alternative name that is neither a hostname nor an IPv4 address
    #[error("alternative names must be valid hostnames or IP addresses")]
    InvalidAlternateName,

    /// An extended key usage token outside the supported set
    #[error("extended key usage {0} is not supported; valid values are server_auth, client_auth, code_signing, email_protection and timestamping")]
    InvalidExtendedKeyUsage(String),

    /// A request field exceeded its length cap
    #[error("{0} length must not exceed {1} characters")]
    ParameterTooLong(&'static str, usize),

    /// Certificate duration outside the supported range
    #[error("duration must be between 1 and 3650 days")]
    InvalidDuration,

    /// No credential exists under the requested name
    #[error("the credential does not exist or you lack authorization to access it")]
    EntryNotFound,

    /// Regeneration was requested for a kind that does not support it
    #[error("credentials of type {0} cannot be regenerated")]
    UnsupportedRegenerationType(CredentialKind),

    /// Regeneration was requested for a credential whose value was set
    /// directly rather than generated
    #[error("the credential was not generated by this server and cannot be regenerated")]
    NonGeneratedCredential,
}

impl ValidationError {
    /// The fixed catalog template for this error, with `{0}`-style
    /// positional placeholders.
    pub fn template(&self) -> &'static str {
        match self {
            Self::MissingValue => "you must specify a value for this credential",
            Self::NoSubject => "at least one subject field must be provided for the certificate",
            Self::SelfSignedWithCaName => "a certificate cannot be self-signed and name a signing CA",
            Self::MissingSigningCa => {
                "you must name a signing CA, self-sign the certificate, or generate it as a CA"
            }
            Self::InvalidKeyLength => "key length must be one of 2048, 3072 or 4096 bits",
            Self::InvalidAlternateName => {
                "alternative names must be valid hostnames or IP addresses"
            }
            Self::InvalidExtendedKeyUsage(_) => {
                "extended key usage {0} is not supported; valid values are server_auth, client_auth, code_signing, email_protection and timestamping"
            }
            Self::ParameterTooLong(..) => "{0} length must not exceed {1} characters",
            Self::InvalidDuration => "duration must be between 1 and 3650 days",
            Self::EntryNotFound => {
                "the credential does not exist or you lack authorization to access it"
            }
            Self::UnsupportedRegenerationType(_) => "credentials of type {0} cannot be regenerated",
            Self::NonGeneratedCredential => {
                "the credential was not generated by this server and cannot be regenerated"
            }
        }
    }

    /// Ordered positional parameters for the catalog template.
    pub fn params(&self) -> Vec<Value> {
        match self {
            Self::InvalidExtendedKeyUsage(token) => vec![Value::from(token.as_str())],
            Self::ParameterTooLong(field, max) => vec![Value::from(*field), Value::from(*max)],
            Self::UnsupportedRegenerationType(kind) => vec![Value::from(kind.to_string())],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_too_long_params() {
        let err = ValidationError::ParameterTooLong("common name", 64);
        assert_eq!(err.template(), "{0} length must not exceed {1} characters");
        assert_eq!(err.params(), vec![Value::from("common name"), Value::from(64)]);
        assert_eq!(err.to_string(), "common name length must not exceed 64 characters");
    }

    #[test]
    fn test_extended_key_usage_carries_token() {
        let err = ValidationError::InvalidExtendedKeyUsage("this_is_invalid".to_string());
        assert_eq!(err.params(), vec![Value::from("this_is_invalid")]);
    }

    #[test]
    fn test_unsupported_regeneration_type_params() {
        let err = ValidationError::UnsupportedRegenerationType(CredentialKind::Json);
        assert_eq!(err.params(), vec![Value::from("json")]);
        assert_eq!(err.to_string(), "credentials of type json cannot be regenerated");
    }

    #[test]
    fn test_parameterless_errors_have_empty_params() {
        assert!(ValidationError::MissingValue.params().is_empty());
        assert!(ValidationError::EntryNotFound.params().is_empty());
        assert!(ValidationError::InvalidDuration.params().is_empty());
    }

    #[test]
    fn test_validation_error_converts_to_lockbox_error() {
        let err: LockboxError = ValidationError::NoSubject.into();
        assert!(matches!(err, LockboxError::Validation(ValidationError::NoSubject)));
    }
}
