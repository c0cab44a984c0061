//! Common enumerations used throughout Lockbox.

use crate::errors::{LockboxError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of credential kinds Lockbox manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialKind {
    /// Generated or set passwords
    Password,
    /// SSH key pairs
    Ssh,
    /// RSA key pairs
    Rsa,
    /// X.509 certificates with private keys
    Certificate,
    /// Opaque string values
    Value,
    /// Arbitrary JSON documents
    Json,
    /// Username/password pairs
    User,
}

impl CredentialKind {
    /// Capability flags for this credential kind.
    pub const fn capabilities(self) -> TypeCapabilities {
        match self {
            CredentialKind::Password | CredentialKind::Certificate => TypeCapabilities {
                generatable: true,
                stores_generation_parameters: true,
                regeneratable: true,
            },
            CredentialKind::Ssh | CredentialKind::Rsa => TypeCapabilities {
                generatable: true,
                stores_generation_parameters: false,
                regeneratable: true,
            },
            CredentialKind::Value | CredentialKind::Json | CredentialKind::User => {
                TypeCapabilities {
                    generatable: false,
                    stores_generation_parameters: false,
                    regeneratable: false,
                }
            }
        }
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialKind::Password => write!(f, "password"),
            CredentialKind::Ssh => write!(f, "ssh"),
            CredentialKind::Rsa => write!(f, "rsa"),
            CredentialKind::Certificate => write!(f, "certificate"),
            CredentialKind::Value => write!(f, "value"),
            CredentialKind::Json => write!(f, "json"),
            CredentialKind::User => write!(f, "user"),
        }
    }
}

impl FromStr for CredentialKind {
    type Err = LockboxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "password" => Ok(CredentialKind::Password),
            "ssh" => Ok(CredentialKind::Ssh),
            "rsa" => Ok(CredentialKind::Rsa),
            "certificate" => Ok(CredentialKind::Certificate),
            "value" => Ok(CredentialKind::Value),
            "json" => Ok(CredentialKind::Json),
            "user" => Ok(CredentialKind::User),
            _ => Err(LockboxError::Identifier(format!("Invalid credential kind: {}", s))),
        }
    }
}

/// What a credential kind supports.
///
/// Looked up through [`CredentialKind::capabilities`]; the table is fixed
/// and exhaustive, so adding a kind forces every dispatch site to be
/// revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCapabilities {
    /// Whether material for this kind can be generated server-side
    pub generatable: bool,
    /// Whether generation parameters are persisted with each version
    pub stores_generation_parameters: bool,
    /// Whether an existing credential of this kind can be regenerated
    pub regeneratable: bool,
}

/// How a request supplies its credential material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMode {
    /// Material is generated server-side from parameters
    Generate,
    /// Material is supplied directly by the caller
    Set,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_table() {
        let generated_with_parameters = [CredentialKind::Password, CredentialKind::Certificate];
        for kind in generated_with_parameters {
            let caps = kind.capabilities();
            assert!(caps.generatable, "{} should be generatable", kind);
            assert!(caps.stores_generation_parameters);
            assert!(caps.regeneratable);
        }

        let generated_without_parameters = [CredentialKind::Ssh, CredentialKind::Rsa];
        for kind in generated_without_parameters {
            let caps = kind.capabilities();
            assert!(caps.generatable);
            assert!(!caps.stores_generation_parameters);
            assert!(caps.regeneratable);
        }

        let set_only = [CredentialKind::Value, CredentialKind::Json, CredentialKind::User];
        for kind in set_only {
            let caps = kind.capabilities();
            assert!(!caps.generatable, "{} should not be generatable", kind);
            assert!(!caps.stores_generation_parameters);
            assert!(!caps.regeneratable);
        }
    }

    #[test]
    fn test_kind_display_round_trip() {
        let kinds = [
            CredentialKind::Password,
            CredentialKind::Ssh,
            CredentialKind::Rsa,
            CredentialKind::Certificate,
            CredentialKind::Value,
            CredentialKind::Json,
            CredentialKind::User,
        ];
        for kind in kinds {
            assert_eq!(kind.to_string().parse::<CredentialKind>().unwrap(), kind);
        }

        assert!("keypair".parse::<CredentialKind>().is_err());
    }

    #[test]
    fn test_kind_serde_names() {
        assert_eq!(serde_json::to_string(&CredentialKind::Certificate).unwrap(), "\"certificate\"");
        let kind: CredentialKind = serde_json::from_str("\"ssh\"").unwrap();
        assert_eq!(kind, CredentialKind::Ssh);
    }
}
