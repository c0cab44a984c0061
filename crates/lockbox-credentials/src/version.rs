//! Credential versions as read from and written to the store.

use crate::params::{CertificateGenerationParameters, PasswordGenerationParameters};
use chrono::{DateTime, Utc};
use lockbox_types::{CredentialKind, CredentialName};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ciphertext envelope produced by the external encryptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedValue {
    /// Encrypted material
    pub value: Vec<u8>,
    /// Nonce the encryptor used for this value
    pub nonce: Vec<u8>,
}

/// Plaintext credential material.
///
/// Produced by the external material generator or supplied by a set
/// request. Encrypted before it is stored; never persisted in the clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialMaterial(pub serde_json::Value);

/// Generation parameters persisted with a credential version.
///
/// Only the kinds whose capability table stores parameters appear here;
/// key-pair kinds are regenerated from defaults instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoredParameters {
    /// Parameters a password version was generated from
    Password(PasswordGenerationParameters),
    /// Parameters a certificate version was generated from
    Certificate(CertificateGenerationParameters),
}

impl StoredParameters {
    /// The credential kind these parameters belong to.
    pub fn kind(&self) -> CredentialKind {
        match self {
            StoredParameters::Password(_) => CredentialKind::Password,
            StoredParameters::Certificate(_) => CredentialKind::Certificate,
        }
    }
}

/// The stored record of one version of a named credential.
///
/// Read as a snapshot once per operation and treated as immutable; the
/// engine assembles a fresh version rather than mutating an existing
/// one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialVersion {
    /// Unique id of this version
    pub id: Uuid,
    /// Credential name
    pub name: CredentialName,
    /// Credential kind
    pub kind: CredentialKind,
    /// Parameters the version was generated from, for kinds that store
    /// them; absent when the value was set directly
    pub generation_parameters: Option<StoredParameters>,
    /// Encrypted credential material
    pub encrypted_material: EncryptedValue,
    /// When this version was created
    pub version_created_at: DateTime<Utc>,
}

impl CredentialVersion {
    /// Assemble a new version with a fresh id and creation timestamp.
    pub fn new(
        name: CredentialName,
        kind: CredentialKind,
        generation_parameters: Option<StoredParameters>,
        encrypted_material: EncryptedValue,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            kind,
            generation_parameters,
            encrypted_material,
            version_created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_parameters_kind() {
        let password = StoredParameters::Password(Default::default());
        assert_eq!(password.kind(), CredentialKind::Password);

        let certificate = StoredParameters::Certificate(Default::default());
        assert_eq!(certificate.kind(), CredentialKind::Certificate);
    }

    #[test]
    fn test_new_version_carries_its_inputs() {
        let name = CredentialName::new("/example/password").unwrap();
        let encrypted = EncryptedValue {
            value: vec![1, 2, 3],
            nonce: vec![4, 5, 6],
        };
        let version = CredentialVersion::new(
            name.clone(),
            CredentialKind::Password,
            Some(StoredParameters::Password(Default::default())),
            encrypted.clone(),
        );

        assert_eq!(version.name, name);
        assert_eq!(version.kind, CredentialKind::Password);
        assert_eq!(version.encrypted_material, encrypted);
        assert!(version.generation_parameters.is_some());
    }

    #[test]
    fn test_version_serde_round_trip() {
        let version = CredentialVersion::new(
            CredentialName::new("/example/json").unwrap(),
            CredentialKind::Json,
            None,
            EncryptedValue {
                value: vec![7],
                nonce: vec![8],
            },
        );

        let serialized = serde_json::to_string(&version).unwrap();
        let deserialized: CredentialVersion = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, version);
    }
}
