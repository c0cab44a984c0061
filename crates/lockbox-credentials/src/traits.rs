//! Traits for the external collaborators the engine depends on.

use crate::request::RequestParameters;
use crate::version::{CredentialMaterial, CredentialVersion, EncryptedValue};
use async_trait::async_trait;
use lockbox_types::{AccessControlEntry, AuditContext, CredentialKind, CredentialName, Result};

/// Versioned credential storage.
///
/// Implementers provide access to the persistence layer. Consistency
/// under concurrent writes is the store's responsibility; Lockbox reads
/// the most recent version once per operation and treats it as a
/// snapshot for that call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find the most recent version stored under a name.
    async fn find_most_recent(&self, name: &CredentialName) -> Result<Option<CredentialVersion>>;

    /// Persist a new version and return the stored record.
    ///
    /// The access-control entry and audit context are opaque pass-through
    /// values for the authorization and audit layers behind the store.
    async fn save(
        &self,
        version: CredentialVersion,
        access: &AccessControlEntry,
        audit: &AuditContext,
    ) -> Result<CredentialVersion>;
}

/// Encryption of credential material at rest.
#[cfg_attr(test, mockall::automock)]
pub trait Encryptor: Send + Sync {
    /// Encrypt plaintext material.
    fn encrypt(&self, plaintext: &[u8]) -> Result<EncryptedValue>;

    /// Decrypt a previously encrypted value.
    fn decrypt(&self, value: &EncryptedValue) -> Result<Vec<u8>>;
}

/// Generation of plaintext credential material.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaterialGenerator: Send + Sync {
    /// Generate material for a kind from its request parameters.
    async fn generate(
        &self,
        kind: CredentialKind,
        parameters: &RequestParameters,
    ) -> Result<CredentialMaterial>;
}
