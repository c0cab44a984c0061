//! Generation engine: turns a validated request into a stored version.

use crate::request::GenerationRequest;
use crate::traits::{CredentialStore, Encryptor, MaterialGenerator};
use crate::version::CredentialVersion;
use lockbox_types::{bug, AccessControlEntry, AuditContext, RequestMode, Result};
use std::sync::Arc;

/// Thin orchestrator over the external material generator, encryptor,
/// and store.
///
/// Expects requests that already passed validation and does not
/// re-validate. Holds no state between calls, so it is safe under
/// unbounded concurrent invocation.
pub struct GenerateService {
    store: Arc<dyn CredentialStore>,
    generator: Arc<dyn MaterialGenerator>,
    encryptor: Arc<dyn Encryptor>,
}

impl GenerateService {
    /// Create a new generation engine over its collaborators.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        generator: Arc<dyn MaterialGenerator>,
        encryptor: Arc<dyn Encryptor>,
    ) -> Self {
        Self {
            store,
            generator,
            encryptor,
        }
    }

    /// Produce and persist a new version for a validated request.
    ///
    /// With `overwrite` unset, an existing credential is returned
    /// unchanged and nothing is generated. Failures from the external
    /// generator, encryptor, or store propagate unchanged; no partial
    /// version is ever returned or persisted.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        access: &AccessControlEntry,
        audit: &AuditContext,
    ) -> Result<CredentialVersion> {
        if !request.overwrite {
            if let Some(existing) = self.store.find_most_recent(&request.name).await? {
                tracing::info!("Returning existing credential: {}", request.name);
                return Ok(existing);
            }
        }

        let kind = request.kind();
        let material = match request.mode() {
            RequestMode::Generate => {
                tracing::info!("Generating credential: {}", request.name);
                self.generator.generate(kind, &request.parameters).await?
            }
            RequestMode::Set => {
                tracing::info!("Setting credential: {}", request.name);
                match request.parameters.supplied_material() {
                    Some(material) => material,
                    None => bug!(
                        "set request for {} reached the engine without a value",
                        request.name
                    ),
                }
            }
        };

        let plaintext = serde_json::to_vec(&material.0)?;
        let encrypted = self.encryptor.encrypt(&plaintext)?;

        let version = CredentialVersion::new(
            request.name.clone(),
            kind,
            request.parameters.to_stored(),
            encrypted,
        );
        self.store.save(version, access, audit).await
    }
}
