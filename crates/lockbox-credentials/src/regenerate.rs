//! Regeneration coordinator.
//!
//! Rebuilds a generation request for an existing named credential from
//! its stored record, so the caller never has to resupply the original
//! generation intent.

use crate::generate::GenerateService;
use crate::params::{RsaGenerationParameters, SshGenerationParameters};
use crate::request::{GenerationRequest, RegenerateRequest, RequestParameters};
use crate::traits::CredentialStore;
use crate::version::{CredentialVersion, StoredParameters};
use lockbox_types::{
    bug, AccessControlEntry, AuditContext, CredentialKind, Result, ValidationError,
};
use std::sync::Arc;

/// Coordinates regeneration of an existing named credential.
///
/// Stateless across calls: each invocation performs exactly one store
/// lookup and at most one generation. The snapshot read from the store
/// is never mutated.
pub struct RegenerateService {
    store: Arc<dyn CredentialStore>,
    generate_service: GenerateService,
}

impl RegenerateService {
    /// Create a new coordinator over the store and the generation engine.
    pub fn new(store: Arc<dyn CredentialStore>, generate_service: GenerateService) -> Self {
        Self {
            store,
            generate_service,
        }
    }

    /// Regenerate the most recent version of a named credential.
    ///
    /// Kinds that store generation parameters are regenerated from the
    /// stored copy, verbatim; key-pair kinds are regenerated from kind
    /// defaults. The engine's result is returned unmodified.
    pub async fn regenerate(
        &self,
        request: &RegenerateRequest,
        access: &AccessControlEntry,
        audit: &AuditContext,
    ) -> Result<CredentialVersion> {
        let current = self
            .store
            .find_most_recent(&request.name)
            .await?
            .ok_or(ValidationError::EntryNotFound)?;

        let parameters = Self::reconstruct_parameters(&current)?;

        tracing::info!("Regenerating credential: {}", current.name);
        let generate_request = GenerationRequest {
            name: current.name,
            parameters,
            overwrite: true,
        };
        self.generate_service
            .generate(&generate_request, access, audit)
            .await
    }

    fn reconstruct_parameters(current: &CredentialVersion) -> Result<RequestParameters> {
        let capabilities = current.kind.capabilities();
        if !capabilities.regeneratable {
            return Err(ValidationError::UnsupportedRegenerationType(current.kind).into());
        }

        if capabilities.stores_generation_parameters {
            let stored = current
                .generation_parameters
                .as_ref()
                .ok_or(ValidationError::NonGeneratedCredential)?;
            if stored.kind() != current.kind {
                bug!(
                    "credential {} of kind {} holds stored parameters for kind {}",
                    current.name,
                    current.kind,
                    stored.kind()
                );
            }
            return Ok(match stored {
                StoredParameters::Password(params) => {
                    RequestParameters::Password(params.clone())
                }
                StoredParameters::Certificate(params) => {
                    RequestParameters::Certificate(params.clone())
                }
            });
        }

        // Kinds that do not store parameters regenerate from defaults;
        // only name and kind are needed.
        match current.kind {
            CredentialKind::Ssh => Ok(RequestParameters::Ssh(SshGenerationParameters::default())),
            CredentialKind::Rsa => Ok(RequestParameters::Rsa(RsaGenerationParameters::default())),
            kind => bug!("kind {} is regeneratable but has no reconstruction rule", kind),
        }
    }
}
