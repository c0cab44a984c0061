//! # Lockbox Credentials
//!
//! Complete credential validation, generation, and regeneration engine.
//!
//! Provides the core machinery for all Lockbox credential kinds:
//! - Kind-specific generation parameters and their validation rules,
//!   including the full PKI rule set for X.509 certificate requests
//! - Generation and set requests over the closed credential-kind set
//! - The generation engine orchestrating the external material
//!   generator, encryptor, and store
//! - The regeneration coordinator, which rebuilds a generation request
//!   for an existing credential from its stored parameters

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod generate;
pub mod params;
pub mod regenerate;
pub mod request;
pub mod traits;
pub mod version;

pub use generate::GenerateService;
pub use params::{
    CertificateGenerationParameters, PasswordGenerationParameters, RsaGenerationParameters,
    SshGenerationParameters,
};
pub use regenerate::RegenerateService;
pub use request::{GenerationRequest, RegenerateRequest, RequestParameters, UserCredentialValue};
pub use traits::{CredentialStore, Encryptor, MaterialGenerator};
pub use version::{CredentialMaterial, CredentialVersion, EncryptedValue, StoredParameters};
