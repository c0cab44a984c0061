//! Generation, set, and regeneration requests.

use crate::params::{
    CertificateGenerationParameters, PasswordGenerationParameters, RsaGenerationParameters,
    SshGenerationParameters,
};
use crate::version::{CredentialMaterial, StoredParameters};
use lockbox_types::{CredentialKind, CredentialName, RequestMode, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A request to create a new version of a named credential.
///
/// Built once per call from caller input and validated as a single
/// atomic step before any generation side effect; partially valid
/// intermediate states are never observable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Name of the credential to create or overwrite
    pub name: CredentialName,
    /// Kind-specific payload
    pub parameters: RequestParameters,
    /// Whether an existing credential gets a new version; when unset, an
    /// existing credential is returned as-is
    #[serde(default)]
    pub overwrite: bool,
}

impl GenerationRequest {
    /// The credential kind this request targets.
    pub fn kind(&self) -> CredentialKind {
        self.parameters.kind()
    }

    /// How this request supplies its material.
    pub fn mode(&self) -> RequestMode {
        self.parameters.mode()
    }

    /// Validate the request against its kind-specific rules.
    ///
    /// Pure: produces a structured error or nothing, and never persists.
    /// Certificate payloads get the full PKI rule set; key-pair payloads
    /// check their key length; set payloads only need a supplied value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.parameters {
            RequestParameters::Password(_) => Ok(()),
            RequestParameters::Ssh(params) => params.validate(),
            RequestParameters::Rsa(params) => params.validate(),
            RequestParameters::Certificate(params) => params.validate(),
            RequestParameters::Value(value) => require_value(value.is_some()),
            RequestParameters::Json(value) => require_value(value.is_some()),
            RequestParameters::User(value) => require_value(value.is_some()),
        }
    }
}

fn require_value(present: bool) -> Result<(), ValidationError> {
    if present {
        Ok(())
    } else {
        Err(ValidationError::MissingValue)
    }
}

/// Kind-specific request payload.
///
/// The variant fixes both the credential kind and the request mode, so a
/// payload can never disagree with the kind it claims. Set-kind variants
/// carry the caller-supplied value, absent when the caller sent none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestParameters {
    /// Generate a password
    Password(PasswordGenerationParameters),
    /// Generate an SSH key pair
    Ssh(SshGenerationParameters),
    /// Generate an RSA key pair
    Rsa(RsaGenerationParameters),
    /// Generate an X.509 certificate
    Certificate(CertificateGenerationParameters),
    /// Set an opaque string value
    Value(Option<String>),
    /// Set a JSON document
    Json(Option<Value>),
    /// Set a username/password pair
    User(Option<UserCredentialValue>),
}

impl RequestParameters {
    /// The credential kind this payload belongs to.
    pub fn kind(&self) -> CredentialKind {
        match self {
            RequestParameters::Password(_) => CredentialKind::Password,
            RequestParameters::Ssh(_) => CredentialKind::Ssh,
            RequestParameters::Rsa(_) => CredentialKind::Rsa,
            RequestParameters::Certificate(_) => CredentialKind::Certificate,
            RequestParameters::Value(_) => CredentialKind::Value,
            RequestParameters::Json(_) => CredentialKind::Json,
            RequestParameters::User(_) => CredentialKind::User,
        }
    }

    /// Generate for server-generated kinds, set for caller-supplied ones.
    pub fn mode(&self) -> RequestMode {
        match self {
            RequestParameters::Password(_)
            | RequestParameters::Ssh(_)
            | RequestParameters::Rsa(_)
            | RequestParameters::Certificate(_) => RequestMode::Generate,
            RequestParameters::Value(_)
            | RequestParameters::Json(_)
            | RequestParameters::User(_) => RequestMode::Set,
        }
    }

    /// Plaintext material for set payloads.
    ///
    /// Returns `None` for generate payloads, and for set payloads whose
    /// value the caller never supplied.
    pub fn supplied_material(&self) -> Option<CredentialMaterial> {
        match self {
            RequestParameters::Value(Some(value)) => {
                Some(CredentialMaterial(Value::from(value.as_str())))
            }
            RequestParameters::Json(Some(value)) => Some(CredentialMaterial(value.clone())),
            RequestParameters::User(Some(user)) => Some(CredentialMaterial(serde_json::json!({
                "username": user.username,
                "password": user.password,
            }))),
            _ => None,
        }
    }

    /// The parameters persisted with a version of this kind.
    ///
    /// Only kinds whose capability table stores generation parameters
    /// return anything.
    pub fn to_stored(&self) -> Option<StoredParameters> {
        match self {
            RequestParameters::Password(params) => {
                Some(StoredParameters::Password(params.clone()))
            }
            RequestParameters::Certificate(params) => {
                Some(StoredParameters::Certificate(params.clone()))
            }
            _ => None,
        }
    }
}

/// Username/password pair supplied by a user set request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredentialValue {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
}

/// A request to regenerate an existing named credential.
///
/// Carries only the name; the original generation intent is recovered
/// from the stored version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegenerateRequest {
    /// Name of the credential to regenerate
    pub name: CredentialName,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(parameters: RequestParameters) -> GenerationRequest {
        GenerationRequest {
            name: CredentialName::new("/example/credential").unwrap(),
            parameters,
            overwrite: false,
        }
    }

    #[test]
    fn test_password_request_has_no_generate_time_constraints() {
        let subject = request(RequestParameters::Password(Default::default()));
        assert!(subject.validate().is_ok());
        assert_eq!(subject.kind(), CredentialKind::Password);
        assert_eq!(subject.mode(), RequestMode::Generate);
    }

    #[test]
    fn test_ssh_and_rsa_requests_check_key_length() {
        let good = request(RequestParameters::Ssh(SshGenerationParameters {
            key_length: 3072,
            ..Default::default()
        }));
        assert!(good.validate().is_ok());

        let bad = request(RequestParameters::Ssh(SshGenerationParameters {
            key_length: 1024,
            ..Default::default()
        }));
        assert_eq!(bad.validate(), Err(ValidationError::InvalidKeyLength));

        let bad = request(RequestParameters::Rsa(RsaGenerationParameters { key_length: 4000 }));
        assert_eq!(bad.validate(), Err(ValidationError::InvalidKeyLength));
    }

    #[test]
    fn test_certificate_requests_delegate_to_the_full_rule_set() {
        let bad = request(RequestParameters::Certificate(CertificateGenerationParameters {
            common_name: "test".to_string(),
            self_signed: false,
            is_ca: false,
            ca_name: None,
            ..Default::default()
        }));
        assert_eq!(bad.validate(), Err(ValidationError::MissingSigningCa));
    }

    #[test]
    fn test_set_requests_require_a_value() {
        for empty in [
            RequestParameters::Value(None),
            RequestParameters::Json(None),
            RequestParameters::User(None),
        ] {
            let subject = request(empty);
            assert_eq!(subject.validate(), Err(ValidationError::MissingValue));
            assert_eq!(subject.mode(), RequestMode::Set);
        }

        let supplied = [
            RequestParameters::Value(Some("fake-value".to_string())),
            RequestParameters::Json(Some(json!({"key": "value"}))),
            RequestParameters::User(Some(UserCredentialValue {
                username: "fake-user".to_string(),
                password: "fake-password".to_string(),
            })),
        ];
        for parameters in supplied {
            assert!(request(parameters).validate().is_ok());
        }
    }

    #[test]
    fn test_payload_kind_mapping_is_exhaustive() {
        let cases = [
            (RequestParameters::Password(Default::default()), CredentialKind::Password),
            (RequestParameters::Ssh(Default::default()), CredentialKind::Ssh),
            (RequestParameters::Rsa(Default::default()), CredentialKind::Rsa),
            (RequestParameters::Certificate(Default::default()), CredentialKind::Certificate),
            (RequestParameters::Value(None), CredentialKind::Value),
            (RequestParameters::Json(None), CredentialKind::Json),
            (RequestParameters::User(None), CredentialKind::User),
        ];
        for (parameters, kind) in cases {
            assert_eq!(parameters.kind(), kind);
        }
    }

    #[test]
    fn test_supplied_material_for_set_payloads() {
        let value = RequestParameters::Value(Some("fake-value".to_string()));
        assert_eq!(value.supplied_material().unwrap().0, json!("fake-value"));

        let user = RequestParameters::User(Some(UserCredentialValue {
            username: "admin".to_string(),
            password: "pw".to_string(),
        }));
        assert_eq!(
            user.supplied_material().unwrap().0,
            json!({"username": "admin", "password": "pw"})
        );

        let generated = RequestParameters::Rsa(Default::default());
        assert!(generated.supplied_material().is_none());
    }

    #[test]
    fn test_stored_parameters_follow_the_capability_table() {
        assert!(RequestParameters::Password(Default::default()).to_stored().is_some());
        assert!(RequestParameters::Certificate(Default::default()).to_stored().is_some());
        assert!(RequestParameters::Ssh(Default::default()).to_stored().is_none());
        assert!(RequestParameters::Rsa(Default::default()).to_stored().is_none());
        assert!(RequestParameters::Value(Some("v".to_string())).to_stored().is_none());
    }
}
