//! X.509 certificate generation parameters and their validation rules.

use super::{validate_key_length, DEFAULT_KEY_LENGTH};
use lockbox_types::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Extended key usage tokens Lockbox accepts.
pub const VALID_EXTENDED_KEY_USAGES: [&str; 5] = [
    "server_auth",
    "client_auth",
    "code_signing",
    "email_protection",
    "timestamping",
];

/// Default certificate lifetime, in days.
pub const DEFAULT_DURATION_DAYS: u32 = 365;

const MAX_DURATION_DAYS: u32 = 3650;

const COMMON_NAME_MAX: usize = 64;
const ORGANIZATION_MAX: usize = 64;
const ORGANIZATION_UNIT_MAX: usize = 64;
const LOCALITY_MAX: usize = 128;
const STATE_MAX: usize = 128;
const COUNTRY_MAX: usize = 2;
const ALTERNATIVE_NAME_MAX: usize = 253;

// Dot-separated labels of letters, digits, and hyphens, with at most one
// wildcard label at the front. Rejects whitespace, `@`, and URL schemes
// outright.
static DNS_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\*\.)?[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*$").expect("hostname pattern is valid")
});

/// Parameters controlling X.509 certificate generation.
///
/// Persisted with each generated certificate version so the credential
/// can later be regenerated with the same subject, key, and trust
/// relationships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateGenerationParameters {
    /// Subject common name (CN)
    pub common_name: String,
    /// Subject organization (O)
    pub organization: String,
    /// Subject organizational unit (OU)
    pub organization_unit: String,
    /// Subject locality (L)
    pub locality: String,
    /// Subject state or province (ST)
    pub state: String,
    /// Subject country (C)
    pub country: String,
    /// Modulus length of the generated key pair, in bits
    pub key_length: u32,
    /// Certificate lifetime, in days
    pub duration: u32,
    /// Whether the certificate signs itself
    pub self_signed: bool,
    /// Whether the certificate is a certificate authority
    pub is_ca: bool,
    /// Name of the stored CA credential that signs this certificate
    pub ca_name: Option<String>,
    /// Subject alternative names: hostnames or IPv4 addresses
    pub alternative_names: Vec<String>,
    /// Extended key usage tokens
    pub extended_key_usage: Vec<String>,
}

impl Default for CertificateGenerationParameters {
    fn default() -> Self {
        Self {
            common_name: String::new(),
            organization: String::new(),
            organization_unit: String::new(),
            locality: String::new(),
            state: String::new(),
            country: String::new(),
            key_length: DEFAULT_KEY_LENGTH,
            duration: DEFAULT_DURATION_DAYS,
            self_signed: false,
            is_ca: false,
            ca_name: None,
            alternative_names: Vec::new(),
            extended_key_usage: Vec::new(),
        }
    }
}

impl CertificateGenerationParameters {
    /// Validate the parameters against the PKI business rules.
    ///
    /// Checks run in a fixed order and stop at the first violation, so a
    /// request with several problems reports the earliest one. The
    /// parameters themselves are never mutated; validating twice yields
    /// the same outcome.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_extended_key_usage()?;

        if self.ca_name().is_some() && self.self_signed {
            return Err(ValidationError::SelfSignedWithCaName);
        }

        if !self.self_signed && !self.is_ca && self.ca_name().is_none() {
            return Err(ValidationError::MissingSigningCa);
        }

        if is_blank(&self.organization)
            && is_blank(&self.state)
            && is_blank(&self.country)
            && is_blank(&self.common_name)
            && is_blank(&self.organization_unit)
            && is_blank(&self.locality)
        {
            return Err(ValidationError::NoSubject);
        }

        if !(1..=MAX_DURATION_DAYS).contains(&self.duration) {
            return Err(ValidationError::InvalidDuration);
        }

        validate_key_length(self.key_length)?;

        check_length(&self.common_name, "common name", COMMON_NAME_MAX)?;
        check_length(&self.organization, "organization", ORGANIZATION_MAX)?;
        check_length(&self.organization_unit, "organization unit", ORGANIZATION_UNIT_MAX)?;
        check_length(&self.locality, "locality", LOCALITY_MAX)?;
        check_length(&self.state, "state", STATE_MAX)?;
        check_length(&self.country, "country", COUNTRY_MAX)?;

        self.validate_alternative_names()
    }

    /// The signing CA name, treating a blank entry as absent.
    pub fn ca_name(&self) -> Option<&str> {
        self.ca_name.as_deref().filter(|name| !is_blank(name))
    }

    fn validate_extended_key_usage(&self) -> Result<(), ValidationError> {
        for usage in &self.extended_key_usage {
            if !VALID_EXTENDED_KEY_USAGES.contains(&usage.as_str()) {
                return Err(ValidationError::InvalidExtendedKeyUsage(usage.clone()));
            }
        }
        Ok(())
    }

    fn validate_alternative_names(&self) -> Result<(), ValidationError> {
        for name in &self.alternative_names {
            if !is_valid_alternative_name(name) {
                return Err(ValidationError::InvalidAlternateName);
            }
            if name.chars().count() > ALTERNATIVE_NAME_MAX {
                return Err(ValidationError::ParameterTooLong(
                    "alternative name",
                    ALTERNATIVE_NAME_MAX,
                ));
            }
        }
        Ok(())
    }
}

/// An alternative name is either an IPv4 literal or a DNS name with an
/// optional single leading wildcard label. Email addresses, URLs, and
/// anything containing whitespace are rejected. An all-digits-and-dots
/// entry must parse as an IPv4 address, so `1.2.3.999` is not quietly
/// accepted as a hostname.
fn is_valid_alternative_name(name: &str) -> bool {
    if name.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return name.parse::<Ipv4Addr>().is_ok();
    }
    DNS_NAME.is_match(name)
}

fn check_length(value: &str, field: &'static str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::ParameterTooLong(field, max));
    }
    Ok(())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
