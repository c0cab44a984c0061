//! Type-safe identifiers.

use crate::errors::{LockboxError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated credential name.
///
/// Credential names are slash-rooted paths. Names must:
/// - Be non-blank
/// - Contain no whitespace
///
/// A missing leading `/` is prepended during construction, so
/// `"example/password"` and `"/example/password"` identify the same
/// credential.
///
/// # Example
///
/// ```
/// use lockbox_types::CredentialName;
///
/// let name = CredentialName::new("/example/password").unwrap();
/// assert_eq!(name.as_str(), "/example/password");
///
/// // The leading slash is normalized on
/// let name = CredentialName::new("example/password").unwrap();
/// assert_eq!(name.as_str(), "/example/password");
///
/// // Blank or whitespace-containing names are rejected
/// assert!(CredentialName::new("").is_err());
/// assert!(CredentialName::new("two words").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialName(String);

impl CredentialName {
    /// Create a new validated credential name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or contains whitespace.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();
        if !Self::is_valid(name) {
            return Err(LockboxError::Identifier(format!(
                "Invalid credential name '{}': must be non-blank and contain no whitespace",
                name
            )));
        }

        let name = if name.starts_with('/') {
            name.to_string()
        } else {
            format!("/{}", name)
        };
        Ok(Self(name))
    }

    /// Check if a name is valid without allocating.
    pub fn is_valid(name: &str) -> bool {
        !name.is_empty() && !name.chars().any(char::is_whitespace)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CredentialName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CredentialName {
    type Err = LockboxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_validation() {
        assert!(CredentialName::new("/example/password").is_ok());
        assert!(CredentialName::new("deploy/ca").is_ok());
        assert!(CredentialName::new("simple").is_ok());

        assert!(CredentialName::new("").is_err());
        assert!(CredentialName::new("two words").is_err());
        assert!(CredentialName::new("tab\tname").is_err());
    }

    #[test]
    fn test_leading_slash_normalization() {
        let rooted = CredentialName::new("/example/ssh").unwrap();
        let bare = CredentialName::new("example/ssh").unwrap();
        assert_eq!(rooted, bare);
        assert_eq!(bare.as_str(), "/example/ssh");
    }

    #[test]
    fn test_name_display() {
        let name = CredentialName::new("example/rsa").unwrap();
        assert_eq!(name.to_string(), "/example/rsa");
    }
}
