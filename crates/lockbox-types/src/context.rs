//! Opaque caller context threaded through credential operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Access-control entry supplied by the caller.
///
/// Lockbox never interprets this value. It is carried alongside each
/// request and handed to the credential store with every saved version,
/// so the authorization layer behind the store can act on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessControlEntry(pub Value);

/// Audit context supplied by the caller.
///
/// Opaque to Lockbox; forwarded to the store so the audit layer can
/// record who asked for what.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditContext(pub Value);
