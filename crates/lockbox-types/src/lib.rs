//! # Lockbox Types
//!
//! Core types, enums, and errors shared across all Lockbox crates.
//!
//! This crate provides the fundamental building blocks for the Lockbox
//! credential engine, including:
//!
//! - The closed set of credential kinds and their capability table
//! - A validated wrapper for credential names
//! - Structured validation errors with catalog templates and parameters
//! - Opaque access-control and audit context values
//!
//! ## Example
//!
//! ```
//! use lockbox_types::{CredentialKind, CredentialName};
//!
//! // Create a validated credential name; a missing leading slash is added
//! let name = CredentialName::new("example/password").unwrap();
//! assert_eq!(name.as_str(), "/example/password");
//!
//! // Consult the capability table
//! let caps = CredentialKind::Password.capabilities();
//! assert!(caps.generatable);
//! assert!(caps.regeneratable);
//! assert!(!CredentialKind::Json.capabilities().regeneratable);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod enums;
pub mod errors;
pub mod identifiers;

// Re-export common types for convenience
pub use context::{AccessControlEntry, AuditContext};
pub use enums::{CredentialKind, RequestMode, TypeCapabilities};
pub use errors::{LockboxError, Result, ValidationError};
pub use identifiers::CredentialName;
