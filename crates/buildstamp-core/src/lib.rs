#![deny(unsafe_code)]

//! Build identity stamping and verification.
//!
//! The build script embeds the crate version, git commit hash, build
//! timestamp, and build profile into the compiled artifact. This crate
//! exposes them as constants in [`build_info`], as the typed
//! [`BuildIdentity`] value, and enforces the contract every build must
//! satisfy: the commit is always a string (empty for a working-tree build),
//! the version is never empty.

/// Compile-time build metadata (version, git commit, timestamp, profile).
pub mod build_info;
/// Typed build identity and the version-constants check.
pub mod identity;

pub use identity::{BuildIdentity, IdentityError};
