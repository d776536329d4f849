//! Typed build identity and the version-constants check.
//!
//! [`BuildIdentity`] is the runtime view of the metadata the build script
//! stamps into this crate. [`BuildIdentity::check`] enforces the contract
//! every build must satisfy; [`BuildIdentity::parse`] and
//! [`BuildIdentity::load`] apply the same contract to a JSON identity
//! document, such as one emitted by `buildstamp info --json`.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::build_info;

/// Errors that can occur while loading or checking a build identity.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("failed to read identity document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse identity document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("version must be a non-empty string")]
    EmptyVersion,
}

/// Build identity metadata for one compiled artifact.
///
/// Every field is a string by construction. A document that carries
/// anything other than a string for one of them is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildIdentity {
    /// Crate version from Cargo.toml.
    pub version: String,

    /// Full git commit hash, or empty for a working-tree build.
    pub git_commit: String,

    /// Build timestamp as Unix epoch seconds.
    pub build_timestamp: String,

    /// Build profile (`debug` or `release`).
    pub build_profile: String,
}

impl BuildIdentity {
    /// Snapshot of the constants stamped into this crate.
    pub fn current() -> Self {
        Self {
            version: build_info::VERSION.to_string(),
            git_commit: build_info::GIT_COMMIT.to_string(),
            build_timestamp: build_info::BUILD_TIMESTAMP.to_string(),
            build_profile: build_info::BUILD_PROFILE.to_string(),
        }
    }

    /// Verify the version-constants contract.
    ///
    /// The commit may be any string, the empty one included. The version
    /// must be non-empty. Read-only; completes in constant time.
    pub fn check(&self) -> Result<(), IdentityError> {
        if self.version.is_empty() {
            return Err(IdentityError::EmptyVersion);
        }
        tracing::debug!(
            version = %self.version,
            packaged = self.is_packaged(),
            "build identity ok"
        );
        Ok(())
    }

    /// Parse a JSON identity document and check it.
    pub fn parse(s: &str) -> Result<Self, IdentityError> {
        let identity: BuildIdentity = serde_json::from_str(s)?;
        identity.check()?;
        Ok(identity)
    }

    /// Load an identity document from a file and check it.
    pub fn load(path: &Path) -> Result<Self, IdentityError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// First seven characters of the commit hash, or `None` for a
    /// working-tree build.
    pub fn short_commit(&self) -> Option<&str> {
        if self.git_commit.is_empty() {
            return None;
        }
        // Checked slice: a document may carry a commit shorter than seven
        // bytes, or one that is not a hash at all.
        Some(self.git_commit.get(..7).unwrap_or(&self.git_commit))
    }

    /// Whether this build carries a commit stamp, i.e. was built from a git
    /// checkout rather than an exported tree.
    pub fn is_packaged(&self) -> bool {
        !self.git_commit.is_empty()
    }
}

impl fmt::Display for BuildIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.short_commit() {
            Some(commit) => write!(f, "{} ({}, {})", self.version, commit, self.build_profile),
            None => write!(f, "{} ({})", self.version, self.build_profile),
        }
    }
}
