//! Identity fixtures for tests.
//!
//! Two canonical [`BuildIdentity`] values cover the states the stamp can be
//! in: a packaged build with a full commit hash, and a working-tree build
//! with none.

use buildstamp_core::BuildIdentity;

/// An identity as stamped by a packaged release build.
pub fn packaged_identity() -> BuildIdentity {
    BuildIdentity {
        version: "24.10.0".to_string(),
        git_commit: "4f5a9c0d813e2b6a7c1f0e9d8b7a6c5d4e3f2a1b".to_string(),
        build_timestamp: "1754524800".to_string(),
        build_profile: "release".to_string(),
    }
}

/// An identity as stamped from an unpackaged working tree: no commit,
/// dev-suffixed version.
pub fn working_tree_identity() -> BuildIdentity {
    BuildIdentity {
        version: "24.10.0-dev".to_string(),
        git_commit: String::new(),
        build_timestamp: "1754524800".to_string(),
        build_profile: "debug".to_string(),
    }
}

/// Serialize an identity document with the given version and commit,
/// keeping the remaining fields at working-tree defaults.
pub fn identity_doc(version: &str, git_commit: &str) -> String {
    let mut identity = working_tree_identity();
    identity.version = version.to_string();
    identity.git_commit = git_commit.to_string();
    serde_json::to_string_pretty(&identity).expect("fixture identity serializes")
}
