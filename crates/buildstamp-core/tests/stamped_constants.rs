//! Contract tests for the metadata actually stamped into this crate.
//!
//! These run against whatever the build script embedded, so they must hold
//! both for a packaged build (commit present) and for a build from an
//! exported tree (commit empty).

use buildstamp_core::{BuildIdentity, build_info};

#[test]
fn version_is_populated() {
    assert!(!build_info::VERSION.is_empty());
    assert_eq!(build_info::VERSION, env!("CARGO_PKG_VERSION"));
}

#[test]
fn git_commit_is_a_string_stamp() {
    // Empty is the documented state outside a git checkout; a stamped value
    // must be a hex SHA.
    assert!(build_info::GIT_COMMIT.chars().all(|c| c.is_ascii_hexdigit()));
    if !build_info::GIT_COMMIT.is_empty() {
        assert_eq!(build_info::GIT_COMMIT.len(), 40);
    }
}

#[test]
fn current_identity_passes_check() {
    buildstamp_test_utils::tracing_setup::init_tracing();

    let identity = BuildIdentity::current();
    identity
        .check()
        .expect("stamped identity must satisfy the version-constants contract");
}

#[test]
fn current_identity_survives_document_round_trip() {
    let identity = BuildIdentity::current();
    let doc = serde_json::to_string(&identity).unwrap();
    let parsed = BuildIdentity::parse(&doc).unwrap();
    assert_eq!(parsed, identity);
}
