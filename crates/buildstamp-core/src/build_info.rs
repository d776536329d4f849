//! Build-time metadata embedded by the build script.
//!
//! Provides version, git commit hash, build timestamp, and build profile
//! for use in status displays, logging, and diagnostics.

/// The git commit hash at build time (full SHA).
///
/// Empty when the crate was built outside a git checkout, e.g. from an
/// exported source tree.
pub const GIT_COMMIT: &str = env!("BUILDSTAMP_GIT_COMMIT");

/// The build timestamp as a Unix epoch string.
pub const BUILD_TIMESTAMP: &str = env!("BUILDSTAMP_BUILD_TIMESTAMP");

/// The build profile (`debug` or `release`).
pub const BUILD_PROFILE: &str = env!("BUILDSTAMP_BUILD_PROFILE");

/// The crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Return a formatted identity string including short commit and profile.
///
/// Example: `"0.3.1 (4f5a9c0, debug)"`, or `"0.3.1 (debug)"` when there is
/// no commit stamp.
pub fn version_string() -> String {
    crate::BuildIdentity::current().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string_not_empty() {
        let v = version_string();
        assert!(!v.is_empty());
        assert!(v.contains(VERSION));
    }

    #[test]
    fn test_git_commit_is_hex_or_empty() {
        // Empty is legal for a working-tree build; anything stamped must be
        // a hex SHA.
        assert!(GIT_COMMIT.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_build_timestamp_is_numeric() {
        assert!(!BUILD_TIMESTAMP.is_empty());
        assert!(BUILD_TIMESTAMP.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_build_profile() {
        // In test mode, profile is "debug"
        assert_eq!(BUILD_PROFILE, "debug");
    }
}
