#![deny(unsafe_code)]

//! Shared test utilities for the buildstamp workspace.
//!
//! Provides identity fixtures and tracing helpers so that individual crate
//! tests stay concise and consistent.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! buildstamp-test-utils = { workspace = true }
//! ```

pub mod identity;
pub mod tracing_setup;
