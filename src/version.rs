// src/version.rs
//! @generated by scripts/bump-oss-version.js
//!
//! Rewritten on every version bump. Do not edit by hand.

use react_native_version_kernel::{Prerelease, VersionDescriptor};

pub static VERSION: VersionDescriptor =
    VersionDescriptor::new(0, 57, 0, Some(Prerelease::from_static("rc.0")));
