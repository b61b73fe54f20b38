// crates/shared-kernel/src/value_objects/descriptor.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Prerelease;

/// Four-field release identifier: `major.minor.patch` plus an optional
/// pre-release label.
///
/// Equality is structural. No `PartialOrd`/`Ord`: the order of a pre-release
/// relative to its final release is undefined here.
///
/// Serialized as a map with exactly the keys `major`, `minor`, `patch` and
/// `prerelease`; a final release carries `"prerelease": null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionDescriptor {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    #[serde(default)]
    pub prerelease: Option<Prerelease>,
}

impl VersionDescriptor {
    #[inline]
    pub const fn new(major: u32, minor: u32, patch: u32, prerelease: Option<Prerelease>) -> Self {
        Self { major, minor, patch, prerelease }
    }

    /// A final release: no pre-release label.
    #[inline]
    pub const fn release(major: u32, minor: u32, patch: u32) -> Self {
        Self::new(major, minor, patch, None)
    }

    #[inline]
    pub const fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    pub fn prerelease_label(&self) -> Option<&str> {
        self.prerelease.as_ref().map(Prerelease::as_str)
    }

    #[inline]
    pub const fn core(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }
}

impl fmt::Display for VersionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("v")?;
        }
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(label) = &self.prerelease {
            write!(f, "-{label}")?;
        }
        Ok(())
    }
}
