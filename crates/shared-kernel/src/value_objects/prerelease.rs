// crates/shared-kernel/src/value_objects/prerelease.rs
use std::{borrow::Cow, fmt, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VersionError};

/// Pre-release qualifier such as `rc.0`. Never empty.
///
/// Labels carry no ordering; `rc.0` is not comparable to another label or to a
/// final release through this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Prerelease(Cow<'static, str>);

impl Prerelease {
    /// Builds a label from a literal, usable in `const` and `static` initializers.
    ///
    /// # Panics
    ///
    /// Panics if `label` is empty. In a const context that is a compile error.
    pub const fn from_static(label: &'static str) -> Self {
        assert!(!label.is_empty(), "prerelease label must not be empty");
        Self(Cow::Borrowed(label))
    }

    pub fn new(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(VersionError::EmptyPrerelease);
        }
        Ok(Self(Cow::Owned(label)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Prerelease {
    type Error = VersionError;

    fn try_from(label: String) -> Result<Self> {
        Self::new(label)
    }
}

impl TryFrom<&str> for Prerelease {
    type Error = VersionError;

    fn try_from(label: &str) -> Result<Self> {
        Self::new(label)
    }
}

impl From<Prerelease> for String {
    fn from(label: Prerelease) -> Self {
        label.0.into_owned()
    }
}

impl Deref for Prerelease {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Prerelease {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Prerelease {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Prerelease {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
