// src/lib.rs
//! Process-wide version descriptor for react-native-windows.
//!
//! ```
//! let v = react_native_version::version();
//! assert_eq!(v.to_string(), "0.57.0-rc.0");
//! ```

pub mod diagnostics;
mod version;

pub use react_native_version_kernel::{Prerelease, Result, VersionDescriptor, VersionError};
pub use version::VERSION;

/// Read-only accessor for the generated descriptor.
///
/// Every call returns the same `'static` reference.
#[inline]
pub fn version() -> &'static VersionDescriptor {
    &VERSION
}
