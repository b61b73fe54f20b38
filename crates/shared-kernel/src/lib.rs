// crates/shared-kernel/src/lib.rs
//! Value objects shared by everything that reads the framework version.

pub use error::{Result, VersionError};

pub mod error;
pub mod value_objects;

pub use value_objects::{Prerelease, VersionDescriptor};
