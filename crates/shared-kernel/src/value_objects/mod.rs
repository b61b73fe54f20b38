// crates/shared-kernel/src/value_objects/mod.rs
pub mod descriptor;
pub mod prerelease;

pub use descriptor::VersionDescriptor;
pub use prerelease::Prerelease;
