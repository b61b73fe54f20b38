// src/diagnostics.rs
//! Helpers for code that stamps the framework version onto logs and telemetry.

use react_native_version_kernel::VersionDescriptor;

use crate::VERSION;

/// Startup line in the form `"{app} v0.57.0-rc.0"`.
pub fn banner(app: &str) -> String {
    format!("{app} v{VERSION}")
}

/// Telemetry key/value pairs. An absent prerelease is reported as `""`.
pub fn tags(version: &VersionDescriptor) -> [(&'static str, String); 4] {
    [
        ("version.major", version.major.to_string()),
        ("version.minor", version.minor.to_string()),
        ("version.patch", version.patch.to_string()),
        ("version.prerelease", version.prerelease_label().unwrap_or_default().to_string()),
    ]
}

/// Pretty JSON with exactly the keys `major`, `minor`, `patch`, `prerelease`.
#[cfg(feature = "json")]
pub fn to_json(version: &VersionDescriptor) -> react_native_version_kernel::Result<String> {
    Ok(serde_json::to_string_pretty(version)?)
}

/// Emits one INFO event describing the running version.
///
/// No subscriber is installed here; the event goes wherever the host routes
/// `tracing` output.
#[cfg(feature = "tracing")]
pub fn record_startup(component: &str) {
    tracing::info!(
        target: "react_native::version",
        component,
        version = %VERSION,
        major = VERSION.major,
        minor = VERSION.minor,
        patch = VERSION.patch,
        prerelease = VERSION.prerelease_label().unwrap_or_default(),
        "framework version"
    );
}
