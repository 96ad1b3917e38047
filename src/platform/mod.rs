//! Platform-specific OS version lookups
//!
//! One implementation per target OS, selected at compile time. Every lookup
//! goes to the host on each call; nothing is cached.

pub mod common;

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod apple;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "ios")]
pub mod ios;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "android")]
pub mod android;

use anyhow::Result;

pub use common::{format_platform_version, normalize_version, UNKNOWN_VERSION};

/// Human-readable name of the platform this binary was built for
#[cfg(target_os = "macos")]
pub const PLATFORM_NAME: &str = "macOS";

#[cfg(target_os = "ios")]
pub const PLATFORM_NAME: &str = "iOS";

#[cfg(target_os = "windows")]
pub const PLATFORM_NAME: &str = "Windows";

#[cfg(target_os = "linux")]
pub const PLATFORM_NAME: &str = "Linux";

#[cfg(target_os = "android")]
pub const PLATFORM_NAME: &str = "Android";

#[cfg(not(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "windows",
    target_os = "linux",
    target_os = "android"
)))]
pub const PLATFORM_NAME: &str = std::env::consts::OS;

/// Source of the platform name and OS version
pub trait Platform: Send + Sync {
    /// Static platform name, e.g. `macOS`
    fn name(&self) -> &str;

    /// Current OS version, e.g. `14.2`
    ///
    /// Never fails: lookups that go wrong report [`UNKNOWN_VERSION`].
    fn os_version(&self) -> String;
}

/// The platform the process is running on
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl Platform for HostPlatform {
    fn name(&self) -> &str {
        PLATFORM_NAME
    }

    fn os_version(&self) -> String {
        match query_os_version() {
            Ok(version) => normalize_version(&version),
            Err(e) => {
                tracing::warn!("Failed to query {} version: {:#}", PLATFORM_NAME, e);
                UNKNOWN_VERSION.to_string()
            }
        }
    }
}

/// A platform with a fixed name and version
///
/// Used when the embedding host already knows its version, and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPlatform {
    name: String,
    version: String,
}

impl StaticPlatform {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Platform for StaticPlatform {
    fn name(&self) -> &str {
        &self.name
    }

    fn os_version(&self) -> String {
        normalize_version(&self.version)
    }
}

/// Ask the host OS for its version using the target's mechanism
fn query_os_version() -> Result<String> {
    #[cfg(target_os = "macos")]
    {
        macos::os_version()
    }

    #[cfg(target_os = "ios")]
    {
        ios::os_version()
    }

    #[cfg(target_os = "windows")]
    {
        windows::os_version()
    }

    #[cfg(target_os = "linux")]
    {
        linux::os_version()
    }

    #[cfg(target_os = "android")]
    {
        android::os_version()
    }

    #[cfg(not(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "windows",
        target_os = "linux",
        target_os = "android"
    )))]
    {
        Ok(UNKNOWN_VERSION.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_platform_reports_build_target_name() {
        assert_eq!(HostPlatform.name(), PLATFORM_NAME);
        assert!(!PLATFORM_NAME.is_empty());
    }

    #[test]
    fn host_platform_version_is_never_empty() {
        let version = HostPlatform.os_version();
        assert!(!version.is_empty());
        assert_eq!(version, version.trim());
    }

    #[test]
    fn host_platform_version_is_stable_between_calls() {
        assert_eq!(HostPlatform.os_version(), HostPlatform.os_version());
    }

    #[test]
    fn static_platform_returns_given_values() {
        let platform = StaticPlatform::new("iOS", "17.0");
        assert_eq!(platform.name(), "iOS");
        assert_eq!(platform.os_version(), "17.0");
    }

    #[test]
    fn static_platform_with_blank_version_reports_unknown() {
        let platform = StaticPlatform::new("macOS", "  ");
        assert_eq!(platform.os_version(), UNKNOWN_VERSION);
    }
}
