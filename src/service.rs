use crate::error::Unimplemented;
use crate::platform::{format_platform_version, HostPlatform, Platform};

/// The one method this service answers
pub const GET_PLATFORM_VERSION: &str = "getPlatformVersion";

/// Answers "get platform version" queries
///
/// Stateless: every call re-queries the platform, so a service can be
/// shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct VersionQueryService<P = HostPlatform> {
    platform: P,
}

impl VersionQueryService<HostPlatform> {
    /// Create a service backed by the host platform
    pub fn new() -> Self {
        Self::with_platform(HostPlatform)
    }
}

impl<P: Platform> VersionQueryService<P> {
    /// Create a service backed by a specific platform provider
    pub fn with_platform(platform: P) -> Self {
        Self { platform }
    }

    /// Platform provider behind this service
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Method names this service handles
    pub fn supported_methods() -> &'static [&'static str] {
        &[GET_PLATFORM_VERSION]
    }

    /// Handle a request by method name
    ///
    /// Returns `"<Platform> <Version>"` for `getPlatformVersion` and
    /// [`Unimplemented`] carrying the name for anything else.
    pub fn handle(&self, method_name: &str) -> Result<String, Unimplemented> {
        match method_name {
            GET_PLATFORM_VERSION => Ok(self.platform_version()),
            other => {
                tracing::debug!("No handler for method '{}'", other);
                Err(Unimplemented::new(other))
            }
        }
    }

    /// Current `"<Platform> <Version>"` string
    pub fn platform_version(&self) -> String {
        let version = self.platform.os_version();
        let reply = format_platform_version(self.platform.name(), &version);
        tracing::debug!("Platform version: {}", reply);
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{StaticPlatform, PLATFORM_NAME};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts lookups to prove nothing is cached
    struct CountingPlatform {
        calls: AtomicUsize,
    }

    impl Platform for CountingPlatform {
        fn name(&self) -> &str {
            "macOS"
        }

        fn os_version(&self) -> String {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            format!("14.{}", n)
        }
    }

    #[test]
    fn get_platform_version_on_macos_host() {
        let service = VersionQueryService::with_platform(StaticPlatform::new("macOS", "14.2"));
        assert_eq!(service.handle("getPlatformVersion").unwrap(), "macOS 14.2");
    }

    #[test]
    fn get_platform_version_on_ios_host() {
        let service = VersionQueryService::with_platform(StaticPlatform::new("iOS", "17.0"));
        assert_eq!(service.handle("getPlatformVersion").unwrap(), "iOS 17.0");
    }

    #[test]
    fn unknown_method_is_unimplemented() {
        let service = VersionQueryService::new();
        assert_eq!(service.handle("reboot"), Err(Unimplemented::new("reboot")));
    }

    #[test]
    fn empty_method_is_unimplemented() {
        let service = VersionQueryService::new();
        assert_eq!(service.handle(""), Err(Unimplemented::new("")));
    }

    #[test]
    fn method_names_are_case_sensitive() {
        let service = VersionQueryService::new();
        assert!(service.handle("getplatformversion").is_err());
        assert!(service.handle("GetPlatformVersion").is_err());
        assert!(service.handle(" getPlatformVersion").is_err());
    }

    #[test]
    fn host_reply_starts_with_platform_name() {
        let service = VersionQueryService::new();
        let reply = service.handle(GET_PLATFORM_VERSION).unwrap();
        assert!(reply.starts_with(&format!("{} ", PLATFORM_NAME)));
        assert!(reply.len() > PLATFORM_NAME.len() + 1);
    }

    #[test]
    fn each_call_requeries_the_platform() {
        let service = VersionQueryService::with_platform(CountingPlatform {
            calls: AtomicUsize::new(0),
        });

        assert_eq!(service.handle(GET_PLATFORM_VERSION).unwrap(), "macOS 14.0");
        assert_eq!(service.handle(GET_PLATFORM_VERSION).unwrap(), "macOS 14.1");
        assert_eq!(service.platform().calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unimplemented_does_not_query_platform() {
        let service = VersionQueryService::with_platform(CountingPlatform {
            calls: AtomicUsize::new(0),
        });

        assert!(service.handle("reboot").is_err());
        assert_eq!(service.platform().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn supported_methods_lists_get_platform_version() {
        assert_eq!(
            VersionQueryService::<HostPlatform>::supported_methods(),
            &["getPlatformVersion"]
        );
    }
}
