//! Platform version query service
//!
//! [`VersionQueryService`] answers `getPlatformVersion` with
//! `"<Platform> <Version>"` for the OS it runs on and reports
//! [`Unimplemented`] for any other method. The [`channel`] module adapts it
//! to a named method channel with a JSON method codec.

pub mod channel;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod platform;
pub mod service;

pub use channel::{MethodCall, MethodCallHandler, MethodChannel, MethodResponse, Messenger};
pub use error::{ChannelError, Unimplemented};
pub use platform::{HostPlatform, Platform, StaticPlatform};
pub use service::{VersionQueryService, GET_PLATFORM_VERSION};
