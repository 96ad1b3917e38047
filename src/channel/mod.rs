//! Method channel adapter
//!
//! Wires the version query service into a host messenger: named channels,
//! call/response envelopes and a JSON method codec. The service knows nothing
//! about this layer.

mod codec;

pub use codec::{envelope_to_response, response_envelope, JsonMethodCodec};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ChannelError;
use crate::platform::Platform;
use crate::service::VersionQueryService;

/// Channel name the plugin registers under
pub const DEFAULT_CHANNEL_NAME: &str = "task_manager";

/// A single request on a method channel
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub args: Value,
}

impl MethodCall {
    /// Create a call with no arguments
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: Value::Null,
        }
    }

    pub fn with_args(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// Outcome of a method call
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    Success(Value),
    Error {
        code: String,
        message: Option<String>,
        details: Value,
    },
    /// No handler for the requested method
    NotImplemented,
}

impl MethodResponse {
    /// Error response from a channel decode failure
    pub fn from_channel_error(err: &ChannelError) -> Self {
        MethodResponse::Error {
            code: err.code().to_string(),
            message: Some(err.to_string()),
            details: Value::Null,
        }
    }
}

/// Something that answers method calls
pub trait MethodCallHandler: Send + Sync {
    fn handle_call(&self, call: &MethodCall) -> MethodResponse;
}

impl<P: Platform> MethodCallHandler for VersionQueryService<P> {
    fn handle_call(&self, call: &MethodCall) -> MethodResponse {
        match self.handle(&call.method) {
            Ok(version) => MethodResponse::Success(Value::String(version)),
            Err(e) => {
                tracing::debug!("Replying not implemented for '{}'", e.method);
                MethodResponse::NotImplemented
            }
        }
    }
}

/// A named channel bound to a handler
#[derive(Clone)]
pub struct MethodChannel {
    name: String,
    handler: Arc<dyn MethodCallHandler>,
    codec: JsonMethodCodec,
}

impl MethodChannel {
    pub fn new(name: impl Into<String>, handler: Arc<dyn MethodCallHandler>) -> Self {
        Self {
            name: name.into(),
            handler,
            codec: JsonMethodCodec,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dispatch a decoded call to the handler
    pub fn invoke(&self, call: &MethodCall) -> MethodResponse {
        tracing::debug!("Channel '{}' invoking '{}'", self.name, call.method);
        self.handler.handle_call(call)
    }

    /// Decode a message, dispatch it, and encode the reply
    ///
    /// Undecodable messages produce a `bad_call` error envelope.
    pub fn invoke_encoded(&self, message: &[u8]) -> Vec<u8> {
        let response = match self.codec.decode_call(message) {
            Ok(call) => self.invoke(&call),
            Err(e) => {
                tracing::warn!("Channel '{}' received a bad call: {}", self.name, e);
                MethodResponse::from_channel_error(&e)
            }
        };
        self.codec.encode_response(&response)
    }
}

impl std::fmt::Debug for MethodChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodChannel")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Routes messages to channels by name
#[derive(Debug, Default, Clone)]
pub struct Messenger {
    channels: HashMap<String, MethodChannel>,
}

impl Messenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a channel, replacing any previous one with the same name
    pub fn register(&mut self, channel: MethodChannel) {
        if self.channels.contains_key(channel.name()) {
            tracing::debug!("Replacing handler on channel '{}'", channel.name());
        }
        self.channels.insert(channel.name().to_string(), channel);
    }

    /// Remove a channel; returns whether it was registered
    pub fn unregister(&mut self, name: &str) -> bool {
        self.channels.remove(name).is_some()
    }

    pub fn channel(&self, name: &str) -> Option<&MethodChannel> {
        self.channels.get(name)
    }

    /// Deliver an encoded message
    ///
    /// Returns `None` when nothing is registered under `name`.
    pub fn send(&self, name: &str, message: &[u8]) -> Option<Vec<u8>> {
        match self.channels.get(name) {
            Some(channel) => Some(channel.invoke_encoded(message)),
            None => {
                tracing::debug!("No channel registered as '{}'", name);
                None
            }
        }
    }
}

/// Register the version query service on `messenger` under `channel_name`
pub fn register_with<P>(messenger: &mut Messenger, channel_name: &str, service: VersionQueryService<P>)
where
    P: Platform + 'static,
{
    messenger.register(MethodChannel::new(channel_name, Arc::new(service)));
    tracing::debug!("Registered version query service on '{}'", channel_name);
}
