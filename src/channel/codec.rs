use serde_json::{json, Value};

use super::{MethodCall, MethodResponse};
use crate::error::ChannelError;

/// JSON method codec
///
/// Wire format:
/// - call: `{"method": "<name>", "args": <value>}`
/// - success: `[<result>]`
/// - error: `["<code>", "<message>", <details>]`
/// - not implemented: empty reply
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMethodCodec;

impl JsonMethodCodec {
    /// Encode a method call
    pub fn encode_call(&self, call: &MethodCall) -> Result<Vec<u8>, ChannelError> {
        Ok(serde_json::to_vec(call)?)
    }

    /// Decode a method call
    pub fn decode_call(&self, bytes: &[u8]) -> Result<MethodCall, ChannelError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ChannelError::InvalidCall {
                message: "empty message".to_string(),
            });
        }

        Ok(serde_json::from_slice(bytes)?)
    }

    /// Encode a reply envelope
    pub fn encode_response(&self, response: &MethodResponse) -> Vec<u8> {
        match response_envelope(response) {
            Some(envelope) => envelope.to_string().into_bytes(),
            None => Vec::new(),
        }
    }

    /// Decode a reply envelope
    pub fn decode_response(&self, bytes: &[u8]) -> Result<MethodResponse, ChannelError> {
        if bytes.is_empty() {
            return Ok(MethodResponse::NotImplemented);
        }

        let value: Value = serde_json::from_slice(bytes)?;
        envelope_to_response(value)
    }
}

/// Reply envelope as a JSON value; `None` for not-implemented
pub fn response_envelope(response: &MethodResponse) -> Option<Value> {
    match response {
        MethodResponse::Success(result) => Some(json!([result])),
        MethodResponse::Error {
            code,
            message,
            details,
        } => Some(json!([code, message, details])),
        MethodResponse::NotImplemented => None,
    }
}

/// Interpret a JSON reply envelope
pub fn envelope_to_response(value: Value) -> Result<MethodResponse, ChannelError> {
    let Value::Array(mut items) = value else {
        return Err(ChannelError::InvalidCall {
            message: "reply envelope must be an array".to_string(),
        });
    };

    match items.len() {
        0 => Ok(MethodResponse::NotImplemented),
        1 => Ok(MethodResponse::Success(items.remove(0))),
        3 => {
            let details = items.remove(2);
            let message = match items.remove(1) {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            };
            let code = match items.remove(0) {
                Value::String(s) => s,
                other => other.to_string(),
            };
            Ok(MethodResponse::Error {
                code,
                message,
                details,
            })
        }
        n => Err(ChannelError::InvalidCall {
            message: format!("reply envelope has {} items, expected 1 or 3", n),
        }),
    }
}
