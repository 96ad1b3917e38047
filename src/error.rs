use thiserror::Error;

/// A method name with no handler behind it
///
/// Recoverable: the caller decides how to present "feature not available".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Method not implemented: '{method}'")]
pub struct Unimplemented {
    pub method: String,
}

impl Unimplemented {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }
}

/// Errors raised while decoding messages on a method channel
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Failed to decode method call: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid method call: {message}")]
    InvalidCall { message: String },
}

impl ChannelError {
    /// Error code reported in the reply envelope
    pub fn code(&self) -> &'static str {
        "bad_call"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unimplemented_message_names_the_method() {
        let err = Unimplemented::new("reboot");
        assert_eq!(err.method, "reboot");
        assert_eq!(err.to_string(), "Method not implemented: 'reboot'");
    }

    #[test]
    fn unimplemented_keeps_empty_method_name() {
        let err = Unimplemented::new("");
        assert_eq!(err.method, "");
    }

    #[test]
    fn invalid_call_reports_bad_call_code() {
        let err = ChannelError::InvalidCall {
            message: "empty message".to_string(),
        };
        assert_eq!(err.code(), "bad_call");
        assert!(err.to_string().contains("empty message"));
    }
}
