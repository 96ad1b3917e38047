use anyhow::{Context, Result};
use serde_json::Value;

use crate::channel::{JsonMethodCodec, MethodCall, MethodResponse};
use crate::commands::utils::build_messenger;
use crate::config::Config;
use crate::error::Unimplemented;

/// Invoke one method through the configured channel and print the result
pub fn run_call(config: &Config, method: &str, raw_args: Option<&str>) -> Result<()> {
    let args = match raw_args {
        Some(raw) => serde_json::from_str(raw)
            .with_context(|| format!("Invalid JSON arguments: {}", raw))?,
        None => Value::Null,
    };
    let call = MethodCall::with_args(method, args);

    let messenger = build_messenger(config);
    let codec = JsonMethodCodec;

    let message = codec.encode_call(&call).context("Failed to encode method call")?;
    let reply = messenger
        .send(&config.channel.name, &message)
        .with_context(|| format!("No channel registered as '{}'", config.channel.name))?;
    let response = codec.decode_response(&reply).context("Failed to decode reply")?;

    println!("{}", render_response(&call.method, response)?);

    Ok(())
}

/// Turn a reply into printable output, or an error for failures
pub fn render_response(method: &str, response: MethodResponse) -> Result<String> {
    match response {
        MethodResponse::Success(Value::String(s)) => Ok(s),
        MethodResponse::Success(other) => Ok(other.to_string()),
        MethodResponse::Error { code, message, .. } => anyhow::bail!(
            "Method '{}' failed [{}]: {}",
            method,
            code,
            message.unwrap_or_default()
        ),
        MethodResponse::NotImplemented => Err(Unimplemented::new(method).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_success_prints_bare_string() {
        let output = render_response(
            "getPlatformVersion",
            MethodResponse::Success(json!("macOS 14.2")),
        )
        .unwrap();
        assert_eq!(output, "macOS 14.2");
    }

    #[test]
    fn non_string_success_prints_json() {
        let output = render_response("x", MethodResponse::Success(json!({"a": 1}))).unwrap();
        assert_eq!(output, r#"{"a":1}"#);
    }

    #[test]
    fn not_implemented_is_unimplemented_error() {
        let err = render_response("reboot", MethodResponse::NotImplemented).unwrap_err();
        let unimplemented = err.downcast_ref::<Unimplemented>().unwrap();
        assert_eq!(unimplemented.method, "reboot");
    }

    #[test]
    fn error_response_names_code() {
        let err = render_response(
            "x",
            MethodResponse::Error {
                code: "bad_call".to_string(),
                message: Some("broken".to_string()),
                details: Value::Null,
            },
        )
        .unwrap_err();
        let text = err.to_string();
        assert!(text.contains("bad_call"));
        assert!(text.contains("broken"));
    }

    #[test]
    fn invalid_json_args_are_rejected() {
        let result = run_call(&Config::default(), "getPlatformVersion", Some("{oops"));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_method_call_fails() {
        let err = run_call(&Config::default(), "reboot", None).unwrap_err();
        assert!(err.downcast_ref::<Unimplemented>().is_some());
    }

    #[test]
    fn platform_version_call_succeeds() {
        assert!(run_call(&Config::default(), "getPlatformVersion", None).is_ok());
    }
}
