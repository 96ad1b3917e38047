/// Version reported when the host lookup fails or returns nothing
pub const UNKNOWN_VERSION: &str = "unknown";

/// Trim a raw version string, substituting [`UNKNOWN_VERSION`] when blank
///
/// Host facilities hand back values with trailing newlines or NUL padding
/// (sysctl, registry, `/proc`).
pub fn normalize_version(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    if trimmed.is_empty() {
        UNKNOWN_VERSION.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Build the `"<Platform> <Version>"` reply
pub fn format_platform_version(name: &str, version: &str) -> String {
    format!("{} {}", name, version)
}

/// Convert a NUL-terminated byte buffer into a string
///
/// Stops at the first NUL; invalid UTF-8 is replaced rather than rejected.
pub fn string_from_c_buffer(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}
