use anyhow::{Context, Result};
use std::path::Path;

use plist::Value;

use super::apple::sysctl_string;

/// Location of the system version property list
const SYSTEM_VERSION_PLIST: &str = "/System/Library/CoreServices/SystemVersion.plist";

/// Get the macOS product version (e.g. "14.2")
///
/// Prefers `kern.osproductversion`, which is missing before 10.13.4;
/// falls back to the SystemVersion plist.
pub fn os_version() -> Result<String> {
    match sysctl_string("kern.osproductversion") {
        Ok(version) if !version.trim().is_empty() => Ok(version),
        Ok(_) => read_plist_version(Path::new(SYSTEM_VERSION_PLIST)),
        Err(e) => {
            tracing::debug!("sysctl lookup failed, reading plist: {:#}", e);
            read_plist_version(Path::new(SYSTEM_VERSION_PLIST))
        }
    }
}

/// Read `ProductVersion` from a SystemVersion-style plist
fn read_plist_version(path: &Path) -> Result<String> {
    let value = Value::from_file(path)
        .with_context(|| format!("Failed to read plist file: {}", path.display()))?;

    product_version(&value)
        .with_context(|| format!("No ProductVersion in plist: {}", path.display()))
}

/// Extract `ProductVersion` from a parsed plist dictionary
fn product_version(value: &Value) -> Option<String> {
    value
        .as_dictionary()
        .and_then(|dict| dict.get("ProductVersion"))
        .and_then(Value::as_string)
        .filter(|version| !version.is_empty())
        .map(str::to_string)
}
