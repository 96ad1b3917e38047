use anyhow::Result;

use super::apple::sysctl_string;

/// Get the iOS system version (e.g. "17.0")
pub fn os_version() -> Result<String> {
    sysctl_string("kern.osproductversion")
}
