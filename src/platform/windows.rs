use anyhow::{Context, Result};

use winreg::enums::*;
use winreg::RegKey;

/// Registry key holding the Windows version values
const CURRENT_VERSION_KEY: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion";

/// Get the Windows version (e.g. "10.0.22631")
///
/// Windows 10 and later expose numeric major/minor values; older releases
/// only have the legacy `CurrentVersion` string.
pub fn os_version() -> Result<String> {
    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);

    let key = hklm
        .open_subkey_with_flags(CURRENT_VERSION_KEY, KEY_READ)
        .with_context(|| format!("Failed to open registry key: HKLM\\{}", CURRENT_VERSION_KEY))?;

    let build: String = key.get_value("CurrentBuildNumber").with_context(|| {
        format!(
            "Failed to read registry value: HKLM\\{}\\CurrentBuildNumber",
            CURRENT_VERSION_KEY
        )
    })?;

    let major: Result<u32, _> = key.get_value("CurrentMajorVersionNumber");
    let minor: Result<u32, _> = key.get_value("CurrentMinorVersionNumber");

    match (major, minor) {
        (Ok(major), Ok(minor)) => Ok(format_version(major, minor, &build)),
        _ => {
            let legacy: String = key.get_value("CurrentVersion").with_context(|| {
                format!(
                    "Failed to read registry value: HKLM\\{}\\CurrentVersion",
                    CURRENT_VERSION_KEY
                )
            })?;
            Ok(format!("{}.{}", legacy.trim(), build.trim()))
        }
    }
}

/// Join version components as `<major>.<minor>.<build>`
fn format_version(major: u32, minor: u32, build: &str) -> String {
    format!("{}.{}.{}", major, minor, build.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_version_joins_components() {
        assert_eq!(format_version(10, 0, "22631"), "10.0.22631");
        assert_eq!(format_version(10, 0, " 19045 "), "10.0.19045");
    }

    #[test]
    fn host_version_has_three_components() {
        let version = os_version().unwrap();
        assert!(version.split('.').count() >= 3);
    }
}
