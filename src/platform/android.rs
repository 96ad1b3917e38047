use anyhow::{Context, Result};
use std::ffi::CString;

use super::common::string_from_c_buffer;

/// System property carrying the user-visible Android release
const RELEASE_PROPERTY: &str = "ro.build.version.release";

/// Get the Android release (e.g. "14")
pub fn os_version() -> Result<String> {
    let name = CString::new(RELEASE_PROPERTY).context("Invalid property name")?;
    let mut buf = vec![0u8; libc::PROP_VALUE_MAX as usize];

    let len = unsafe { libc::__system_property_get(name.as_ptr(), buf.as_mut_ptr().cast()) };
    if len <= 0 {
        anyhow::bail!("System property {} is not set", RELEASE_PROPERTY);
    }

    Ok(string_from_c_buffer(&buf))
}
