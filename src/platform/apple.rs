use anyhow::{Context, Result};
use std::ffi::CString;

use super::common::string_from_c_buffer;

/// Read a string-valued sysctl by name (macOS and iOS)
pub fn sysctl_string(name: &str) -> Result<String> {
    let cname = CString::new(name)
        .with_context(|| format!("Invalid sysctl name: {}", name))?;

    // First call sizes the buffer
    let mut len: libc::size_t = 0;
    let rc = unsafe {
        libc::sysctlbyname(
            cname.as_ptr(),
            std::ptr::null_mut(),
            &mut len,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return Err(std::io::Error::last_os_error())
            .with_context(|| format!("Failed to size sysctl {}", name));
    }

    let mut buf = vec![0u8; len];
    let rc = unsafe {
        libc::sysctlbyname(
            cname.as_ptr(),
            buf.as_mut_ptr().cast(),
            &mut len,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return Err(std::io::Error::last_os_error())
            .with_context(|| format!("Failed to read sysctl {}", name));
    }

    buf.truncate(len);
    Ok(string_from_c_buffer(&buf))
}
