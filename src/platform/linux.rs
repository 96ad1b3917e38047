use anyhow::{Context, Result};
use std::ffi::CStr;
use std::path::Path;

/// Kernel release as exposed by procfs
const PROC_OSRELEASE: &str = "/proc/sys/kernel/osrelease";

/// Get the Linux kernel release (e.g. "6.5.0-14-generic")
///
/// Uses uname(2); falls back to procfs when the syscall fails.
pub fn os_version() -> Result<String> {
    match uname_release() {
        Ok(release) => Ok(release),
        Err(e) => {
            tracing::debug!("uname failed, reading procfs: {:#}", e);
            read_release_file(Path::new(PROC_OSRELEASE))
        }
    }
}

/// Read the kernel release via uname(2)
fn uname_release() -> Result<String> {
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };

    let rc = unsafe { libc::uname(&mut uts) };
    if rc != 0 {
        return Err(std::io::Error::last_os_error()).context("uname failed");
    }

    // uname guarantees NUL-terminated fields
    let release = unsafe { CStr::from_ptr(uts.release.as_ptr()) };
    Ok(release.to_string_lossy().into_owned())
}

/// Read a release string from a file such as /proc/sys/kernel/osrelease
fn read_release_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read release file: {}", path.display()))
}
