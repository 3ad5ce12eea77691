//! Per-platform naming for application executables.
//!
//! Installers use these to decide what to call the stub and the real
//! executable; the stub itself never needs them because it reuses its own
//! file name verbatim.

use std::path::{Path, PathBuf};

/// File name of the application executable for an app id.
///
/// # Platform Behavior
/// - **Linux/macOS**: `{app_id}`
/// - **Windows**: `{app_id}.exe`
pub fn executable_file_name(app_id: &str) -> String {
    if cfg!(windows) {
        format!("{}.exe", app_id)
    } else {
        app_id.to_string()
    }
}

/// Where an installer places the stub executable for an app id.
///
/// The stub sits directly in the installation root, named after the
/// application it boots, next to the `app-<version>` directories.
pub fn stub_executable_path(base: &Path, app_id: &str) -> PathBuf {
    base.join(executable_file_name(app_id))
}
