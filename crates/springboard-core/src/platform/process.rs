//! Platform-specific process identity and creation.
//!
//! The only module that talks to the OS process API directly. The workspace
//! denies `unsafe_code`; the Unix detach path needs `pre_exec`, so this file
//! opts down and documents each block with `SAFETY:`.

#![allow(unsafe_code)]

use crate::error::{Result, SpringboardError};
use crate::stub::LaunchRequest;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

// Platform-specific imports for process detachment
#[cfg(unix)]
use std::os::unix::process::CommandExt;

#[cfg(windows)]
use std::os::windows::process::CommandExt;

/// Base name of the currently running executable.
///
/// The installer renames the stub to the application it fronts, so this name
/// is also the name of the real executable inside each version directory.
pub fn own_executable_name() -> Result<String> {
    let exe = std::env::current_exe().map_err(|e| SpringboardError::ExecutableNameUnavailable {
        message: e.to_string(),
        source: Some(e),
    })?;

    exe.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| SpringboardError::ExecutableNameUnavailable {
            message: format!("executable path has no file name: {}", exe.display()),
            source: None,
        })
}

/// Working directory of the stub process.
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| SpringboardError::WorkingDirUnavailable {
        message: e.to_string(),
        source: Some(e),
    })
}

/// Start the real application as a detached child.
///
/// The child must keep running after the stub exits, so it is separated from
/// the stub's session (Unix) or console (Windows). Stdio is routed to null;
/// the application owns its own logging.
///
/// # Platform Behavior
/// - **Linux/macOS**: `setsid()` in a `pre_exec` hook; the child leads a new
///   session and init adopts it once the stub exits.
/// - **Windows**: created with `CREATE_NEW_PROCESS_GROUP`, plus either
///   `DETACHED_PROCESS` or, when the hint asks for a hidden window,
///   `CREATE_NO_WINDOW` (the two are mutually exclusive).
///
/// Returns the child's pid as the platform reported it.
pub fn spawn_detached(request: &LaunchRequest) -> Result<u32> {
    let mut cmd = Command::new(&request.executable);
    cmd.args(&request.args);
    cmd.current_dir(&request.working_dir);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::null());

    #[cfg(unix)]
    {
        // SAFETY: setsid() is async-signal-safe and creates a new session.
        // The child becomes a session leader and is no longer tied to the
        // stub's controlling terminal; init will adopt it when we exit.
        unsafe {
            cmd.pre_exec(|| {
                if libc::setsid() == -1 {
                    return Err(std::io::Error::last_os_error());
                }
                Ok(())
            });
        }
    }

    #[cfg(windows)]
    {
        use crate::platform::ShowWindow;
        use windows_sys::Win32::System::Threading::{
            CREATE_NEW_PROCESS_GROUP, CREATE_NO_WINDOW, DETACHED_PROCESS,
        };

        let flags = match request.show {
            ShowWindow::Normal => CREATE_NEW_PROCESS_GROUP | DETACHED_PROCESS,
            ShowWindow::Hidden => CREATE_NEW_PROCESS_GROUP | CREATE_NO_WINDOW,
        };
        cmd.creation_flags(flags);
    }

    debug!("Spawning {} detached", request.executable.display());

    let child = cmd.spawn().map_err(|e| SpringboardError::SpawnFailed {
        executable: request.executable.clone(),
        message: e.to_string(),
        source: Some(e),
    })?;

    Ok(child.id())
}
