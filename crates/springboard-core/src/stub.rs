//! Launch-request assembly and the stub run sequence.
//!
//! The stub binary sits at the installation root under the same file name as
//! the real application inside each versioned directory. One invocation
//! resolves the newest `app-<version>` child, starts the executable with the
//! stub's own name inside it as a detached child, and reports an exit code.
//! There is no retry and no partial success.

use crate::config::StubConfig;
use crate::error::Result;
use crate::platform::{self, ShowWindow};
use crate::resolver;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Everything the platform needs to start the real application.
///
/// Built once per invocation and consumed by the spawn call. The argument
/// vector is owned here so every forwarded string stays alive until the
/// child exists.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    /// Full path of the executable inside the resolved version directory.
    pub executable: PathBuf,
    /// Working directory for the child (the resolved version directory).
    pub working_dir: PathBuf,
    /// Arguments forwarded verbatim from the stub's own command line.
    pub args: Vec<String>,
    /// Window hint, interpreted by the platform spawn call.
    pub show: ShowWindow,
}

impl LaunchRequest {
    /// Create a request with no arguments and the default window hint.
    pub fn new(executable: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            working_dir: working_dir.into(),
            args: vec![],
            show: ShowWindow::default(),
        }
    }

    /// Set the forwarded arguments.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Set the window hint.
    pub fn with_show(mut self, show: ShowWindow) -> Self {
        self.show = show;
        self
    }
}

/// Assemble the launch request for one stub invocation.
///
/// The executable is the file with the stub's own name inside the resolved
/// version directory; installers ship the real application under that name
/// in every `app-<version>` directory. Whether it exists is the spawn
/// call's problem, not ours.
pub fn build_launch_request(
    root: &Path,
    app_name: &str,
    args: Vec<String>,
    show: ShowWindow,
) -> Result<LaunchRequest> {
    let app_dir = resolver::resolve_app_dir(root)?;
    let executable = app_dir.join(app_name);
    Ok(LaunchRequest::new(executable, app_dir)
        .with_args(args)
        .with_show(show))
}

/// Launch the newest installed version under `root`.
///
/// `app_name` doubles as the executable name inside the resolved directory.
/// Returns the child's pid as the platform reported it.
pub fn launch_from_root(
    root: &Path,
    app_name: &str,
    args: Vec<String>,
    show: ShowWindow,
) -> Result<u32> {
    let request = build_launch_request(root, app_name, args, show)?;
    info!(
        "Launching {} from {}",
        request.executable.display(),
        request.working_dir.display()
    );
    platform::spawn_detached(&request)
}

/// Exit code for a reported pid.
///
/// Success requires a strictly positive pid. The contract is about what the
/// platform reports, so zero maps to failure even though the standard
/// library never constructs it.
fn spawn_exit_code(pid: u32) -> i32 {
    if pid > 0 {
        StubConfig::EXIT_SUCCESS
    } else {
        StubConfig::EXIT_FAILURE
    }
}

/// Full stub sequence: identity, working directory, resolve, spawn.
///
/// The stub's working directory is the installation root by deployment
/// contract, so no path arrives from outside; `args` is forwarded to the
/// child untouched. Returns the stub's process exit code: 0 when the
/// application was started as a detached child, 1 for every failure.
pub fn run(args: Vec<String>, show: ShowWindow) -> i32 {
    let app_name = match platform::own_executable_name() {
        Ok(name) => name,
        Err(err) => {
            error!("{}", err);
            return err.exit_code();
        }
    };

    let root = match platform::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            error!("{}", err);
            return err.exit_code();
        }
    };

    match launch_from_root(&root, &app_name, args, show) {
        Ok(pid) => {
            if pid > 0 {
                info!("Started {} with PID {}", app_name, pid);
            } else {
                error!("Platform reported PID {} for {}", pid, app_name);
            }
            spawn_exit_code(pid)
        }
        Err(err) => {
            error!("{}", err);
            err.exit_code()
        }
    }
}
