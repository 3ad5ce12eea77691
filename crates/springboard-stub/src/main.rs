//! Springboard stub - boots the newest installed version of an application.
//!
//! Installers drop this binary at the installation root, renamed to the
//! application it fronts. When started it finds the newest `app-<version>`
//! directory next to itself, starts the executable with the same name inside
//! it as a detached child, forwards its own arguments untouched, and exits.
//! Exit code 0 means the application was started; 1 means it was not.
//!
//! The stub defines no command-line options of its own; every argument
//! belongs to the launched application.

use springboard_core::{platform, ShowWindow, StubConfig};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    // All stub output goes to stderr; stdout stays untouched for whatever
    // the launched application and its callers agreed on.
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_env(StubConfig::LOG_ENV_VAR)
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    debug!("Springboard stub on {}", platform::current_platform());

    let args: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(springboard_core::run(args, ShowWindow::default()));
}
