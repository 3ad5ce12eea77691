//! Springboard Core - version resolution and detached launch for
//! side-by-side application installs.
//!
//! An installation root contains one `app-<semver>` directory per installed
//! version plus a stub binary named after the application. [`run`] is the
//! whole stub sequence: find the newest version next to the stub, start the
//! executable with the stub's own name inside it as a detached child,
//! forward the arguments untouched, and report an exit code. This is what
//! lets a self-updating application ship versions side by side while a
//! small, stable stub always boots the latest one.
//!
//! # Example
//!
//! ```rust,ignore
//! use springboard_core::ShowWindow;
//!
//! fn main() {
//!     let args: Vec<String> = std::env::args().skip(1).collect();
//!     std::process::exit(springboard_core::run(args, ShowWindow::default()));
//! }
//! ```

pub mod config;
pub mod error;
pub mod platform;
pub mod resolver;
pub mod stub;

// Re-export commonly used types
pub use config::StubConfig;
pub use error::{Result, SpringboardError};
pub use platform::ShowWindow;
pub use resolver::{installed_versions, is_versioned_dir_name, resolve_app_dir};
pub use stub::{build_launch_request, launch_from_root, run, LaunchRequest};
