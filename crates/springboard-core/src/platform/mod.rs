//! Platform abstraction layer for cross-platform compatibility.
//!
//! This module centralizes all platform-specific code to make it easy to
//! find, maintain, and extend. All `#[cfg]` blocks for OS-specific behavior
//! should live in this module rather than scattered throughout the codebase.
//!
//! # Architecture
//!
//! Each submodule handles a specific cross-platform concern:
//! - `paths` - Per-platform executable naming and stub placement
//! - `process` - Process identity and detached process creation

pub mod paths;
pub mod process;

// Re-export commonly used items
pub use paths::{executable_file_name, stub_executable_path};
pub use process::{current_dir, own_executable_name, spawn_detached};

/// Window hint handed to the platform when the child is created.
///
/// Only the Windows spawn path interprets it; everywhere else it is carried
/// and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowWindow {
    /// Let the child present itself however it normally would.
    Normal,
    /// Ask for no visible console window.
    Hidden,
}

impl Default for ShowWindow {
    fn default() -> Self {
        ShowWindow::Normal
    }
}

/// Returns the current platform name.
pub fn current_platform() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        "linux"
    }
    #[cfg(target_os = "windows")]
    {
        "windows"
    }
    #[cfg(target_os = "macos")]
    {
        "macos"
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        "unknown"
    }
}
