//! Centralized configuration for Springboard.
//!
//! The stub is deliberately configuration-free at runtime; everything it
//! needs to know is a compile-time constant.

/// Stub-level configuration.
pub struct StubConfig;

impl StubConfig {
    /// Directory name prefix that marks an installed version, as in `app-1.2.3`.
    pub const VERSIONED_DIR_PREFIX: &'static str = "app-";
    pub const EXIT_SUCCESS: i32 = 0;
    pub const EXIT_FAILURE: i32 = 1;
    /// Environment variable read for the stderr log filter.
    pub const LOG_ENV_VAR: &'static str = "SPRINGBOARD_LOG";
}
