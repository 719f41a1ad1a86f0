// file: src/utils/system.rs
// version: 1.0.0
// guid: 46f1436c-3253-4edb-8aac-87dd009c114f

//! System utility functions

use crate::error::SetupError;
use crate::Result;
use tracing::debug;

/// Environment variable `sudo` sets to the invoking user
pub const ELEVATION_ENV: &str = "SUDO_USER";

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Require that the process was started through `sudo`.
    ///
    /// `sudo_user` is the value of `SUDO_USER`; absent, empty or
    /// whitespace-only means the process was not elevated.
    pub fn ensure_elevated(sudo_user: Option<&str>) -> Result<()> {
        match sudo_user.map(str::trim) {
            Some(user) if !user.is_empty() => {
                debug!("elevated by {}", user);
                Ok(())
            }
            _ => Err(SetupError::privilege(format!(
                "{} is not set, rerun with sudo",
                ELEVATION_ENV
            ))),
        }
    }

    /// Read the elevation indicator from the process environment
    pub fn elevation_from_env() -> Option<String> {
        std::env::var(ELEVATION_ENV).ok()
    }

    /// Check if running as root
    pub fn is_root() -> bool {
        nix::unistd::geteuid().is_root()
    }
}
