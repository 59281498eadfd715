//! Errors caused by how the tool was invoked.

use std::path::PathBuf;

/// Process exit code for usage errors, matching clap's own.
pub const USAGE_EXIT_CODE: u8 = 2;

/// Invocation problems detected before any download starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Platform identifier is not one of the supported targets
    UnknownPlatform(String),
    /// Tarballs directory does not exist
    MissingOutputDirectory(PathBuf),
    /// Mirror override is not an absolute URL
    InvalidMirror(String),
}

impl std::fmt::Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageError::UnknownPlatform(platform) => {
                write!(
                    f,
                    "Unknown platform \"{}\" (expected one of: Win32, x64, mingw)",
                    platform
                )
            }
            UsageError::MissingOutputDirectory(dir) => {
                write!(f, "Output directory \"{}\" does not exist", dir.display())
            }
            UsageError::InvalidMirror(mirror) => {
                write!(f, "Invalid mirror URL \"{}\"", mirror)
            }
        }
    }
}

impl std::error::Error for UsageError {}

/// Exit code for a failed run: [`USAGE_EXIT_CODE`] for usage errors, 1 otherwise.
pub fn exit_code(error: &anyhow::Error) -> u8 {
    if error.downcast_ref::<UsageError>().is_some() {
        USAGE_EXIT_CODE
    } else {
        1
    }
}
