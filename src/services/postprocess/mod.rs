//! Post-extraction image fix-ups.
//!
//! A few block textures ship with metadata or color types that make libpng
//! complain. They are rewritten in place by an external image tool
//! (ImageMagick `convert` by default). The tool is optional: when it is not
//! installed the fix-ups are skipped with a warning.

mod fixups;
mod imagemagick;

pub use fixups::{apply_fixups, matching_files, FixupReport};
pub use imagemagick::{ImageMagick, DEFAULT_PROGRAM};

use thiserror::Error;

/// Placeholder in fix-up arguments replaced with the target file path.
pub const FILE_PLACEHOLDER: &str = "{file}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    Available,
    /// The program could not be found on `PATH`.
    Missing,
    /// The program exists but could not be started.
    Unusable(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostProcessError {
    #[error("command '{0}' not found")]
    ToolMissing(String),
    #[error("command '{program}' failed: {reason}")]
    Failed { program: String, reason: String },
}

/// External image tool invoked with an exact argument list.
pub trait PostProcessor {
    fn program(&self) -> &str;

    /// Check whether the tool can be started at all.
    fn probe(&mut self) -> ToolStatus;

    fn run(&mut self, args: &[String]) -> Result<(), PostProcessError>;
}

#[cfg(test)]
#[path = "tests/postprocess_tests.rs"]
mod tests;
