//! Read access to the game's asset archive (a `.jar`, which is a plain zip).
//!
//! The extractor only needs two things from an archive: the list of entry
//! paths and the bytes of a single entry looked up by exact path. Both are
//! behind [`AssetArchive`] so rule evaluation can run against any source.

mod zip_archive;

pub use zip_archive::ZipAssetArchive;

use crate::types::errors::ToolResult;

/// One entry of an asset archive, as listed in its central directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Full path inside the archive, always `/`-separated.
    pub path: String,
    /// Directory markers carry no content and end with `/`.
    pub is_dir: bool,
}

impl ArchiveEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }
}

pub trait AssetArchive {
    /// All entries, in archive order.
    fn entries(&self) -> &[ArchiveEntry];

    /// Read an entry's raw bytes by exact path.
    ///
    /// Unknown paths fail with `ToolError::EntryNotFound`, every other
    /// failure is `ToolError::Archive`.
    fn read(&mut self, path: &str) -> ToolResult<Vec<u8>>;

    fn contains(&self, path: &str) -> bool {
        self.entries().iter().any(|e| !e.is_dir && e.path == path)
    }
}

#[cfg(test)]
#[path = "tests/archive_tests.rs"]
mod tests;
