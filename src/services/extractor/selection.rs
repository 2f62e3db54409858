//! Rule predicates and destination mapping. Pure functions, no I/O.

use crate::services::archive::ArchiveEntry;
use crate::services::config::{BulkRule, NamedRule};
use std::path::{Path, PathBuf};

impl BulkRule {
    /// Whether `entry` is a regular file directly inside `prefix` with the
    /// rule's extension.
    pub fn matches(&self, entry: &ArchiveEntry) -> bool {
        if entry.is_dir {
            return false;
        }
        let Some(rest) = entry.path.strip_prefix(self.prefix.as_str()) else {
            return false;
        };
        // Subdirectories of the prefix are not extracted
        !rest.is_empty() && !rest.contains('/') && rest.ends_with(self.extension.as_str())
    }

    /// Destination of a matched archive path: `strip_prefix` removed, the rest
    /// joined onto `output_dir`.
    pub fn destination(&self, output_dir: &Path, archive_path: &str) -> Option<PathBuf> {
        let relative = archive_path.strip_prefix(self.strip_prefix.as_str())?;
        Some(join_relative(output_dir, relative))
    }
}

impl NamedRule {
    pub fn destination(&self, output_dir: &Path) -> PathBuf {
        join_relative(output_dir, &self.output)
    }
}

/// Join a `/`-separated relative path onto `base` using native separators.
pub fn join_relative(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|c| !c.is_empty())
        .fold(base.to_path_buf(), |path, component| path.join(component))
}
