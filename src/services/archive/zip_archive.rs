use super::{ArchiveEntry, AssetArchive};
use crate::types::errors::{ToolError, ToolResult};
use std::fs;
use std::io::Read;
use std::path::Path;

/// [`AssetArchive`] backed by a zip file on disk.
pub struct ZipAssetArchive {
    archive: zip::ZipArchive<fs::File>,
    entries: Vec<ArchiveEntry>,
}

impl ZipAssetArchive {
    /// Open a zip archive and read its entry list.
    pub fn open(archive_path: &Path) -> ToolResult<Self> {
        let file = fs::File::open(archive_path).map_err(|e| {
            ToolError::Archive(format!(
                "Failed to open archive {}: {e}",
                archive_path.display()
            ))
        })?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| {
            ToolError::Archive(format!(
                "Invalid or corrupt ZIP {}: {e}",
                archive_path.display()
            ))
        })?;

        let mut entries = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            let entry = archive
                .by_index_raw(i)
                .map_err(|e| ToolError::Archive(format!("Failed to read entry {i}: {e}")))?;
            entries.push(ArchiveEntry {
                path: entry.name().to_string(),
                is_dir: entry.is_dir(),
            });
        }

        log::info!(
            "Opened archive {} ({} entries)",
            archive_path.display(),
            entries.len()
        );

        Ok(Self { archive, entries })
    }
}

impl AssetArchive for ZipAssetArchive {
    fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    fn read(&mut self, path: &str) -> ToolResult<Vec<u8>> {
        let mut entry = self.archive.by_name(path).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => ToolError::EntryNotFound(path.to_string()),
            other => ToolError::Archive(format!("Failed to open entry {path}: {other}")),
        })?;

        if entry.is_dir() {
            return Err(ToolError::EntryNotFound(path.to_string()));
        }

        let mut buf = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut buf)
            .map_err(|e| ToolError::Archive(format!("Failed to read entry {path}: {e}")))?;
        Ok(buf)
    }
}
