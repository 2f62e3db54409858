use super::naming::{Collation, TextureName};
use crate::types::errors::{ToolError, ToolResult};
use std::fs;
use std::path::Path;

/// List the textures directly inside `dir` whose file name ends with
/// `extension`, sorted by base name under `collation`.
///
/// A missing directory is an error; a directory without textures is not.
pub fn scan_textures(
    dir: &Path,
    extension: &str,
    collation: Collation,
) -> ToolResult<Vec<TextureName>> {
    if !dir.exists() {
        return Err(ToolError::NotFound(format!(
            "Texture directory does not exist: {}",
            dir.display()
        )));
    }

    if !dir.is_dir() {
        return Err(ToolError::NotFound(format!(
            "Texture path is not a directory: {}",
            dir.display()
        )));
    }

    let entries = fs::read_dir(dir).map_err(|e| {
        ToolError::Io(format!(
            "Failed to read texture directory {}: {e}",
            dir.display()
        ))
    })?;

    let mut names = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            log::warn!("Skipping non UTF-8 file name: {}", path.display());
            continue;
        };

        let Some(base) = file_name.strip_suffix(extension) else {
            continue;
        };
        if base.is_empty() {
            continue;
        }

        names.push(TextureName::new(base));
    }

    collation.sort(&mut names);
    log::debug!("Found {} textures in {}", names.len(), dir.display());

    Ok(names)
}
