use super::report::{BulkTally, ExtractionOutcome, ExtractionReport, NamedOutcome};
use super::selection::join_relative;
use crate::services::archive::AssetArchive;
use crate::services::config::RuleTable;
use crate::types::errors::{ToolError, ToolResult};
use std::fs;
use std::path::Path;

/// Copy every entry selected by `table` from `archive` into `output_dir`.
///
/// Steps:
/// 1. Create the table's output directories (idempotent)
/// 2. Bulk rules: every matching entry, in archive order
/// 3. Named rules: in table order, missing entries reported as not found
///
/// Existing destinations are left alone unless `force` is set. Only failing
/// to create the output directories is fatal; per-file errors end up in the
/// report.
pub fn extract_textures<A: AssetArchive + ?Sized>(
    archive: &mut A,
    table: &RuleTable,
    output_dir: &Path,
    force: bool,
) -> ToolResult<ExtractionReport> {
    for dir in &table.directories {
        let path = join_relative(output_dir, dir);
        fs::create_dir_all(&path).map_err(|e| {
            ToolError::Io(format!("Failed to create directory {}: {e}", path.display()))
        })?;
    }

    let mut report = ExtractionReport::default();

    for rule in table.bulk_rules() {
        log::info!("Extracting {} from {}", rule.label, rule.prefix);
        let mut tally = BulkTally::new(&rule.label);

        let selected: Vec<String> = archive
            .entries()
            .iter()
            .filter(|entry| rule.matches(entry))
            .map(|entry| entry.path.clone())
            .collect();

        for archive_path in selected {
            let outcome = match rule.destination(output_dir, &archive_path) {
                Some(dest) => copy_entry(archive, &archive_path, &dest, force),
                None => ExtractionOutcome::Failed(format!(
                    "'{archive_path}' does not start with '{}'",
                    rule.strip_prefix
                )),
            };
            tally.record(&outcome);
        }

        log::info!(
            "{}: found {}, extracted {}, skipped {}, failed {}",
            tally.label,
            tally.found,
            tally.extracted,
            tally.skipped,
            tally.failed
        );
        report.bulk.push(tally);
    }

    for rule in table.named_rules() {
        let destination = rule.destination(output_dir);
        let outcome = if archive.contains(&rule.archive_path) {
            copy_entry(archive, &rule.archive_path, &destination, force)
        } else {
            log::warn!("{} not found in archive", rule.archive_path);
            ExtractionOutcome::NotFound
        };
        report.named.push(NamedOutcome {
            destination,
            outcome,
        });
    }

    Ok(report)
}

/// Overwrite guard plus the actual copy of one entry.
fn copy_entry<A: AssetArchive + ?Sized>(
    archive: &mut A,
    archive_path: &str,
    dest: &Path,
    force: bool,
) -> ExtractionOutcome {
    if dest.exists() && !force {
        log::debug!("Skipping {} (exists)", dest.display());
        return ExtractionOutcome::Skipped;
    }

    let bytes = match archive.read(archive_path) {
        Ok(bytes) => bytes,
        Err(ToolError::EntryNotFound(_)) => return ExtractionOutcome::NotFound,
        Err(e) => {
            log::error!("Failed to read {archive_path}: {e}");
            return ExtractionOutcome::Failed(e.to_string());
        }
    };

    if let Err(e) = write_file(dest, &bytes) {
        log::error!("{e}");
        return ExtractionOutcome::Failed(e);
    }

    log::debug!("Extracted {archive_path} -> {}", dest.display());
    ExtractionOutcome::Extracted
}

fn write_file(dest: &Path, bytes: &[u8]) -> Result<(), String> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {e}", parent.display()))?;
    }
    fs::write(dest, bytes).map_err(|e| format!("Failed to write {}: {e}", dest.display()))
}
