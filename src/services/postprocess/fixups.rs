use super::{PostProcessError, PostProcessor, ToolStatus, FILE_PLACEHOLDER};
use crate::services::config::Fixup;
use crate::services::extractor::join_relative;
use regex::Regex;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of running the fix-ups after an extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixupReport {
    /// Tool was not installed; nothing (more) was run.
    pub tool_missing: bool,
    pub processed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl FixupReport {
    /// Warning lines for the operator. Empty when everything went fine.
    pub fn render_summary(&self, program: &str) -> String {
        let mut out = String::new();
        if self.tool_missing {
            let _ = writeln!(
                out,
                "Warning: imagemagick is not installed (command '{program}' not found)."
            );
            out.push_str(
                "Install imagemagick to enable automatic texture fixes (to prevent libpng warnings).\n",
            );
        }
        for (path, reason) in &self.failed {
            let _ = writeln!(out, "Warning: could not fix {}: {reason}", path.display());
        }
        out
    }
}

/// Run every fix-up whose pattern matches an existing file under `output_dir`.
///
/// Never fails: a missing tool or a failing command only shows up in the
/// returned report.
pub fn apply_fixups(
    processor: &mut dyn PostProcessor,
    fixups: &[Fixup],
    output_dir: &Path,
) -> FixupReport {
    let mut report = FixupReport::default();
    if fixups.is_empty() {
        return report;
    }

    match processor.probe() {
        ToolStatus::Available => {}
        ToolStatus::Missing => {
            log::warn!(
                "'{}' not found, skipping texture fix-ups",
                processor.program()
            );
            report.tool_missing = true;
            return report;
        }
        ToolStatus::Unusable(reason) => {
            log::warn!(
                "'{}' cannot be started ({reason}), skipping texture fix-ups",
                processor.program()
            );
            report.tool_missing = true;
            return report;
        }
    }

    for fixup in fixups {
        for file in matching_files(output_dir, &fixup.pattern) {
            let args = substitute_file(&fixup.args, &file);
            match processor.run(&args) {
                Ok(()) => {
                    log::info!("Fixed {}", file.display());
                    report.processed.push(file);
                }
                Err(PostProcessError::ToolMissing(program)) => {
                    log::warn!("'{program}' disappeared while running fix-ups");
                    report.tool_missing = true;
                    return report;
                }
                Err(e) => {
                    log::warn!("Fix-up of {} failed: {e}", file.display());
                    report.failed.push((file, e.to_string()));
                }
            }
        }
    }

    report
}

/// Existing files matching an output-relative pattern, sorted by path.
///
/// Only the file-name component may contain `*` or `?`.
pub fn matching_files(output_dir: &Path, pattern: &str) -> Vec<PathBuf> {
    let (dir_part, name_part) = pattern.rsplit_once('/').unwrap_or(("", pattern));
    let dir = join_relative(output_dir, dir_part);

    if !name_part.contains(['*', '?']) {
        let file = dir.join(name_part);
        return if file.is_file() { vec![file] } else { vec![] };
    }

    let matcher = match wildcard_regex(name_part) {
        Ok(re) => re,
        Err(e) => {
            log::warn!("Ignoring fix-up pattern '{pattern}': {e}");
            return vec![];
        }
    };

    let mut files: Vec<PathBuf> = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| matcher.is_match(&e.file_name().to_string_lossy()))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Translate a `*`/`?` wildcard into an anchored regex.
fn wildcard_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut re = String::with_capacity(pattern.len() + 8);
    re.push('^');
    for c in pattern.chars() {
        match c {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            other => re.push_str(&regex::escape(other.encode_utf8(&mut [0u8; 4]))),
        }
    }
    re.push('$');
    Regex::new(&re)
}

fn substitute_file(args: &[String], file: &Path) -> Vec<String> {
    let file = file.to_string_lossy();
    args.iter()
        .map(|arg| arg.replace(FILE_PLACEHOLDER, &file))
        .collect()
}
