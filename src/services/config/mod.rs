//! Rule table configuration.
//!
//! The game's asset layout changes between versions, so the extraction rules
//! are data: either one of the built-in profiles or a JSON file supplied by
//! the operator.

pub mod models;
pub mod profiles;

pub use models::*;

use crate::types::errors::{ToolError, ToolResult};
use std::path::Path;

/// Built-in rule table selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Default,
    Entities,
}

impl Profile {
    pub fn table(self) -> RuleTable {
        match self {
            Profile::Default => profiles::builtin_default(),
            Profile::Entities => profiles::builtin_entities(),
        }
    }
}

impl RuleTable {
    /// Load and validate a rule table from a JSON file.
    pub fn load(path: &Path) -> ToolResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ToolError::NotFound(format!("Rule table {}", path.display()))
            } else {
                ToolError::Io(format!("Failed to read {}: {e}", path.display()))
            }
        })?;

        let table: RuleTable = serde_json::from_str(&contents).map_err(|e| {
            ToolError::Config(format!("Invalid rule table {}: {e}", path.display()))
        })?;

        log::info!(
            "Loaded rule table '{}' from {} ({} rules, {} fixups)",
            table.name,
            path.display(),
            table.rules.len(),
            table.fixups.len()
        );

        table.validate()
    }

    pub fn to_json_pretty(&self) -> ToolResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every rule and normalize bulk prefixes to end with `/`.
    pub fn validate(mut self) -> ToolResult<Self> {
        if self.rules.is_empty() {
            return Err(ToolError::Config(format!(
                "Rule table '{}' has no rules",
                self.name
            )));
        }

        for dir in &self.directories {
            if !dir.is_empty() {
                check_relative(dir, "directory")?;
            }
        }

        for rule in &mut self.rules {
            match rule {
                SelectionRule::Bulk(bulk) => {
                    if bulk.prefix.is_empty() {
                        return Err(ToolError::Config(format!(
                            "Bulk rule '{}' has an empty prefix",
                            bulk.label
                        )));
                    }
                    if !bulk.prefix.ends_with('/') {
                        bulk.prefix.push('/');
                    }
                    if !bulk.prefix.starts_with(&bulk.strip_prefix) {
                        return Err(ToolError::Config(format!(
                            "Bulk rule '{}': '{}' is not a prefix of '{}'",
                            bulk.label, bulk.strip_prefix, bulk.prefix
                        )));
                    }
                    let kept = &bulk.prefix[bulk.strip_prefix.len()..];
                    if !kept.is_empty() {
                        check_relative(kept, "bulk destination")?;
                    }
                    if bulk.extension.is_empty() {
                        return Err(ToolError::Config(format!(
                            "Bulk rule '{}' has an empty extension",
                            bulk.label
                        )));
                    }
                }
                SelectionRule::Named(named) => {
                    check_relative(&named.output, "named output")?;
                    if named.archive_path.is_empty() || named.archive_path.ends_with('/') {
                        return Err(ToolError::Config(format!(
                            "Named rule '{}' must point at an archive file",
                            named.output
                        )));
                    }
                }
            }
        }

        for fixup in &self.fixups {
            check_relative(&fixup.pattern, "fixup pattern")?;
            if let Some((dir, _)) = fixup.pattern.rsplit_once('/') {
                if dir.contains(['*', '?']) {
                    return Err(ToolError::Config(format!(
                        "Fixup pattern '{}': wildcards are only allowed in the file name",
                        fixup.pattern
                    )));
                }
            }
            if fixup.args.is_empty() {
                return Err(ToolError::Config(format!(
                    "Fixup '{}' has no arguments",
                    fixup.pattern
                )));
            }
        }

        Ok(self)
    }
}

/// Reject absolute paths and `..` components in output-relative paths.
fn check_relative(path: &str, what: &str) -> ToolResult<()> {
    let escapes = path.starts_with('/')
        || path.contains('\\')
        || path.split('/').any(|c| c == "..")
        || Path::new(path).is_absolute();
    if path.is_empty() || escapes {
        return Err(ToolError::Config(format!(
            "Invalid {what} '{path}': must be a relative path inside the output directory"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
