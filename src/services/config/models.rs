use serde::{Deserialize, Serialize};

/// Selects every archive entry directly inside one archive directory.
///
/// An entry matches when it is a regular file, its path starts with `prefix`,
/// it ends with `extension`, and it is not nested in a subdirectory of `prefix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkRule {
    /// Summary label, e.g. `block images`.
    pub label: String,
    /// Archive directory, e.g. `assets/minecraft/textures/blocks/`.
    pub prefix: String,
    /// Leading part of the archive path dropped when building the destination.
    pub strip_prefix: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// Copies one fixed archive path to one fixed output path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRule {
    /// Destination relative to the output directory.
    pub output: String,
    pub archive_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionRule {
    Bulk(BulkRule),
    Named(NamedRule),
}

/// Post-extraction image tool invocation for known-problematic files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixup {
    /// Output-relative path. The file-name component may use `*` and `?`.
    pub pattern: String,
    /// Tool arguments. `{file}` is replaced with the matched file's path.
    pub args: Vec<String>,
}

/// Ordered extraction rules for one asset layout of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    pub name: String,
    /// Output subdirectories created before extraction (`""` is the output root).
    #[serde(default)]
    pub directories: Vec<String>,
    pub rules: Vec<SelectionRule>,
    #[serde(default)]
    pub fixups: Vec<Fixup>,
}

impl RuleTable {
    pub fn bulk_rules(&self) -> impl Iterator<Item = &BulkRule> {
        self.rules.iter().filter_map(|r| match r {
            SelectionRule::Bulk(b) => Some(b),
            SelectionRule::Named(_) => None,
        })
    }

    pub fn named_rules(&self) -> impl Iterator<Item = &NamedRule> {
        self.rules.iter().filter_map(|r| match r {
            SelectionRule::Named(n) => Some(n),
            SelectionRule::Bulk(_) => None,
        })
    }
}

fn default_extension() -> String {
    ".png".to_string()
}
