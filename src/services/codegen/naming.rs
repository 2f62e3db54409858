use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static RE_UPPER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").expect("Invalid regex"));

/// A texture file's base name and the C++ member name derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureName {
    pub base: String,
    pub symbol: String,
}

impl TextureName {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let symbol = symbol_name(&base);
        Self { base, symbol }
    }
}

/// camelCase to UPPER_SNAKE_CASE: underscore before every ASCII uppercase
/// letter, then uppercase everything.
///
/// `stoneBrick` → `STONE_BRICK`, `stoneBrickA` → `STONE_BRICK_A`.
pub fn symbol_name(base: &str) -> String {
    RE_UPPER.replace_all(base, "_${0}").to_uppercase()
}

/// Ordering of generated members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collation {
    /// Ascending by UTF-8 bytes, so `Ab` sorts before `a`.
    #[default]
    Bytewise,
    /// ASCII case folded first, ties broken byte-wise: `a`, `Ab`, `b`.
    IgnoreCase,
}

impl Collation {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Collation::Bytewise => a.cmp(b),
            Collation::IgnoreCase => a
                .bytes()
                .map(|c| c.to_ascii_lowercase())
                .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
                .then_with(|| a.cmp(b)),
        }
    }

    pub fn sort(self, names: &mut [TextureName]) {
        names.sort_by(|a, b| self.compare(&a.base, &b.base));
    }
}
