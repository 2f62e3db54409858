//! C++ texture boilerplate generation from a directory of block images.

mod naming;
mod render;
mod scan;

pub use naming::{symbol_name, Collation, TextureName};
pub use render::{render, render_header, render_source, OutputMode};
pub use scan::scan_textures;

use crate::types::errors::ToolResult;
use std::path::Path;

/// Texture file extension the generator looks for.
pub const TEXTURE_EXTENSION: &str = ".png";

/// Scan `dir` and render the requested fragment.
pub fn generate(dir: &Path, mode: OutputMode, collation: Collation) -> ToolResult<String> {
    let names = scan_textures(dir, TEXTURE_EXTENSION, collation)?;
    Ok(render(mode, &names))
}

#[cfg(test)]
#[path = "tests/naming_tests.rs"]
mod naming_tests;

#[cfg(test)]
#[path = "tests/codegen_tests.rs"]
mod codegen_tests;
