//! Texture extraction from the game archive.
//!
//! Rule evaluation lives in `selection`, the copy loop with its overwrite
//! guard in `extract`, and the printable run summary in `report`.

mod extract;
mod report;
mod selection;

pub use extract::extract_textures;
pub use report::{BulkTally, ExtractionOutcome, ExtractionReport, NamedOutcome};
pub use selection::join_relative;

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod selection_tests;

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod extract_tests;

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod report_tests;
