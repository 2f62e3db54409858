pub mod archive;
pub mod codegen;
pub mod config;
pub mod extractor;
pub mod postprocess;
