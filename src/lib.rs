//! Asset preparation tools for mapcrafter.
//!
//! - [`services::extractor`] copies block textures and a few named images out
//!   of a Minecraft client jar, then [`services::postprocess`] fixes the
//!   images libpng complains about.
//! - [`services::codegen`] turns a directory of block textures into the C++
//!   member declarations and initializer list of the texture class.

pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

/// Install the `env_logger` backend for the command-line tools.
///
/// Defaults to warnings only; `RUST_LOG` overrides it.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
