#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Block textures in the fake client jar, in archive order.
pub const BLOCKS: &[(&str, &[u8])] = &[
    ("assets/minecraft/textures/blocks/stone.png", b"\x89PNG stone"),
    ("assets/minecraft/textures/blocks/stonebrick.png", b"\x89PNG stonebrick"),
    ("assets/minecraft/textures/blocks/red_sand.png", b"\x89PNG red_sand"),
    ("assets/minecraft/textures/blocks/hardened_clay.png", b"\x89PNG clay"),
];

/// Write a client jar holding [`BLOCKS`], both colormaps and some entries
/// no rule selects.
pub fn create_client_jar(dir: &Path) -> PathBuf {
    init_test_logging();

    let mut files: Vec<(&str, &[u8])> = vec![("assets/minecraft/textures/blocks/", b"")];
    files.extend_from_slice(BLOCKS);
    files.extend_from_slice(&[
        ("assets/minecraft/textures/blocks/destroy/", b""),
        ("assets/minecraft/textures/blocks/destroy/stage_0.png", b"stage"),
        ("assets/minecraft/textures/blocks/lava_flow.png.mcmeta", b"{}"),
        ("assets/minecraft/textures/colormap/foliage.png", b"foliage"),
        ("assets/minecraft/textures/colormap/grass.png", b"grass"),
        ("pack.png", b"icon"),
    ]);

    let zip_path = dir.join("1.8.jar");
    let file = fs::File::create(&zip_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for (name, content) in files {
        if name.ends_with('/') {
            writer.add_directory(name.to_string(), options).unwrap();
            continue;
        }
        writer.start_file(name.to_string(), options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
    zip_path
}
