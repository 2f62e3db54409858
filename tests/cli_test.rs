mod common;

use common::create_client_jar;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn extract_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_extract"));
    // Keep the fix-ups deterministic regardless of what is installed
    cmd.env("MAPCRAFTER_IMAGE_TOOL", "mapcrafter-test-no-such-tool");
    cmd
}

#[test]
fn extract_without_arguments_is_a_usage_error() {
    let output = extract_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn extract_missing_archive_fails() {
    let dir = tempdir().unwrap();
    let output = extract_cmd()
        .arg(dir.path().join("missing.jar"))
        .arg(dir.path().join("out"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.jar"), "stderr: {stderr}");
}

#[test]
fn extract_prints_summary_and_tool_warning() {
    let dir = tempdir().unwrap();
    let jar = create_client_jar(dir.path());
    let out = dir.path().join("textures");

    let output = extract_cmd().arg(&jar).arg(&out).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(" - Found 4 block images."), "stdout: {stdout}");
    assert!(stdout.contains(" - Extracted 4."));
    assert!(stdout.contains("command 'mapcrafter-test-no-such-tool' not found"));
    assert!(out.join("blocks").join("red_sand.png").is_file());

    let rerun = extract_cmd().arg(&jar).arg(&out).output().unwrap();
    let stdout = String::from_utf8_lossy(&rerun.stdout);
    assert!(stdout.contains(" - Skipped 4 (Use -f to force overwrite)."));

    let forced = extract_cmd()
        .arg("--force")
        .arg("--no-fixups")
        .arg(&jar)
        .arg(&out)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&forced.stdout);
    assert!(stdout.contains(" - Extracted 4."));
    assert!(!stdout.contains("not found)."));
}

#[test]
fn extract_dump_rules_prints_json() {
    let output = extract_cmd()
        .args(["--dump-rules", "--profile", "entities"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"name\": \"entities\""));
    assert!(stdout.contains("entity/chest/normal.png"));
}

#[test]
fn gen_texture_code_header_and_source() {
    let dir = tempdir().unwrap();
    for name in ["stoneBrick.png", "grass.png", "notes.txt"] {
        fs::write(dir.path().join(name), b"png").unwrap();
    }

    let header = Command::new(env!("CARGO_BIN_EXE_gen_texture_code"))
        .arg("header")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(header.status.success());
    assert_eq!(
        String::from_utf8_lossy(&header.stdout),
        "\tTextureImage GRASS, STONE_BRICK;\n\tstd::vector<TextureImage*> textures;\n"
    );

    let source = Command::new(env!("CARGO_BIN_EXE_gen_texture_code"))
        .arg("source")
        .arg(dir.path())
        .output()
        .unwrap();
    assert_eq!(
        String::from_utf8_lossy(&source.stdout),
        ": GRASS(\"grass\"), STONE_BRICK(\"stoneBrick\"), textures({&GRASS, &STONE_BRICK}) {\n"
    );
}

#[test]
fn gen_texture_code_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_gen_texture_code"))
        .arg("header")
        .arg(dir.path().join("blocks"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn gen_texture_code_rejects_unknown_mode() {
    let dir = tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_gen_texture_code"))
        .arg("footer")
        .arg(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}
