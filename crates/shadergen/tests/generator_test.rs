//! Integration tests for `new`, `export`, `pull` and `reconvert`

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use predicates::prelude::*;
use shadergen_testkit::{sample_project, write_generator};
use std::fs;
use std::path::Path;
use std::process::Command;

fn shadergen(root: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")));
    cmd.current_dir(root);
    cmd
}

#[test]
fn test_new_creates_generator_with_defaults() {
    let temp = sample_project();
    let root = temp.path();

    shadergen(root)
        .args(["new", "Sphere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created generator 'Sphere'"));

    let document = fs::read_to_string(root.join("Sphere.gen.toml")).unwrap();
    assert!(document.contains("template = \"Standard\""));
    assert!(document.contains("ShadowCaster = true"));
    assert!(document.contains("Culling = \"Back\""));
}

#[test]
fn test_new_with_unknown_template_fails() {
    let temp = sample_project();

    shadergen(temp.path())
        .args(["new", "Sphere", "--template", "Missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TEMPLATE_NOT_FOUND"));

    assert!(!temp.path().join("Sphere.gen.toml").exists());
}

#[test]
fn test_new_rejects_path_like_name() {
    let temp = sample_project();

    shadergen(temp.path())
        .args(["new", "../Escape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SHADER_NAME_INVALID"));
}

#[test]
fn test_export_writes_shader() {
    let temp = sample_project();
    let root = temp.path();
    shadergen(root).args(["new", "Sphere", "-t", "Unlit"]).assert().success();

    shadergen(root)
        .args(["export", "Sphere.gen.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));

    let shader = fs::read_to_string(root.join("Sphere.shader")).unwrap();
    assert!(shader.starts_with("Shader \"Unlit/Sphere\""));
    assert!(shader.contains("Blend Off"));
    assert!(shader.contains("Color White"));

    let document = fs::read_to_string(root.join("Sphere.gen.toml")).unwrap();
    assert!(document.contains("exported = \"Sphere.shader\""));
}

#[test]
fn test_export_then_pull_edited_block() {
    let temp = sample_project();
    let root = temp.path();
    shadergen(root).args(["new", "Sphere"]).assert().success();
    shadergen(root).args(["export", "Sphere.gen.toml"]).assert().success();

    let shader_path = root.join("Sphere.shader");
    let shader = fs::read_to_string(&shader_path).unwrap();
    fs::write(
        &shader_path,
        shader.replace("Sphere(pos, 0.5)", "Box(pos, float3(1, 1, 1))"),
    )
    .unwrap();

    shadergen(root)
        .args(["pull", "Sphere.gen.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pulled 1 block(s)"))
        .stdout(predicate::str::contains("DistanceFunction"));

    let document = fs::read_to_string(root.join("Sphere.gen.toml")).unwrap();
    assert!(document.contains("Box(pos, float3(1, 1, 1))"));

    shadergen(root)
        .args(["pull", "Sphere.gen.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No block changes"));
}

#[test]
fn test_pull_before_export_fails() {
    let temp = sample_project();
    let root = temp.path();
    shadergen(root).args(["new", "Sphere"]).assert().success();

    shadergen(root)
        .args(["pull", "Sphere.gen.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OUTPUT_NOT_FOUND"));
}

#[test]
fn test_export_missing_generator() {
    let temp = sample_project();

    shadergen(temp.path())
        .args(["export", "Nothing.gen.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GENERATOR_NOT_FOUND"));
}

#[test]
fn test_reconvert_exports_every_generator() {
    let temp = sample_project();
    let root = temp.path();
    shadergen(root).args(["new", "A", "-t", "Unlit"]).assert().success();
    write_generator(
        &root.join("effects/B.gen.toml"),
        "[shader]\nname = \"B\"\ntemplate = \"Standard\"\n",
    )
    .unwrap();

    shadergen(root)
        .arg("reconvert")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reconverted 2 generator(s)"));

    assert!(root.join("A.shader").is_file());
    assert!(root.join("effects/B.shader").is_file());
}

#[test]
fn test_reconvert_reports_failures() {
    let temp = sample_project();
    let root = temp.path();
    shadergen(root).args(["new", "A", "-t", "Unlit"]).assert().success();
    write_generator(
        &root.join("B.gen.toml"),
        "[shader]\nname = \"B\"\ntemplate = \"Missing\"\n",
    )
    .unwrap();

    shadergen(root)
        .arg("reconvert")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TEMPLATE_NOT_FOUND"))
        .stderr(predicate::str::contains("1 of 2 generators failed"));

    assert!(root.join("A.shader").is_file());
}

#[test]
fn test_reconvert_without_generators() {
    let temp = sample_project();

    shadergen(temp.path())
        .arg("reconvert")
        .assert()
        .success()
        .stdout(predicate::str::contains("No generators found"));
}
