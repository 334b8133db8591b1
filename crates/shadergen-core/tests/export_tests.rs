//! End-to-end tests for generator creation, export and round-trip pull

use shadergen_core::generator::{self, Generator};
use shadergen_core::project::Project;
use shadergen_core::ShadergenError;
use shadergen_testkit::{sample_project, write_generator};
use std::fs;

fn load(temp: &tempfile::TempDir) -> Project {
    Project::load(temp.path()).expect("sample project should load")
}

#[test]
fn test_create_seeds_template_defaults() {
    let temp = sample_project();
    let project = load(&temp);

    let path = generator::create(&project, temp.path(), "Sphere", "").unwrap();
    assert_eq!(path, temp.path().join("Sphere.gen.toml"));

    let created = Generator::load(&path).unwrap();
    assert_eq!(created.shader.template, "Standard");
    assert_eq!(created.conditions.get("ShadowCaster"), Some(&true));
    assert_eq!(
        created.variables.get("Culling").map(String::as_str),
        Some("Back")
    );
    assert!(created.blocks.contains_key("DistanceFunction"));
}

#[test]
fn test_create_refuses_existing_generator() {
    let temp = sample_project();
    let project = load(&temp);

    generator::create(&project, temp.path(), "Sphere", "Unlit").unwrap();
    let err = generator::create(&project, temp.path(), "Sphere", "Unlit").unwrap_err();
    assert!(matches!(err, ShadergenError::GeneratorExists(_)));
}

#[test]
fn test_create_unknown_template() {
    let temp = sample_project();
    let project = load(&temp);

    let err = generator::create(&project, temp.path(), "Sphere", "Missing").unwrap_err();
    assert!(err.to_string().starts_with("TEMPLATE_NOT_FOUND"));
}

#[test]
fn test_export_writes_shader() {
    let temp = sample_project();
    let project = load(&temp);
    let path = generator::create(&project, temp.path(), "Sphere", "Standard").unwrap();

    let report = generator::export(&project, &path).unwrap();

    assert_eq!(report.output, temp.path().join("Sphere.shader"));
    assert_eq!(report.stats.conditionals, 2);
    let shader = fs::read_to_string(&report.output).unwrap();
    assert!(shader.starts_with("Shader \"Raymarching/Sphere\""));
    assert!(shader.contains("#include \"Assets/Shaders/Includes/Common.cginc\""));
    assert!(shader.contains("#define USE_RAYMARCHING_DEPTH"));
    assert!(shader.contains("// @block DistanceFunction\n"));
    assert!(!shader.contains("@if"));

    let saved = Generator::load(&path).unwrap();
    assert_eq!(saved.shader.exported.as_deref(), Some("Sphere.shader"));
    assert_eq!(
        saved.variables.get("RaymarchingShaderDirectory").map(String::as_str),
        Some("Assets/Shaders/Includes")
    );
}

#[test]
fn test_export_respects_output_dir() {
    let temp = sample_project();
    let project = load(&temp);
    let path = temp.path().join("generators/Box.gen.toml");
    write_generator(
        &path,
        "[shader]\nname = \"Box\"\ntemplate = \"Unlit\"\noutput_dir = \"../shaders\"\n",
    )
    .unwrap();

    let err = generator::export(&project, &path).unwrap_err();
    assert!(matches!(err, ShadergenError::ProjectPathEscape { .. }));

    write_generator(
        &path,
        "[shader]\nname = \"Box\"\ntemplate = \"Unlit\"\noutput_dir = \"out\"\n",
    )
    .unwrap();
    let report = generator::export(&project, &path).unwrap();
    assert_eq!(report.output, temp.path().join("generators/out/Box.shader"));
    assert!(report.output.is_file());
}

#[test]
fn test_export_pulls_edited_blocks() {
    let temp = sample_project();
    let project = load(&temp);
    let path = generator::create(&project, temp.path(), "Sphere", "Standard").unwrap();
    let first = generator::export(&project, &path).unwrap();

    // Edit the generated shader directly, as a user would in an editor
    let shader = fs::read_to_string(&first.output).unwrap();
    let edited = shader.replace("return Sphere(pos, 0.5);", "return Torus(pos, 0.5, 0.1);");
    fs::write(&first.output, edited).unwrap();

    let second = generator::export(&project, &path).unwrap();
    assert_eq!(second.pulled, vec!["DistanceFunction"]);

    let saved = Generator::load(&path).unwrap();
    assert!(saved.blocks["DistanceFunction"].contains("Torus"));
    let shader = fs::read_to_string(&second.output).unwrap();
    assert!(shader.contains("return Torus(pos, 0.5, 0.1);"));
}

#[test]
fn test_export_renames_previous_output() {
    let temp = sample_project();
    let project = load(&temp);
    let path = generator::create(&project, temp.path(), "Sphere", "Unlit").unwrap();
    generator::export(&project, &path).unwrap();

    let mut renamed = Generator::load(&path).unwrap();
    renamed.shader.name = "Ball".to_string();
    renamed.save(&path).unwrap();

    let report = generator::export(&project, &path).unwrap();
    assert_eq!(report.renamed_from, Some(temp.path().join("Sphere.shader")));
    assert!(!temp.path().join("Sphere.shader").exists());
    let shader = fs::read_to_string(temp.path().join("Ball.shader")).unwrap();
    assert!(shader.starts_with("Shader \"Unlit/Ball\""));
}

#[test]
fn test_export_rename_conflict() {
    let temp = sample_project();
    let project = load(&temp);
    let path = generator::create(&project, temp.path(), "Sphere", "Unlit").unwrap();
    generator::export(&project, &path).unwrap();
    fs::write(temp.path().join("Ball.shader"), "someone else's shader").unwrap();

    let mut renamed = Generator::load(&path).unwrap();
    renamed.shader.name = "Ball".to_string();
    renamed.save(&path).unwrap();

    let err = generator::export(&project, &path).unwrap_err();
    assert!(err.to_string().starts_with("OUTPUT_CONFLICT"));
    assert_eq!(
        fs::read_to_string(temp.path().join("Ball.shader")).unwrap(),
        "someone else's shader"
    );
}

#[test]
fn test_export_empty_name() {
    let temp = sample_project();
    let project = load(&temp);
    let path = temp.path().join("Empty.gen.toml");
    write_generator(&path, "[shader]\nname = \"\"\ntemplate = \"Unlit\"\n").unwrap();

    let err = generator::export(&project, &path).unwrap_err();
    assert!(matches!(err, ShadergenError::ShaderNameEmpty));
}

#[test]
fn test_pull_without_output() {
    let temp = sample_project();
    let project = load(&temp);
    let path = generator::create(&project, temp.path(), "Sphere", "Standard").unwrap();

    let err = generator::pull(&project, &path).unwrap_err();
    assert!(matches!(err, ShadergenError::OutputNotFound(_)));
}

#[test]
fn test_reconvert_all_continues_after_failure() {
    let temp = sample_project();
    let project = load(&temp);
    generator::create(&project, temp.path(), "A", "Unlit").unwrap();
    write_generator(
        &temp.path().join("B.gen.toml"),
        "[shader]\nname = \"B\"\ntemplate = \"Missing\"\n",
    )
    .unwrap();
    generator::create(&project, temp.path(), "C", "Standard").unwrap();

    let outcomes = generator::reconvert_all(&project).unwrap();
    let succeeded: Vec<bool> = outcomes.iter().map(|(_, r)| r.is_ok()).collect();
    assert_eq!(succeeded, vec![true, false, true]);
    assert!(temp.path().join("A.shader").is_file());
    assert!(temp.path().join("C.shader").is_file());
}

#[test]
fn test_create_without_templates() {
    let temp = shadergen_testkit::temp_dir_in_workspace();
    let project = Project::init(temp.path(), "empty").unwrap();

    let err = generator::create(&project, temp.path(), "Sphere", "").unwrap_err();
    assert!(matches!(err, ShadergenError::TemplateCatalogEmpty(_)));
}
