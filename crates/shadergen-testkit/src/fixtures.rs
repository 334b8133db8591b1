//! Sample projects and templates for tests
//!
//! Every helper writes real files so tests exercise the same code paths as
//! a project on disk.

use std::path::{Path, PathBuf};

/// Raymarching template with every directive form
pub const STANDARD_TEMPLATE: &str = r#"Shader "Raymarching/<Name>"
{
Properties
{
    _MainTex ("Main Texture", 2D) = "" {}
}
SubShader
{
Tags { "RenderType" = "Opaque" "DisableBatching" = "True" }
Cull <Culling=Back|Front|Off>

CGINCLUDE
#include "<RaymarchingShaderDirectory>/Common.cginc"

// @block DistanceFunction
inline float DistanceFunction(float3 pos)
{
    return Sphere(pos, 0.5);
}
// @endblock
ENDCG

Pass
{
    Tags { "LightMode" = "Deferred" }
    CGPROGRAM
    #pragma vertex Vert
    #pragma fragment Frag
    @if UseRaymarchingDepth:true
    #define USE_RAYMARCHING_DEPTH
    @endif
    ENDCG
}

@if ShadowCaster:true
Pass
{
    Tags { "LightMode" = "ShadowCaster" }
}
@endif
}
}
"#;

/// Minimal template without blocks
pub const UNLIT_TEMPLATE: &str = r#"Shader "Unlit/<Name>"
{
@if Transparent
Blend SrcAlpha OneMinusSrcAlpha
@else
Blend Off
@endif
Color <Tint=White|Black>
}
"#;

/// Partial included by other templates; never listed in the catalog
pub const PARTIAL_TEMPLATE: &str = "// shared helpers\n";

/// Minimal shadergen.toml
pub const PROJECT_CONFIG: &str = r#"[project]
name = "raymarching"

[constants]
RaymarchingShaderDirectory = "Assets/Shaders/Includes"
"#;

/// Write a project with `Standard`, `Unlit` and a `_Common` partial
///
/// Returns the templates directory.
pub fn write_sample_project(root: &Path) -> std::io::Result<PathBuf> {
    std::fs::write(root.join("shadergen.toml"), PROJECT_CONFIG)?;

    let templates = root.join("templates");
    std::fs::create_dir_all(&templates)?;
    std::fs::write(templates.join("Standard.tmpl"), STANDARD_TEMPLATE)?;
    std::fs::write(templates.join("Unlit.tmpl"), UNLIT_TEMPLATE)?;
    std::fs::write(templates.join("_Common.tmpl"), PARTIAL_TEMPLATE)?;
    Ok(templates)
}

/// Write a generator document at `path`, creating parent directories
pub fn write_generator(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}
