//! Shared test helpers for template engine tests

use crate::template::directives::ResolvedValues;

/// Template from the reference scenario: one conditional, one choice variable
pub(super) const SCENARIO: &str = "@if Flag\nhas flag\n@else\nno flag\n@endif <Name=Alice|Bob>";

/// A small raymarching shader template exercising every directive kind
pub(super) const RAYMARCH_TEMPLATE: &str = r#"Shader "Raymarching/<Name>"
{
SubShader
{
Cull <Culling=Back|Front|Off>
@if ShadowCaster:true
Pass
{
    Tags { "LightMode" = "ShadowCaster" }
}
@endif

CGINCLUDE
// @block DistanceFunction
inline float DistanceFunction(float3 pos)
{
    return Sphere(pos, 0.5);
}
// @endblock
ENDCG
}
}"#;

/// Values for `SCENARIO` that select the true branch and `Bob`
pub(super) fn scenario_values() -> ResolvedValues {
    ResolvedValues::new()
        .with_condition("Flag", true)
        .with_variable("Name", "Bob")
}

/// Values that resolve every directive of `RAYMARCH_TEMPLATE`
pub(super) fn raymarch_values() -> ResolvedValues {
    ResolvedValues::new()
        .with_variable("Name", "Sphere")
        .with_variable("Culling", "Off")
        .with_condition("ShadowCaster", false)
        .with_block(
            "DistanceFunction",
            "inline float DistanceFunction(float3 pos)\n{\n    return Box(pos, 1.0);\n}",
        )
}
