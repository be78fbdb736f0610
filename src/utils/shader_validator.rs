//! WGSL Shader Validation
//!
//! Checks the scene shader before it reaches wgpu so a broken shader
//! turns into an on-screen message instead of a device panic.

use crate::utils::SceneError;

/// Fields of `struct Uniforms`, in order, as laid out by `SceneUniforms`
const EXPECTED_UNIFORM_FIELDS: [&str; 11] = [
    "view_proj: mat4x4<f32>",
    "color1: vec4<f32>",
    "color2: vec4<f32>",
    "color3: vec4<f32>",
    "time: f32",
    "speed: f32",
    "intensity: f32",
    "amplitude: f32",
    "resolution: vec2<f32>",
    "mode: u32",
    "_pad0: u32",
];

/// Validates WGSL source for the scene pipeline
///
/// 1. Uniforms struct matches `SceneUniforms`
/// 2. Entry points `vs_main` / `fs_main` exist
/// 3. naga parses and validates the module
pub fn validate_shader(wgsl_src: &str) -> Result<(), SceneError> {
    if wgsl_src.trim().is_empty() {
        return Err(SceneError::Validation("Shader source is empty".to_string()));
    }

    validate_uniforms_struct(wgsl_src)?;
    validate_entry_points(wgsl_src)?;
    validate_wgsl_syntax(wgsl_src)?;

    Ok(())
}

fn uniforms_body(wgsl_src: &str) -> Option<&str> {
    let start = wgsl_src.find("struct Uniforms")?;
    let open = start + wgsl_src[start..].find('{')?;
    let close = open + wgsl_src[open..].find('}')?;
    Some(&wgsl_src[open + 1..close])
}

fn validate_uniforms_struct(wgsl_src: &str) -> Result<(), SceneError> {
    let body = uniforms_body(wgsl_src).ok_or_else(|| {
        SceneError::Validation(
            "Shader must define a 'struct Uniforms' matching the scene uniform block".to_string(),
        )
    })?;

    let fields: Vec<String> = body
        .split(',')
        .map(|f| f.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|f| !f.is_empty())
        .collect();

    for (i, expected) in EXPECTED_UNIFORM_FIELDS.iter().enumerate() {
        let found = fields.get(i).map(String::as_str).unwrap_or("<missing>");
        if found != *expected {
            return Err(SceneError::Validation(format!(
                "Uniforms struct mismatch at field {}: expected '{}', found '{}'",
                i, expected, found
            )));
        }
    }

    if fields.len() > EXPECTED_UNIFORM_FIELDS.len() {
        return Err(SceneError::Validation(format!(
            "Uniforms struct has {} fields, the scene uniform block has {}",
            fields.len(),
            EXPECTED_UNIFORM_FIELDS.len()
        )));
    }

    if !wgsl_src.contains("var<uniform> uniforms: Uniforms") {
        return Err(SceneError::Validation(
            "Missing uniform binding declaration.\n\nRequired:\n@group(0) @binding(0)\nvar<uniform> uniforms: Uniforms;"
                .to_string(),
        ));
    }

    Ok(())
}

fn validate_entry_points(wgsl_src: &str) -> Result<(), SceneError> {
    if !wgsl_src.contains("fn vs_main") {
        return Err(SceneError::Validation(
            "Shader missing vertex entry point 'fn vs_main'".to_string(),
        ));
    }
    if !wgsl_src.contains("fn fs_main") {
        return Err(SceneError::Validation(
            "Shader missing fragment entry point 'fn fs_main'".to_string(),
        ));
    }
    Ok(())
}

fn validate_wgsl_syntax(wgsl_src: &str) -> Result<(), SceneError> {
    log::debug!("Validating WGSL with naga parser");

    let module = naga::front::wgsl::parse_str(wgsl_src).map_err(|parse_error| {
        let msg = format!("WGSL Parse Error:\n{}", parse_error.emit_to_string(wgsl_src));
        log::error!("Shader parse failed: {}", msg);
        SceneError::Validation(msg)
    })?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );

    validator.validate(&module).map_err(|validation_error| {
        let msg = format!(
            "WGSL Validation Error:\n{}",
            validation_error.emit_to_string(wgsl_src)
        );
        log::error!("Shader validation failed: {}", msg);
        SceneError::Validation(msg)
    })?;

    log::debug!("Naga validation passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::shader_constants::SCENE_SHADER;

    #[test]
    fn test_scene_shader_is_valid() {
        if let Err(err) = validate_shader(SCENE_SHADER) {
            panic!("built-in shader rejected: {err}");
        }
    }

    #[test]
    fn test_validate_empty_shader() {
        assert!(validate_shader("   ").is_err());
    }

    #[test]
    fn test_uniform_field_order_is_checked() {
        let swapped = SCENE_SHADER.replacen("speed: f32,\n    intensity: f32", "intensity: f32,\n    speed: f32", 1);
        assert_ne!(swapped, SCENE_SHADER);
        match validate_shader(&swapped) {
            Err(SceneError::Validation(msg)) => assert!(msg.contains("field 5")),
            other => panic!("expected a uniforms mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_entry_point() {
        let renamed = SCENE_SHADER.replace("fn fs_main", "fn frag_main");
        match validate_shader(&renamed) {
            Err(SceneError::Validation(msg)) => assert!(msg.contains("fs_main")),
            other => panic!("expected a missing entry point, got {other:?}"),
        }
    }

    #[test]
    fn test_syntax_error_is_reported_by_naga() {
        let broken = SCENE_SHADER.replace("return out;", "return out");
        match validate_shader(&broken) {
            Err(SceneError::Validation(msg)) => assert!(msg.starts_with("WGSL Parse Error")),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }
}
