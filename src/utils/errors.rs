use thiserror::Error;

/// Everything that can go wrong while setting up or configuring the scene
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("shader validation failed: {0}")]
    Validation(String),

    #[error("render pipeline creation failed: {0}")]
    PipelineCreation(String),

    #[error("wgpu render state unavailable (the scene needs the wgpu renderer)")]
    NoRenderState,

    #[error("invalid color '{0}' (expected #rrggbb or #rgb)")]
    InvalidColor(String),

    #[error("invalid value '{value}' for {key}")]
    InvalidConfig { key: String, value: String },
}

/// Render an error for the on-screen error window
pub fn format_scene_error(err: &SceneError) -> String {
    match err {
        SceneError::Validation(msg) => format!("Shader Validation Error\n\n{}", msg),
        SceneError::PipelineCreation(msg) => crate::utils::format_panic_message(msg),
        SceneError::NoRenderState => {
            "GPU Unavailable\n\nThe background needs the wgpu renderer. \
             The controls keep working, but nothing will be drawn."
                .to_string()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_titled() {
        let formatted = format_scene_error(&SceneError::Validation("bad token".into()));
        assert!(formatted.starts_with("Shader Validation Error"));
        assert!(formatted.contains("bad token"));
    }

    #[test]
    fn test_pipeline_error_uses_panic_formatting() {
        let formatted = format_scene_error(&SceneError::PipelineCreation(
            "wgpu error: Validation Error in render pipeline".into(),
        ));
        assert!(formatted.starts_with("GPU Error"));
    }

    #[test]
    fn test_config_error_display() {
        let err = SceneError::InvalidConfig {
            key: "AURORA_SPEED".into(),
            value: "fast".into(),
        };
        assert_eq!(err.to_string(), "invalid value 'fast' for AURORA_SPEED");
        assert_eq!(format_scene_error(&err), err.to_string());
    }
}
