pub mod camera;
pub mod color;
pub mod errors;
pub mod mesh;
pub mod monitors;
pub mod palette;
pub mod panic_handler;
pub mod pipeline;
pub mod scene_params;
pub mod shader_constants;
pub mod shader_validator;
pub mod theme;

pub use errors::{format_scene_error, SceneError};
pub use monitors::detect_primary_monitor_xrandr;
pub use panic_handler::{catch_panic_mut, format_panic_message};
pub use pipeline::{SceneCallback, ScenePipeline};
pub use shader_validator::validate_shader;
pub use theme::apply_scene_theme;
