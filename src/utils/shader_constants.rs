//! Centralized scene constants
//!
//! Shader source, geometry sizes, camera setup and control ranges are defined
//! here once so the pipeline, the UI and the tests agree on them.

/// Scene shader: simplex-noise vertex displacement + color field fragment
pub const SCENE_SHADER: &str = include_str!("../assets/shaders/scene.wgsl");

/// Plane geometry (world units / segment counts)
pub const PLANE_WIDTH: f32 = 4.0;
pub const PLANE_HEIGHT: f32 = 4.0;
pub const PLANE_SEGMENTS: u32 = 64;

/// Perspective camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 3.0;

/// Depth attachment bits requested from eframe (Depth32Float)
pub const DEPTH_BUFFER_BITS: u8 = 32;

/// Visible fraction of the surface (width, height), centered
pub const MASK_FRACTION: [f32; 2] = [0.8, 0.6];

/// Slider ranges and steps
pub const SPEED_RANGE: std::ops::RangeInclusive<f32> = 0.1..=3.0;
pub const SPEED_STEP: f64 = 0.1;
pub const INTENSITY_RANGE: std::ops::RangeInclusive<f32> = 1.0..=10.0;
pub const INTENSITY_STEP: f64 = 0.5;
pub const AMPLITUDE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=1.0;
pub const AMPLITUDE_STEP: f64 = 0.05;

pub const DEFAULT_SPEED: f32 = 1.0;
pub const DEFAULT_INTENSITY: f32 = 5.0;
pub const DEFAULT_AMPLITUDE: f32 = 0.3;

/// Control panel
pub const PANEL_WIDTH: f32 = 250.0;
pub const PANEL_MARGIN: f32 = 16.0;
pub const PANEL_SLIDE_SECS: f32 = 0.3;

/// Window design size used when no monitor can be detected
pub const DESIGN_W: f32 = 1920.0;
pub const DESIGN_H: f32 = 1080.0;
