//! User-adjustable scene state and its GPU uniform mirror

use crate::utils::color::Rgb;
use crate::utils::palette::{Palette, NEON};
use crate::utils::shader_constants::{
    AMPLITUDE_RANGE, DEFAULT_AMPLITUDE, DEFAULT_INTENSITY, DEFAULT_SPEED, INTENSITY_RANGE,
    SPEED_RANGE,
};
use crate::utils::SceneError;

/// Which fragment coloring the shader runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// Three-color sine-wave mix
    #[default]
    Waves,
    /// Domain-warped radial color folding
    Liquid,
}

impl ShadingMode {
    pub const ALL: [ShadingMode; 2] = [ShadingMode::Waves, ShadingMode::Liquid];

    pub fn as_str(self) -> &'static str {
        match self {
            ShadingMode::Waves => "Waves",
            ShadingMode::Liquid => "Liquid",
        }
    }

    /// Value of the `mode` uniform
    pub fn shader_index(self) -> u32 {
        match self {
            ShadingMode::Waves => 0,
            ShadingMode::Liquid => 1,
        }
    }

    pub fn next(self) -> Self {
        match self {
            ShadingMode::Waves => ShadingMode::Liquid,
            ShadingMode::Liquid => ShadingMode::Waves,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

// Scene uniforms structure (must match `struct Uniforms` in scene.wgsl)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub color1: [f32; 4],
    pub color2: [f32; 4],
    pub color3: [f32; 4],
    pub time: f32,
    pub speed: f32,
    pub intensity: f32,
    pub amplitude: f32,
    pub resolution: [f32; 2],
    pub mode: u32,
    pub _pad0: u32,
}

/// Everything the control panel can change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub tertiary: Rgb,
    pub speed: f32,
    pub intensity: f32,
    pub amplitude: f32,
    pub mode: ShadingMode,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            primary: NEON.primary,
            secondary: NEON.secondary,
            tertiary: NEON.tertiary,
            speed: DEFAULT_SPEED,
            intensity: DEFAULT_INTENSITY,
            amplitude: DEFAULT_AMPLITUDE,
            mode: ShadingMode::Waves,
        }
    }
}

fn clamp_or(value: f32, range: &std::ops::RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(*range.start(), *range.end())
    }
}

impl SceneParams {
    /// Replace the three colors, keep animation settings
    pub fn apply_palette(&mut self, palette: &Palette) {
        self.primary = palette.primary;
        self.secondary = palette.secondary;
        self.tertiary = palette.tertiary;
    }

    /// Force scalar settings into their slider ranges
    pub fn clamped(mut self) -> Self {
        self.speed = clamp_or(self.speed, &SPEED_RANGE, DEFAULT_SPEED);
        self.intensity = clamp_or(self.intensity, &INTENSITY_RANGE, DEFAULT_INTENSITY);
        self.amplitude = clamp_or(self.amplitude, &AMPLITUDE_RANGE, DEFAULT_AMPLITUDE);
        self
    }

    /// Mirror the state into the per-frame uniform block
    pub fn to_uniforms(&self, time: f32, view_proj: glam::Mat4, resolution: [f32; 2]) -> SceneUniforms {
        SceneUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            color1: self.primary.to_vec4(),
            color2: self.secondary.to_vec4(),
            color3: self.tertiary.to_vec4(),
            time,
            speed: self.speed,
            intensity: self.intensity,
            amplitude: self.amplitude,
            resolution,
            mode: self.mode.shader_index(),
            _pad0: 0,
        }
    }

    /// Startup overrides: AURORA_PRESET, AURORA_PRIMARY/SECONDARY/TERTIARY (hex),
    /// AURORA_SPEED, AURORA_INTENSITY, AURORA_MODE. Single colors win over the preset.
    ///
    /// Bad values are reported back and skipped; the rest still apply.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<SceneError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut params = Self::default();
        let mut errors = Vec::new();
        let invalid = |key: &str, value: &str| SceneError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        };

        if let Some(name) = lookup("AURORA_PRESET") {
            match Palette::by_name(&name) {
                Some(palette) => params.apply_palette(palette),
                None => errors.push(invalid("AURORA_PRESET", &name)),
            }
        }

        for (key, slot) in [
            ("AURORA_PRIMARY", &mut params.primary),
            ("AURORA_SECONDARY", &mut params.secondary),
            ("AURORA_TERTIARY", &mut params.tertiary),
        ] {
            if let Some(raw) = lookup(key) {
                match raw.parse::<Rgb>() {
                    Ok(color) => *slot = color,
                    Err(err) => errors.push(err),
                }
            }
        }

        for (key, slot) in [
            ("AURORA_SPEED", &mut params.speed),
            ("AURORA_INTENSITY", &mut params.intensity),
        ] {
            if let Some(raw) = lookup(key) {
                match raw.trim().parse::<f32>() {
                    Ok(v) if v.is_finite() => *slot = v,
                    _ => errors.push(invalid(key, &raw)),
                }
            }
        }

        if let Some(raw) = lookup("AURORA_MODE") {
            match ShadingMode::parse(&raw) {
                Some(mode) => params.mode = mode,
                None => errors.push(invalid("AURORA_MODE", &raw)),
            }
        }

        (params.clamped(), errors)
    }

    /// Read startup overrides from the process environment
    pub fn from_env() -> Self {
        let (params, errors) = Self::from_lookup(|key| std::env::var(key).ok());
        for err in errors {
            log::warn!("Ignoring config override: {}", err);
        }
        log::info!(
            "Scene params: {} {} {}, speed {:.1}, intensity {:.1}, mode {}",
            params.primary,
            params.secondary,
            params.tertiary,
            params.speed,
            params.intensity,
            params.mode.as_str()
        );
        params
    }
}
