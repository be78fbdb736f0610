use eframe::egui;
use std::sync::Arc;

use crate::ui_components::control_panel::{self, ControlPanelAction};
use crate::utils::camera::Camera;
use crate::utils::palette::PRESETS;
use crate::utils::scene_params::SceneParams;
use crate::utils::shader_constants::{DEPTH_BUFFER_BITS, MASK_FRACTION};
use crate::utils::{format_scene_error, SceneCallback, SceneError, ScenePipeline};

/// Centered sub-rect of `screen` that the render shows through
pub fn mask_rect(screen: egui::Rect) -> egui::Rect {
    let size = egui::vec2(
        screen.width() * MASK_FRACTION[0],
        screen.height() * MASK_FRACTION[1],
    );
    egui::Rect::from_center_size(screen.center(), size)
}

pub struct SceneApp {
    // Render state
    pipeline: Option<Arc<ScenePipeline>>,
    camera: Camera,

    // Panel state mirrored into the uniforms each frame
    params: SceneParams,
    show_controls: bool,

    // Error display
    show_error_window: bool,
    error_message: String,
}

impl SceneApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("Initializing SceneApp...");

        let mut app = Self {
            pipeline: None,
            camera: Camera::default(),
            params: SceneParams::from_env(),
            show_controls: true,
            show_error_window: false,
            error_message: String::new(),
        };

        let result = match cc.wgpu_render_state.as_ref() {
            Some(render_state) => {
                // Same bits main() hands to eframe
                let depth_format = egui_wgpu::depth_format_from_bits(DEPTH_BUFFER_BITS, 0);
                ScenePipeline::new(&render_state.device, render_state.target_format, depth_format)
            }
            None => Err(SceneError::NoRenderState),
        };

        match result {
            Ok(pipeline) => app.pipeline = Some(Arc::new(pipeline)),
            Err(err) => app.report_error(&err),
        }

        log::info!("SceneApp initialization complete");
        app
    }

    fn report_error(&mut self, err: &SceneError) {
        let formatted = format_scene_error(err);
        log::error!("Scene setup failed: {}", err);
        self.error_message = formatted;
        self.show_error_window = true;
    }

    fn apply_preset(&mut self, index: usize) {
        if let Some(palette) = PRESETS.get(index) {
            log::info!("Applying preset '{}'", palette.name);
            self.params.apply_palette(palette);
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        // Leave typing to focused widgets (color picker hex fields)
        if ctx.wants_keyboard_input() {
            return;
        }

        let mut toggle_fullscreen = false;
        let mut preset = None;
        ctx.input(|i| {
            if i.key_pressed(egui::Key::H) {
                self.show_controls = !self.show_controls;
            }
            if i.key_pressed(egui::Key::M) {
                self.params.mode = self.params.mode.next();
                log::info!("Shading mode: {}", self.params.mode.as_str());
            }
            if i.key_pressed(egui::Key::F11) {
                toggle_fullscreen = true;
            }
            for (index, key) in [egui::Key::Num1, egui::Key::Num2, egui::Key::Num3, egui::Key::Num4]
                .into_iter()
                .enumerate()
            {
                if i.key_pressed(key) {
                    preset = Some(index);
                }
            }
        });

        if let Some(index) = preset {
            self.apply_preset(index);
        }
        if toggle_fullscreen {
            let fullscreen = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
        }
    }

    fn render_scene(&self, ui: &mut egui::Ui) {
        let screen = ui.max_rect();

        // Minimized or collapsed: nothing to draw into
        if screen.width() < 1.0 || screen.height() < 1.0 {
            return;
        }

        let Some(pipeline) = self.pipeline.as_ref() else {
            return;
        };

        let cb = SceneCallback {
            shader: pipeline.clone(),
            params: self.params,
            camera: self.camera,
            surface_size: [screen.width(), screen.height()],
        };

        // Full-surface viewport, clipped to the mask window
        ui.painter()
            .with_clip_rect(mask_rect(screen))
            .add(egui_wgpu::Callback::new_paint_callback(screen, cb));
    }

    fn render_error_window(&mut self, ctx: &egui::Context) {
        if !self.show_error_window {
            return;
        }

        egui::Window::new("Render Error")
            .collapsible(false)
            .resizable(true)
            .default_width(560.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(&self.error_message)
                            .color(egui::Color32::from_rgb(255, 120, 120))
                            .size(13.0)
                            .family(egui::FontFamily::Monospace),
                    );
                });

                ui.add_space(8.0);
                ui.separator();
                ui.horizontal(|ui| {
                    ui.add_space(ui.available_width() - 70.0);
                    if ui.button("  Close  ").clicked() {
                        self.show_error_window = false;
                    }
                });
            });
    }
}

impl eframe::App for SceneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Continuous animation
        ctx.request_repaint();

        self.handle_input(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                self.render_scene(ui);
            });

        if let ControlPanelAction::ApplyPreset(index) =
            control_panel::render(ctx, &mut self.show_controls, &mut self.params)
        {
            self.apply_preset(index);
        }

        self.render_error_window(ctx);
    }
}

impl Drop for SceneApp {
    fn drop(&mut self) {
        if self.pipeline.take().is_some() {
            log::info!("SceneApp shutting down, scene detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_rect_is_centered_fraction() {
        let screen = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1000.0, 500.0));
        let mask = mask_rect(screen);
        assert_eq!(mask.center(), screen.center());
        assert_eq!(mask.width(), 800.0);
        assert_eq!(mask.height(), 300.0);
        assert_eq!(mask.min, egui::pos2(100.0, 100.0));
    }

    #[test]
    fn test_mask_rect_follows_offset_surface() {
        let screen = egui::Rect::from_min_size(egui::pos2(20.0, 40.0), egui::vec2(200.0, 100.0));
        let mask = mask_rect(screen);
        assert!(screen.contains_rect(mask));
        assert!((mask.center() - egui::pos2(120.0, 90.0)).length() < 1e-3);
    }
}
