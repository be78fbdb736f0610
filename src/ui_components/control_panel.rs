use eframe::egui;

use crate::utils::palette::{Palette, PRESETS};
use crate::utils::scene_params::{SceneParams, ShadingMode};
use crate::utils::shader_constants::{
    AMPLITUDE_RANGE, AMPLITUDE_STEP, INTENSITY_RANGE, INTENSITY_STEP, PANEL_MARGIN, PANEL_SLIDE_SECS,
    PANEL_WIDTH, SPEED_RANGE, SPEED_STEP,
};
use crate::utils::theme;

/// Actions the panel hands back to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    ApplyPreset(usize),
    None,
}

/// Horizontal offset of the panel for a slide progress in 0..=1 (1 = fully shown)
pub fn slide_offset(shown: f32) -> f32 {
    (1.0 - shown.clamp(0.0, 1.0)) * (PANEL_WIDTH + PANEL_MARGIN * 2.0)
}

/// Render the slide-out control panel in the top-right corner
pub fn render(ctx: &egui::Context, show_controls: &mut bool, params: &mut SceneParams) -> ControlPanelAction {
    let mut action = ControlPanelAction::None;

    let shown = ctx.animate_bool_with_time(
        egui::Id::new("control_panel_slide"),
        *show_controls,
        PANEL_SLIDE_SECS,
    );

    egui::Area::new(egui::Id::new("control_panel"))
        .anchor(
            egui::Align2::RIGHT_TOP,
            egui::vec2(-PANEL_MARGIN + slide_offset(shown), PANEL_MARGIN),
        )
        .order(egui::Order::Foreground)
        // Hidden panel sits past the right edge
        .constrain(false)
        .show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;

                // Toggle tab, stays on screen when the panel is hidden
                ui.vertical(|ui| {
                    ui.add_space(16.0);
                    theme::toggle_frame().show(ui, |ui| {
                        let arrow = if *show_controls { "→" } else { "←" };
                        let hint = if *show_controls { "Hide controls (H)" } else { "Show controls (H)" };
                        if ui
                            .add(egui::Button::new(egui::RichText::new(arrow).size(16.0)).frame(false))
                            .on_hover_text(hint)
                            .clicked()
                        {
                            *show_controls = !*show_controls;
                        }
                    });
                });

                theme::panel_frame().show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing.x = 6.0;
                        ui.set_width(PANEL_WIDTH);
                        ui.label(egui::RichText::new("Color Controls").size(18.0).strong());
                        ui.add_space(8.0);

                        color_row(ui, "Primary Color", &mut params.primary.0);
                        color_row(ui, "Secondary Color", &mut params.secondary.0);
                        color_row(ui, "Tertiary Color", &mut params.tertiary.0);

                        ui.add_space(8.0);
                        ui.separator();
                        ui.add_space(4.0);

                        ui.label(format!("Animation Speed: {:.1}", params.speed));
                        ui.add(
                            egui::Slider::new(&mut params.speed, SPEED_RANGE)
                                .step_by(SPEED_STEP)
                                .show_value(false),
                        );

                        ui.label(format!("Wave Intensity: {:.1}", params.intensity));
                        ui.add(
                            egui::Slider::new(&mut params.intensity, INTENSITY_RANGE)
                                .step_by(INTENSITY_STEP)
                                .show_value(false),
                        );

                        ui.add_space(4.0);
                        ui.horizontal(|ui| {
                            ui.label("Shading:");
                            for mode in ShadingMode::ALL {
                                ui.selectable_value(&mut params.mode, mode, mode.as_str());
                            }
                        });

                        if params.mode == ShadingMode::Liquid {
                            ui.label(format!("Amplitude: {:.2}", params.amplitude));
                            ui.add(
                                egui::Slider::new(&mut params.amplitude, AMPLITUDE_RANGE)
                                    .step_by(AMPLITUDE_STEP)
                                    .show_value(false),
                            );
                        }

                        ui.add_space(8.0);
                        ui.separator();
                        ui.add_space(4.0);

                        ui.label(egui::RichText::new("Presets:").strong());
                        egui::Grid::new("preset_grid")
                            .num_columns(2)
                            .spacing([8.0, 8.0])
                            .show(ui, |ui| {
                                let button_w = (PANEL_WIDTH - 8.0) / 2.0;
                                for (i, palette) in PRESETS.iter().enumerate() {
                                    if gradient_button(ui, palette, egui::vec2(button_w, 32.0)).clicked() {
                                        action = ControlPanelAction::ApplyPreset(i);
                                    }
                                    if i % 2 == 1 {
                                        ui.end_row();
                                    }
                                }
                            });
                    });
                });
            });
        });

    action
}

fn color_row(ui: &mut egui::Ui, label: &str, rgb: &mut [u8; 3]) {
    ui.label(egui::RichText::new(label).size(13.0));
    ui.scope(|ui| {
        ui.spacing_mut().interact_size = egui::vec2(PANEL_WIDTH, 28.0);
        ui.color_edit_button_srgb(rgb);
    });
    ui.add_space(4.0);
}

/// Preset button filled with a left-to-right gradient of the palette
fn gradient_button(ui: &mut egui::Ui, palette: &Palette, size: egui::Vec2) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let fade = if response.hovered() { 0.8 } else { 1.0 };
        let from = palette.primary.to_color32().gamma_multiply(fade);
        let to = palette.tertiary.to_color32().gamma_multiply(fade);

        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(rect.left_top(), from);
        mesh.colored_vertex(rect.right_top(), to);
        mesh.colored_vertex(rect.right_bottom(), to);
        mesh.colored_vertex(rect.left_bottom(), from);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);

        let painter = ui.painter();
        painter.add(egui::Shape::mesh(mesh));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            palette.name,
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
        );
    }

    response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(format!(
            "{} {} {}",
            palette.primary, palette.secondary, palette.tertiary
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_offset_bounds() {
        assert_eq!(slide_offset(1.0), 0.0);
        assert_eq!(slide_offset(0.0), PANEL_WIDTH + PANEL_MARGIN * 2.0);
        assert_eq!(slide_offset(2.0), 0.0);
    }

    #[test]
    fn test_slide_offset_is_monotonic() {
        assert!(slide_offset(0.25) > slide_offset(0.75));
    }

    const SCREEN: egui::Rect = egui::Rect {
        min: egui::pos2(0.0, 0.0),
        max: egui::pos2(1280.0, 720.0),
    };

    /// Run `frames` headless frames starting at `start` seconds, return the panel area rect
    fn run_panel(
        ctx: &egui::Context,
        start: f64,
        frames: usize,
        show_controls: &mut bool,
        params: &mut SceneParams,
    ) -> egui::Rect {
        for frame in 0..frames {
            let input = egui::RawInput {
                screen_rect: Some(SCREEN),
                time: Some(start + frame as f64 / 30.0),
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                render(ctx, show_controls, params);
            });
        }
        ctx.memory(|mem| mem.area_rect(egui::Id::new("control_panel")))
            .unwrap_or(egui::Rect::NOTHING)
    }

    #[test]
    fn test_panel_lays_out_as_column() {
        let ctx = egui::Context::default();
        let mut show = true;
        let mut params = SceneParams::default();

        let rect = run_panel(&ctx, 0.0, 5, &mut show, &mut params);
        assert!(rect.is_positive(), "panel area not laid out: {rect:?}");
        assert!(rect.height() > rect.width(), "panel is not a column: {rect:?}");
        assert!(rect.width() < PANEL_WIDTH * 2.0, "panel too wide: {rect:?}");
        assert!(SCREEN.contains_rect(rect), "open panel leaves the screen: {rect:?}");
    }

    #[test]
    fn test_hidden_panel_slides_off_right_edge() {
        let ctx = egui::Context::default();
        let mut show = true;
        let mut params = SceneParams::default();

        let shown = run_panel(&ctx, 0.0, 5, &mut show, &mut params);

        show = false;
        let hidden = run_panel(&ctx, 1.0, 40, &mut show, &mut params);
        assert!(!show);
        assert!(
            hidden.min.x > shown.min.x + PANEL_WIDTH,
            "panel did not slide: shown {shown:?}, hidden {hidden:?}"
        );
        assert!(hidden.max.x > SCREEN.right(), "panel still on screen: {hidden:?}");
        // Toggle tab stays reachable
        assert!(hidden.min.x < SCREEN.right());

        show = true;
        let reopened = run_panel(&ctx, 3.0, 40, &mut show, &mut params);
        assert!((reopened.min.x - shown.min.x).abs() < 1.0, "panel did not return: {reopened:?}");
    }
}
