// theme.rs - Dark theme for the background scene and its control panel
use eframe::egui::{
    self, Color32, Context, CornerRadius, FontFamily, FontId, Margin, Stroke, Visuals,
};

/// Black behind the masked render, dark widgets on the panel
pub fn apply_scene_theme(ctx: &Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = Visuals::dark();

    style.visuals.window_fill = Color32::from_rgb(0, 0, 0);
    style.visuals.panel_fill = Color32::from_rgb(0, 0, 0);
    style.visuals.extreme_bg_color = Color32::from_rgb(12, 12, 14);

    style.visuals.window_corner_radius = CornerRadius::same(8);
    style.visuals.widgets.inactive.corner_radius = CornerRadius::same(4);
    style.visuals.widgets.hovered.corner_radius = CornerRadius::same(4);
    style.visuals.widgets.active.corner_radius = CornerRadius::same(4);
    style.visuals.override_text_color = Some(Color32::WHITE);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = Margin::same(8);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.slider_width = 180.0;

    style.override_font_id = Some(FontId::new(14.0, FontFamily::Proportional));

    ctx.set_style(style);
}

/// Translucent (≈80% black) rounded frame for the control panel
pub fn panel_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(Color32::from_black_alpha(204))
        .corner_radius(CornerRadius::same(8))
        .stroke(Stroke::new(1.0, Color32::from_rgb(45, 45, 55)))
        .inner_margin(Margin::same(16))
}

/// Frame of the slide toggle tab on the panel's left edge
pub fn toggle_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(Color32::from_black_alpha(204))
        .corner_radius(CornerRadius {
            nw: 8,
            ne: 0,
            sw: 8,
            se: 0,
        })
        .inner_margin(Margin::same(4))
}
