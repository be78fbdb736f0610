use eframe::{egui, NativeOptions};

mod screens;
mod ui_components;
mod utils;

use utils::shader_constants::{DEPTH_BUFFER_BITS, DESIGN_H, DESIGN_W};

// Share of the monitor the initial window covers
const WINDOW_FRACTION: f32 = 0.75;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut native_options = NativeOptions::default();
    native_options.renderer = eframe::Renderer::Wgpu;
    native_options.depth_buffer = DEPTH_BUFFER_BITS;

    // Default window size
    let mut window_size = egui::vec2(DESIGN_W * WINDOW_FRACTION, DESIGN_H * WINDOW_FRACTION);
    let mut window_pos: Option<egui::Pos2> = None;

    if let Some(monitor) = utils::detect_primary_monitor_xrandr() {
        let ww = (monitor.width as f32 * WINDOW_FRACTION).round();
        let hh = (monitor.height as f32 * WINDOW_FRACTION).round();
        window_size = egui::vec2(ww, hh);
        let px = monitor.x + ((monitor.width - ww as i32) / 2);
        let py = monitor.y + ((monitor.height - hh as i32) / 2);
        window_pos = Some(egui::Pos2::new(px as f32, py as f32));
    }

    let mut vp = egui::ViewportBuilder::default()
        .with_title("Aurora Plane")
        .with_inner_size([window_size.x, window_size.y])
        .with_min_inner_size([320.0, 240.0]);
    if let Some(pos) = window_pos {
        vp = vp.with_position([pos.x, pos.y]);
    }
    native_options.viewport = vp;

    log::info!("Starting with window {}x{}", window_size.x, window_size.y);

    let result = eframe::run_native(
        "Aurora Plane",
        native_options,
        Box::new(|cc| {
            utils::apply_scene_theme(&cc.egui_ctx);
            Ok(Box::new(screens::scene::SceneApp::new(cc)))
        }),
    );

    if let Err(e) = result {
        log::error!("Application error: {}", e);
        std::process::exit(1);
    }
}
