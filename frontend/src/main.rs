//! Hexlabs Users viewer entry point.

// Application modules
mod app;
mod components;
mod config;
mod events;
mod infrastructure;
mod logic;
mod models;
mod pages;

use app::App;
use config::AppConfig;

fn main() {
    let config = AppConfig::load();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title(pages::user_list::PAGE_TITLE),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        pages::user_list::PAGE_TITLE,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(egui::Theme::Dark);

            // Dark slate panels behind the cards
            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals.window_fill = egui::Color32::from_rgb(15, 23, 42);
            style.visuals.panel_fill = egui::Color32::from_rgb(15, 23, 42);
            cc.egui_ctx.set_style(style);

            Ok(Box::new(App::new(config)))
        }),
    ) {
        eprintln!("Failed to start the UI: {}", e);
        std::process::exit(1);
    }
}
