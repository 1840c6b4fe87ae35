// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::{Path, PathBuf};

use aptable::{
    config::{
        consts::{CONFIG_FILE, LOG_FILE, STORE_DIR},
        file as config_file,
        state::AppState,
    },
    gui,
    log::{self, LogTarget},
};
use eframe::egui::ViewportBuilder;

fn main() {
    let config_path = PathBuf::from(CONFIG_FILE);
    let cfg = config_file::load(&config_path);

    let log_path = cfg.log_file.clone().unwrap_or_else(|| Path::new(STORE_DIR).join(LOG_FILE));
    if let Err(e) = log::init(LogTarget::File(log_path)) {
        // No terminal on Windows; the app still runs unlogged.
        eprintln!("Logging disabled: {e}");
    }

    let state = AppState::new(cfg.to_options());
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(gui::TITLE)
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state, config_path) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
