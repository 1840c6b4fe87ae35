// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::{self, options::ExportFormat},
    file,
    gui::app::App,
};

const FORMATS: [(ExportFormat, &str); 4] = [
    (ExportFormat::Html, "HTML"),
    (ExportFormat::Csv, "CSV"),
    (ExportFormat::Tsv, "TSV"),
    (ExportFormat::Text, "Szöveg"),
];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        // --- Format ---
        let export = &mut app.state.options.export;
        let prev = export.format;
        ui.label("Formátum:");
        for (fmt, label) in FORMATS {
            ui.selectable_value(&mut export.format, fmt, label);
        }
        if export.format != prev {
            logf!("UI: Export format → {:?}", export.format);
            if !export.has_explicit_path() {
                app.state.gui.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        // --- Output ---
        ui.label("Kimenet:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(220.0))
            .changed()
        {
            logd!("UI: out_path_text → {}", app.state.gui.out_path_text);
        }

        if ui.button("Exportálás").clicked() {
            export_clicked(app);
        }

        if ui.button("Beállítások mentése").clicked() {
            match config::file::save(&app.config_path, &app.state.options) {
                Ok(()) => {
                    logf!("Config: saved → {}", app.config_path.display());
                    app.status(format!("Beállítások mentve: {}", app.config_path.display()));
                }
                Err(e) => {
                    loge!("Config: save failed: {}", e);
                    app.status(format!("Mentési hiba: {e}"));
                }
            }
        }

        ui.separator();
        ui.label(app.status_text());
    });
}

fn export_clicked(app: &mut App) {
    let Some(table) = &app.table else {
        app.status("Nincs mit exportálni");
        logd!("Export: clicked before the load finished");
        return;
    };

    // Typed text equal to the default path keeps the path implicit,
    // so it still follows later format changes.
    let typed = app.state.gui.out_path_text.trim();
    let export = &mut app.state.options.export;
    if typed != export.out_path().to_string_lossy() {
        export.set_path(typed);
        app.state.gui.out_path_text = export.out_path().to_string_lossy().into_owned();
    }

    logf!(
        "Export: begin format={:?} rows={} → {}",
        export.format,
        table.row_count(),
        export.out_path().display()
    );
    match file::export_table(export, table, &app.state.options.render.table_id) {
        Ok(path) => {
            logf!("Export: OK {}", path.display());
            app.status(format!("Exportálva: {}", path.display()));
        }
        Err(e) => {
            loge!("Export: error: {}", e);
            app.status(format!("Exportálási hiba: {e}"));
        }
    }
}
