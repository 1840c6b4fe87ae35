// src/gui/components/sections.rs
//
// The scrollable page: table, legend, source info. A heading whose section
// was picked from the menu scrolls itself to the top once.

use eframe::egui::{self, Align, RichText};

use crate::{
    config::consts::{DASH, FLOOR_GROUND},
    gui::app::{App, Section},
    loader::Origin,
};

use super::data_table;

fn heading(ui: &mut egui::Ui, app: &mut App, section: Section) {
    let resp = ui.heading(section.title());
    if app.pending_section == Some(section) {
        resp.scroll_to_me(Some(Align::TOP));
        app.pending_section = None;
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    heading(ui, app, Section::Table);
    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .show(ui, |ui| data_table::draw(ui, app.table.as_ref()));

    ui.add_space(24.0);
    heading(ui, app, Section::Legend);
    legend(ui);

    ui.add_space(24.0);
    heading(ui, app, Section::Source);
    source(ui, app);
    ui.add_space(24.0);
}

fn legend(ui: &mut egui::Ui) {
    ui.label(RichText::new("Zöld sor: elérhető lakás").color(egui::Color32::from_rgb(0x2e, 0x8b, 0x57)));
    ui.label(RichText::new("Áthúzott szürke sor: már nem elérhető").strikethrough());
    ui.label(format!("{FLOOR_GROUND}: földszint"));
    ui.label("Az árak millió forintban értendők.");
    ui.label(format!("{DASH}: nincs adat"));
}

fn source(ui: &mut egui::Ui, app: &App) {
    egui::Grid::new("source_info").num_columns(2).show(ui, |ui| {
        ui.label("Forrás:");
        ui.label(app.state.options.source.describe());
        ui.end_row();

        ui.label("Állapot:");
        ui.label(match app.origin {
            None => "betöltés folyamatban",
            Some(Origin::Remote) => "online táblázat",
            Some(Origin::File) => "helyi fájl",
            Some(Origin::Fallback) => "nem elérhető, üres táblázat",
        });
        ui.end_row();

        ui.label("Utolsó sikeres betöltés:");
        match app.loader.snapshot() {
            Some(sheet) => ui.label(format!("{} sor, {} oszlop", sheet.row_count(), sheet.header_count())),
            None => ui.label(DASH),
        };
        ui.end_row();
    });
}
