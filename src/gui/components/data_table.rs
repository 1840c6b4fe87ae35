// src/gui/components/data_table.rs
//
// Draws a `TableView`. Rows arrive sorted and formatted; this only picks
// colors and alignment.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::render::{Body, HeaderCell, RowState, TableView};

const GREEN: Color32 = Color32::from_rgb(0x2e, 0x8b, 0x57);
const GREY: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);

fn cell_text(text: &str, state: Option<RowState>) -> RichText {
    let rt = RichText::new(text);
    match state {
        Some(RowState::Available) => rt.color(GREEN),
        Some(RowState::Unavailable) => rt.color(GREY).strikethrough(),
        None => rt,
    }
}

fn aligned(ui: &mut egui::Ui, numeric: bool, rt: RichText) {
    let layout = if numeric {
        Layout::right_to_left(Align::Center)
    } else {
        Layout::left_to_right(Align::Center)
    };
    ui.with_layout(layout, |ui| {
        ui.label(rt);
    });
}

pub fn draw(ui: &mut egui::Ui, table: Option<&TableView>) {
    let Some(table) = table else {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Betöltés…");
        });
        return;
    };

    if table.headers.is_empty() {
        ui.label(RichText::new(crate::config::consts::NO_DATA).italics());
        return;
    }

    let headers: &[HeaderCell] = &table.headers;
    let mut builder = TableBuilder::new(ui)
        .id_salt("apartments")
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for _ in headers {
        builder = builder.column(Column::auto().at_least(60.0).resizable(true));
    }

    builder
        .header(24.0, |mut header| {
            for h in headers {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    aligned(ui, h.is_numeric(), RichText::new(&h.text).strong());
                });
            }
        })
        .body(|mut body| {
            if let Body::Rows(rows) = &table.body {
                for r in rows {
                    body.row(20.0, |mut row| {
                        for (h, cell) in headers.iter().zip(&r.cells) {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                aligned(ui, h.is_numeric(), cell_text(cell, r.state));
                            });
                        }
                    });
                }
            }
        });

    // egui_extras has no colspan; the placeholder goes under the header.
    if let Body::Placeholder { text, .. } = &table.body {
        ui.add_space(6.0);
        ui.label(RichText::new(text).italics());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_text_is_struck_through() {
        let rt = cell_text("A1", Some(RowState::Unavailable));
        let plain = cell_text("A1", None);
        assert!(rt != plain);
        assert_eq!(rt.text(), "A1");
    }
}
