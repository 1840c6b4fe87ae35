// src/gui/components/nav_bar.rs
//
// Top bar with the page title and a hamburger menu. The look follows
// `NavState::scrolled`; open/close goes through `NavState` only.

use eframe::egui::{self, Color32, Frame, Id, Key, Margin, Order, RichText, Stroke};

use crate::{gui::app::{App, Section}, nav::NavKey};

const MENU_ID: &str = "nav_menu";

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let visuals = ctx.style().visuals.clone();
    let frame = if app.nav.scrolled() {
        Frame::new()
            .fill(visuals.extreme_bg_color)
            .stroke(Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color))
            .inner_margin(Margin::symmetric(12, 6))
    } else {
        Frame::new()
            .fill(visuals.panel_fill)
            .inner_margin(Margin::symmetric(12, 10))
    };

    let toggle = egui::TopBottomPanel::top("nav")
        .frame(frame)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let size = if app.nav.scrolled() { 16.0 } else { 20.0 };
                ui.label(RichText::new(crate::gui::TITLE).strong().size(size));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(egui::Button::new("☰").selected(app.nav.expanded()))
                        .on_hover_text(format!("aria-expanded={}", app.nav.aria_expanded()))
                })
                .inner
            })
            .inner
        })
        .inner;

    if toggle.clicked() {
        app.nav.toggle_menu();
        return;
    }

    if !app.nav.menu_open() {
        return;
    }

    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        app.nav.on_key(NavKey::Escape);
        return;
    }

    let menu = egui::Area::new(Id::new(MENU_ID))
        .order(Order::Foreground)
        .fixed_pos(toggle.rect.left_bottom() + egui::vec2(-120.0, 4.0))
        .show(ctx, |ui| {
            Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(140.0);
                for section in Section::ALL {
                    if ui.link(RichText::new(section.title()).color(Color32::from_rgb(0x2a, 0x6f, 0xb8))).clicked() {
                        logd!("Nav: jump to {:?}", section);
                        app.pending_section = Some(section);
                        app.nav.on_link_click();
                    }
                }
            });
        });

    // Clicks inside the menu or on the toggle are handled above.
    let outside = ctx.input(|i| {
        i.pointer.any_click()
            && i.pointer
                .interact_pos()
                .is_some_and(|p| !menu.response.rect.contains(p) && !toggle.rect.contains(p))
    });
    if outside {
        app.nav.on_click_outside();
    }
}
