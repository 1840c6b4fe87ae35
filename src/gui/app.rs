// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, TryRecvError},
    },
    thread,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    loader::{self, LoadOutcome, Loader, Origin},
    nav::NavState,
    render::{self, TableView},
};

use super::{components, progress::GuiProgress};

pub const TITLE: &str = "Lakások";

pub fn run(
    options: eframe::NativeOptions,
    state: AppState,
    config_path: PathBuf,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(state, config_path, cc.egui_ctx.clone())))),
    )?;
    Ok(())
}

/// Page sections the menu links jump to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Table,
    Legend,
    Source,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Table, Section::Legend, Section::Source];

    pub fn title(self) -> &'static str {
        match self {
            Section::Table => "Lakások",
            Section::Legend => "Jelmagyarázat",
            Section::Source => "Adatforrás",
        }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub config_path: PathBuf,

    pub nav: NavState,
    /// Menu link clicked; the section scrolls into view on the next draw.
    pub pending_section: Option<Section>,

    pub loader: Loader,
    pub origin: Option<Origin>,
    /// None until the load finishes.
    pub table: Option<TableView>,

    // status line (the load worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    rx: Option<Receiver<LoadOutcome>>,
}

impl App {
    pub fn new(state: AppState, config_path: PathBuf, ctx: egui::Context) -> Self {
        let status = Arc::new(Mutex::new(s!("Betöltés…")));
        let nav = NavState::new(state.options.nav.scroll_threshold, 0.0);

        // One load per window; the worker ends after sending.
        let (tx, rx) = mpsc::channel();
        let source = state.options.source.clone();
        let worker_status = Arc::clone(&status);
        thread::spawn(move || {
            let mut prog = GuiProgress::new(worker_status, ctx.clone());
            let outcome = loader::load(&source, &mut prog);
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });

        logf!("Init: source={}", state.options.source.describe());

        Self {
            state,
            config_path,
            nav,
            pending_section: None,
            loader: Loader::new(),
            origin: None,
            table: None,
            status,
            running: true,
            rx: Some(rx),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn show_outcome(&mut self, outcome: LoadOutcome) {
        let outcome = self.loader.accept(outcome);
        let view = render::build_table(&outcome.sheet, &self.state.options.render);
        logf!("Render: rows={} columns={}", view.row_count(), view.headers.len());
        self.origin = Some(outcome.origin);
        self.table = Some(view);
        self.running = false;
    }

    /// Pick up the worker's result, if it has arrived.
    fn poll_load(&mut self) {
        let Some(rx) = &self.rx else { return };
        match rx.try_recv() {
            Ok(outcome) => {
                self.rx = None;
                self.show_outcome(outcome);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // Worker died before sending (panic); same as any failed load.
                loge!("Load: worker exited without a result");
                self.rx = None;
                self.status("Az adatforrás nem érhető el");
                self.show_outcome(LoadOutcome {
                    sheet: Arc::new(loader::fallback_sheet()),
                    origin: Origin::Fallback,
                });
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        components::nav_bar::draw(ctx, self);

        egui::TopBottomPanel::bottom("export_bar").show(ctx, |ui| {
            components::export_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let out = egui::ScrollArea::vertical()
                .id_salt("page")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    components::sections::draw(ui, self);
                });
            if self.nav.on_scroll(out.state.offset.y) {
                // nav bar was drawn with the old style this frame
                ctx.request_repaint();
            }
        });
    }
}
