// src/loader.rs
//
// One-shot load: fetch (or read) the export, parse it, and fall back to the
// built-in empty sheet on any failure. Never errors; the caller always gets
// a sheet it can render.

use std::error::Error;
use std::fs;
use std::sync::Arc;

use crate::config::consts::FALLBACK_HEADERS;
use crate::config::options::Source;
use crate::csv::{Delim, parse_sheet};
use crate::data::Sheet;
use crate::net;
use crate::progress::Progress;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Remote,
    File,
    Fallback,
}

#[derive(Clone, Debug)]
pub struct LoadOutcome {
    pub sheet: Arc<Sheet>,
    pub origin: Origin,
}

impl LoadOutcome {
    pub fn fell_back(&self) -> bool { self.origin == Origin::Fallback }
}

/// Fixed header list, no rows.
pub fn fallback_sheet() -> Sheet {
    Sheet::empty_with(FALLBACK_HEADERS)
}

fn fetch_text(source: &Source) -> Result<(String, Origin), Box<dyn Error>> {
    match source {
        Source::Remote(url) => Ok((net::http_get(url)?, Origin::Remote)),
        Source::File(path) => Ok((fs::read_to_string(path)?, Origin::File)),
        Source::None => Err("no source configured".into()),
    }
}

fn try_load(source: &Source) -> Result<(Sheet, Origin), Box<dyn Error>> {
    let (text, origin) = fetch_text(source)?;
    let sheet = parse_sheet(&text, Delim::Csv)?;
    Ok((sheet, origin))
}

/// Load once from `source`.
pub fn load(source: &Source, progress: &mut dyn Progress) -> LoadOutcome {
    progress.log(&format!("Loading {}", source.describe()));
    logf!("Load: begin source={}", source.describe());

    let outcome = match try_load(source) {
        Ok((sheet, origin)) => {
            logf!(
                "Load: OK origin={:?} rows={} headers={}",
                origin,
                sheet.row_count(),
                sheet.header_count()
            );
            LoadOutcome { sheet: Arc::new(sheet), origin }
        }
        Err(e) => {
            if matches!(source, Source::None) {
                logf!("Load: no source configured, using fallback table");
            } else {
                logw!("Load: failed ({}), using fallback table", e);
            }
            LoadOutcome { sheet: Arc::new(fallback_sheet()), origin: Origin::Fallback }
        }
    };

    progress.finish(outcome.sheet.row_count(), outcome.fell_back());
    outcome
}

/// Keeps a read-only snapshot of the last successfully loaded sheet.
#[derive(Debug, Default)]
pub struct Loader {
    last: Option<Arc<Sheet>>,
}

impl Loader {
    pub fn new() -> Self { Self::default() }

    pub fn load(&mut self, source: &Source, progress: &mut dyn Progress) -> LoadOutcome {
        self.accept(load(source, progress))
    }

    /// Take an outcome produced elsewhere (e.g. on a worker thread).
    pub fn accept(&mut self, outcome: LoadOutcome) -> LoadOutcome {
        if !outcome.fell_back() {
            self.last = Some(Arc::clone(&outcome.sheet));
        }
        outcome
    }

    /// Last sheet that came from the real source, if any.
    pub fn snapshot(&self) -> Option<Arc<Sheet>> {
        self.last.clone()
    }
}
