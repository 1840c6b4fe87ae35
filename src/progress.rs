// src/progress.rs
/// Progress reporting for the load. Frontends (GUI/CLI) implement this to
/// surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once at the end, successful or not.
    fn finish(&mut self, _rows: usize, _fell_back: bool) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Status lines on stderr, for the CLI.
pub struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn finish(&mut self, rows: usize, fell_back: bool) {
        if fell_back {
            eprintln!("Source unavailable; showing empty table");
        } else {
            eprintln!("Loaded {rows} row(s)");
        }
    }
}
