// src/log.rs
//
// Short logging macros over `tracing`. The subscriber is installed once per
// process by `init`; before that (and in tests) events are dropped.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt};

#[doc(hidden)]
pub use tracing as __tracing;

/// Where log lines go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file (GUI: the window has no terminal).
    File(PathBuf),
    Stderr,
}

/// File logs keep the load story; stderr stays quiet unless something breaks.
pub const FILE_FILTER: &str = "info";
pub const STDERR_FILTER: &str = "warn";

/// Install the global subscriber. `RUST_LOG` overrides the per-target default.
/// Calling it twice is an error from `tracing_subscriber`, surfaced as-is.
pub fn init(target: LogTarget) -> Result<(), Box<dyn Error>> {
    let default = match target {
        LogTarget::File(_) => FILE_FILTER,
        LogTarget::Stderr => STDERR_FILTER,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    let builder = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::uptime())
        .with_target(false);

    match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| e as Box<dyn Error>)?;
        }
        LogTarget::Stderr => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| e as Box<dyn Error>)?;
        }
    }
    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::__tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::__tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!($($arg)*)
    };
}
