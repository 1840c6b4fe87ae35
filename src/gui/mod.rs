// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod progress;

pub use app::{TITLE, run};
