// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod columns;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod format;
pub mod normalize;

pub mod file;
pub mod gui;
pub mod loader;
pub mod nav;
pub mod net;
pub mod progress;
pub mod render;
