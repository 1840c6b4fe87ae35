// src/config/mod.rs

pub mod consts;
pub mod file;
pub mod options;
pub mod state;
