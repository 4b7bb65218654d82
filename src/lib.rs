// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod dialog;
pub mod error;
pub mod gui;
pub mod pipeline;
pub mod progress;
pub mod record;
pub mod sheets;
pub mod specs;
