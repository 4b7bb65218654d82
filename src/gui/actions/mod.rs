// src/gui/actions/mod.rs
//
// Folder module facade: consumers only see actions::{submit, poll}.

mod submit;

pub use submit::{poll, submit};
