// src/gui/components/mod.rs
pub mod dialog;
pub mod url_form;
