// src/gui/components/mod.rs
pub mod alert;
pub mod data_table;
pub mod file_panel;
pub mod games_view;
