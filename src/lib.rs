// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod player;
pub mod teams;
pub mod roster;
pub mod aggregate;
pub mod table;

pub mod convert;
pub mod csv;
pub mod file;
pub mod progress;
pub mod render;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
